use super::*;
use crate::protocol::messages::comm_state::{Itdma, Sotdma, SotdmaSubmessage};
use crate::test_support::PayloadBuilder;

#[test]
/// One to four acknowledgements, whole records only.
fn test_binary_acknowledge() {
    let one = PayloadBuilder::new()
        .header(7, 0, 2_655_651)
        .zeros(2)
        .uint(265_538_450, 30)
        .uint(3, 2);
    let (payload, pad) = one.build();
    let message = BinaryAcknowledge::from_payload(&payload, pad).unwrap();
    assert_eq!(
        message.acknowledgements,
        [Acknowledgement {
            mmsi: 265_538_450,
            sequence_number: 3
        }]
    );

    let (payload, pad) = one.uint(265_538_451, 30).uint(0, 2).build();
    let message = BinaryAcknowledge::from_payload(&payload, pad).unwrap();
    assert_eq!(message.acknowledgements.len(), 2);
    assert_eq!(message.acknowledgements[1].mmsi, 265_538_451);

    let (payload, pad) = PayloadBuilder::new()
        .header(13, 0, 2_655_651)
        .zeros(2)
        .uint(265_538_450, 30)
        .uint(1, 2)
        .flag(false)
        .build();
    assert_eq!(
        BinaryAcknowledge::from_payload(&payload, pad),
        Err(DecodeError::BadBitCount { bits: 73 })
    );
}

#[test]
/// Single-slot binary without and with the optional fields.
fn test_single_slot_binary() {
    let (payload, pad) = PayloadBuilder::new()
        .header(25, 0, 440_006_460)
        .flag(false)
        .flag(false)
        .uint(0xCAFE, 16)
        .build();
    let message = SingleSlotBinary::from_payload(&payload, pad).unwrap();
    assert_eq!(message.payload.destination_mmsi, None);
    assert_eq!(message.payload.application_id, None);
    assert_eq!(message.payload.data, [0xCA, 0xFE]);
    assert_eq!(message.payload.data_bits, 16);

    let (payload, pad) = PayloadBuilder::new()
        .header(25, 0, 440_006_460)
        .flag(true)
        .flag(true)
        .uint(440_006_461, 30)
        .uint(1, 10)
        .uint(40, 6)
        .uint(0b1011, 4)
        .build();
    let message = SingleSlotBinary::from_payload(&payload, pad).unwrap();
    assert_eq!(message.payload.destination_mmsi, Some(440_006_461));
    assert_eq!(
        message.payload.application_id,
        Some(ApplicationId { dac: 1, fi: 40 })
    );
    assert_eq!(message.payload.data, [0b1011_0000]);
    assert_eq!(message.payload.data_bits, 4);
}

#[test]
/// Multi-slot binary data stops before the trailing communication state.
fn test_multi_slot_binary() {
    let data = PayloadBuilder::new()
        .header(26, 0, 316_123_456)
        .flag(false)
        .flag(false)
        .uint(0xA5, 8);

    let (payload, pad) = data.clone().flag(false).uint(0, 2).uint(0, 3).uint(2250, 14).build();
    let message = MultiSlotBinary::from_payload(&payload, pad).unwrap();
    assert_eq!(message.payload.data, [0xA5]);
    assert_eq!(
        message.comm_state,
        CommState::Sotdma(Sotdma {
            sync_state: 0,
            slot_timeout: 0,
            submessage: SotdmaSubmessage::SlotOffset(2250),
        })
    );

    let (payload, pad) = data.flag(true).uint(1, 2).uint(100, 13).uint(2, 3).flag(true).build();
    let message = MultiSlotBinary::from_payload(&payload, pad).unwrap();
    assert_eq!(
        message.comm_state,
        CommState::Itdma(Itdma {
            sync_state: 1,
            slot_increment: 100,
            slots_to_allocate: 2,
            keep_flag: true,
        })
    );
}

#[test]
/// Addressing that overlaps the communication state is a length error.
fn test_multi_slot_binary_too_short() {
    let (payload, pad) = PayloadBuilder::new()
        .header(26, 0, 316_123_456)
        .flag(true)
        .flag(false)
        .zeros(20)
        .build();
    assert_eq!(
        MultiSlotBinary::from_payload(&payload, pad),
        Err(DecodeError::BadBitCount { bits: 60 })
    );

    let (payload, pad) = PayloadBuilder::new().header(26, 0, 1).zeros(21).build();
    assert_eq!(
        MultiSlotBinary::from_payload(&payload, pad),
        Err(DecodeError::BadBitCount { bits: 59 })
    );
}
