use super::*;
use crate::test_support::PayloadBuilder;

#[test]
/// Addressed text after the 72-bit header.
fn test_addressed_safety() {
    let (payload, pad) = PayloadBuilder::new()
        .header(12, 0, 271_002_099)
        .uint(1, 2)
        .uint(271_002_111, 30)
        .flag(true)
        .zeros(1)
        .text("MSG FROM 271002099", 108)
        .build();
    let message = AddressedSafety::from_payload(&payload, pad).unwrap();
    assert_eq!(message.sequence_number, 1);
    assert_eq!(message.destination_mmsi, 271_002_111);
    assert!(message.retransmitted);
    assert_eq!(message.text, "MSG FROM 271002099");
}

#[test]
/// An empty addressed message is still valid at 72 bits.
fn test_addressed_safety_empty_text() {
    let (payload, pad) = PayloadBuilder::new()
        .header(12, 0, 1)
        .zeros(34)
        .build();
    assert_eq!(
        AddressedSafety::from_payload(&payload, pad).map(|message| message.text),
        Ok(String::new())
    );

    let (payload, pad) = PayloadBuilder::new().header(12, 0, 1).zeros(33).build();
    assert_eq!(
        AddressedSafety::from_payload(&payload, pad),
        Err(DecodeError::BadBitCount { bits: 71 })
    );
}

#[test]
/// Broadcast text ignores an incomplete trailing character.
fn test_safety_broadcast() {
    let (payload, pad) = PayloadBuilder::new()
        .header(14, 0, 351_809_000)
        .zeros(2)
        .text("RCVD YR TEST MSG", 96)
        .zeros(4)
        .build();
    let message = SafetyBroadcast::from_payload(&payload, pad).unwrap();
    assert_eq!(message.header.mmsi, 351_809_000);
    assert_eq!(message.text, "RCVD YR TEST MSG");
}

#[test]
/// Text is bounded by the standard five-slot maximum.
fn test_safety_broadcast_too_long() {
    let (payload, pad) = PayloadBuilder::new()
        .header(14, 0, 1)
        .zeros(2)
        .zeros(MAX_STANDARD_BITS - 40 + 6)
        .build();
    assert_eq!(
        SafetyBroadcast::from_payload(&payload, pad),
        Err(DecodeError::BadBitCount {
            bits: MAX_STANDARD_BITS + 6
        })
    );
}
