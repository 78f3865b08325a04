//! Static data layouts, including the two-part class B report.
use super::*;
use crate::infra::codec::armor::BitBuffer;
use crate::test_support::PayloadBuilder;
use alloc::format;

const VOYAGE_PAYLOAD: &str =
    "55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp888888888880";

#[test]
/// Reassembled two-sentence voyage report.
fn test_static_and_voyage_reference_payload() {
    let data = StaticAndVoyageData::from_payload(VOYAGE_PAYLOAD, 2).unwrap();
    assert_eq!(data.header.mmsi, 351_759_000);
    assert_eq!(data.ais_version, 0);
    assert_eq!(data.imo_number, Some(9_134_270));
    assert_eq!(data.callsign, "3FOF8  ");
    assert_eq!(data.name, format!("EVER DIADEM{}", " ".repeat(9)));
    assert_eq!(data.ship_type, 70);
    assert_eq!(
        data.dimensions,
        Dimensions {
            to_bow: 225,
            to_stern: 70,
            to_port: 1,
            to_starboard: 31
        }
    );
    assert_eq!(data.fix_type, 1);
    assert_eq!(
        data.eta,
        UtcTime {
            month: Some(5),
            day: Some(15),
            hour: Some(14),
            minute: Some(0)
        }
    );
    assert_eq!(data.draught, Some(12.2));
    assert_eq!(data.destination, format!("NEW YORK{}", " ".repeat(12)));
    assert!(!data.dte);
}

#[test]
/// 424 bits exactly; pad bits count against the length.
fn test_static_and_voyage_bit_count() {
    assert_eq!(
        StaticAndVoyageData::from_payload(VOYAGE_PAYLOAD, 0),
        Err(DecodeError::BadBitCount { bits: 426 })
    );
    let bits = BitBuffer::from_payload(&VOYAGE_PAYLOAD[..70], 0).unwrap();
    assert_eq!(
        StaticAndVoyageData::decode_bits(&bits),
        Err(DecodeError::BadBitCount { bits: 420 })
    );
}

#[test]
/// Part A carries the name in 160 or 168 bits.
fn test_static_data_part_a() {
    let builder = PayloadBuilder::new()
        .header(24, 0, 338_085_237)
        .uint(0, 2)
        .text("SEA SPRITE", 120);
    let (payload, pad) = builder.build();
    let report = StaticDataReport::from_payload(&payload, pad).unwrap();
    assert_eq!(
        report.part,
        StaticDataPart::A {
            name: "SEA SPRITE".into()
        }
    );

    let (payload, pad) = builder.zeros(8).build();
    assert!(StaticDataReport::from_payload(&payload, pad).is_ok());
}

fn part_b(mmsi: u32) -> PayloadBuilder {
    PayloadBuilder::new()
        .header(24, 0, mmsi)
        .uint(1, 2)
        .uint(37, 8)
        .text("SRT@@@@", 42)
        .text("WDE4178", 42)
        .uint(366_123_450, 30)
        .zeros(6)
}

#[test]
/// Part B ends with dimensions for a regular vessel.
fn test_static_data_part_b_dimensions() {
    let (payload, pad) = part_b(366_999_999).build();
    let report = StaticDataReport::from_payload(&payload, pad).unwrap();
    let StaticDataPart::B {
        ship_type,
        vendor_id,
        callsign,
        reference,
        ..
    } = report.part
    else {
        panic!("expected part B");
    };
    assert_eq!(ship_type, 37);
    assert_eq!(vendor_id, "SRT");
    assert_eq!(callsign, "WDE4178");
    // 366_123_450 = 0b010101110_100101001_100110_111010.
    assert_eq!(
        reference,
        HullReference::Dimensions(Dimensions {
            to_bow: 174,
            to_stern: 297,
            to_port: 38,
            to_starboard: 58,
        })
    );
}

#[test]
/// Auxiliary craft report their mothership instead.
fn test_static_data_part_b_mothership() {
    let (payload, pad) = part_b(981_234_567).build();
    let report = StaticDataReport::from_payload(&payload, pad).unwrap();
    assert!(matches!(
        report.part,
        StaticDataPart::B {
            reference: HullReference::Mothership(366_123_450),
            ..
        }
    ));
}

#[test]
/// Part B needs 168 bits; parts 2 and 3 do not exist.
fn test_static_data_invalid_parts() {
    let (payload, pad) = PayloadBuilder::new()
        .header(24, 0, 1)
        .uint(1, 2)
        .zeros(120)
        .build();
    assert_eq!(
        StaticDataReport::from_payload(&payload, pad),
        Err(DecodeError::BadBitCount { bits: 160 })
    );

    let (payload, pad) = PayloadBuilder::new()
        .header(24, 0, 1)
        .uint(2, 2)
        .zeros(128)
        .build();
    assert_eq!(
        StaticDataReport::from_payload(&payload, pad),
        Err(DecodeError::BadMsgContent)
    );
}
