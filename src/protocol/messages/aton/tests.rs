use super::*;
use crate::test_support::PayloadBuilder;

fn aton() -> PayloadBuilder {
    PayloadBuilder::new()
        .header(21, 0, 993_692_028)
        .uint(1, 5)
        .text("SF OAK BAY BR VAIS E", 120)
        .flag(false)
        .int(-73_390_800, 28)
        .int(22_691_100, 27)
        .uint(0, 9)
        .uint(0, 9)
        .uint(0, 6)
        .uint(0, 6)
        .uint(7, 4)
        .uint(61, 6)
        .flag(false)
        .uint(0, 8)
        .flag(false)
        .flag(true)
        .flag(false)
        .zeros(1)
}

#[test]
/// Report without name extension.
fn test_aton_report() {
    let (payload, pad) = aton().build();
    let report = AidToNavigationReport::from_payload(&payload, pad).unwrap();
    assert_eq!(report.header.mmsi, 993_692_028);
    assert_eq!(report.aton_type, 1);
    assert_eq!(report.name, "SF OAK BAY BR VAIS E");
    assert_eq!(report.position.longitude, Some(-122.318));
    assert_eq!(report.position.latitude, Some(37.818_5));
    assert_eq!(report.fix_type, 7);
    assert_eq!(report.timestamp, 61);
    assert!(report.virtual_aton);
    assert!(report.name_extension.is_empty());
}

#[test]
/// Extension characters follow the fixed part.
fn test_aton_name_extension() {
    let (payload, pad) = aton().text("XTENDED", 42).zeros(2).build();
    let report = AidToNavigationReport::from_payload(&payload, pad).unwrap();
    assert_eq!(report.name_extension, "XTENDED");
    assert_eq!(report.full_name(), "SF OAK BAY BR VAIS EXTENDED");
}

#[test]
/// The fixed part alone is the minimum.
fn test_aton_bit_count() {
    let (payload, pad) = PayloadBuilder::new().header(21, 0, 1).zeros(233).build();
    assert_eq!(
        AidToNavigationReport::from_payload(&payload, pad),
        Err(DecodeError::BadBitCount { bits: 271 })
    );
}
