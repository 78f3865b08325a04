use super::*;
use crate::test_support::{approx, PayloadBuilder};

fn inland(fi: u8) -> PayloadBuilder {
    PayloadBuilder::new()
        .header(8, 0, 211_512_330)
        .zeros(2)
        .uint(200, 10)
        .uint(fi as u64, 6)
}

#[test]
/// Inland static data with decimetre dimensions.
fn test_inland_static_voyage() {
    let (payload, pad) = inland(10)
        .text("04805230", 48)
        .uint(1_100, 13)
        .uint(114, 10)
        .uint(8_020, 14)
        .uint(1, 3)
        .uint(28, 11)
        .uint(1, 2)
        .flag(true)
        .flag(false)
        .flag(true)
        .zeros(8)
        .build();
    let data = InlandStaticVoyage::from_payload(&payload, pad).unwrap();
    assert_eq!(data.eu_id, "04805230");
    assert!(approx(data.length, 110.0));
    assert!(approx(data.beam, 11.4));
    assert_eq!(data.ship_type, 8_020);
    assert_eq!(data.hazardous_cargo, 1);
    assert!(approx(data.draught, 2.8));
    assert_eq!(data.loaded, 1);
    assert!(data.speed_quality);
    assert!(!data.course_quality);
    assert!(data.heading_quality);
}

#[test]
/// Validity period with 4-bit day fields and two corners.
fn test_emma_warning() {
    let builder = inland(23)
        .uint(24, 9)
        .uint(3, 4)
        .uint(14, 4)
        .uint(24, 9)
        .uint(3, 4)
        .uint(15, 4)
        .uint(6, 5)
        .uint(0, 6)
        .uint(18, 5)
        .uint(30, 6)
        .int(3_600_000, 28)
        .int(30_000_000, 27)
        .int(4_200_000, 28)
        .int(31_200_000, 27)
        .uint(2, 4)
        .uint(10, 9)
        .uint(20, 9)
        .uint(1, 2)
        .uint(4, 4)
        .zeros(6);
    assert_eq!(builder.len(), 256);
    let (payload, pad) = builder.build();
    let warning = EmmaWarning::from_payload(&payload, pad).unwrap();
    assert_eq!(
        warning.start_date,
        RisDate {
            year: 24,
            month: Some(3),
            day: Some(14)
        }
    );
    assert_eq!(warning.end_date.day, Some(15));
    assert_eq!(warning.start_hour, Some(6));
    assert_eq!(warning.start_minute, Some(0));
    assert_eq!((warning.end_hour, warning.end_minute), (Some(18), Some(30)));
    assert_eq!(warning.corner_1.longitude, Some(6.0));
    assert_eq!(warning.corner_2.latitude, Some(52.0));
    assert_eq!(warning.warning_type, Some(2));
    assert_eq!((warning.min_value, warning.max_value), (Some(10), Some(20)));
    assert_eq!(warning.classification, Some(1));
    assert_eq!(warning.wind_direction, Some(4));
}

#[test]
/// Unset EMMA fields decode to `None`.
fn test_emma_warning_not_available() {
    let builder = inland(23)
        .uint(24, 9)
        .uint(0, 4)
        .uint(0, 4)
        .uint(24, 9)
        .uint(0, 4)
        .uint(0, 4)
        .uint(24, 5)
        .uint(60, 6)
        .uint(24, 5)
        .uint(60, 6)
        .int(3_600_000, 28)
        .int(30_000_000, 27)
        .int(4_200_000, 28)
        .int(31_200_000, 27)
        .uint(0, 4)
        .uint(511, 9)
        .uint(511, 9)
        .uint(0, 2)
        .uint(0, 4)
        .zeros(6);
    assert_eq!(builder.len(), 256);
    let (payload, pad) = builder.build();
    let warning = EmmaWarning::from_payload(&payload, pad).unwrap();
    assert_eq!(
        warning.start_date,
        RisDate {
            year: 24,
            month: None,
            day: None
        }
    );
    assert_eq!(warning.end_date.month, None);
    assert_eq!((warning.start_hour, warning.start_minute), (None, None));
    assert_eq!((warning.end_hour, warning.end_minute), (None, None));
    assert_eq!(warning.warning_type, None);
    assert_eq!((warning.min_value, warning.max_value), (None, None));
    assert_eq!(warning.classification, None);
    assert_eq!(warning.wind_direction, None);
}

#[test]
/// A set sign bit means a positive level.
fn test_water_levels() {
    let (payload, pad) = inland(24)
        .text("DE", 12)
        .uint(101, 11)
        .flag(true)
        .uint(250, 13)
        .uint(102, 11)
        .flag(false)
        .uint(40, 13)
        .zeros(50)
        .build();
    let levels = WaterLevels::from_payload(&payload, pad).unwrap();
    assert_eq!(levels.country, "DE");
    assert_eq!(
        levels.gauges[0],
        GaugeLevel {
            gauge_id: 101,
            level: 250
        }
    );
    assert_eq!(
        levels.gauges[1],
        GaugeLevel {
            gauge_id: 102,
            level: -40
        }
    );
    assert_eq!(levels.gauges[3].gauge_id, 0);
}

#[test]
/// Light states unpack from the 30-bit status field.
fn test_signal_status() {
    let (payload, pad) = inland(40)
        .int(3_600_000, 28)
        .int(30_000_000, 27)
        .uint(5, 4)
        .uint(270, 9)
        .uint(2, 3)
        .uint(0b001_010_000_000_000_000_000_000_000_111, 30)
        .zeros(11)
        .build();
    let signal = SignalStatus::from_payload(&payload, pad).unwrap();
    assert_eq!(signal.position.longitude, Some(6.0));
    assert_eq!(signal.signal_form, Some(5));
    assert_eq!(signal.orientation, Some(270));
    assert_eq!(signal.stream_direction, Some(2));
    assert_eq!(signal.light(0), Some(1));
    assert_eq!(signal.light(1), Some(2));
    assert_eq!(signal.light(2), Some(0));
    assert_eq!(signal.light(9), Some(7));
    assert_eq!(signal.light(10), None);
}

#[test]
/// Three accepted lengths for persons on board.
fn test_inland_persons_on_board() {
    let counts = inland(55).uint(5, 8).uint(120, 13).uint(2, 8);
    for spare in [3, 51, 83] {
        let (payload, pad) = counts.clone().zeros(spare).build();
        assert_eq!(
            InlandPersonsOnBoard::from_payload(&payload, pad),
            Ok(InlandPersonsOnBoard {
                crew: 5,
                passengers: 120,
                shipboard_personnel: 2
            })
        );
    }
    let (payload, pad) = counts.zeros(11).build();
    assert_eq!(
        InlandPersonsOnBoard::from_payload(&payload, pad),
        Err(DecodeError::BadBitCount { bits: 96 })
    );
}

#[test]
/// Signal form, orientation and stream direction have "not available" codes.
fn test_signal_status_not_available() {
    let (payload, pad) = inland(40)
        .int(3_600_000, 28)
        .int(30_000_000, 27)
        .uint(0, 4)
        .uint(360, 9)
        .uint(0, 3)
        .zeros(30)
        .zeros(11)
        .build();
    let signal = SignalStatus::from_payload(&payload, pad).unwrap();
    assert_eq!(signal.signal_form, None);
    assert_eq!(signal.orientation, None);
    assert_eq!(signal.stream_direction, None);
    assert_eq!(signal.light(0), Some(0));
}
