//! Link management layouts and their optional trailing blocks.
use super::*;
use crate::test_support::PayloadBuilder;

fn interrogation() -> PayloadBuilder {
    PayloadBuilder::new()
        .header(15, 0, 3_669_720)
        .zeros(2)
        .uint(367_001_000, 30)
        .uint(5, 6)
        .uint(120, 12)
}

#[test]
/// Single request, then the optional second request and second station.
fn test_interrogation_blocks() {
    let (payload, pad) = interrogation().build();
    let message = Interrogation::from_payload(&payload, pad).unwrap();
    assert_eq!(message.mmsi_1, 367_001_000);
    assert_eq!(
        message.request_1_1,
        InterrogationRequest {
            message_id: 5,
            slot_offset: 120
        }
    );
    assert_eq!(message.request_1_2, None);
    assert_eq!(message.station_2, None);

    let with_second_request = interrogation().zeros(2).uint(24, 6).uint(300, 12).zeros(2);
    let (payload, pad) = with_second_request.build();
    let message = Interrogation::from_payload(&payload, pad).unwrap();
    assert_eq!(
        message.request_1_2,
        Some(InterrogationRequest {
            message_id: 24,
            slot_offset: 300
        })
    );
    assert_eq!(message.station_2, None);

    let (payload, pad) = interrogation()
        .zeros(2)
        .uint(24, 6)
        .uint(300, 12)
        .zeros(2)
        .uint(244_123_456, 30)
        .uint(3, 6)
        .uint(42, 12)
        .zeros(2)
        .build();
    let message = Interrogation::from_payload(&payload, pad).unwrap();
    assert_eq!(
        message.station_2,
        Some(StationInterrogation {
            mmsi: 244_123_456,
            request: InterrogationRequest {
                message_id: 3,
                slot_offset: 42
            }
        })
    );
}

#[test]
/// Interrogations outside 88..=162 bits are rejected.
fn test_interrogation_bit_count() {
    let (payload, pad) = PayloadBuilder::new().header(15, 0, 1).zeros(49).build();
    assert_eq!(
        Interrogation::from_payload(&payload, pad),
        Err(DecodeError::BadBitCount { bits: 87 })
    );
}

#[test]
/// Assigned mode with one or two stations.
fn test_assigned_mode_command() {
    let station_a = PayloadBuilder::new()
        .header(16, 0, 2_053_501)
        .zeros(2)
        .uint(224_251_000, 30)
        .uint(200, 12)
        .uint(0, 10);
    let (payload, pad) = station_a.build();
    assert_eq!(
        AssignedModeCommand::from_payload(&payload, pad),
        Err(DecodeError::BadBitCount { bits: 92 })
    );

    let (payload, pad) = PayloadBuilder::new()
        .header(16, 0, 2_053_501)
        .zeros(2)
        .uint(224_251_000, 30)
        .uint(200, 12)
        .uint(0, 10)
        .zeros(4)
        .build();
    let command = AssignedModeCommand::from_payload(&payload, pad).unwrap();
    assert_eq!(command.station_a.mmsi, 224_251_000);
    assert_eq!(command.station_a.offset, 200);
    assert_eq!(command.station_b, None);

    let (payload, pad) = station_a
        .uint(224_252_000, 30)
        .uint(300, 12)
        .uint(10, 10)
        .build();
    let command = AssignedModeCommand::from_payload(&payload, pad).unwrap();
    assert_eq!(
        command.station_b,
        Some(SlotAssignment {
            mmsi: 224_252_000,
            offset: 300,
            increment: 10
        })
    );
}

#[test]
/// DGNSS broadcast with and without correction data.
fn test_gnss_broadcast() {
    let position_only = PayloadBuilder::new()
        .header(17, 0, 2_734_450)
        .zeros(2)
        .int(-6_000, 18)
        .int(30_000, 17)
        .zeros(5);
    let (payload, pad) = position_only.build();
    let message = GnssBroadcast::from_payload(&payload, pad).unwrap();
    assert_eq!(message.position.longitude, Some(-10.0));
    assert_eq!(message.position.latitude, Some(50.0));
    assert_eq!(message.correction, None);

    let (payload, pad) = position_only
        .uint(9, 6)
        .uint(725, 10)
        .uint(4_000, 13)
        .uint(2, 3)
        .uint(3, 5)
        .uint(0, 3)
        .uint(0xABCDEF, 24)
        .uint(0x123456, 24)
        .build();
    let message = GnssBroadcast::from_payload(&payload, pad).unwrap();
    let correction = message.correction.unwrap();
    assert_eq!(correction.message_type, 9);
    assert_eq!(correction.station_id, 725);
    assert_eq!(correction.z_count, 4_000);
    assert_eq!(correction.word_count, 3);
    assert_eq!(correction.data, [0xABCDEF, 0x123456]);
}

#[test]
/// Reservation blocks present only when the length allows.
fn test_data_link_management() {
    let block = |builder: PayloadBuilder, offset: u64| {
        builder.uint(offset, 12).uint(1, 4).uint(7, 3).uint(225, 11)
    };
    let one = block(PayloadBuilder::new().header(20, 0, 3_160_026).zeros(2), 2049);
    let (payload, pad) = one.zeros(2).build();
    let message = DataLinkManagement::from_payload(&payload, pad).unwrap();
    assert_eq!(
        message.reservations,
        [SlotReservation {
            offset: 2049,
            slots: 1,
            timeout: 7,
            increment: 225
        }]
    );

    let mut four = PayloadBuilder::new().header(20, 0, 3_160_026).zeros(2);
    for offset in [10, 20, 30, 40] {
        four = block(four, offset);
    }
    let (payload, pad) = four.build();
    let message = DataLinkManagement::from_payload(&payload, pad).unwrap();
    let offsets: Vec<u16> = message.reservations.iter().map(|r| r.offset).collect();
    assert_eq!(offsets, [10, 20, 30, 40]);
}

fn channel_management(addressed: bool) -> PayloadBuilder {
    let builder = PayloadBuilder::new()
        .header(22, 0, 3_160_048)
        .zeros(2)
        .uint(2087, 12)
        .uint(2088, 12)
        .uint(0, 4)
        .flag(false);
    let builder = if addressed {
        builder
            .uint(316_001_111, 30)
            .zeros(5)
            .uint(316_002_222, 30)
            .zeros(5)
    } else {
        builder
            .int(-40_200, 18)
            .int(28_200, 17)
            .int(-42_000, 18)
            .int(27_000, 17)
    };
    builder.flag(addressed).flag(true).flag(false).uint(4, 3).zeros(23)
}

#[test]
/// The addressed flag at bit 139 selects the area form.
fn test_channel_management() {
    let (payload, pad) = channel_management(false).build();
    let message = ChannelManagement::from_payload(&payload, pad).unwrap();
    assert_eq!(message.channel_a, 2087);
    assert_eq!(message.channel_b, 2088);
    assert_eq!(
        message.area,
        ChannelArea::Region {
            north_east: Position {
                longitude: Some(-67.0),
                latitude: Some(47.0)
            },
            south_west: Position {
                longitude: Some(-70.0),
                latitude: Some(45.0)
            },
        }
    );
    assert!(message.bandwidth_a);
    assert!(!message.bandwidth_b);
    assert_eq!(message.zone_size, 4);

    let (payload, pad) = channel_management(true).build();
    let message = ChannelManagement::from_payload(&payload, pad).unwrap();
    assert_eq!(
        message.area,
        ChannelArea::Addressed {
            mmsi_1: 316_001_111,
            mmsi_2: 316_002_222
        }
    );
    assert_eq!(message.zone_size, 4);
}

#[test]
/// Group assignment is exactly 160 bits.
fn test_group_assignment() {
    let builder = PayloadBuilder::new()
        .header(23, 0, 2_268_120)
        .zeros(2)
        .int(1_500, 18)
        .int(29_400, 17)
        .int(900, 18)
        .int(29_100, 17)
        .uint(6, 4)
        .uint(0, 8)
        .zeros(22)
        .uint(1, 2)
        .uint(9, 4)
        .uint(0, 4)
        .zeros(6);
    let (payload, pad) = builder.build();
    assert_eq!(pad, 2);
    let message = GroupAssignment::from_payload(&payload, pad).unwrap();
    assert_eq!(message.north_east.longitude, Some(2.5));
    assert_eq!(message.north_east.latitude, Some(49.0));
    assert_eq!(message.south_west.longitude, Some(1.5));
    assert_eq!(message.station_type, 6);
    assert_eq!(message.txrx_mode, 1);
    assert_eq!(message.report_interval, 9);

    let (payload, pad) = builder.zeros(8).build();
    assert_eq!(
        GroupAssignment::from_payload(&payload, pad),
        Err(DecodeError::BadBitCount { bits: 168 })
    );
}
