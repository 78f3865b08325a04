//! Application-specific binary messages carried end to end: armoring,
//! fragmentation, envelope dispatch and sub-record decoding.
mod helpers;

use helpers::{aivdm, fragments, Payload};
use korri_ais::protocol::messages::binary::addressed::AddressedContent;
use korri_ais::protocol::messages::binary::area_notice::SubArea;
use korri_ais::protocol::messages::binary::broadcast::BroadcastContent;
use korri_ais::protocol::transport::assembler::{reassemble, SentenceDecoder};
use korri_ais::{decode, decode_sentence, AisMessage, Status};

fn circle(payload: Payload, radius: u64) -> Payload {
    payload
        .uint(0, 3)
        .uint(1, 2)
        .int(-4_230_000, 25)
        .int(2_475_000, 24)
        .uint(4, 3)
        .uint(radius, 12)
        .uint(0, 18)
}

#[test]
/// Area notice split over two sentences.
fn test_area_notice_over_two_fragments() {
    let notice = Payload::new()
        .header(8, 366_999_712)
        .uint(0, 2)
        .uint(1, 10)
        .uint(22, 6)
        .uint(42, 10)
        .uint(2, 7)
        .uint(7, 4)
        .uint(4, 5)
        .uint(12, 5)
        .uint(0, 6)
        .uint(120, 18);
    let notice = circle(circle(notice, 50), 0);
    assert_eq!(notice.len(), 111 + 2 * 87);
    let (payload, pad) = notice.armor();
    let lines = fragments(&payload, pad, 30, "7");
    assert_eq!(lines.len(), 2);

    let reassembled = reassemble(&lines, 0).unwrap();
    assert_eq!(reassembled.body, payload);
    assert_eq!(reassembled.pad_bits as usize, pad);

    let decoded: Vec<_> = SentenceDecoder::new(&lines).collect();
    assert_eq!(decoded.len(), 1);
    let message = &decoded[0].as_ref().unwrap().message;
    assert_eq!(message.status(), Status::Ok);
    let AisMessage::BinaryBroadcast(broadcast) = message else {
        panic!("expected a broadcast binary message");
    };
    let BroadcastContent::AreaNotice(notice) = &broadcast.content else {
        panic!("expected an area notice");
    };
    assert_eq!(notice.link_id, 42);
    assert_eq!(notice.sub_areas.len(), 2);
    let SubArea::Circle(first) = notice.sub_areas[0] else {
        panic!("expected a circle");
    };
    assert_eq!(first.center.longitude, Some(-70.5));
    assert_eq!(first.center.latitude, Some(41.25));
    assert_eq!(first.radius, 500);
    let SubArea::Circle(point) = notice.sub_areas[1] else {
        panic!("expected a circle");
    };
    assert_eq!(point.radius, 0);
}

#[test]
/// UK lighthouse monitoring addressed to a base station.
fn test_lighthouse_monitoring_sentence() {
    let (payload, pad) = Payload::new()
        .header(6, 992_351_000)
        .uint(0, 2)
        .uint(2_320_771, 30)
        .uint(0, 1)
        .uint(0, 1)
        .uint(235, 10)
        .uint(10, 6)
        .uint(240, 10)
        .uint(0, 10)
        .uint(20, 10)
        .uint(0, 2)
        .uint(1, 2)
        .uint(0, 1)
        .uint(0b1000_0001, 8)
        .uint(1, 1)
        .uint(0, 4)
        .armor();
    let message = decode_sentence(&aivdm(1, 1, "", &payload, pad)).unwrap();
    assert_eq!(message.status(), Status::Ok);
    let AisMessage::AddressedBinary(binary) = message else {
        panic!("expected an addressed binary message");
    };
    assert_eq!(binary.destination_mmsi, 2_320_771);
    let AddressedContent::LighthouseAtonMonitoring(monitoring) = binary.content else {
        panic!("expected lighthouse monitoring");
    };
    assert!((monitoring.analogue_internal - 12.0).abs() < 1e-9);
    assert!((monitoring.analogue_external_2 - 1.0).abs() < 1e-9);
    assert_eq!(monitoring.light_status, 1);
    assert_eq!(monitoring.digital_inputs, 0b1000_0001);
    assert!(monitoring.off_position);
}

#[test]
/// Unknown DAC and unhandled FI statuses.
fn test_unhandled_applications_keep_common_fields() {
    let (payload, pad) = Payload::new()
        .header(8, 2_579_999)
        .uint(0, 2)
        .uint(777, 10)
        .uint(5, 6)
        .uint(0xF0F0, 16)
        .armor();
    let message = decode(&payload, pad).unwrap();
    assert_eq!(message.status(), Status::UnknownMessageType);
    let AisMessage::BinaryBroadcast(broadcast) = message else {
        panic!("expected a broadcast binary message");
    };
    assert_eq!(broadcast.header.mmsi, 2_579_999);
    assert_eq!(
        broadcast.content,
        BroadcastContent::Unparsed {
            data: vec![0xF0, 0xF0]
        }
    );

    let (payload, pad) = Payload::new()
        .header(8, 2_579_999)
        .uint(0, 2)
        .uint(200, 10)
        .uint(63, 6)
        .armor();
    let message = decode(&payload, pad).unwrap();
    assert_eq!(message.status(), Status::SubMessageNotImplemented);
}
