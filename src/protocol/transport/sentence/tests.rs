//! Sentence framing and checksum tests.
use super::*;
use crate::test_support::sentence;
use alloc::string::String;

const TYPE_1: &str = "!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C";

#[test]
/// A known-good sentence passes, with or without receiver fields.
fn test_checksum_valid() {
    assert!(validate_checksum(TYPE_1));
    assert!(validate_checksum(
        "!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C,1415926535"
    ));
    assert!(validate_checksum(
        "!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5c"
    ));
}

#[test]
/// Any single altered payload character breaks the checksum.
fn test_checksum_detects_mutation() {
    let star = TYPE_1.find('*').unwrap();
    let body_start = TYPE_1.find("177").unwrap();
    for index in body_start..star - 2 {
        let mut mutated = String::from(TYPE_1);
        let replacement = if TYPE_1.as_bytes()[index] == b'0' { "1" } else { "0" };
        mutated.replace_range(index..index + 1, replacement);
        assert!(!validate_checksum(&mutated), "mutation at {index} accepted");
    }
}

#[test]
/// Structural problems fail the check instead of erroring.
fn test_checksum_malformed() {
    assert!(!validate_checksum(""));
    assert!(!validate_checksum("AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C"));
    assert!(!validate_checksum("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0"));
    assert!(!validate_checksum("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5"));
    assert!(!validate_checksum("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5CX"));
    assert!(!validate_checksum("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*ZZ"));
}

#[test]
/// The `$` leader is accepted like `!`.
fn test_checksum_dollar_leader() {
    let line = sentence(1, 1, "", "15M67FC000G?ufbE`FepT@3n00Sa", 0);
    let dollar = line.replacen('!', "$", 1);
    assert!(validate_checksum(&dollar));
}

#[test]
/// Pad bits come from the field right before the checksum.
fn test_extract_pad_bits() {
    assert_eq!(extract_pad_bits(TYPE_1), Ok(0));
    assert_eq!(extract_pad_bits("!AIVDM,2,2,1,A,88888888880,2*25"), Ok(2));
    assert_eq!(
        extract_pad_bits("!AIVDM,1,1,,A,000,6*00"),
        Err(DecodeError::BadMsgContent)
    );
    assert_eq!(
        extract_pad_bits("!AIVDM,1,1,,A,000,*00"),
        Err(DecodeError::BadMsgContent)
    );
    assert_eq!(
        extract_pad_bits("!AIVDM,1,1,,A,000,x*00"),
        Err(DecodeError::BadMsgContent)
    );
    assert_eq!(
        extract_pad_bits("!AIVDM,1,1,,A,000,0"),
        Err(DecodeError::BadMsgContent)
    );
}

#[test]
/// The body is the sixth field.
fn test_extract_body() {
    assert_eq!(extract_body(TYPE_1), Ok("177KQJ5000G?tO`K>RA1wUbN0TKH"));
    assert_eq!(extract_body("!AIVDM,1,1,,A"), Err(DecodeError::BadMsgContent));
}

#[test]
/// Every framing field is exposed.
fn test_parse_single_sentence() {
    let sentence = Sentence::parse(TYPE_1).unwrap();
    assert_eq!(sentence.talker, "AI");
    assert!(!sentence.own_vessel);
    assert_eq!(sentence.fragment_count, 1);
    assert_eq!(sentence.fragment_index, 1);
    assert_eq!(sentence.sequence_id, None);
    assert_eq!(sentence.channel, Some('B'));
    assert_eq!(sentence.body, "177KQJ5000G?tO`K>RA1wUbN0TKH");
    assert_eq!(sentence.pad_bits, 0);
    assert_eq!(sentence.receiver_timestamp, None);
    assert!(sentence.is_single());
}

#[test]
/// Fragment fields and a trailing receiver timestamp.
fn test_parse_fragment_with_timestamp() {
    let line = "!AIVDM,2,2,1,A,88888888880,2*25,1415926535\r\n";
    let sentence = Sentence::parse(line).unwrap();
    assert_eq!(sentence.fragment_count, 2);
    assert_eq!(sentence.fragment_index, 2);
    assert_eq!(sentence.sequence_id, Some(1));
    assert_eq!(sentence.pad_bits, 2);
    assert_eq!(sentence.receiver_timestamp, Some(1_415_926_535));
}

#[test]
/// `VDO` marks the receiving station's own reports.
fn test_parse_own_vessel() {
    let body = "AIVDO,1,1,,A,15M67FC000G?ufbE`FepT@3n00Sa,0";
    let checksum = body.bytes().fold(0u8, |acc, byte| acc ^ byte);
    let line = alloc::format!("!{body}*{checksum:02X}");
    let sentence = Sentence::parse(&line).unwrap();
    assert!(sentence.own_vessel);
    assert_eq!(sentence.talker, "AI");
}

#[test]
/// Checksum failures and impossible fragment numbers are distinguished.
fn test_parse_errors() {
    assert_eq!(
        Sentence::parse("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5D"),
        Err(DecodeError::BadChecksum)
    );
    assert_eq!(
        Sentence::parse(&sentence(2, 3, "1", "0000000", 0)),
        Err(DecodeError::BadMsgContent)
    );
    assert_eq!(
        Sentence::parse(&sentence(0, 1, "", "0000000", 0)),
        Err(DecodeError::BadMsgContent)
    );
    assert_eq!(
        Sentence::parse(&sentence(1, 1, "x", "0000000", 0)),
        Err(DecodeError::BadMsgContent)
    );
}

#[test]
/// Checksum-valid sentences of other kinds are not AIS.
fn test_parse_rejects_other_kinds() {
    let gga = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
    assert!(validate_checksum(gga));
    assert_eq!(Sentence::parse(gga), Err(DecodeError::BadMsgContent));
    assert_eq!(
        Sentence::parse("!AIVDX,1,1,,A,0000000,0*03"),
        Err(DecodeError::BadMsgContent)
    );
}
