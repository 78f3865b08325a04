//! Fragment reassembly tests covering sequencing, identity checks, and batch skipping.
use super::*;
use crate::test_support::sentence;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

const PART_1: &str =
    "!AIVDM,2,1,1,A,55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp8,0*1C";
const PART_2: &str = "!AIVDM,2,2,1,A,88888888880,2*25";
const TYPE_1: &str = "!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C";

#[test]
/// Rebuild a payload from two ordered fragments.
fn test_two_fragment_reassembly() {
    let result = reassemble(&[PART_1, PART_2], 0).unwrap();
    assert_eq!(
        result.body,
        "55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp888888888880"
    );
    assert_eq!(result.pad_bits, 2);
    assert_eq!(result.consumed, 2);
}

#[test]
/// Body is the concatenation and pad bits come from the last fragment.
fn test_reassembly_uses_last_pad() {
    let lines = [
        sentence(2, 1, "9", "AAAA", 0),
        sentence(2, 2, "9", "BBBB", 2),
    ];
    let result = reassemble(&lines, 0).unwrap();
    assert_eq!(result.body, "AAAABBBB");
    assert_eq!(result.pad_bits, 2);
    assert_eq!(result.consumed, 2);
}

#[test]
/// A single sentence completes immediately.
fn test_single_sentence() {
    let result = reassemble(&[TYPE_1], 0).unwrap();
    assert_eq!(result.body, "177KQJ5000G?tO`K>RA1wUbN0TKH");
    assert_eq!(result.consumed, 1);
}

#[test]
/// Reassembly can start anywhere in the batch.
fn test_start_index() {
    let result = reassemble(&[TYPE_1, PART_1, PART_2], 1).unwrap();
    assert_eq!(result.consumed, 2);
    assert_eq!(result.pad_bits, 2);
}

#[test]
/// A skipped fragment index aborts after the accepted fragments.
fn test_out_of_sequence_fragment() {
    let lines = [
        sentence(3, 1, "4", "AAAA", 0),
        sentence(3, 3, "4", "CCCC", 0),
    ];
    let failure = reassemble(&lines, 0).unwrap_err();
    assert_eq!(failure.error, DecodeError::BadFragments);
    assert_eq!(failure.consumed, 1);
}

#[test]
/// Sequence id and total must match the first fragment.
fn test_identity_mismatch() {
    let other_sequence = [sentence(2, 1, "1", "AAAA", 0), sentence(2, 2, "2", "BBBB", 0)];
    let failure = reassemble(&other_sequence, 0).unwrap_err();
    assert_eq!(failure.error, DecodeError::BadFragments);
    assert_eq!(failure.consumed, 1);

    let other_total = [sentence(2, 1, "1", "AAAA", 0), sentence(3, 2, "1", "BBBB", 0)];
    let failure = reassemble(&other_total, 0).unwrap_err();
    assert_eq!(failure.error, DecodeError::BadFragments);
}

#[test]
/// A batch starting mid-transmission is rejected one sentence at a time.
fn test_starts_with_continuation() {
    let failure = reassemble(&[PART_2], 0).unwrap_err();
    assert_eq!(failure.error, DecodeError::BadFragments);
    assert_eq!(failure.consumed, 1);
}

#[test]
/// Missing trailing fragments are reported with what was accepted.
fn test_truncated_sequence() {
    let lines = [
        sentence(3, 1, "7", "AAAA", 0),
        sentence(3, 2, "7", "BBBB", 0),
    ];
    let failure = reassemble(&lines, 0).unwrap_err();
    assert_eq!(failure.error, DecodeError::BadFragments);
    assert_eq!(failure.consumed, 2);

    let empty: [&str; 0] = [];
    let failure = reassemble(&empty, 0).unwrap_err();
    assert_eq!(failure.consumed, 1);
}

#[test]
/// Checksum and content failures keep their own error kinds.
fn test_fragment_errors() {
    let corrupted = PART_2.replace("*25", "*26");
    let failure = reassemble(&[PART_1, corrupted.as_str()], 0).unwrap_err();
    assert_eq!(failure.error, DecodeError::BadChecksum);
    assert_eq!(failure.consumed, 1);

    let bad_pad = sentence(1, 1, "", "AAAA", 7);
    let failure = reassemble(&[bad_pad], 0).unwrap_err();
    assert_eq!(failure.error, DecodeError::BadMsgContent);
    assert_eq!(failure.consumed, 1);
}

#[test]
/// The state machine reports each step and releases the session when done.
fn test_process_sentence_states() {
    let mut assembler = FragmentAssembler::new();
    assert_eq!(
        assembler.process_sentence(PART_1),
        ProcessResult::FragmentConsumed
    );
    assert_eq!(assembler.reviewed(), 1);
    assert!(matches!(
        assembler.process_sentence(PART_2),
        ProcessResult::MessageComplete(Reassembled { consumed: 2, .. })
    ));
    assert_eq!(assembler.reviewed(), 0);
    assert!(matches!(
        assembler.process_sentence(TYPE_1),
        ProcessResult::MessageComplete(_)
    ));
}

#[test]
/// Batch decoding skips failures and keeps going.
fn test_sentence_decoder_skips_failures() {
    let lines: Vec<String> = vec![
        String::from(PART_2),
        String::from(TYPE_1),
        String::from("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5D"),
        String::from(PART_1),
        String::from(PART_2),
    ];
    let results: Vec<_> = SentenceDecoder::new(&lines).collect();
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap_err().error, DecodeError::BadFragments);
    assert_eq!(results[1].as_ref().unwrap().message.header().message_id, 1);
    assert_eq!(results[2].as_ref().unwrap_err().error, DecodeError::BadChecksum);
    let static_data = results[3].as_ref().unwrap();
    assert_eq!(static_data.consumed, 2);
    assert_eq!(static_data.message.header().mmsi, 351_759_000);
}

#[test]
/// A decode failure after reassembly consumes the whole transmission.
fn test_sentence_decoder_decode_failure() {
    // Type 1 payload cut short to 42 bits.
    let lines = [sentence(1, 1, "", "177KQJ5", 0), String::from(TYPE_1)];
    let mut decoder = SentenceDecoder::new(&lines);
    let failure = decoder.next().unwrap().unwrap_err();
    assert_eq!(failure.error, DecodeError::BadBitCount { bits: 42 });
    assert_eq!(failure.consumed, 1);
    assert!(decoder.next().unwrap().is_ok());
    assert!(decoder.next().is_none());
}
