//! Field-level parsing of one `!AIVDM`/`!AIVDO` sentence.
//!
//! Layout: `!AIVDM,<count>,<index>,<seq>,<channel>,<payload>,<pad>*<cs>[,<receiver fields>]`.
//! The checksum is the XOR of every byte between the leading `!`/`$` and `*`,
//! written as two hexadecimal digits.
use super::MAX_FRAGMENTS;
use crate::error::DecodeError;

/// Index of the armored payload among the comma-separated fields.
const BODY_FIELD: usize = 5;

//==================================================================================CHECKSUM
/// Verify the NMEA checksum of `sentence`.
///
/// Requires a leading `!` or `$`, a `*` delimiter, and exactly two hex digits
/// after it, followed by the end of the line or a `,` (receivers may append
/// fields). Malformed sentences simply fail the check.
pub fn validate_checksum(sentence: &str) -> bool {
    let bytes = sentence.as_bytes();
    if !matches!(bytes.first(), Some(b'!') | Some(b'$')) {
        return false;
    }
    let Some(star) = sentence.find('*') else {
        return false;
    };

    let computed = bytes[1..star].iter().fold(0u8, |acc, byte| acc ^ byte);

    let digits = &bytes[star + 1..];
    if digits.len() < 2 || (digits.len() > 2 && digits[2] != b',') {
        return false;
    }
    match (hex_value(digits[0]), hex_value(digits[1])) {
        (Some(high), Some(low)) => ((high << 4) | low) == computed,
        _ => false,
    }
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        _ => None,
    }
}

//==================================================================================FIELDS
/// Pad-bit count: the last comma field before `*`, in `0..=5`.
pub fn extract_pad_bits(sentence: &str) -> Result<u8, DecodeError> {
    let star = sentence.find('*').ok_or(DecodeError::BadMsgContent)?;
    let field = sentence[..star]
        .rsplit(',')
        .next()
        .ok_or(DecodeError::BadMsgContent)?;
    let pad_bits = parse_digits(field).ok_or(DecodeError::BadMsgContent)?;
    if pad_bits > 5 {
        return Err(DecodeError::BadMsgContent);
    }
    Ok(pad_bits as u8)
}

/// Armored payload: the sixth comma field.
pub fn extract_body(sentence: &str) -> Result<&str, DecodeError> {
    let before_checksum = sentence.split('*').next().unwrap_or(sentence);
    before_checksum
        .split(',')
        .nth(BODY_FIELD)
        .ok_or(DecodeError::BadMsgContent)
}

/// Decimal field made only of ASCII digits.
fn parse_digits(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

//==================================================================================SENTENCE
/// Borrowed view over the fields of one checksum-valid sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Talker identifier, usually `AI`.
    pub talker: &'a str,
    /// `VDO` sentences describe the receiving station itself.
    pub own_vessel: bool,
    /// Number of sentences carrying the payload (1–9).
    pub fragment_count: u8,
    /// 1-based position of this sentence.
    pub fragment_index: u8,
    /// Sequential id tying fragments together; empty for single sentences.
    pub sequence_id: Option<u8>,
    /// Radio channel (`A`/`B`, or `1`/`2`).
    pub channel: Option<char>,
    /// Armored payload characters.
    pub body: &'a str,
    pub pad_bits: u8,
    /// Seconds since an epoch, appended by some receivers after the checksum.
    pub receiver_timestamp: Option<u64>,
}

impl<'a> Sentence<'a> {
    /// Validate the checksum and split `line` into its fields.
    ///
    /// Sentence kinds other than `VDM` and `VDO` are rejected with
    /// [`DecodeError::BadMsgContent`].
    pub fn parse(line: &'a str) -> Result<Self, DecodeError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if !validate_checksum(line) {
            return Err(DecodeError::BadChecksum);
        }
        let star = line.find('*').ok_or(DecodeError::BadMsgContent)?;
        let (framed, trailer) = line.split_at(star);

        let mut fields = framed.split(',');
        let address = fields.next().ok_or(DecodeError::BadMsgContent)?;
        if address.len() < 4 || !address.is_ascii() {
            return Err(DecodeError::BadMsgContent);
        }
        let (talker, kind) = address[1..].split_at(address.len() - 4);
        if !matches!(kind, "VDM" | "VDO") {
            return Err(DecodeError::BadMsgContent);
        }

        let fragment_count = fields
            .next()
            .and_then(parse_digits)
            .filter(|count| (1..=MAX_FRAGMENTS as u64).contains(count))
            .ok_or(DecodeError::BadMsgContent)? as u8;
        let fragment_index = fields
            .next()
            .and_then(parse_digits)
            .filter(|index| (1..=fragment_count as u64).contains(index))
            .ok_or(DecodeError::BadMsgContent)? as u8;
        let sequence_id = match fields.next().ok_or(DecodeError::BadMsgContent)? {
            "" => None,
            field => Some(
                parse_digits(field)
                    .and_then(|seq| u8::try_from(seq).ok())
                    .ok_or(DecodeError::BadMsgContent)?,
            ),
        };
        let channel = fields
            .next()
            .ok_or(DecodeError::BadMsgContent)?
            .chars()
            .next();
        let body = fields.next().ok_or(DecodeError::BadMsgContent)?;
        let pad_bits = extract_pad_bits(line)?;

        // Everything after the checksum digits: `*hh[,field...]`.
        let receiver_timestamp = trailer
            .get(3..)
            .filter(|rest| rest.starts_with(','))
            .and_then(|rest| rest.rsplit(',').next())
            .and_then(parse_digits);

        Ok(Self {
            talker,
            own_vessel: kind == "VDO",
            fragment_count,
            fragment_index,
            sequence_id,
            channel,
            body,
            pad_bits,
            receiver_timestamp,
        })
    }

    /// Whether the payload fits in this sentence alone.
    pub fn is_single(&self) -> bool {
        self.fragment_count == 1
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
