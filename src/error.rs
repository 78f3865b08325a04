//! Error definitions shared across library modules.
//! Hard failures (`DecodeError`) reject one message; soft outcomes (`Status`)
//! still return the common fields of a message the decoder only partly knows.
use thiserror_no_std::Error;

//==================================================================================DECODE_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Local, deterministic failure while decoding one message or sentence.
pub enum DecodeError {
    /// Payload length (after removing pad bits) does not satisfy the layout rule.
    /// `bits` is the number of valid payload bits that were offered.
    #[error("Bad bit count: {bits} bits")]
    BadBitCount { bits: usize },
    /// A payload character lies outside the 6-bit armoring alphabet.
    #[error("Bad armor character {character:?}")]
    BadCharacter { character: char },
    /// A structurally required sentence field is missing or cannot be parsed.
    #[error("Bad message content")]
    BadMsgContent,
    /// NMEA checksum verification failed.
    #[error("Bad checksum")]
    BadChecksum,
    /// Multi-part reassembly sequence or identity mismatch.
    #[error("Bad fragment sequence")]
    BadFragments,
}

//==================================================================================REASSEMBLY_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Failure of a reassembly attempt together with the number of sentences it used up.
///
/// `consumed` is always at least one so a caller walking a batch makes progress.
#[error("{error} (consumed {consumed} sentence(s))")]
pub struct ReassemblyError {
    pub error: DecodeError,
    pub consumed: usize,
}

//==================================================================================STATUS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
/// Outcome attached to every successfully decoded record.
pub enum Status {
    /// Every field of the layout was decoded.
    #[default]
    Ok,
    /// Message id or DAC namespace not recognized: only the common fields are filled.
    UnknownMessageType,
    /// DAC recognized but the function identifier has no decoder.
    SubMessageNotImplemented,
    /// A reserved sub-record (sensor report type, area shape) was kept undecoded.
    SubSubMessageNotImplemented,
}

impl Status {
    /// `true` when the record carries its full layout.
    pub fn is_ok(&self) -> bool {
        *self == Status::Ok
    }
}

//==================================================================================BITREADER_ERRORS
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised during bitwise buffer reads.
pub enum BitReaderError {
    /// Attempted to read past the valid payload bits.
    #[error("Attempted to read out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds {
        asked: usize,
        available: usize,
        len: usize,
    },
    /// Requested more bits than the target type can hold.
    #[error("Cannot read more than {max} bits. Requested: {asked}")]
    TooLongForType { max: u8, asked: u8 },
    /// Text fields must span a whole number of 6-bit characters.
    #[error("Text field of {bits} bits is not a multiple of 6")]
    NonCharacterAligned { bits: usize },
}

impl From<BitReaderError> for DecodeError {
    fn from(err: BitReaderError) -> Self {
        match err {
            BitReaderError::OutOfBounds { len, .. } => DecodeError::BadBitCount { bits: len },
            BitReaderError::TooLongForType { asked, .. } => DecodeError::BadBitCount {
                bits: asked as usize,
            },
            BitReaderError::NonCharacterAligned { bits } => DecodeError::BadBitCount { bits },
        }
    }
}
