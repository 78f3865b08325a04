//! Core data types shared by the codec primitives and the message decoders:
//! buffer capacities, bit-length layout rules, and the small value types
//! (positions, hull dimensions, UTC stamps) many AIS layouts repeat.
use crate::error::DecodeError;

/// Longest payload accepted by the decoder (multi-slot message 26 tops out at 1064 bits).
pub const MAX_PAYLOAD_BITS: usize = 1192;
/// Backing storage for [`MAX_PAYLOAD_BITS`].
pub const MAX_PAYLOAD_BYTES: usize = MAX_PAYLOAD_BITS / 8;
/// Maximum number of armor characters in one (reassembled) payload.
pub const MAX_PAYLOAD_CHARS: usize = MAX_PAYLOAD_BITS / 6;

/// Common header: message id (6) + repeat indicator (2) + MMSI (30).
pub const HEADER_BITS: usize = 38;
/// Broadcast binary header (message 8): common header + spare (2) + DAC (10) + FI (6).
pub const BROADCAST_BINARY_HEADER_BITS: usize = 56;
/// Addressed binary header (message 6): common header + sequence (2) + destination (30)
/// + retransmit (1) + spare (1) + DAC (10) + FI (6).
pub const ADDRESSED_BINARY_HEADER_BITS: usize = 88;
/// Largest standard payload (five slots of message 6/8/12/14 content).
pub const MAX_STANDARD_BITS: usize = 1008;

/// Divisor turning 1/10 000 minute units into degrees.
pub const TEN_THOUSANDTH_MINUTE: f64 = 600_000.0;
/// Divisor turning 1/1 000 minute units into degrees.
pub const THOUSANDTH_MINUTE: f64 = 60_000.0;
/// Divisor turning 1/10 minute units into degrees.
pub const TENTH_MINUTE: f64 = 600.0;

//==================================================================================BIT_LENGTH
/// Payload length rule of one message layout, checked before any field is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitLength {
    /// Exactly this many bits.
    Exact(usize),
    /// One of a few accepted lengths (transmitters that drop trailing spare bits).
    OneOf(&'static [usize]),
    /// Inclusive range, used by free text and optional trailing blocks.
    Range { min: usize, max: usize },
    /// `header` bits followed by whole `record`-bit groups, at most `max_records`.
    Repeated {
        header: usize,
        record: usize,
        min_records: usize,
        max_records: usize,
    },
}

impl BitLength {
    /// Validate `num_bits` against the rule.
    pub fn check(&self, num_bits: usize) -> Result<(), DecodeError> {
        let valid = match *self {
            BitLength::Exact(bits) => num_bits == bits,
            BitLength::OneOf(lengths) => lengths.contains(&num_bits),
            BitLength::Range { min, max } => (min..=max).contains(&num_bits),
            BitLength::Repeated {
                header,
                record,
                min_records,
                max_records,
            } => {
                num_bits >= header
                    && (num_bits - header) % record == 0
                    && ((num_bits - header) / record) >= min_records
                    && ((num_bits - header) / record) <= max_records
            }
        };

        if valid {
            Ok(())
        } else {
            Err(DecodeError::BadBitCount { bits: num_bits })
        }
    }

    /// Number of repeated records carried by `num_bits` (zero for other rules).
    pub fn record_count(&self, num_bits: usize) -> usize {
        match *self {
            BitLength::Repeated { header, record, .. } if num_bits >= header => {
                (num_bits - header) / record
            }
            _ => 0,
        }
    }
}

//==================================================================================FIELD_TYPES
/// WGS-84 position; each axis is `None` when the transmitter sent its "not available" code.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    /// Degrees east, `-180.0..=180.0` (181° = not available).
    pub longitude: Option<f64>,
    /// Degrees north, `-90.0..=90.0` (91° = not available).
    pub latitude: Option<f64>,
}

impl Position {
    /// Both coordinates were transmitted.
    pub fn is_available(&self) -> bool {
        self.longitude.is_some() && self.latitude.is_some()
    }
}

/// Reference point for reported position, measured from the antenna (metres).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dimensions {
    pub to_bow: u16,
    pub to_stern: u16,
    pub to_port: u8,
    pub to_starboard: u8,
}

/// UTC month/day/hour/minute stamp; absent parts use their protocol "not available" codes
/// (month 0, day 0, hour 24, minute 60).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UtcTime {
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
}
