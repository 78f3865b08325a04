//! Safety related text: addressed (12) and broadcast (14).
//!
//! The text runs to the end of the payload; bits that do not complete a
//! character are ignored.
use crate::core::{BitLength, HEADER_BITS, MAX_STANDARD_BITS};
use crate::error::DecodeError;
use crate::infra::codec::armor::BitBuffer;
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::traits::FromPayload;
use crate::protocol::messages::header::Header;
use alloc::string::String;

/// Message 12.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AddressedSafety {
    pub header: Header,
    pub sequence_number: u8,
    pub destination_mmsi: u32,
    pub retransmitted: bool,
    pub spare: u8,
    pub text: String,
}

impl FromPayload for AddressedSafety {
    const BIT_LENGTH: BitLength = BitLength::Range {
        min: 72,
        max: MAX_STANDARD_BITS,
    };
    const MESSAGE_IDS: &'static [u8] = &[12];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        Ok(Self {
            header: Header::from_bits(bits)?,
            sequence_number: reader.read_u8(2)?,
            destination_mmsi: reader.read_u32(30)?,
            retransmitted: reader.read_bool()?,
            spare: reader.read_u8(1)?,
            text: reader.read_text_to_end()?,
        })
    }
}

/// Message 14.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SafetyBroadcast {
    pub header: Header,
    pub spare: u8,
    pub text: String,
}

impl FromPayload for SafetyBroadcast {
    const BIT_LENGTH: BitLength = BitLength::Range {
        min: 40,
        max: MAX_STANDARD_BITS,
    };
    const MESSAGE_IDS: &'static [u8] = &[14];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        Ok(Self {
            header: Header::from_bits(bits)?,
            spare: reader.read_u8(2)?,
            text: reader.read_text_to_end()?,
        })
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
