//! Common 38-bit header carried by every AIS message.
use crate::core::HEADER_BITS;
use crate::error::DecodeError;
use crate::infra::codec::armor::BitBuffer;

/// Armor characters spanning the common header.
const HEADER_CHARS: usize = HEADER_BITS.div_ceil(6);

/// Message id, repeat indicator and source MMSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Header {
    pub message_id: u8,
    /// Times the message was repeated by a relay (3 = do not repeat).
    pub repeat_indicator: u8,
    pub mmsi: u32,
}

impl Header {
    /// Decode the header without de-armoring more than its first 7 characters.
    ///
    /// The length check still covers the whole payload: `6 × chars − pad`
    /// must reach 38 bits.
    pub fn from_payload(payload: &str, pad_bits: usize) -> Result<Self, DecodeError> {
        let num_bits = (payload.chars().count() * 6).saturating_sub(pad_bits);
        if pad_bits > 5 || num_bits < HEADER_BITS {
            return Err(DecodeError::BadBitCount { bits: num_bits });
        }

        let head_end = payload
            .char_indices()
            .nth(HEADER_CHARS)
            .map_or(payload.len(), |(index, _)| index);
        let bits = BitBuffer::from_armor(&payload[..head_end])?;
        Self::from_bits(&bits)
    }

    /// Read the header fields from an already de-armored buffer.
    pub fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        if bits.len() < HEADER_BITS {
            return Err(DecodeError::BadBitCount { bits: bits.len() });
        }
        Ok(Self {
            message_id: bits.unsigned(0, 6) as u8,
            repeat_indicator: bits.unsigned(6, 2) as u8,
            mmsi: bits.unsigned(8, 30) as u32,
        })
    }
}
