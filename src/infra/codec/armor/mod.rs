//! 6-bit ASCII armoring used by AIVDM/AIVDO payloads.
//!
//! Every payload character carries six bits (`'0'..='W'` → 0–39,
//! `` '`'..='w' `` → 40–63). The de-armored bits land MSB-first in a
//! fixed-capacity [`BitBuffer`]. Text fields use a second table mapping 6-bit
//! values back to printable characters (0–31 → `'@'..='_'`, 32–63 → `' '..='?'`).
//!
//! Both tables are computed at compile time, so they are ready before the first
//! decode and never written afterwards.
use crate::core::{MAX_PAYLOAD_BITS, MAX_PAYLOAD_BYTES, MAX_PAYLOAD_CHARS};
use crate::error::DecodeError;
use alloc::string::String;

//==================================================================================LOOKUP_TABLES
/// Marker for characters outside the armoring alphabet.
const INVALID: u8 = 0xFF;

/// Armor character (ASCII code) → 6-bit value.
static ARMOR_TO_SIXBIT: [u8; 128] = build_armor_table();

/// 6-bit value → text character.
static SIXBIT_TO_ASCII: [u8; 64] = build_text_table();

const fn build_armor_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut code = 0;
    while code < 128 {
        if code >= b'0' as usize && code <= b'W' as usize {
            table[code] = (code - b'0' as usize) as u8;
        } else if code >= b'`' as usize && code <= b'w' as usize {
            table[code] = (code - b'`' as usize + 40) as u8;
        }
        code += 1;
    }
    table
}

const fn build_text_table() -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut value = 0;
    while value < 64 {
        table[value] = if value < 32 {
            value as u8 + b'@'
        } else {
            value as u8
        };
        value += 1;
    }
    table
}

/// Map one armor character to its 6-bit value.
#[inline]
pub fn sixbit_value(character: char) -> Option<u8> {
    let code = character as u32;
    if code >= 128 {
        return None;
    }
    match ARMOR_TO_SIXBIT[code as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Map a 6-bit value to its text character (`'@'` is the padding character).
#[inline]
pub fn sixbit_char(value: u8) -> char {
    SIXBIT_TO_ASCII[(value & 0x3F) as usize] as char
}

//==================================================================================BIT_BUFFER
/// Flat, owned bit sequence produced by de-armoring one payload.
///
/// Capacity is fixed; bits past `len()` are zero. Bit `i` is bit `5 - i % 6`
/// of the 6-bit value of character `i / 6`.
#[derive(Clone, PartialEq, Eq)]
pub struct BitBuffer {
    data: [u8; MAX_PAYLOAD_BYTES],
    len: usize,
}

impl core::fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BitBuffer")
            .field("len", &self.len)
            .field("data", &&self.data[..self.len.div_ceil(8)])
            .finish()
    }
}

impl BitBuffer {
    /// De-armor `payload` into a buffer of `6 × payload.len()` bits.
    pub fn from_armor(payload: &str) -> Result<Self, DecodeError> {
        let num_chars = payload.chars().count();
        if num_chars > MAX_PAYLOAD_CHARS {
            return Err(DecodeError::BadBitCount {
                bits: num_chars * 6,
            });
        }

        let mut buffer = Self {
            data: [0; MAX_PAYLOAD_BYTES],
            len: 0,
        };
        for character in payload.chars() {
            let value = sixbit_value(character).ok_or(DecodeError::BadCharacter { character })?;
            buffer.push_sixbit(value);
        }
        Ok(buffer)
    }

    /// De-armor `payload` and drop the `pad_bits` fill bits of the last character.
    pub fn from_payload(payload: &str, pad_bits: usize) -> Result<Self, DecodeError> {
        let mut buffer = Self::from_armor(payload)?;
        if pad_bits > 5 || pad_bits > buffer.len {
            return Err(DecodeError::BadBitCount {
                bits: buffer.len.saturating_sub(pad_bits),
            });
        }
        buffer.truncate(buffer.len - pad_bits);
        Ok(buffer)
    }

    /// Append the six low bits of `value`, MSB first.
    fn push_sixbit(&mut self, value: u8) {
        for shift in (0..6).rev() {
            let index = self.len;
            if (value >> shift) & 1 == 1 {
                self.data[index / 8] |= 0x80 >> (index % 8);
            }
            self.len += 1;
        }
    }

    /// Shorten the buffer to `num_bits` valid bits, clearing the rest.
    pub fn truncate(&mut self, num_bits: usize) {
        if num_bits >= self.len {
            return;
        }
        for index in num_bits..self.len {
            self.data[index / 8] &= !(0x80 >> (index % 8));
        }
        self.len = num_bits;
    }

    /// Number of valid payload bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the buffer holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bit at `index` (zero past the valid length).
    ///
    /// `index` must stay below [`MAX_PAYLOAD_BITS`].
    #[inline]
    pub fn bit(&self, index: usize) -> bool {
        debug_assert!(index < MAX_PAYLOAD_BITS);
        (self.data[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    /// Unsigned field of `width` (≤ 64) bits starting at `start`, MSB first.
    ///
    /// Callers validate the payload length beforehand; `start + width` must
    /// stay within [`MAX_PAYLOAD_BITS`].
    pub fn unsigned(&self, start: usize, width: usize) -> u64 {
        debug_assert!(width <= 64);
        (start..start + width).fold(0u64, |acc, index| (acc << 1) | self.bit(index) as u64)
    }

    /// Two's-complement field of `width` (≤ 64) bits starting at `start`.
    pub fn signed(&self, start: usize, width: usize) -> i64 {
        if width == 0 {
            return 0;
        }
        let shift = 64 - width as u32;
        ((self.unsigned(start, width) << shift) as i64) >> shift
    }

    /// 6-bit text field; trailing `'@'` padding is removed.
    pub fn text(&self, start: usize, width: usize) -> String {
        debug_assert!(width % 6 == 0);
        let mut text: String = (0..width / 6)
            .map(|index| sixbit_char(self.unsigned(start + index * 6, 6) as u8))
            .collect();
        let trimmed = text.trim_end_matches('@').len();
        text.truncate(trimmed);
        text
    }
}

//==================================================================================PRIMITIVES
/// De-armor a payload string into its bit sequence.
pub fn armor_to_bits(payload: &str) -> Result<BitBuffer, DecodeError> {
    BitBuffer::from_armor(payload)
}

/// Unsigned field read, see [`BitBuffer::unsigned`].
pub fn unsigned_bits(buffer: &BitBuffer, start: usize, width: usize) -> u64 {
    buffer.unsigned(start, width)
}

/// Sign-extended field read, see [`BitBuffer::signed`].
pub fn signed_bits(buffer: &BitBuffer, start: usize, width: usize) -> i64 {
    buffer.signed(start, width)
}

/// Text field read, see [`BitBuffer::text`].
pub fn ais_string(buffer: &BitBuffer, start: usize, width: usize) -> String {
    buffer.text(start, width)
}
