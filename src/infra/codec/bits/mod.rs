//! Cursor-based reader over a de-armored AIS payload.
//! Fields are read MSB-first and in layout order; every read is bounded by the
//! number of valid payload bits, so a decoder can never pick up pad or zero-fill
//! bits as data.
use crate::core::{Position, UtcTime};
use crate::error::BitReaderError;
use crate::infra::codec::armor::BitBuffer;
use alloc::string::String;
use alloc::vec::Vec;

/// Sequential reader extracting fields from a [`BitBuffer`].
pub struct BitReader<'a> {
    /// Shared source buffer.
    buffer: &'a BitBuffer,
    /// Current index expressed as number of bits read from the beginning.
    bit_cursor: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at the start of the buffer.
    pub fn new(buffer: &'a BitBuffer) -> Self {
        Self {
            buffer,
            bit_cursor: 0,
        }
    }

    /// Create a reader positioned at `bit_cursor`.
    pub fn at(buffer: &'a BitBuffer, bit_cursor: usize) -> Self {
        Self { buffer, bit_cursor }
    }

    /// Current position in bits.
    pub fn bit_cursor(&self) -> usize {
        self.bit_cursor
    }

    /// Valid bits left after the cursor.
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.bit_cursor)
    }

    fn ensure(&self, num_bits: usize) -> Result<(), BitReaderError> {
        if self.bit_cursor + num_bits > self.buffer.len() {
            return Err(BitReaderError::OutOfBounds {
                asked: num_bits,
                available: self.remaining(),
                len: self.buffer.len(),
            });
        }
        Ok(())
    }

    /// Read `num_bits` bits starting at the current cursor and return a `u64`.
    /// `num_bits` must stay in the [1, 64] range.
    pub fn read_u64(&mut self, num_bits: u8) -> Result<u64, BitReaderError> {
        if !(1..=64).contains(&num_bits) {
            return Err(BitReaderError::TooLongForType {
                max: 64,
                asked: num_bits,
            });
        }
        self.ensure(num_bits as usize)?;

        let value = self.buffer.unsigned(self.bit_cursor, num_bits as usize);
        self.bit_cursor += num_bits as usize;
        Ok(value)
    }

    /// Read up to 8 bits and return a `u8`.
    pub fn read_u8(&mut self, num_bits: u8) -> Result<u8, BitReaderError> {
        if num_bits > 8 {
            return Err(BitReaderError::TooLongForType {
                max: 8,
                asked: num_bits,
            });
        }
        self.read_u64(num_bits).map(|val| val as u8)
    }

    /// Read up to 16 bits and return a `u16`.
    pub fn read_u16(&mut self, num_bits: u8) -> Result<u16, BitReaderError> {
        if num_bits > 16 {
            return Err(BitReaderError::TooLongForType {
                max: 16,
                asked: num_bits,
            });
        }
        self.read_u64(num_bits).map(|val| val as u16)
    }

    /// Read up to 32 bits and return a `u32`.
    pub fn read_u32(&mut self, num_bits: u8) -> Result<u32, BitReaderError> {
        if num_bits > 32 {
            return Err(BitReaderError::TooLongForType {
                max: 32,
                asked: num_bits,
            });
        }
        self.read_u64(num_bits).map(|val| val as u32)
    }

    /// Read a two's-complement field of up to 64 bits.
    pub fn read_i64(&mut self, num_bits: u8) -> Result<i64, BitReaderError> {
        let raw = self.read_u64(num_bits)?;
        let shift = 64 - num_bits as u32;
        Ok(((raw << shift) as i64) >> shift)
    }

    /// Read a two's-complement field of up to 32 bits.
    pub fn read_i32(&mut self, num_bits: u8) -> Result<i32, BitReaderError> {
        if num_bits > 32 {
            return Err(BitReaderError::TooLongForType {
                max: 32,
                asked: num_bits,
            });
        }
        self.read_i64(num_bits).map(|val| val as i32)
    }

    /// Read a single flag bit.
    pub fn read_bool(&mut self) -> Result<bool, BitReaderError> {
        self.read_u64(1).map(|val| val == 1)
    }

    /// Read a 6-bit text field of `num_bits` bits (trailing `'@'` removed).
    pub fn read_text(&mut self, num_bits: usize) -> Result<String, BitReaderError> {
        if num_bits % 6 != 0 {
            return Err(BitReaderError::NonCharacterAligned { bits: num_bits });
        }
        self.ensure(num_bits)?;
        let text = self.buffer.text(self.bit_cursor, num_bits);
        self.bit_cursor += num_bits;
        Ok(text)
    }

    /// Read every remaining whole character as text, leaving the cursor on the
    /// first bit that does not complete a character.
    pub fn read_text_to_end(&mut self) -> Result<String, BitReaderError> {
        let num_bits = (self.remaining() / 6) * 6;
        self.read_text(num_bits)
    }

    /// Read `num_bits` raw bits packed MSB-first into bytes; the last byte is
    /// left-aligned and zero filled.
    pub fn read_bytes(&mut self, num_bits: usize) -> Result<Vec<u8>, BitReaderError> {
        self.ensure(num_bits)?;
        let mut bytes = Vec::with_capacity(num_bits.div_ceil(8));
        let mut bits_read = 0;
        while bits_read < num_bits {
            let chunk = (num_bits - bits_read).min(8);
            let value = self.buffer.unsigned(self.bit_cursor + bits_read, chunk) as u8;
            bytes.push(value << (8 - chunk));
            bits_read += chunk;
        }
        self.bit_cursor += num_bits;
        Ok(bytes)
    }

    /// Advance the cursor by `length` bits without reading data (spare fields).
    pub fn advance(&mut self, length: usize) -> Result<(), BitReaderError> {
        self.ensure(length)?;
        self.bit_cursor += length;
        Ok(())
    }

    /// Move the cursor to an absolute bit position.
    pub fn seek(&mut self, bit_cursor: usize) -> Result<(), BitReaderError> {
        if bit_cursor > self.buffer.len() {
            return Err(BitReaderError::OutOfBounds {
                asked: bit_cursor,
                available: self.buffer.len(),
                len: self.buffer.len(),
            });
        }
        self.bit_cursor = bit_cursor;
        Ok(())
    }

    //==================================================================================SENTINELS
    // "Not available" codes become `None` right here; they never reach a record.

    /// Unsigned field whose `not_available` code maps to `None`.
    pub fn read_opt_u8(
        &mut self,
        num_bits: u8,
        not_available: u8,
    ) -> Result<Option<u8>, BitReaderError> {
        self.read_u8(num_bits)
            .map(|val| (val != not_available).then_some(val))
    }

    /// Unsigned field whose `not_available` code maps to `None`.
    pub fn read_opt_u16(
        &mut self,
        num_bits: u8,
        not_available: u16,
    ) -> Result<Option<u16>, BitReaderError> {
        self.read_u16(num_bits)
            .map(|val| (val != not_available).then_some(val))
    }

    /// Unsigned field whose `not_available` code maps to `None`.
    pub fn read_opt_u32(
        &mut self,
        num_bits: u8,
        not_available: u32,
    ) -> Result<Option<u32>, BitReaderError> {
        self.read_u32(num_bits)
            .map(|val| (val != not_available).then_some(val))
    }

    /// Unsigned field valid only below `limit` (e.g. bearings 0–359 in a 9-bit field).
    pub fn read_u16_below(
        &mut self,
        num_bits: u8,
        limit: u16,
    ) -> Result<Option<u16>, BitReaderError> {
        self.read_u16(num_bits).map(|val| (val < limit).then_some(val))
    }

    /// Signed field whose `not_available` code maps to `None`.
    pub fn read_opt_i32(
        &mut self,
        num_bits: u8,
        not_available: i32,
    ) -> Result<Option<i32>, BitReaderError> {
        self.read_i32(num_bits)
            .map(|val| (val != not_available).then_some(val))
    }

    /// Signed longitude scaled by `divisor`; values beyond ±180° are "not available".
    pub fn read_longitude(
        &mut self,
        num_bits: u8,
        divisor: f64,
    ) -> Result<Option<f64>, BitReaderError> {
        let degrees = self.read_i64(num_bits)? as f64 / divisor;
        Ok((-180.0..=180.0).contains(&degrees).then_some(degrees))
    }

    /// Signed latitude scaled by `divisor`; values beyond ±90° are "not available".
    pub fn read_latitude(
        &mut self,
        num_bits: u8,
        divisor: f64,
    ) -> Result<Option<f64>, BitReaderError> {
        let degrees = self.read_i64(num_bits)? as f64 / divisor;
        Ok((-90.0..=90.0).contains(&degrees).then_some(degrees))
    }

    /// Longitude then latitude, the usual AIS ordering.
    pub fn read_position(
        &mut self,
        lon_bits: u8,
        lat_bits: u8,
        divisor: f64,
    ) -> Result<Position, BitReaderError> {
        let longitude = self.read_longitude(lon_bits, divisor)?;
        let latitude = self.read_latitude(lat_bits, divisor)?;
        Ok(Position {
            longitude,
            latitude,
        })
    }

    /// Latitude then longitude (a few application messages swap the axes).
    pub fn read_position_lat_first(
        &mut self,
        lat_bits: u8,
        lon_bits: u8,
        divisor: f64,
    ) -> Result<Position, BitReaderError> {
        let latitude = self.read_latitude(lat_bits, divisor)?;
        let longitude = self.read_longitude(lon_bits, divisor)?;
        Ok(Position {
            longitude,
            latitude,
        })
    }

    /// Day (5) / hour (5) / minute (6) stamp.
    pub fn read_day_hour_minute(&mut self) -> Result<UtcTime, BitReaderError> {
        Ok(UtcTime {
            month: None,
            day: self.read_opt_u8(5, 0)?,
            hour: self.read_opt_u8(5, 24)?,
            minute: self.read_opt_u8(6, 60)?,
        })
    }

    /// Month (4) / day (5) / hour (5) / minute (6) stamp.
    pub fn read_month_day_hour_minute(&mut self) -> Result<UtcTime, BitReaderError> {
        let month = self.read_opt_u8(4, 0)?;
        let rest = self.read_day_hour_minute()?;
        Ok(UtcTime { month, ..rest })
    }
}
