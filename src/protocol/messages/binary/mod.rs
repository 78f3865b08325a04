//! Binary messages: acknowledgements (7, 13), addressed (6) and broadcast (8)
//! application data, and the single/multi-slot binary messages (25, 26).
//!
//! Messages 6 and 8 carry a `(DAC, FI)` application identifier selecting one
//! of the sub-layouts in [`addressed`] and [`broadcast`]; content from an
//! unknown application is kept as raw bytes.
use crate::core::{
    BitLength, ADDRESSED_BINARY_HEADER_BITS, BROADCAST_BINARY_HEADER_BITS, HEADER_BITS,
};
use crate::error::{BitReaderError, DecodeError};
use crate::infra::codec::armor::BitBuffer;
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::traits::FromPayload;
use crate::protocol::messages::comm_state::{CommState, COMM_STATE_BITS};
use crate::protocol::messages::header::Header;
use alloc::vec::Vec;

pub mod addressed;
pub mod area_notice;
pub mod broadcast;
pub mod inland;
pub mod sensor_report;
pub mod weather;

/// Designated area code and function identifier of binary application data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ApplicationId {
    pub dac: u16,
    pub fi: u8,
}

impl ApplicationId {
    fn read(reader: &mut BitReader) -> Result<Self, DecodeError> {
        Ok(Self {
            dac: reader.read_u16(10)?,
            fi: reader.read_u8(6)?,
        })
    }
}

/// Reader on the first application bit of message 6.
fn addressed_data(bits: &BitBuffer) -> BitReader<'_> {
    BitReader::at(bits, ADDRESSED_BINARY_HEADER_BITS)
}

/// Reader on the first application bit of message 8.
fn broadcast_data(bits: &BitBuffer) -> BitReader<'_> {
    BitReader::at(bits, BROADCAST_BINARY_HEADER_BITS)
}

/// Application data nobody here decodes, kept as MSB-first bytes.
fn unparsed_data(mut reader: BitReader) -> Result<Vec<u8>, DecodeError> {
    let num_bits = reader.remaining();
    Ok(reader.read_bytes(num_bits)?)
}

/// Unsigned field scaled as `raw / divisor + offset`, `None` on `not_available`.
fn read_scaled(
    reader: &mut BitReader,
    num_bits: u8,
    not_available: u16,
    divisor: f64,
    offset: f64,
) -> Result<Option<f64>, BitReaderError> {
    Ok(reader
        .read_opt_u16(num_bits, not_available)?
        .map(|raw| raw as f64 / divisor + offset))
}

/// Signed field scaled as `raw / divisor`, `None` on `not_available`.
fn read_signed_scaled(
    reader: &mut BitReader,
    num_bits: u8,
    not_available: i32,
    divisor: f64,
) -> Result<Option<f64>, BitReaderError> {
    Ok(reader
        .read_opt_i32(num_bits, not_available)?
        .map(|raw| raw as f64 / divisor))
}

//==================================================================================ACKNOWLEDGE
/// Messages 7 (binary) and 13 (safety): acknowledgement of up to four messages.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BinaryAcknowledge {
    pub header: Header,
    pub spare: u8,
    pub acknowledgements: Vec<Acknowledgement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Acknowledgement {
    pub mmsi: u32,
    pub sequence_number: u8,
}

impl FromPayload for BinaryAcknowledge {
    const BIT_LENGTH: BitLength = BitLength::Repeated {
        header: 40,
        record: 32,
        min_records: 1,
        max_records: 4,
    };
    const MESSAGE_IDS: &'static [u8] = &[7, 13];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        let header = Header::from_bits(bits)?;
        let spare = reader.read_u8(2)?;
        let acknowledgements = (0..Self::BIT_LENGTH.record_count(bits.len()))
            .map(|_| -> Result<Acknowledgement, DecodeError> {
                Ok(Acknowledgement {
                    mmsi: reader.read_u32(30)?,
                    sequence_number: reader.read_u8(2)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            header,
            spare,
            acknowledgements,
        })
    }
}

//==================================================================================SLOT_BINARY
/// Optional addressing and application id shared by messages 25 and 26.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BinaryPayload {
    pub destination_mmsi: Option<u32>,
    /// Present when the binary data flag marks structured content.
    pub application_id: Option<ApplicationId>,
    /// Raw data, packed MSB first; the last byte is zero filled.
    pub data: Vec<u8>,
    /// Number of meaningful bits in `data`.
    pub data_bits: usize,
}

impl BinaryPayload {
    /// Read the flags, the optional fields, then `end - cursor` data bits.
    fn read(reader: &mut BitReader, end: usize) -> Result<Self, DecodeError> {
        let addressed = reader.read_bool()?;
        let structured = reader.read_bool()?;
        let destination_mmsi = if addressed {
            Some(reader.read_u32(30)?)
        } else {
            None
        };
        let application_id = if structured {
            Some(ApplicationId::read(reader)?)
        } else {
            None
        };
        let data_bits = end.checked_sub(reader.bit_cursor()).ok_or(
            DecodeError::BadBitCount {
                bits: reader.bit_cursor() + reader.remaining(),
            },
        )?;
        Ok(Self {
            destination_mmsi,
            application_id,
            data: reader.read_bytes(data_bits)?,
            data_bits,
        })
    }
}

/// Message 25: single-slot binary message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SingleSlotBinary {
    pub header: Header,
    pub payload: BinaryPayload,
}

impl FromPayload for SingleSlotBinary {
    const BIT_LENGTH: BitLength = BitLength::Range { min: 40, max: 168 };
    const MESSAGE_IDS: &'static [u8] = &[25];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        Ok(Self {
            header: Header::from_bits(bits)?,
            payload: BinaryPayload::read(&mut reader, bits.len())?,
        })
    }
}

/// Message 26: multi-slot binary message followed by a communication state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MultiSlotBinary {
    pub header: Header,
    pub payload: BinaryPayload,
    pub comm_state: CommState,
}

impl FromPayload for MultiSlotBinary {
    const BIT_LENGTH: BitLength = BitLength::Range { min: 60, max: 1064 };
    const MESSAGE_IDS: &'static [u8] = &[26];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        // Selector bit and state occupy the last 20 bits.
        let data_end = bits.len() - COMM_STATE_BITS - 1;
        let header = Header::from_bits(bits)?;
        let payload = BinaryPayload::read(&mut reader, data_end)?;
        let itdma = reader.read_bool()?;
        Ok(Self {
            header,
            payload,
            comm_state: CommState::read(&mut reader, itdma)?,
        })
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
