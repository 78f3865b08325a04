//! SOTDMA / ITDMA communication state trailing the self-reported messages.
//!
//! Both variants are 19 bits: a 2-bit sync state followed by access-scheme
//! specific fields.
use crate::error::BitReaderError;
use crate::infra::codec::bits::BitReader;

/// Width of either communication state.
pub const COMM_STATE_BITS: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CommState {
    Sotdma(Sotdma),
    Itdma(Itdma),
}

impl CommState {
    /// Read the state selected by a message's communication-state flag
    /// (`false` = SOTDMA, `true` = ITDMA).
    pub fn read(reader: &mut BitReader, itdma: bool) -> Result<Self, BitReaderError> {
        if itdma {
            Itdma::read(reader).map(Self::Itdma)
        } else {
            Sotdma::read(reader).map(Self::Sotdma)
        }
    }

    pub fn sync_state(&self) -> u8 {
        match self {
            CommState::Sotdma(state) => state.sync_state,
            CommState::Itdma(state) => state.sync_state,
        }
    }
}

//==================================================================================SOTDMA
/// Self-organised TDMA state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sotdma {
    pub sync_state: u8,
    /// Frames left before the slot changes (0–7).
    pub slot_timeout: u8,
    pub submessage: SotdmaSubmessage,
}

/// 14-bit submessage; its meaning depends on the slot timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SotdmaSubmessage {
    /// Timeout 0: offset to the next slot.
    SlotOffset(u16),
    /// Timeout 1: UTC hour and minute of the transmitting station.
    UtcTime { hour: u8, minute: u8 },
    /// Timeout 2, 4 or 6: slot number used for this transmission.
    SlotNumber(u16),
    /// Timeout 3, 5 or 7: stations received by the transmitter.
    ReceivedStations(u16),
}

impl Sotdma {
    pub fn read(reader: &mut BitReader) -> Result<Self, BitReaderError> {
        let sync_state = reader.read_u8(2)?;
        let slot_timeout = reader.read_u8(3)?;
        let submessage = match slot_timeout {
            0 => SotdmaSubmessage::SlotOffset(reader.read_u16(14)?),
            1 => {
                let hour = reader.read_u8(5)?;
                let minute = reader.read_u8(7)?;
                reader.advance(2)?;
                SotdmaSubmessage::UtcTime { hour, minute }
            }
            2 | 4 | 6 => SotdmaSubmessage::SlotNumber(reader.read_u16(14)?),
            _ => SotdmaSubmessage::ReceivedStations(reader.read_u16(14)?),
        };
        Ok(Self {
            sync_state,
            slot_timeout,
            submessage,
        })
    }
}

//==================================================================================ITDMA
/// Incremental TDMA state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Itdma {
    pub sync_state: u8,
    pub slot_increment: u16,
    pub slots_to_allocate: u8,
    pub keep_flag: bool,
}

impl Itdma {
    pub fn read(reader: &mut BitReader) -> Result<Self, BitReaderError> {
        Ok(Self {
            sync_state: reader.read_u8(2)?,
            slot_increment: reader.read_u16(13)?,
            slots_to_allocate: reader.read_u8(3)?,
            keep_flag: reader.read_bool()?,
        })
    }
}
