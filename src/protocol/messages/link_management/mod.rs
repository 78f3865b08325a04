//! VDL link management: interrogation (15), assigned mode (16), DGNSS
//! broadcast (17), data link reservation (20), channel management (22) and
//! group assignment (23).
//!
//! Several of these layouts end with optional blocks; a block is decoded only
//! when the payload is long enough to hold it, otherwise it is `None`.
use crate::core::{BitLength, Position, HEADER_BITS, TENTH_MINUTE};
use crate::error::DecodeError;
use crate::infra::codec::armor::BitBuffer;
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::traits::FromPayload;
use crate::protocol::messages::header::Header;
use alloc::vec::Vec;

//==================================================================================INTERROGATION
/// Message 15: request for specific messages from up to two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interrogation {
    pub header: Header,
    pub spare: u8,
    pub mmsi_1: u32,
    pub request_1_1: InterrogationRequest,
    /// Second message requested from the first station.
    pub request_1_2: Option<InterrogationRequest>,
    pub station_2: Option<StationInterrogation>,
}

/// Requested message id and the slot offset for the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InterrogationRequest {
    pub message_id: u8,
    pub slot_offset: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StationInterrogation {
    pub mmsi: u32,
    pub request: InterrogationRequest,
}

impl InterrogationRequest {
    fn read(reader: &mut BitReader) -> Result<Self, DecodeError> {
        Ok(Self {
            message_id: reader.read_u8(6)?,
            slot_offset: reader.read_u16(12)?,
        })
    }
}

impl FromPayload for Interrogation {
    const BIT_LENGTH: BitLength = BitLength::Range { min: 88, max: 162 };
    const MESSAGE_IDS: &'static [u8] = &[15];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        let header = Header::from_bits(bits)?;
        let spare = reader.read_u8(2)?;
        let mmsi_1 = reader.read_u32(30)?;
        let request_1_1 = InterrogationRequest::read(&mut reader)?;

        let request_1_2 = if bits.len() >= 110 {
            reader.advance(2)?;
            let request = InterrogationRequest::read(&mut reader)?;
            reader.advance(2)?;
            Some(request)
        } else {
            None
        };
        let station_2 = if bits.len() >= 158 {
            Some(StationInterrogation {
                mmsi: reader.read_u32(30)?,
                request: InterrogationRequest::read(&mut reader)?,
            })
        } else {
            None
        };

        Ok(Self {
            header,
            spare,
            mmsi_1,
            request_1_1,
            request_1_2,
            station_2,
        })
    }
}

//==================================================================================ASSIGNED_MODE
/// Message 16: assignment of reporting slots by a base station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AssignedModeCommand {
    pub header: Header,
    pub spare: u8,
    pub station_a: SlotAssignment,
    pub station_b: Option<SlotAssignment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlotAssignment {
    pub mmsi: u32,
    pub offset: u16,
    pub increment: u16,
}

impl SlotAssignment {
    fn read(reader: &mut BitReader) -> Result<Self, DecodeError> {
        Ok(Self {
            mmsi: reader.read_u32(30)?,
            offset: reader.read_u16(12)?,
            increment: reader.read_u16(10)?,
        })
    }
}

impl FromPayload for AssignedModeCommand {
    const BIT_LENGTH: BitLength = BitLength::OneOf(&[96, 144]);
    const MESSAGE_IDS: &'static [u8] = &[16];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        Ok(Self {
            header: Header::from_bits(bits)?,
            spare: reader.read_u8(2)?,
            station_a: SlotAssignment::read(&mut reader)?,
            station_b: match bits.len() {
                144 => Some(SlotAssignment::read(&mut reader)?),
                _ => None,
            },
        })
    }
}

//==================================================================================GNSS_BROADCAST
/// Message 17: DGNSS corrections broadcast by a base station.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GnssBroadcast {
    pub header: Header,
    pub spare: u8,
    /// Reference station position, 1/10 minute resolution.
    pub position: Position,
    pub spare2: u8,
    pub correction: Option<DgnssCorrection>,
}

/// RTCM SC-104 message header and its 24-bit data words.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DgnssCorrection {
    pub message_type: u8,
    pub station_id: u16,
    pub z_count: u16,
    pub sequence_number: u8,
    /// Data word count announced by the header.
    pub word_count: u8,
    pub health: u8,
    /// Words actually present in the payload.
    pub data: Vec<u32>,
}

/// DGNSS header end: 80 bits of position block + 40 bits of RTCM header.
const DGNSS_DATA_START: usize = 120;
const DGNSS_WORD_BITS: usize = 24;

impl FromPayload for GnssBroadcast {
    const BIT_LENGTH: BitLength = BitLength::Range { min: 80, max: 816 };
    const MESSAGE_IDS: &'static [u8] = &[17];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        let header = Header::from_bits(bits)?;
        let spare = reader.read_u8(2)?;
        let position = reader.read_position(18, 17, TENTH_MINUTE)?;
        let spare2 = reader.read_u8(5)?;

        let correction = if bits.len() >= DGNSS_DATA_START {
            let message_type = reader.read_u8(6)?;
            let station_id = reader.read_u16(10)?;
            let z_count = reader.read_u16(13)?;
            let sequence_number = reader.read_u8(3)?;
            let word_count = reader.read_u8(5)?;
            let health = reader.read_u8(3)?;
            let available = reader.remaining() / DGNSS_WORD_BITS;
            let data = (0..available.min(word_count as usize))
                .map(|_| reader.read_u32(DGNSS_WORD_BITS as u8))
                .collect::<Result<Vec<_>, _>>()?;
            Some(DgnssCorrection {
                message_type,
                station_id,
                z_count,
                sequence_number,
                word_count,
                health,
                data,
            })
        } else {
            None
        };

        Ok(Self {
            header,
            spare,
            position,
            spare2,
            correction,
        })
    }
}

//==================================================================================DATA_LINK
/// Message 20: slot reservations for base stations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DataLinkManagement {
    pub header: Header,
    pub spare: u8,
    /// One to four reservation blocks.
    pub reservations: Vec<SlotReservation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlotReservation {
    pub offset: u16,
    pub slots: u8,
    /// Minutes.
    pub timeout: u8,
    pub increment: u16,
}

const RESERVATION_START: usize = 40;
const RESERVATION_BITS: usize = 30;
const MAX_RESERVATIONS: usize = 4;

impl FromPayload for DataLinkManagement {
    const BIT_LENGTH: BitLength = BitLength::Range { min: 72, max: 162 };
    const MESSAGE_IDS: &'static [u8] = &[20];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        let header = Header::from_bits(bits)?;
        let spare = reader.read_u8(2)?;

        let count = ((bits.len() - RESERVATION_START) / RESERVATION_BITS).min(MAX_RESERVATIONS);
        let mut reservations = Vec::with_capacity(count);
        for _ in 0..count {
            reservations.push(SlotReservation {
                offset: reader.read_u16(12)?,
                slots: reader.read_u8(4)?,
                timeout: reader.read_u8(3)?,
                increment: reader.read_u16(11)?,
            });
        }

        Ok(Self {
            header,
            spare,
            reservations,
        })
    }
}

//==================================================================================CHANNEL_MANAGEMENT
/// Message 22: channel and transceiver settings for a region or two stations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChannelManagement {
    pub header: Header,
    pub spare: u8,
    pub channel_a: u16,
    pub channel_b: u16,
    pub txrx_mode: u8,
    pub low_power: bool,
    pub area: ChannelArea,
    /// `true` for 12.5 kHz bandwidth on channel A.
    pub bandwidth_a: bool,
    pub bandwidth_b: bool,
    /// Transitional zone size in nautical miles minus one.
    pub zone_size: u8,
    pub spare2: u32,
}

/// Target of a channel management command, selected by the addressed flag.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ChannelArea {
    /// North-east and south-west corners, 1/10 minute resolution.
    Region {
        north_east: Position,
        south_west: Position,
    },
    Addressed { mmsi_1: u32, mmsi_2: u32 },
}

/// Position of the addressed flag inside message 22.
const ADDRESSED_FLAG_BIT: usize = 139;

impl FromPayload for ChannelManagement {
    const BIT_LENGTH: BitLength = BitLength::Exact(168);
    const MESSAGE_IDS: &'static [u8] = &[22];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        let header = Header::from_bits(bits)?;
        let spare = reader.read_u8(2)?;
        let channel_a = reader.read_u16(12)?;
        let channel_b = reader.read_u16(12)?;
        let txrx_mode = reader.read_u8(4)?;
        let low_power = reader.read_bool()?;

        let area = if bits.bit(ADDRESSED_FLAG_BIT) {
            let mmsi_1 = reader.read_u32(30)?;
            reader.advance(5)?;
            let mmsi_2 = reader.read_u32(30)?;
            reader.advance(5)?;
            ChannelArea::Addressed { mmsi_1, mmsi_2 }
        } else {
            ChannelArea::Region {
                north_east: reader.read_position(18, 17, TENTH_MINUTE)?,
                south_west: reader.read_position(18, 17, TENTH_MINUTE)?,
            }
        };
        // Addressed flag, already consumed above.
        reader.advance(1)?;

        Ok(Self {
            header,
            spare,
            channel_a,
            channel_b,
            txrx_mode,
            low_power,
            area,
            bandwidth_a: reader.read_bool()?,
            bandwidth_b: reader.read_bool()?,
            zone_size: reader.read_u8(3)?,
            spare2: reader.read_u32(23)?,
        })
    }
}

//==================================================================================GROUP_ASSIGNMENT
/// Message 23: reporting parameters for every station in a region.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GroupAssignment {
    pub header: Header,
    pub spare: u8,
    pub north_east: Position,
    pub south_west: Position,
    pub station_type: u8,
    pub ship_type: u8,
    pub spare2: u32,
    pub txrx_mode: u8,
    /// Reporting interval code (see ITU-R M.1371 table 77).
    pub report_interval: u8,
    /// Minutes.
    pub quiet_time: u8,
    pub spare3: u8,
}

impl FromPayload for GroupAssignment {
    const BIT_LENGTH: BitLength = BitLength::Exact(160);
    const MESSAGE_IDS: &'static [u8] = &[23];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        Ok(Self {
            header: Header::from_bits(bits)?,
            spare: reader.read_u8(2)?,
            north_east: reader.read_position(18, 17, TENTH_MINUTE)?,
            south_west: reader.read_position(18, 17, TENTH_MINUTE)?,
            station_type: reader.read_u8(4)?,
            ship_type: reader.read_u8(8)?,
            spare2: reader.read_u32(22)?,
            txrx_mode: reader.read_u8(2)?,
            report_interval: reader.read_u8(4)?,
            quiet_time: reader.read_u8(4)?,
            spare3: reader.read_u8(6)?,
        })
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
