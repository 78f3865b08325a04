//! Base station report / UTC date response (4, 11) and UTC date inquiry (10).
use crate::core::{BitLength, Position, HEADER_BITS, TEN_THOUSANDTH_MINUTE};
use crate::error::DecodeError;
use crate::infra::codec::armor::BitBuffer;
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::traits::FromPayload;
use crate::protocol::messages::comm_state::Sotdma;
use crate::protocol::messages::header::Header;

//==================================================================================BASE_STATION
/// Messages 4 and 11: UTC time and position of a fixed station.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BaseStationReport {
    pub header: Header,
    pub year: Option<u16>,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<u8>,
    pub position_accuracy: bool,
    pub position: Position,
    /// Type of electronic position fixing device.
    pub fix_type: u8,
    /// Long-range transmission control (message 27).
    pub transmission_control: bool,
    pub spare: u16,
    pub raim: bool,
    pub comm_state: Sotdma,
}

impl FromPayload for BaseStationReport {
    const BIT_LENGTH: BitLength = BitLength::Exact(168);
    const MESSAGE_IDS: &'static [u8] = &[4, 11];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        Ok(Self {
            header: Header::from_bits(bits)?,
            year: reader.read_opt_u16(14, 0)?,
            month: reader.read_opt_u8(4, 0)?,
            day: reader.read_opt_u8(5, 0)?,
            hour: reader.read_opt_u8(5, 24)?,
            minute: reader.read_opt_u8(6, 60)?,
            second: reader.read_opt_u8(6, 60)?,
            position_accuracy: reader.read_bool()?,
            position: reader.read_position(28, 27, TEN_THOUSANDTH_MINUTE)?,
            fix_type: reader.read_u8(4)?,
            transmission_control: reader.read_bool()?,
            spare: reader.read_u16(9)?,
            raim: reader.read_bool()?,
            comm_state: Sotdma::read(&mut reader)?,
        })
    }
}

//==================================================================================DATE_INQUIRY
/// Message 10: request for a UTC/date response (message 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UtcDateInquiry {
    pub header: Header,
    pub spare: u8,
    pub destination_mmsi: u32,
    pub spare2: u8,
}

impl FromPayload for UtcDateInquiry {
    const BIT_LENGTH: BitLength = BitLength::Exact(72);
    const MESSAGE_IDS: &'static [u8] = &[10];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        Ok(Self {
            header: Header::from_bits(bits)?,
            spare: reader.read_u8(2)?,
            destination_mmsi: reader.read_u32(30)?,
            spare2: reader.read_u8(2)?,
        })
    }
}
