//! Dynamic position reports: class A (1, 2, 3), SAR aircraft (9), class B
//! (18, 19) and long-range broadcasts (27).
use crate::core::{BitLength, Dimensions, Position, HEADER_BITS, TENTH_MINUTE, TEN_THOUSANDTH_MINUTE};
use crate::error::DecodeError;
use crate::infra::codec::armor::BitBuffer;
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::traits::FromPayload;
use crate::protocol::lookups::{
    NavigationStatus, ALTITUDE_NOT_AVAILABLE, LONG_RANGE_COG_NOT_AVAILABLE,
    LONG_RANGE_SOG_NOT_AVAILABLE, SOG_NOT_AVAILABLE,
};
use crate::protocol::messages::comm_state::CommState;
use crate::protocol::messages::fields::{
    read_course, read_dimensions, read_heading, read_rate_of_turn, read_speed, utc_second,
};
use crate::protocol::messages::header::Header;
use alloc::string::String;

//==================================================================================CLASS_A
/// Messages 1, 2 (SOTDMA) and 3 (ITDMA).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PositionReportClassA {
    pub header: Header,
    pub navigation_status: NavigationStatus,
    /// Degrees per minute, positive to starboard.
    pub rate_of_turn: Option<f64>,
    /// The turn indicator saturated; `rate_of_turn` is only a lower bound.
    pub rot_over_range: bool,
    /// Knots.
    pub speed_over_ground: Option<f64>,
    /// `true` for high accuracy (< 10 m).
    pub position_accuracy: bool,
    pub position: Position,
    /// Degrees.
    pub course_over_ground: Option<f64>,
    pub true_heading: Option<u16>,
    /// UTC second; 60–63 flag an unavailable or degraded fix.
    pub timestamp: u8,
    /// 0 not available, 1 no special manoeuvre, 2 special manoeuvre.
    pub special_manoeuvre: u8,
    pub spare: u8,
    pub raim: bool,
    pub comm_state: CommState,
}

impl PositionReportClassA {
    pub fn utc_second(&self) -> Option<u8> {
        utc_second(self.timestamp)
    }
}

impl FromPayload for PositionReportClassA {
    const BIT_LENGTH: BitLength = BitLength::Exact(168);
    const MESSAGE_IDS: &'static [u8] = &[1, 2, 3];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let header = Header::from_bits(bits)?;
        let mut reader = BitReader::at(bits, HEADER_BITS);

        let navigation_status = NavigationStatus::from_raw(reader.read_u8(4)?);
        let (rate_of_turn, rot_over_range) = read_rate_of_turn(&mut reader)?;
        Ok(Self {
            header,
            navigation_status,
            rate_of_turn,
            rot_over_range,
            speed_over_ground: read_speed(&mut reader)?,
            position_accuracy: reader.read_bool()?,
            position: reader.read_position(28, 27, TEN_THOUSANDTH_MINUTE)?,
            course_over_ground: read_course(&mut reader)?,
            true_heading: read_heading(&mut reader)?,
            timestamp: reader.read_u8(6)?,
            special_manoeuvre: reader.read_u8(2)?,
            spare: reader.read_u8(3)?,
            raim: reader.read_bool()?,
            comm_state: CommState::read(&mut reader, header.message_id == 3)?,
        })
    }
}

//==================================================================================SAR_AIRCRAFT
/// Message 9: standard search-and-rescue aircraft position report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SarAircraftPosition {
    pub header: Header,
    /// Metres; 4094 means 4094 m or higher.
    pub altitude: Option<u16>,
    /// Whole knots; 1022 means 1022 kn or higher.
    pub speed_over_ground: Option<u16>,
    pub position_accuracy: bool,
    pub position: Position,
    pub course_over_ground: Option<f64>,
    pub timestamp: u8,
    /// `true` when the altitude comes from a barometric sensor.
    pub altitude_sensor: bool,
    pub spare: u8,
    /// Data terminal not ready.
    pub dte: bool,
    pub spare2: u8,
    pub assigned_mode: bool,
    pub raim: bool,
    pub comm_state: CommState,
}

impl FromPayload for SarAircraftPosition {
    const BIT_LENGTH: BitLength = BitLength::Exact(168);
    const MESSAGE_IDS: &'static [u8] = &[9];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        Ok(Self {
            header: Header::from_bits(bits)?,
            altitude: reader.read_opt_u16(12, ALTITUDE_NOT_AVAILABLE)?,
            speed_over_ground: reader.read_opt_u16(10, SOG_NOT_AVAILABLE)?,
            position_accuracy: reader.read_bool()?,
            position: reader.read_position(28, 27, TEN_THOUSANDTH_MINUTE)?,
            course_over_ground: read_course(&mut reader)?,
            timestamp: reader.read_u8(6)?,
            altitude_sensor: reader.read_bool()?,
            spare: reader.read_u8(7)?,
            dte: reader.read_bool()?,
            spare2: reader.read_u8(3)?,
            assigned_mode: reader.read_bool()?,
            raim: reader.read_bool()?,
            comm_state: {
                let itdma = reader.read_bool()?;
                CommState::read(&mut reader, itdma)?
            },
        })
    }
}

//==================================================================================CLASS_B
/// Message 18: standard class B equipment position report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PositionReportClassB {
    pub header: Header,
    pub spare: u8,
    pub speed_over_ground: Option<f64>,
    pub position_accuracy: bool,
    pub position: Position,
    pub course_over_ground: Option<f64>,
    pub true_heading: Option<u16>,
    pub timestamp: u8,
    pub spare2: u8,
    /// `true` for a carrier-sense unit, `false` for SOTDMA.
    pub carrier_sense_unit: bool,
    pub display: bool,
    pub dsc: bool,
    /// Unit can use the whole marine band.
    pub band: bool,
    /// Unit accepts channel management (message 22).
    pub accepts_message_22: bool,
    pub assigned_mode: bool,
    pub raim: bool,
    /// `true` when the trailing state is ITDMA.
    pub comm_state_itdma: bool,
    /// Carrier-sense units send a fixed filler instead of a state.
    pub comm_state: Option<CommState>,
}

impl PositionReportClassB {
    pub fn utc_second(&self) -> Option<u8> {
        utc_second(self.timestamp)
    }
}

impl FromPayload for PositionReportClassB {
    const BIT_LENGTH: BitLength = BitLength::Exact(168);
    const MESSAGE_IDS: &'static [u8] = &[18];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        let header = Header::from_bits(bits)?;
        let spare = reader.read_u8(8)?;
        let speed_over_ground = read_speed(&mut reader)?;
        let position_accuracy = reader.read_bool()?;
        let position = reader.read_position(28, 27, TEN_THOUSANDTH_MINUTE)?;
        let course_over_ground = read_course(&mut reader)?;
        let true_heading = read_heading(&mut reader)?;
        let timestamp = reader.read_u8(6)?;
        let spare2 = reader.read_u8(2)?;
        let carrier_sense_unit = reader.read_bool()?;
        let display = reader.read_bool()?;
        let dsc = reader.read_bool()?;
        let band = reader.read_bool()?;
        let accepts_message_22 = reader.read_bool()?;
        let assigned_mode = reader.read_bool()?;
        let raim = reader.read_bool()?;
        let comm_state_itdma = reader.read_bool()?;
        let comm_state = if carrier_sense_unit {
            None
        } else {
            Some(CommState::read(&mut reader, comm_state_itdma)?)
        };

        Ok(Self {
            header,
            spare,
            speed_over_ground,
            position_accuracy,
            position,
            course_over_ground,
            true_heading,
            timestamp,
            spare2,
            carrier_sense_unit,
            display,
            dsc,
            band,
            accepts_message_22,
            assigned_mode,
            raim,
            comm_state_itdma,
            comm_state,
        })
    }
}

//==================================================================================EXTENDED_CLASS_B
/// Message 19: extended class B report with static data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExtendedClassBPosition {
    pub header: Header,
    pub spare: u8,
    pub speed_over_ground: Option<f64>,
    pub position_accuracy: bool,
    pub position: Position,
    pub course_over_ground: Option<f64>,
    pub true_heading: Option<u16>,
    pub timestamp: u8,
    pub spare2: u8,
    pub name: String,
    pub ship_type: u8,
    pub dimensions: Dimensions,
    /// Type of electronic position fixing device.
    pub fix_type: u8,
    pub raim: bool,
    pub dte: bool,
    pub assigned_mode: bool,
    pub spare3: u8,
}

impl FromPayload for ExtendedClassBPosition {
    const BIT_LENGTH: BitLength = BitLength::Exact(312);
    const MESSAGE_IDS: &'static [u8] = &[19];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        Ok(Self {
            header: Header::from_bits(bits)?,
            spare: reader.read_u8(8)?,
            speed_over_ground: read_speed(&mut reader)?,
            position_accuracy: reader.read_bool()?,
            position: reader.read_position(28, 27, TEN_THOUSANDTH_MINUTE)?,
            course_over_ground: read_course(&mut reader)?,
            true_heading: read_heading(&mut reader)?,
            timestamp: reader.read_u8(6)?,
            spare2: reader.read_u8(4)?,
            name: reader.read_text(120)?,
            ship_type: reader.read_u8(8)?,
            dimensions: read_dimensions(&mut reader)?,
            fix_type: reader.read_u8(4)?,
            raim: reader.read_bool()?,
            dte: reader.read_bool()?,
            assigned_mode: reader.read_bool()?,
            spare3: reader.read_u8(4)?,
        })
    }
}

//==================================================================================LONG_RANGE
/// Message 27: long-range broadcast for satellite reception.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LongRangePosition {
    pub header: Header,
    pub position_accuracy: bool,
    pub raim: bool,
    pub navigation_status: NavigationStatus,
    /// 1/10 minute resolution.
    pub position: Position,
    /// Whole knots.
    pub speed_over_ground: Option<u8>,
    /// Whole degrees.
    pub course_over_ground: Option<u16>,
    /// `true` when the position is the current GNSS fix (latency under 5 s).
    pub gnss: bool,
    pub spare: u8,
}

impl FromPayload for LongRangePosition {
    const BIT_LENGTH: BitLength = BitLength::OneOf(&[96, 168]);
    const MESSAGE_IDS: &'static [u8] = &[27];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        Ok(Self {
            header: Header::from_bits(bits)?,
            position_accuracy: reader.read_bool()?,
            raim: reader.read_bool()?,
            navigation_status: NavigationStatus::from_raw(reader.read_u8(4)?),
            position: reader.read_position(18, 17, TENTH_MINUTE)?,
            speed_over_ground: reader.read_opt_u8(6, LONG_RANGE_SOG_NOT_AVAILABLE)?,
            course_over_ground: reader.read_opt_u16(9, LONG_RANGE_COG_NOT_AVAILABLE)?,
            gnss: !reader.read_bool()?,
            spare: reader.read_u8(1)?,
        })
    }
}
