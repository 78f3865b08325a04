//! DAC 200: River Information Services (inland AIS) broadcasts.
use super::broadcast_data as reader;
use crate::core::{BitLength, Position, TEN_THOUSANDTH_MINUTE};
use crate::error::{BitReaderError, DecodeError};
use crate::infra::codec::armor::BitBuffer;
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::traits::FromPayload;
use alloc::string::String;

// EMMA and signal codes whose value means "not available".
const DATE_NA: u8 = 0;
const HOUR_NA: u8 = 24;
const MINUTE_NA: u8 = 60;
const WEATHER_TYPE_NA: u8 = 0;
const WEATHER_VALUE_NA: u16 = 511;
const CLASSIFICATION_NA: u8 = 0;
const WIND_DIRECTION_NA: u8 = 0;
const SIGNAL_FORM_NA: u8 = 0;
const ORIENTATION_LIMIT: u16 = 360;
const STREAM_DIRECTION_NA: u8 = 0;

/// 8/200/10: inland ship static and voyage related data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InlandStaticVoyage {
    /// European vessel identification number.
    pub eu_id: String,
    /// Metres.
    pub length: f64,
    pub beam: f64,
    /// ERI ship type.
    pub ship_type: u16,
    /// Number of blue cones/lights.
    pub hazardous_cargo: u8,
    pub draught: f64,
    pub loaded: u8,
    pub speed_quality: bool,
    pub course_quality: bool,
    pub heading_quality: bool,
    pub spare: u8,
}

impl FromPayload for InlandStaticVoyage {
    const BIT_LENGTH: BitLength = BitLength::Exact(168);
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(200, 10)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            eu_id: reader.read_text(48)?,
            length: reader.read_u16(13)? as f64 / 10.0,
            beam: reader.read_u16(10)? as f64 / 10.0,
            ship_type: reader.read_u16(14)?,
            hazardous_cargo: reader.read_u8(3)?,
            draught: reader.read_u16(11)? as f64 / 10.0,
            loaded: reader.read_u8(2)?,
            speed_quality: reader.read_bool()?,
            course_quality: reader.read_bool()?,
            heading_quality: reader.read_bool()?,
            spare: reader.read_u8(8)?,
        })
    }
}

/// Date part of an EMMA validity period.
///
/// The day field is only 4 bits wide on the air, so days above 15 cannot be
/// represented; the width is kept for compatibility with deployed encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RisDate {
    /// As transmitted.
    pub year: u16,
    pub month: Option<u8>,
    pub day: Option<u8>,
}

impl RisDate {
    fn read(reader: &mut BitReader) -> Result<Self, BitReaderError> {
        Ok(Self {
            year: reader.read_u16(9)?,
            month: reader.read_opt_u8(4, DATE_NA)?,
            day: reader.read_opt_u8(4, DATE_NA)?,
        })
    }
}

/// 8/200/23: EMMA weather warning.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EmmaWarning {
    pub start_date: RisDate,
    pub end_date: RisDate,
    pub start_hour: Option<u8>,
    pub start_minute: Option<u8>,
    pub end_hour: Option<u8>,
    pub end_minute: Option<u8>,
    pub corner_1: Position,
    pub corner_2: Position,
    pub warning_type: Option<u8>,
    pub min_value: Option<u16>,
    pub max_value: Option<u16>,
    /// 1 slight, 2 medium, 3 strong.
    pub classification: Option<u8>,
    /// 1 north to 8 north-west in 45° steps.
    pub wind_direction: Option<u8>,
    pub spare: u8,
}

impl FromPayload for EmmaWarning {
    const BIT_LENGTH: BitLength = BitLength::Exact(256);
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(200, 23)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            start_date: RisDate::read(&mut reader)?,
            end_date: RisDate::read(&mut reader)?,
            start_hour: reader.read_opt_u8(5, HOUR_NA)?,
            start_minute: reader.read_opt_u8(6, MINUTE_NA)?,
            end_hour: reader.read_opt_u8(5, HOUR_NA)?,
            end_minute: reader.read_opt_u8(6, MINUTE_NA)?,
            corner_1: reader.read_position(28, 27, TEN_THOUSANDTH_MINUTE)?,
            corner_2: reader.read_position(28, 27, TEN_THOUSANDTH_MINUTE)?,
            warning_type: reader.read_opt_u8(4, WEATHER_TYPE_NA)?,
            min_value: reader.read_opt_u16(9, WEATHER_VALUE_NA)?,
            max_value: reader.read_opt_u16(9, WEATHER_VALUE_NA)?,
            classification: reader.read_opt_u8(2, CLASSIFICATION_NA)?,
            wind_direction: reader.read_opt_u8(4, WIND_DIRECTION_NA)?,
            spare: reader.read_u8(6)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaugeLevel {
    pub gauge_id: u16,
    /// Centimetres.
    pub level: i16,
}

/// 8/200/24: water levels at up to four gauges.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WaterLevels {
    pub country: String,
    pub gauges: [GaugeLevel; 4],
}

impl GaugeLevel {
    // Sign bit set means positive, the reverse of the published table.
    fn read(reader: &mut BitReader) -> Result<Self, BitReaderError> {
        let gauge_id = reader.read_u16(11)?;
        let positive = reader.read_bool()?;
        let magnitude = reader.read_u16(13)? as i16;
        Ok(Self {
            gauge_id,
            level: if positive { magnitude } else { -magnitude },
        })
    }
}

impl FromPayload for WaterLevels {
    const BIT_LENGTH: BitLength = BitLength::Exact(168);
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(200, 24)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            country: reader.read_text(12)?,
            gauges: [
                GaugeLevel::read(&mut reader)?,
                GaugeLevel::read(&mut reader)?,
                GaugeLevel::read(&mut reader)?,
                GaugeLevel::read(&mut reader)?,
            ],
        })
    }
}

/// 8/200/40: signal status.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SignalStatus {
    pub position: Position,
    pub signal_form: Option<u8>,
    /// Degrees.
    pub orientation: Option<u16>,
    pub stream_direction: Option<u8>,
    /// Ten 3-bit light states, as transmitted.
    pub light_status: u32,
    pub spare: u16,
}

impl SignalStatus {
    /// State of light `index` (0 to 9).
    pub fn light(&self, index: usize) -> Option<u8> {
        (index < 10).then(|| ((self.light_status >> (27 - 3 * index)) & 0b111) as u8)
    }
}

impl FromPayload for SignalStatus {
    const BIT_LENGTH: BitLength = BitLength::Exact(168);
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(200, 40)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            position: reader.read_position(28, 27, TEN_THOUSANDTH_MINUTE)?,
            signal_form: reader.read_opt_u8(4, SIGNAL_FORM_NA)?,
            orientation: reader.read_u16_below(9, ORIENTATION_LIMIT)?,
            stream_direction: reader.read_opt_u8(3, STREAM_DIRECTION_NA)?,
            light_status: reader.read_u32(30)?,
            spare: reader.read_u16(11)?,
        })
    }
}

/// 8/200/55: persons on board an inland vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InlandPersonsOnBoard {
    pub crew: u8,
    pub passengers: u16,
    pub shipboard_personnel: u8,
}

impl FromPayload for InlandPersonsOnBoard {
    // Transmitters disagree on how much trailing spare to send.
    const BIT_LENGTH: BitLength = BitLength::OneOf(&[88, 136, 168]);
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(200, 55)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            crew: reader.read_u8(8)?,
            passengers: reader.read_u16(13)?,
            shipboard_personnel: reader.read_u8(8)?,
        })
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
