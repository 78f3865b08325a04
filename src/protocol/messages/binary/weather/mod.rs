//! Meteorological and hydrographic broadcasts: 8/1/11 (IMO Circ 236),
//! 8/1/21 (weather observation from ship) and 8/1/31 (IMO Circ 289).
use super::{broadcast_data as reader, read_scaled, read_signed_scaled};
use crate::core::{BitLength, Position, UtcTime, THOUSANDTH_MINUTE};
use crate::error::{BitReaderError, DecodeError};
use crate::infra::codec::armor::BitBuffer;
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::traits::FromPayload;
use alloc::string::String;

//==================================================================================SENTINELS
/// Wind speed and gust, knots (7 bits).
const WIND_SPEED_NA: u8 = 127;
/// Bearings of 360 and above are not available.
const BEARING_LIMIT: u16 = 360;
/// Two-bit trend and ice codes.
const TREND_NA: u8 = 3;
/// Current depth, metres (5 bits).
const CURRENT_DEPTH_NA: u8 = 31;
/// Wave and swell period, seconds (6 bits).
const WAVE_PERIOD_NA: u8 = 63;
const PRECIPITATION_NA: u8 = 7;
const PRESSURE_NA: u16 = 511;

// IMO Circ 236 (8/1/11): all-ones codes.
const HUMIDITY_NA: u8 = 127;
const AIR_TEMPERATURE_NA: u16 = 2047;
const DEW_POINT_NA: u16 = 1023;
const VISIBILITY_NA: u16 = 255;
const WATER_LEVEL_NA: u16 = 511;
/// 8-bit speeds and heights in tenths.
const TENTHS_8BIT_NA: u16 = 255;
const SEA_STATE_NA: u8 = 15;
const WATER_TEMPERATURE_NA: u16 = 1023;
const SALINITY_NA: u16 = 511;

// IMO Circ 289 (8/1/31).
const HUMIDITY_V2_NA: u8 = 101;
const AIR_TEMPERATURE_V2_NA: i32 = -1024;
const DEW_POINT_V2_NA: i32 = 501;
/// Also used by the 8/1/21 ship observation.
const VISIBILITY_V2_NA: u16 = 127;
const WATER_LEVEL_V2_NA: u16 = 4001;
const SPEED_V2_NA: u16 = 251;
const SEA_STATE_V2_NA: u8 = 13;
const WATER_TEMPERATURE_V2_NA: i32 = 501;
/// 510 = not available, 511 = sensor not available.
const SALINITY_V2_NA: u16 = 510;

// 8/1/21 ship observation codes not shared with the tables above.
const PRESENT_WEATHER_NA: u8 = 8;
const PRESSURE_TENDENCY_4BIT_NA: u8 = 15;

//==================================================================================SHARED_GROUPS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Wind {
    /// 10-minute average, knots.
    pub average_speed: Option<u8>,
    /// Knots.
    pub gust_speed: Option<u8>,
    pub direction: Option<u16>,
    pub gust_direction: Option<u16>,
}

impl Wind {
    fn read(reader: &mut BitReader) -> Result<Self, BitReaderError> {
        Ok(Self {
            average_speed: reader.read_opt_u8(7, WIND_SPEED_NA)?,
            gust_speed: reader.read_opt_u8(7, WIND_SPEED_NA)?,
            direction: reader.read_u16_below(9, BEARING_LIMIT)?,
            gust_direction: reader.read_u16_below(9, BEARING_LIMIT)?,
        })
    }
}

/// Water current at the surface or at a stated depth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WaterCurrent {
    /// Knots.
    pub speed: Option<f64>,
    pub direction: Option<u16>,
    /// Metres; `None` for the surface current.
    pub depth: Option<u8>,
}

impl WaterCurrent {
    fn read(reader: &mut BitReader, speed_na: u16, with_depth: bool) -> Result<Self, BitReaderError> {
        let speed = read_scaled(reader, 8, speed_na, 10.0, 0.0)?;
        let direction = reader.read_u16_below(9, BEARING_LIMIT)?;
        let depth = if with_depth {
            reader.read_opt_u8(5, CURRENT_DEPTH_NA)?
        } else {
            None
        };
        Ok(Self {
            speed,
            direction,
            depth,
        })
    }
}

/// Significant wave or swell: height (8), period (6), direction (9).
///
/// Heights are tenths of a metre except the 8/1/31 wave height, which is
/// taken as whole metres the way the reference decoder reads it. Suspect:
/// the IMO 289 table and the 8/1/31 swell height both use tenths.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WaveObservation {
    /// Metres.
    pub height: Option<f64>,
    /// Seconds.
    pub period: Option<u8>,
    pub direction: Option<u16>,
}

impl WaveObservation {
    fn read(
        reader: &mut BitReader,
        height_na: u16,
        height_divisor: f64,
    ) -> Result<Self, BitReaderError> {
        Ok(Self {
            height: read_scaled(reader, 8, height_na, height_divisor, 0.0)?,
            period: reader.read_opt_u8(6, WAVE_PERIOD_NA)?,
            direction: reader.read_u16_below(9, BEARING_LIMIT)?,
        })
    }
}

//==================================================================================MET_HYDRO
/// 8/1/11: meteorological and hydrographic data (IMO Circ 236).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MetHydro {
    pub position: Position,
    pub time: UtcTime,
    pub wind: Wind,
    /// Degrees Celsius.
    pub air_temperature: Option<f64>,
    /// Percent.
    pub humidity: Option<u8>,
    pub dew_point: Option<f64>,
    /// Hectopascal.
    pub air_pressure: Option<u16>,
    pub pressure_tendency: Option<u8>,
    /// Nautical miles.
    pub visibility: Option<f64>,
    /// Metres.
    pub water_level: Option<f64>,
    pub water_level_trend: Option<u8>,
    pub surface_current: WaterCurrent,
    pub current_2: WaterCurrent,
    pub current_3: WaterCurrent,
    pub waves: WaveObservation,
    pub swell: WaveObservation,
    /// Beaufort scale.
    pub sea_state: Option<u8>,
    pub water_temperature: Option<f64>,
    pub precipitation: Option<u8>,
    /// Parts per thousand.
    pub salinity: Option<f64>,
    pub ice: Option<u8>,
    pub spare: u8,
}

impl FromPayload for MetHydro {
    // Some stations append two fill bits.
    const BIT_LENGTH: BitLength = BitLength::OneOf(&[352, 354]);
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 11)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            position: reader.read_position_lat_first(24, 25, THOUSANDTH_MINUTE)?,
            time: reader.read_day_hour_minute()?,
            wind: Wind::read(&mut reader)?,
            air_temperature: read_scaled(&mut reader, 11, AIR_TEMPERATURE_NA, 10.0, -60.0)?,
            humidity: reader.read_opt_u8(7, HUMIDITY_NA)?,
            dew_point: read_scaled(&mut reader, 10, DEW_POINT_NA, 10.0, -20.0)?,
            air_pressure: reader.read_opt_u16(9, PRESSURE_NA)?.map(|raw| raw + 800),
            pressure_tendency: reader.read_opt_u8(2, TREND_NA)?,
            visibility: read_scaled(&mut reader, 8, VISIBILITY_NA, 10.0, 0.0)?,
            water_level: read_scaled(&mut reader, 9, WATER_LEVEL_NA, 10.0, -10.0)?,
            water_level_trend: reader.read_opt_u8(2, TREND_NA)?,
            surface_current: WaterCurrent::read(&mut reader, TENTHS_8BIT_NA, false)?,
            current_2: WaterCurrent::read(&mut reader, TENTHS_8BIT_NA, true)?,
            current_3: WaterCurrent::read(&mut reader, TENTHS_8BIT_NA, true)?,
            waves: WaveObservation::read(&mut reader, TENTHS_8BIT_NA, 10.0)?,
            swell: WaveObservation::read(&mut reader, TENTHS_8BIT_NA, 10.0)?,
            sea_state: reader.read_opt_u8(4, SEA_STATE_NA)?,
            water_temperature: read_scaled(&mut reader, 10, WATER_TEMPERATURE_NA, 10.0, -10.0)?,
            precipitation: reader.read_opt_u8(3, PRECIPITATION_NA)?,
            salinity: read_scaled(&mut reader, 9, SALINITY_NA, 10.0, 0.0)?,
            ice: reader.read_opt_u8(2, TREND_NA)?,
            spare: reader.read_u8(6)?,
        })
    }
}

/// 8/1/31: meteorological and hydrographic data (IMO Circ 289).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MetHydroV2 {
    pub position: Position,
    pub position_accuracy: bool,
    pub time: UtcTime,
    pub wind: Wind,
    pub air_temperature: Option<f64>,
    pub humidity: Option<u8>,
    pub dew_point: Option<f64>,
    pub air_pressure: Option<u16>,
    pub pressure_tendency: Option<u8>,
    /// Nautical miles, one 8-bit field as the reference decoder reads it.
    /// Suspect: IMO 289 makes the top bit a "greater than" flag, so values
    /// from 12.8 up are that flag plus the 7-bit distance.
    pub visibility: Option<f64>,
    pub water_level: Option<f64>,
    pub water_level_trend: Option<u8>,
    pub surface_current: WaterCurrent,
    pub current_2: WaterCurrent,
    pub current_3: WaterCurrent,
    pub waves: WaveObservation,
    pub swell: WaveObservation,
    pub sea_state: Option<u8>,
    pub water_temperature: Option<f64>,
    pub precipitation: Option<u8>,
    pub salinity: Option<f64>,
    pub ice: Option<u8>,
    pub spare: u16,
}

impl FromPayload for MetHydroV2 {
    const BIT_LENGTH: BitLength = BitLength::Exact(360);
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 31)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        let position = reader.read_position(25, 24, THOUSANDTH_MINUTE)?;
        let position_accuracy = reader.read_bool()?;
        let time = reader.read_day_hour_minute()?;
        let wind = Wind::read(&mut reader)?;
        let air_temperature = read_signed_scaled(&mut reader, 11, AIR_TEMPERATURE_V2_NA, 10.0)?;
        let humidity = reader.read_opt_u8(7, HUMIDITY_V2_NA)?;
        let dew_point = read_signed_scaled(&mut reader, 10, DEW_POINT_V2_NA, 10.0)?;
        let air_pressure = reader.read_opt_u16(9, PRESSURE_NA)?.map(|raw| raw + 799);
        let pressure_tendency = reader.read_opt_u8(2, TREND_NA)?;
        let visibility = read_scaled(&mut reader, 8, VISIBILITY_V2_NA, 10.0, 0.0)?;
        Ok(Self {
            position,
            position_accuracy,
            time,
            wind,
            air_temperature,
            humidity,
            dew_point,
            air_pressure,
            pressure_tendency,
            visibility,
            water_level: read_scaled(&mut reader, 12, WATER_LEVEL_V2_NA, 100.0, -10.0)?,
            water_level_trend: reader.read_opt_u8(2, TREND_NA)?,
            surface_current: WaterCurrent::read(&mut reader, SPEED_V2_NA, false)?,
            current_2: WaterCurrent::read(&mut reader, SPEED_V2_NA, true)?,
            current_3: WaterCurrent::read(&mut reader, SPEED_V2_NA, true)?,
            waves: WaveObservation::read(&mut reader, SPEED_V2_NA, 1.0)?,
            swell: WaveObservation::read(&mut reader, SPEED_V2_NA, 10.0)?,
            sea_state: reader.read_opt_u8(4, SEA_STATE_V2_NA)?,
            water_temperature: read_signed_scaled(&mut reader, 10, WATER_TEMPERATURE_V2_NA, 10.0)?,
            precipitation: reader.read_opt_u8(3, PRECIPITATION_NA)?,
            salinity: reader
                .read_u16(9)
                .map(|raw| (raw < SALINITY_V2_NA).then(|| raw as f64 / 10.0))?,
            ice: reader.read_opt_u8(2, TREND_NA)?,
            spare: reader.read_u16(10)?,
        })
    }
}

//==================================================================================WEATHER_REPORT
/// 8/1/21: weather observation from ship; bit 56 selects the layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum WeatherReport {
    Ship(ShipObservation),
    Wmo(WmoObservation),
}

/// Plain-language observation (report type 0).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShipObservation {
    pub location: String,
    pub position: Position,
    pub time: UtcTime,
    pub present_weather: Option<u8>,
    /// Nautical miles.
    pub visibility: Option<f64>,
    /// Percent.
    pub humidity: Option<u8>,
    /// Knots.
    pub wind_speed: Option<u8>,
    pub wind_direction: Option<u16>,
    /// As transmitted, hPa.
    pub air_pressure: Option<u16>,
    pub pressure_tendency: Option<u8>,
    /// Degrees Celsius.
    pub air_temperature: Option<f64>,
    pub water_temperature: Option<f64>,
    /// Seconds.
    pub wave_period: Option<u8>,
    /// Metres.
    pub wave_height: Option<f64>,
    pub wave_direction: Option<u16>,
    pub swell_height: Option<f64>,
    pub swell_direction: Option<u16>,
    pub swell_period: Option<u8>,
    pub spare: u8,
}

impl ShipObservation {
    fn read(reader: &mut BitReader) -> Result<Self, BitReaderError> {
        Ok(Self {
            location: reader.read_text(120)?,
            position: reader.read_position(25, 24, THOUSANDTH_MINUTE)?,
            time: reader.read_day_hour_minute()?,
            present_weather: reader.read_opt_u8(4, PRESENT_WEATHER_NA)?,
            visibility: read_scaled(reader, 8, VISIBILITY_V2_NA, 10.0, 0.0)?,
            humidity: reader.read_opt_u8(7, HUMIDITY_V2_NA)?,
            wind_speed: reader.read_opt_u8(7, WIND_SPEED_NA)?,
            wind_direction: reader.read_u16_below(9, BEARING_LIMIT)?,
            air_pressure: reader.read_opt_u16(9, PRESSURE_NA)?,
            pressure_tendency: reader.read_opt_u8(4, PRESSURE_TENDENCY_4BIT_NA)?,
            air_temperature: read_signed_scaled(reader, 11, AIR_TEMPERATURE_V2_NA, 10.0)?,
            water_temperature: read_scaled(reader, 10, WATER_TEMPERATURE_NA, 10.0, -10.0)?,
            wave_period: reader.read_opt_u8(6, WAVE_PERIOD_NA)?,
            wave_height: read_scaled(reader, 8, TENTHS_8BIT_NA, 10.0, 0.0)?,
            wave_direction: reader.read_u16_below(9, BEARING_LIMIT)?,
            swell_height: read_scaled(reader, 8, TENTHS_8BIT_NA, 10.0, 0.0)?,
            swell_direction: reader.read_u16_below(9, BEARING_LIMIT)?,
            swell_period: reader.read_opt_u8(6, WAVE_PERIOD_NA)?,
            spare: reader.read_u8(3)?,
        })
    }
}

/// Secondary swell system of a WMO observation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Swell {
    /// Degrees, 10° steps.
    pub direction: u16,
    pub period: u8,
    /// Metres.
    pub height: f64,
}

impl Swell {
    fn read(reader: &mut BitReader) -> Result<Self, BitReaderError> {
        Ok(Self {
            direction: reader.read_u16(6)? * 10,
            period: reader.read_u8(5)?,
            height: reader.read_u8(6)? as f64 * 0.5,
        })
    }
}

const WMO_MINUTE_BIT: usize = 102;
const WMO_COURSE_BIT: usize = 106;

/// WMO OBS coded observation (report type 1). Coarse fields are stored in
/// their scaled units: speeds in m/s, bearings in degrees, heights in metres.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WmoObservation {
    /// Both axes are offset by 180° in 1/100 degree steps.
    pub position: Position,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    /// Ten-minute resolution. Read from bit 102 like the reference decoder,
    /// which overlaps the last hour bit; suspect, the transmitted field
    /// starts at bit 103.
    pub minute: u8,
    pub course: u16,
    pub speed: f64,
    pub heading: u16,
    /// Hectopascal.
    pub air_pressure: f64,
    /// Three-hour pressure change, hPa.
    pub pressure_change: f64,
    pub pressure_tendency: u8,
    pub wind_direction: u16,
    pub wind_speed: f64,
    pub relative_wind_direction: u16,
    pub relative_wind_speed: f64,
    pub gust_speed: f64,
    pub gust_direction: u16,
    /// Tenths of a kelvin above 223.15 K, as transmitted.
    pub air_temperature_raw: u16,
    pub humidity: u8,
    /// As transmitted.
    pub water_temperature_raw: u16,
    /// Metres.
    pub visibility: f64,
    pub present_weather: u16,
    pub past_weather: [u8; 2],
    /// Percent.
    pub cloud_total: u8,
    pub cloud_low_amount: u8,
    pub cloud_low_type: u8,
    pub cloud_middle_type: u8,
    pub cloud_high_type: u8,
    /// Metres.
    pub lowest_cloud_base: f64,
    pub wave_period: u8,
    pub wave_height: f64,
    pub swells: [Swell; 2],
    /// Metres.
    pub ice_thickness: f64,
    pub ice_accretion: u8,
    pub ice_accretion_cause: u8,
    pub ice_concentration: u8,
    pub ice_amount: u8,
    pub ice_situation: u8,
    pub ice_development: u8,
    /// Degrees, 45° steps.
    pub ice_edge_bearing: u16,
}

impl WmoObservation {
    fn read(reader: &mut BitReader) -> Result<Self, BitReaderError> {
        let longitude = reader.read_u16(16)? as f64 / 100.0 - 180.0;
        let latitude = reader.read_u16(15)? as f64 / 100.0 - 180.0;
        let month = reader.read_u8(4)?;
        let day = reader.read_u8(6)?;
        let hour = reader.read_u8(5)?;
        reader.seek(WMO_MINUTE_BIT)?;
        let minute = reader.read_u8(3)? * 10;
        reader.seek(WMO_COURSE_BIT)?;
        Ok(Self {
            position: Position {
                longitude: Some(longitude),
                latitude: Some(latitude),
            },
            month,
            day,
            hour,
            minute,
            course: reader.read_u16(7)? * 5,
            speed: reader.read_u8(5)? as f64 * 0.5,
            heading: reader.read_u16(7)? * 5,
            air_pressure: reader.read_u16(11)? as f64 / 10.0 + 900.0,
            pressure_change: reader.read_u16(10)? as f64 / 10.0 - 50.0,
            pressure_tendency: reader.read_u8(4)?,
            wind_direction: reader.read_u16(7)? * 5,
            wind_speed: reader.read_u8(8)? as f64 * 0.5,
            relative_wind_direction: reader.read_u16(7)? * 5,
            relative_wind_speed: reader.read_u8(8)? as f64 * 0.5,
            gust_speed: reader.read_u8(8)? as f64 * 0.5,
            gust_direction: reader.read_u16(7)? * 5,
            air_temperature_raw: reader.read_u16(10)?,
            humidity: reader.read_u8(7)?,
            water_temperature_raw: reader.read_u16(9)?,
            visibility: squared(reader.read_u8(6)?) * 13.073,
            present_weather: reader.read_u16(9)?,
            past_weather: [reader.read_u8(5)?, reader.read_u8(5)?],
            cloud_total: reader.read_u8(4)? * 10,
            cloud_low_amount: reader.read_u8(4)?,
            cloud_low_type: reader.read_u8(6)?,
            cloud_middle_type: reader.read_u8(6)?,
            cloud_high_type: reader.read_u8(6)?,
            lowest_cloud_base: squared(reader.read_u8(7)?) * 0.16,
            wave_period: reader.read_u8(5)?,
            wave_height: reader.read_u8(6)? as f64 * 0.5,
            swells: [Swell::read(reader)?, Swell::read(reader)?],
            ice_thickness: reader.read_u8(7)? as f64 / 100.0,
            ice_accretion: reader.read_u8(3)?,
            ice_accretion_cause: reader.read_u8(3)?,
            ice_concentration: reader.read_u8(5)?,
            ice_amount: reader.read_u8(4)?,
            ice_situation: reader.read_u8(5)?,
            ice_development: reader.read_u8(5)?,
            ice_edge_bearing: reader.read_u16(4)? * 45,
        })
    }
}

fn squared(raw: u8) -> f64 {
    let value = raw as f64;
    value * value
}

impl FromPayload for WeatherReport {
    const BIT_LENGTH: BitLength = BitLength::Exact(360);
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 21)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        let report = if reader.read_bool()? {
            WeatherReport::Wmo(WmoObservation::read(&mut reader)?)
        } else {
            WeatherReport::Ship(ShipObservation::read(&mut reader)?)
        };
        Ok(report)
    }
}
