//! 8/1/26: environmental sensor reports (IMO Circ 289).
//!
//! Each 112-bit report starts with a 27-bit header (type, day, hour, minute,
//! site id); the type selects the 85-bit body. Measurements use the IMO 289
//! "not available" codes, or the all-ones pattern where the table gives none.
use super::{broadcast_data as reader, read_scaled, read_signed_scaled};
use crate::core::{BitLength, Position, TEN_THOUSANDTH_MINUTE};
use crate::error::{BitReaderError, DecodeError, Status};
use crate::infra::codec::armor::BitBuffer;
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::traits::FromPayload;
use alloc::string::String;
use alloc::vec::Vec;

const REPORT_BITS: usize = 112;
const REPORT_HEADER_BITS: usize = 27;

//==================================================================================SENTINELS
/// Knots (7 bits).
const WIND_SPEED_NA: u8 = 127;
const BEARING_LIMIT: u16 = 360;
const TREND_NA: u8 = 3;
/// Forecast duration, minutes.
const DURATION_NA: u8 = 255;
const ALTITUDE_NA: u16 = 4095;
/// Centimetres, 16-bit two's complement.
const WATER_LEVEL_NA: i32 = -32_768;
/// Current speeds and wave heights in tenths (8 bits).
const TENTHS_8BIT_NA: u16 = 251;
/// Measuring depths and flow levels (9 bits).
const DEPTH_NA: u16 = 511;
const FLOW_DISTANCE_NA: u8 = 127;
const WAVE_PERIOD_NA: u8 = 63;
const SEA_STATE_NA: u8 = 13;
const WATER_TEMPERATURE_NA: i32 = 501;
const UNSIGNED_WATER_TEMPERATURE_NA: u16 = 1023;
const TEMPERATURE_DEPTH_NA: u16 = 127;
const CONDUCTIVITY_NA: u16 = 1023;
const WATER_PRESSURE_NA: u16 = 65_535;
/// 510 = not available, 511 = sensor not available.
const SALINITY_NA: u16 = 510;
const AIR_TEMPERATURE_NA: i32 = -1024;
const DEW_POINT_NA: i32 = 501;
const PRECIPITATION_NA: u8 = 3;
const VISIBILITY_NA: u16 = 127;
const PRESSURE_NA: u16 = 511;
const AIR_GAP_NA: u16 = 0;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SensorReports {
    pub reports: Vec<SensorReport>,
}

impl SensorReports {
    /// `SubSubMessageNotImplemented` when a report uses a reserved type.
    pub fn status(&self) -> Status {
        if self
            .reports
            .iter()
            .any(|report| matches!(report.data, SensorData::Reserved { .. }))
        {
            Status::SubSubMessageNotImplemented
        } else {
            Status::Ok
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SensorReport {
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub site_id: u8,
    pub data: SensorData,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SensorData {
    SiteLocation(SiteLocation),
    StationId { name: String, spare: u8 },
    Wind(WindReport),
    WaterLevel(WaterLevelReport),
    Current2d(Current2d),
    Current3d(Current3d),
    HorizontalFlow(HorizontalFlow),
    SeaState(SeaStateReport),
    Salinity(SalinityReport),
    Weather(WeatherSensor),
    AirGap(AirGapReport),
    /// Types 11 to 15; the body is kept.
    Reserved { report_type: u8, data: Vec<u8> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SiteLocation {
    pub position: Position,
    /// Metres.
    pub altitude: Option<f64>,
    pub owner: u8,
    pub timeout: u8,
    pub spare: u16,
}

/// Forecast validity window shared by the wind, water level and air gap bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ForecastTime {
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
}

impl ForecastTime {
    fn read(reader: &mut BitReader) -> Result<Self, BitReaderError> {
        let time = reader.read_day_hour_minute()?;
        Ok(Self {
            day: time.day,
            hour: time.hour,
            minute: time.minute,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WindReport {
    /// Knots.
    pub speed: Option<u8>,
    pub gust: Option<u8>,
    pub direction: Option<u16>,
    pub gust_direction: Option<u16>,
    pub sensor_type: u8,
    pub forecast_speed: Option<u8>,
    pub forecast_gust: Option<u8>,
    pub forecast_direction: Option<u16>,
    pub forecast_time: ForecastTime,
    /// Minutes.
    pub duration: Option<u8>,
    pub spare: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WaterLevelReport {
    /// `false` relative to the reference datum, `true` water depth.
    pub depth_type: bool,
    /// Metres.
    pub level: Option<f64>,
    pub trend: Option<u8>,
    pub vertical_datum: u8,
    pub sensor_type: u8,
    pub forecast_type: bool,
    pub forecast_level: Option<f64>,
    pub forecast_time: ForecastTime,
    pub duration: Option<u8>,
    pub spare: u32,
}

/// Current speed (knots), direction and measuring depth (metres).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CurrentLayer {
    pub speed: Option<f64>,
    pub direction: Option<u16>,
    pub depth: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Current2d {
    pub layers: [CurrentLayer; 3],
    pub sensor_type: u8,
    pub spare: u8,
}

/// Velocity components in knots at one depth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CurrentVector {
    pub north: Option<f64>,
    pub east: Option<f64>,
    pub up: Option<f64>,
    pub depth: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Current3d {
    pub vectors: [CurrentVector; 2],
    pub sensor_type: u8,
    pub spare: u16,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlowLayer {
    pub distance: Option<u8>,
    pub speed: Option<f64>,
    pub direction: Option<u16>,
    pub level: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HorizontalFlow {
    pub bearing: Option<u16>,
    pub layers: [FlowLayer; 2],
    pub sensor_type: u8,
    pub spare: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SeaStateReport {
    /// Metres.
    pub swell_height: Option<f64>,
    pub swell_period: Option<u8>,
    pub swell_direction: Option<u16>,
    pub sea_state: Option<u8>,
    pub swell_sensor_type: u8,
    /// Degrees Celsius.
    pub water_temperature: Option<f64>,
    /// Metres.
    pub water_temperature_depth: Option<f64>,
    pub water_sensor_type: u8,
    pub wave_height: Option<f64>,
    pub wave_period: Option<u8>,
    pub wave_direction: Option<u16>,
    pub wave_sensor_type: u8,
    pub salinity: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SalinityReport {
    pub water_temperature: Option<f64>,
    /// Siemens per metre.
    pub conductivity: Option<f64>,
    /// Decibar.
    pub water_pressure: Option<f64>,
    pub salinity: Option<f64>,
    pub salinity_type: u8,
    pub sensor_type: u8,
    pub spare: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeatherSensor {
    pub air_temperature: Option<f64>,
    pub air_temperature_sensor_type: u8,
    pub precipitation: Option<u8>,
    /// Nautical miles.
    pub visibility: Option<f64>,
    pub dew_point: Option<f64>,
    pub dew_point_type: u8,
    /// Hectopascal.
    pub air_pressure: Option<u16>,
    pub air_pressure_trend: Option<u8>,
    pub air_pressure_sensor_type: u8,
    pub salinity: Option<f64>,
    pub spare: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AirGapReport {
    /// Metres.
    pub air_draught: Option<f64>,
    pub air_gap: Option<f64>,
    pub air_gap_trend: Option<u8>,
    pub forecast_air_gap: Option<f64>,
    pub forecast_time: ForecastTime,
    pub spare: u32,
}

fn tenths(
    reader: &mut BitReader,
    num_bits: u8,
    not_available: u16,
) -> Result<Option<f64>, BitReaderError> {
    read_scaled(reader, num_bits, not_available, 10.0, 0.0)
}

fn hundredths(
    reader: &mut BitReader,
    num_bits: u8,
    not_available: u16,
) -> Result<Option<f64>, BitReaderError> {
    read_scaled(reader, num_bits, not_available, 100.0, 0.0)
}

fn salinity(reader: &mut BitReader) -> Result<Option<f64>, BitReaderError> {
    reader
        .read_u16(9)
        .map(|raw| (raw < SALINITY_NA).then(|| raw as f64 / 10.0))
}

impl SensorData {
    fn read(reader: &mut BitReader, report_type: u8) -> Result<Self, BitReaderError> {
        let data = match report_type {
            0 => SensorData::SiteLocation(SiteLocation {
                position: reader.read_position(28, 27, TEN_THOUSANDTH_MINUTE)?,
                altitude: tenths(reader, 12, ALTITUDE_NA)?,
                owner: reader.read_u8(4)?,
                timeout: reader.read_u8(3)?,
                spare: reader.read_u16(11)?,
            }),
            1 => SensorData::StationId {
                name: reader.read_text(84)?,
                spare: reader.read_u8(1)?,
            },
            2 => SensorData::Wind(WindReport {
                speed: reader.read_opt_u8(7, WIND_SPEED_NA)?,
                gust: reader.read_opt_u8(7, WIND_SPEED_NA)?,
                direction: reader.read_u16_below(9, BEARING_LIMIT)?,
                gust_direction: reader.read_u16_below(9, BEARING_LIMIT)?,
                sensor_type: reader.read_u8(3)?,
                forecast_speed: reader.read_opt_u8(7, WIND_SPEED_NA)?,
                forecast_gust: reader.read_opt_u8(7, WIND_SPEED_NA)?,
                forecast_direction: reader.read_u16_below(9, BEARING_LIMIT)?,
                forecast_time: ForecastTime::read(reader)?,
                duration: reader.read_opt_u8(8, DURATION_NA)?,
                spare: reader.read_u8(3)?,
            }),
            3 => SensorData::WaterLevel(WaterLevelReport {
                depth_type: reader.read_bool()?,
                level: read_signed_scaled(reader, 16, WATER_LEVEL_NA, 100.0)?,
                trend: reader.read_opt_u8(2, TREND_NA)?,
                vertical_datum: reader.read_u8(5)?,
                sensor_type: reader.read_u8(3)?,
                forecast_type: reader.read_bool()?,
                forecast_level: read_signed_scaled(reader, 16, WATER_LEVEL_NA, 100.0)?,
                forecast_time: ForecastTime::read(reader)?,
                duration: reader.read_opt_u8(8, DURATION_NA)?,
                spare: reader.read_u32(17)?,
            }),
            4 => {
                let mut layer = || -> Result<CurrentLayer, BitReaderError> {
                    Ok(CurrentLayer {
                        speed: tenths(reader, 8, TENTHS_8BIT_NA)?,
                        direction: reader.read_u16_below(9, BEARING_LIMIT)?,
                        depth: reader.read_opt_u16(9, DEPTH_NA)?,
                    })
                };
                let layers = [layer()?, layer()?, layer()?];
                SensorData::Current2d(Current2d {
                    layers,
                    sensor_type: reader.read_u8(3)?,
                    spare: reader.read_u8(4)?,
                })
            }
            5 => {
                let mut vector = || -> Result<CurrentVector, BitReaderError> {
                    Ok(CurrentVector {
                        north: tenths(reader, 8, TENTHS_8BIT_NA)?,
                        east: tenths(reader, 8, TENTHS_8BIT_NA)?,
                        up: tenths(reader, 8, TENTHS_8BIT_NA)?,
                        depth: reader.read_opt_u16(9, DEPTH_NA)?,
                    })
                };
                let vectors = [vector()?, vector()?];
                SensorData::Current3d(Current3d {
                    vectors,
                    sensor_type: reader.read_u8(3)?,
                    spare: reader.read_u16(16)?,
                })
            }
            6 => {
                let bearing = reader.read_u16_below(9, BEARING_LIMIT)?;
                let mut layer = || -> Result<FlowLayer, BitReaderError> {
                    Ok(FlowLayer {
                        distance: reader.read_opt_u8(7, FLOW_DISTANCE_NA)?,
                        speed: tenths(reader, 8, TENTHS_8BIT_NA)?,
                        direction: reader.read_u16_below(9, BEARING_LIMIT)?,
                        level: reader.read_opt_u16(9, DEPTH_NA)?,
                    })
                };
                let layers = [layer()?, layer()?];
                SensorData::HorizontalFlow(HorizontalFlow {
                    bearing,
                    layers,
                    sensor_type: reader.read_u8(3)?,
                    spare: reader.read_u8(7)?,
                })
            }
            7 => SensorData::SeaState(SeaStateReport {
                swell_height: tenths(reader, 8, TENTHS_8BIT_NA)?,
                swell_period: reader.read_opt_u8(6, WAVE_PERIOD_NA)?,
                swell_direction: reader.read_u16_below(9, BEARING_LIMIT)?,
                sea_state: reader.read_opt_u8(4, SEA_STATE_NA)?,
                swell_sensor_type: reader.read_u8(3)?,
                water_temperature: read_signed_scaled(reader, 10, WATER_TEMPERATURE_NA, 10.0)?,
                water_temperature_depth: tenths(reader, 7, TEMPERATURE_DEPTH_NA)?,
                water_sensor_type: reader.read_u8(3)?,
                wave_height: tenths(reader, 8, TENTHS_8BIT_NA)?,
                wave_period: reader.read_opt_u8(6, WAVE_PERIOD_NA)?,
                wave_direction: reader.read_u16_below(9, BEARING_LIMIT)?,
                wave_sensor_type: reader.read_u8(3)?,
                salinity: salinity(reader)?,
            }),
            8 => SensorData::Salinity(SalinityReport {
                water_temperature: read_scaled(
                    reader,
                    10,
                    UNSIGNED_WATER_TEMPERATURE_NA,
                    10.0,
                    -10.0,
                )?,
                conductivity: hundredths(reader, 10, CONDUCTIVITY_NA)?,
                water_pressure: tenths(reader, 16, WATER_PRESSURE_NA)?,
                salinity: salinity(reader)?,
                salinity_type: reader.read_u8(2)?,
                sensor_type: reader.read_u8(3)?,
                spare: reader.read_u64(35)?,
            }),
            9 => SensorData::Weather(WeatherSensor {
                air_temperature: read_signed_scaled(reader, 11, AIR_TEMPERATURE_NA, 10.0)?,
                air_temperature_sensor_type: reader.read_u8(3)?,
                precipitation: reader.read_opt_u8(2, PRECIPITATION_NA)?,
                visibility: tenths(reader, 8, VISIBILITY_NA)?,
                dew_point: read_signed_scaled(reader, 10, DEW_POINT_NA, 10.0)?,
                dew_point_type: reader.read_u8(3)?,
                air_pressure: reader.read_opt_u16(9, PRESSURE_NA)?.map(|raw| raw + 800),
                air_pressure_trend: reader.read_opt_u8(2, TREND_NA)?,
                air_pressure_sensor_type: reader.read_u8(3)?,
                salinity: salinity(reader)?,
                spare: reader.read_u32(25)?,
            }),
            10 => SensorData::AirGap(AirGapReport {
                air_draught: hundredths(reader, 13, AIR_GAP_NA)?,
                air_gap: hundredths(reader, 13, AIR_GAP_NA)?,
                air_gap_trend: reader.read_opt_u8(2, TREND_NA)?,
                forecast_air_gap: hundredths(reader, 13, AIR_GAP_NA)?,
                forecast_time: ForecastTime::read(reader)?,
                spare: reader.read_u32(28)?,
            }),
            _ => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Sensor report with reserved type {}", report_type);
                SensorData::Reserved {
                    report_type,
                    data: reader.read_bytes(REPORT_BITS - REPORT_HEADER_BITS)?,
                }
            }
        };
        Ok(data)
    }
}

impl SensorReport {
    fn read(reader: &mut BitReader) -> Result<Self, BitReaderError> {
        let start = reader.bit_cursor();
        let report_type = reader.read_u8(4)?;
        let time = reader.read_day_hour_minute()?;
        let report = Self {
            day: time.day,
            hour: time.hour,
            minute: time.minute,
            site_id: reader.read_u8(7)?,
            data: SensorData::read(reader, report_type)?,
        };
        reader.seek(start + REPORT_BITS)?;
        Ok(report)
    }
}

impl FromPayload for SensorReports {
    const BIT_LENGTH: BitLength = BitLength::Repeated {
        header: 56,
        record: REPORT_BITS,
        min_records: 1,
        max_records: 8,
    };
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 26)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        let reports = (0..Self::BIT_LENGTH.record_count(bits.len()))
            .map(|_| SensorReport::read(&mut reader))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { reports })
    }
}
