//! Readers for fields that recur, with the same scaling, in several layouts.
use crate::core::Dimensions;
use crate::error::BitReaderError;
use crate::infra::codec::bits::BitReader;
use crate::protocol::lookups::{
    COG_NOT_AVAILABLE, HEADING_NOT_AVAILABLE, ROT_NOT_AVAILABLE, SECOND_NOT_AVAILABLE,
    SOG_NOT_AVAILABLE,
};

/// Turn indicator to degrees-per-minute factor: `rot = (raw / 4.733)²`.
const ROT_FACTOR: f64 = 4.733;
/// Largest turn indicator that is an actual measurement.
const ROT_MAX_MEASURED: i32 = 126;

/// 12-bit course over ground, 1/10°.
pub(crate) fn read_course(reader: &mut BitReader) -> Result<Option<f64>, BitReaderError> {
    Ok(reader
        .read_opt_u16(12, COG_NOT_AVAILABLE)?
        .map(|raw| raw as f64 / 10.0))
}

/// 10-bit speed over ground, 1/10 kn.
pub(crate) fn read_speed(reader: &mut BitReader) -> Result<Option<f64>, BitReaderError> {
    Ok(reader
        .read_opt_u16(10, SOG_NOT_AVAILABLE)?
        .map(|raw| raw as f64 / 10.0))
}

/// 9-bit true heading, whole degrees.
pub(crate) fn read_heading(reader: &mut BitReader) -> Result<Option<u16>, BitReaderError> {
    reader.read_opt_u16(9, HEADING_NOT_AVAILABLE)
}

/// 8-bit rate-of-turn indicator as `(degrees per minute, over range)`.
///
/// Indicators beyond ±126 only say "turning faster than 5°/30 s"; the rate is
/// still computed but flagged.
pub(crate) fn read_rate_of_turn(
    reader: &mut BitReader,
) -> Result<(Option<f64>, bool), BitReaderError> {
    let Some(raw) = reader.read_opt_i32(8, ROT_NOT_AVAILABLE)? else {
        return Ok((None, false));
    };
    let scaled = raw as f64 / ROT_FACTOR;
    let rate = if raw < 0 {
        -(scaled * scaled)
    } else {
        scaled * scaled
    };
    Ok((Some(rate), !(-ROT_MAX_MEASURED..=ROT_MAX_MEASURED).contains(&raw)))
}

/// Bow (9) / stern (9) / port (6) / starboard (6) distances to the antenna.
pub(crate) fn read_dimensions(reader: &mut BitReader) -> Result<Dimensions, BitReaderError> {
    Ok(Dimensions {
        to_bow: reader.read_u16(9)?,
        to_stern: reader.read_u16(9)?,
        to_port: reader.read_u8(6)?,
        to_starboard: reader.read_u8(6)?,
    })
}

/// UTC second from a 6-bit position time stamp; 60–63 flag missing or
/// degraded positioning.
pub fn utc_second(timestamp: u8) -> Option<u8> {
    (timestamp < SECOND_NOT_AVAILABLE).then_some(timestamp)
}
