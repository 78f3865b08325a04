//! Batch extraction of kinematic position reports.
//!
//! Only single-sentence class A (1, 2, 3), class B (18) and long-range (27)
//! transmissions are considered. Anything else, including sentences with a bad
//! checksum or pad field, is skipped silently, and so are fixes that are not
//! worth tracking: unavailable coordinates, a positioning system reported as
//! inoperative or dead reckoning, or a long-range fix older than 5 s.
use crate::error::DecodeError;
use crate::infra::codec::traits::FromPayload;
use crate::protocol::lookups::NavigationStatus;
use crate::protocol::messages::fields::utc_second;
use crate::protocol::messages::header::Header;
use crate::protocol::messages::position::{
    LongRangePosition, PositionReportClassA, PositionReportClassB,
};
use crate::protocol::transport::sentence::Sentence;
use alloc::vec::Vec;
use core::f64::consts::FRAC_PI_2;

/// Time stamps above this flag a broken or dead-reckoning positioning system.
const LAST_USABLE_TIMESTAMP: u8 = 61;
/// Metres per nautical mile.
const METRES_PER_NAUTICAL_MILE: f64 = 1852.0;

//==================================================================================UNITS
/// Unit system of an extracted [`PositionReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Units {
    /// Degrees (east of north for courses), knots, degrees per minute.
    Nautical,
    /// Radians (north of east for courses), metres per second, radians per
    /// second.
    #[default]
    Metric,
}

//==================================================================================POSITION_REPORT
/// Kinematic state of one vessel taken from a position report.
///
/// Fields a message type does not carry are `None`: class B has no navigation
/// status, turn rate or manoeuvre indicator; long range has no turn rate,
/// heading, UTC second or manoeuvre indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PositionReport {
    pub mmsi: u32,
    pub navigation_status: Option<NavigationStatus>,
    /// `None` when unavailable or beyond the measurable range.
    pub rate_of_turn: Option<f64>,
    pub speed_over_ground: Option<f64>,
    pub position_accuracy: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub course_over_ground: Option<f64>,
    pub true_heading: Option<f64>,
    pub utc_second: Option<u8>,
    /// 1 no special manoeuvre, 2 special manoeuvre.
    pub special_manoeuvre: Option<u8>,
    /// Receiver time appended after the checksum, seconds since its epoch.
    pub receiver_timestamp: Option<u64>,
}

impl PositionReport {
    /// Extract a nautical-unit report from one sentence.
    ///
    /// `Ok(None)` means the sentence decoded but is not a usable position report.
    pub fn from_sentence(line: &str) -> Result<Option<Self>, DecodeError> {
        let sentence = Sentence::parse(line)?;
        if !sentence.is_single() {
            return Err(DecodeError::BadFragments);
        }
        let payload = sentence.body;
        let pad_bits = sentence.pad_bits as usize;

        let report = match Header::from_payload(payload, pad_bits)?.message_id {
            1..=3 => Self::from_class_a(&PositionReportClassA::from_payload(payload, pad_bits)?),
            18 => Self::from_class_b(&PositionReportClassB::from_payload(payload, pad_bits)?),
            27 => Self::from_long_range(&LongRangePosition::from_payload(payload, pad_bits)?),
            _ => None,
        };
        Ok(report.map(|report| Self {
            receiver_timestamp: sentence.receiver_timestamp,
            ..report
        }))
    }

    fn from_class_a(message: &PositionReportClassA) -> Option<Self> {
        if message.timestamp > LAST_USABLE_TIMESTAMP {
            return None;
        }
        Some(Self {
            mmsi: message.header.mmsi,
            navigation_status: Some(message.navigation_status),
            rate_of_turn: message.rate_of_turn.filter(|_| !message.rot_over_range),
            speed_over_ground: message.speed_over_ground,
            position_accuracy: message.position_accuracy,
            latitude: message.position.latitude?,
            longitude: message.position.longitude?,
            course_over_ground: valid_angle(message.course_over_ground),
            true_heading: valid_angle(message.true_heading.map(f64::from)),
            utc_second: utc_second(message.timestamp),
            special_manoeuvre: Some(message.special_manoeuvre)
                .filter(|indicator| (1..=2).contains(indicator)),
            receiver_timestamp: None,
        })
    }

    fn from_class_b(message: &PositionReportClassB) -> Option<Self> {
        if message.timestamp > LAST_USABLE_TIMESTAMP {
            return None;
        }
        Some(Self {
            mmsi: message.header.mmsi,
            navigation_status: None,
            rate_of_turn: None,
            speed_over_ground: message.speed_over_ground,
            position_accuracy: message.position_accuracy,
            latitude: message.position.latitude?,
            longitude: message.position.longitude?,
            course_over_ground: valid_angle(message.course_over_ground),
            true_heading: valid_angle(message.true_heading.map(f64::from)),
            utc_second: utc_second(message.timestamp),
            special_manoeuvre: None,
            receiver_timestamp: None,
        })
    }

    fn from_long_range(message: &LongRangePosition) -> Option<Self> {
        if !message.gnss {
            return None;
        }
        Some(Self {
            mmsi: message.header.mmsi,
            navigation_status: Some(message.navigation_status),
            rate_of_turn: None,
            speed_over_ground: message.speed_over_ground.map(f64::from),
            position_accuracy: message.position_accuracy,
            latitude: message.position.latitude?,
            longitude: message.position.longitude?,
            course_over_ground: valid_angle(message.course_over_ground.map(f64::from)),
            true_heading: None,
            utc_second: None,
            special_manoeuvre: None,
            receiver_timestamp: None,
        })
    }

    /// Express the report in `units`; reports start out nautical.
    pub fn in_units(self, units: Units) -> Self {
        match units {
            Units::Nautical => self,
            Units::Metric => Self {
                rate_of_turn: self.rate_of_turn.map(|rate| -rate.to_radians() / 60.0),
                speed_over_ground: self
                    .speed_over_ground
                    .map(|knots| knots * METRES_PER_NAUTICAL_MILE / 3600.0),
                latitude: self.latitude.to_radians(),
                longitude: self.longitude.to_radians(),
                course_over_ground: self.course_over_ground.map(north_of_east),
                true_heading: self.true_heading.map(north_of_east),
                ..self
            },
        }
    }
}

/// Bearings of 360° or more are reserved codes.
fn valid_angle(degrees: Option<f64>) -> Option<f64> {
    degrees.filter(|degrees| *degrees < 360.0)
}

/// Compass bearing in degrees to a mathematical angle in radians.
fn north_of_east(degrees: f64) -> f64 {
    FRAC_PI_2 - degrees.to_radians()
}

//==================================================================================EXTRACTION
/// Position reports found in `lines`, in input order, expressed in `units`.
pub fn extract_position_reports<S: AsRef<str>>(lines: &[S], units: Units) -> Vec<PositionReport> {
    lines
        .iter()
        .filter_map(|line| match PositionReport::from_sentence(line.as_ref()) {
            Ok(report) => report,
            Err(_error) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Sentence skipped: {}", _error);
                None
            }
        })
        .map(|report| report.in_units(units))
        .collect()
}
