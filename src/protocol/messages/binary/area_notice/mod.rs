//! 8/1/22: area notice (IMO Circ 289) with its shape-tagged sub-areas.
use super::broadcast_data as reader;
use crate::core::{BitLength, Position, UtcTime, THOUSANDTH_MINUTE};
use crate::error::{DecodeError, Status};
use crate::infra::codec::armor::BitBuffer;
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::traits::FromPayload;
use alloc::string::String;
use alloc::vec::Vec;

const SUB_AREA_BITS: usize = 87;
/// Multipliers selected by the 2-bit scale factor.
const SCALE_FACTORS: [u32; 4] = [1, 10, 100, 1000];
/// Half-degree angle code ending a polyline or polygon early.
const PATH_END: u16 = 720;
const PATH_POINTS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AreaNotice {
    pub link_id: u16,
    /// Nature of the notice (caution, restriction, ...).
    pub notice_type: u8,
    pub start: UtcTime,
    /// Minutes.
    pub duration: u32,
    pub sub_areas: Vec<SubArea>,
}

impl AreaNotice {
    /// `SubSubMessageNotImplemented` when a sub-area uses a reserved shape.
    pub fn status(&self) -> Status {
        if self
            .sub_areas
            .iter()
            .any(|area| matches!(area, SubArea::Reserved { .. }))
        {
            Status::SubSubMessageNotImplemented
        } else {
            Status::Ok
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SubArea {
    /// Radius 0 marks a point.
    Circle(Circle),
    Rectangle(Rectangle),
    Sector(Sector),
    Polyline(Vec<PathPoint>),
    Polygon(Vec<PathPoint>),
    Text(String),
    /// Shapes 6 and 7; the 84 bits after the shape are kept.
    Reserved { shape: u8, data: Vec<u8> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Circle {
    pub center: Position,
    pub precision: u8,
    /// Metres.
    pub radius: u32,
    pub spare: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rectangle {
    /// South-west corner.
    pub corner: Position,
    pub precision: u8,
    /// Metres.
    pub east_dimension: u32,
    pub north_dimension: u32,
    /// Degrees.
    pub orientation: u16,
    pub spare: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sector {
    pub center: Position,
    pub precision: u8,
    pub radius: u32,
    pub left_bound: u16,
    pub right_bound: u16,
}

/// Vertex relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathPoint {
    /// Degrees.
    pub angle: f64,
    /// Metres.
    pub distance: u32,
}

fn read_scale(reader: &mut BitReader) -> Result<u32, DecodeError> {
    Ok(SCALE_FACTORS[reader.read_u8(2)? as usize])
}

fn read_path(reader: &mut BitReader) -> Result<Vec<PathPoint>, DecodeError> {
    let scale = read_scale(reader)?;
    let mut points = Vec::with_capacity(PATH_POINTS);
    for _ in 0..PATH_POINTS {
        let angle = reader.read_u16(10)?;
        let distance = reader.read_u32(10)? * scale;
        if angle == PATH_END {
            break;
        }
        points.push(PathPoint {
            angle: angle as f64 * 0.5,
            distance,
        });
    }
    Ok(points)
}

impl SubArea {
    fn read(reader: &mut BitReader) -> Result<Self, DecodeError> {
        let start = reader.bit_cursor();
        let shape = reader.read_u8(3)?;
        let area = match shape {
            0 => {
                let scale = read_scale(reader)?;
                SubArea::Circle(Circle {
                    center: reader.read_position(25, 24, THOUSANDTH_MINUTE)?,
                    precision: reader.read_u8(3)?,
                    radius: reader.read_u32(12)? * scale,
                    spare: reader.read_u32(18)?,
                })
            }
            1 => {
                let scale = read_scale(reader)?;
                SubArea::Rectangle(Rectangle {
                    corner: reader.read_position(25, 24, THOUSANDTH_MINUTE)?,
                    precision: reader.read_u8(3)?,
                    east_dimension: reader.read_u32(8)? * scale,
                    north_dimension: reader.read_u32(8)? * scale,
                    orientation: reader.read_u16(9)?,
                    spare: reader.read_u8(5)?,
                })
            }
            2 => {
                let scale = read_scale(reader)?;
                SubArea::Sector(Sector {
                    center: reader.read_position(25, 24, THOUSANDTH_MINUTE)?,
                    precision: reader.read_u8(3)?,
                    radius: reader.read_u32(12)? * scale,
                    left_bound: reader.read_u16(9)?,
                    right_bound: reader.read_u16(9)?,
                })
            }
            3 => SubArea::Polyline(read_path(reader)?),
            4 => SubArea::Polygon(read_path(reader)?),
            5 => SubArea::Text(reader.read_text(84)?),
            _ => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Area notice sub-area with reserved shape {}", shape);
                SubArea::Reserved {
                    shape,
                    data: reader.read_bytes(SUB_AREA_BITS - 3)?,
                }
            }
        };
        reader.seek(start + SUB_AREA_BITS)?;
        Ok(area)
    }
}

impl FromPayload for AreaNotice {
    const BIT_LENGTH: BitLength = BitLength::Repeated {
        header: 111,
        record: SUB_AREA_BITS,
        min_records: 1,
        max_records: 9,
    };
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 22)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        let link_id = reader.read_u16(10)?;
        let notice_type = reader.read_u8(7)?;
        let start = reader.read_month_day_hour_minute()?;
        let duration = reader.read_u32(18)?;
        let sub_areas = (0..Self::BIT_LENGTH.record_count(bits.len()))
            .map(|_| SubArea::read(&mut reader))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            link_id,
            notice_type,
            start,
            duration,
            sub_areas,
        })
    }
}
