//! Static and voyage related data (5) and class B static data reports (24).
use crate::core::{BitLength, Dimensions, UtcTime, HEADER_BITS};
use crate::error::DecodeError;
use crate::infra::codec::armor::BitBuffer;
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::traits::FromPayload;
use crate::protocol::messages::fields::read_dimensions;
use crate::protocol::messages::header::Header;
use alloc::string::String;

//==================================================================================MESSAGE_5
/// Message 5: class A static and voyage related data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StaticAndVoyageData {
    pub header: Header,
    pub ais_version: u8,
    pub imo_number: Option<u32>,
    pub callsign: String,
    pub name: String,
    pub ship_type: u8,
    pub dimensions: Dimensions,
    pub fix_type: u8,
    /// Estimated time of arrival (month, day, hour, minute).
    pub eta: UtcTime,
    /// Metres; `None` when not available.
    pub draught: Option<f64>,
    pub destination: String,
    pub dte: bool,
    pub spare: u8,
}

impl FromPayload for StaticAndVoyageData {
    const BIT_LENGTH: BitLength = BitLength::Exact(424);
    const MESSAGE_IDS: &'static [u8] = &[5];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        Ok(Self {
            header: Header::from_bits(bits)?,
            ais_version: reader.read_u8(2)?,
            imo_number: reader.read_opt_u32(30, 0)?,
            callsign: reader.read_text(42)?,
            name: reader.read_text(120)?,
            ship_type: reader.read_u8(8)?,
            dimensions: read_dimensions(&mut reader)?,
            fix_type: reader.read_u8(4)?,
            eta: reader.read_month_day_hour_minute()?,
            draught: reader.read_opt_u8(8, 0)?.map(|raw| raw as f64 / 10.0),
            destination: reader.read_text(120)?,
            dte: reader.read_bool()?,
            spare: reader.read_u8(1)?,
        })
    }
}

//==================================================================================MESSAGE_24
/// Message 24: class B static data, sent as two independent parts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StaticDataReport {
    pub header: Header,
    pub part: StaticDataPart,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StaticDataPart {
    /// Part number 0.
    A { name: String },
    /// Part number 1.
    B {
        ship_type: u8,
        vendor_id: String,
        callsign: String,
        reference: HullReference,
        spare: u8,
    },
}

/// Part B tail: hull dimensions, or the parent ship for auxiliary craft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HullReference {
    Dimensions(Dimensions),
    Mothership(u32),
}

/// Auxiliary craft MMSIs read `98XXXYYYY`.
fn is_auxiliary_craft(mmsi: u32) -> bool {
    mmsi / 10_000_000 == 98
}

impl FromPayload for StaticDataReport {
    const BIT_LENGTH: BitLength = BitLength::OneOf(&[160, 168]);
    const MESSAGE_IDS: &'static [u8] = &[24];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let header = Header::from_bits(bits)?;
        let mut reader = BitReader::at(bits, HEADER_BITS);

        let part = match reader.read_u8(2)? {
            0 => StaticDataPart::A {
                name: reader.read_text(120)?,
            },
            1 => {
                BitLength::Exact(168).check(bits.len())?;
                let ship_type = reader.read_u8(8)?;
                let vendor_id = reader.read_text(42)?;
                let callsign = reader.read_text(42)?;
                let reference = if is_auxiliary_craft(header.mmsi) {
                    HullReference::Mothership(reader.read_u32(30)?)
                } else {
                    HullReference::Dimensions(read_dimensions(&mut reader)?)
                };
                StaticDataPart::B {
                    ship_type,
                    vendor_id,
                    callsign,
                    reference,
                    spare: reader.read_u8(6)?,
                }
            }
            _ => return Err(DecodeError::BadMsgContent),
        };
        Ok(Self { header, part })
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
