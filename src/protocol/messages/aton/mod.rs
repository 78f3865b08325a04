//! Message 21: aid-to-navigation report.
use crate::core::{BitLength, Dimensions, Position, HEADER_BITS, TEN_THOUSANDTH_MINUTE};
use crate::error::DecodeError;
use crate::infra::codec::armor::BitBuffer;
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::traits::FromPayload;
use crate::protocol::messages::fields::read_dimensions;
use crate::protocol::messages::header::Header;
use alloc::string::String;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AidToNavigationReport {
    pub header: Header,
    pub aton_type: u8,
    pub name: String,
    pub position_accuracy: bool,
    pub position: Position,
    pub dimensions: Dimensions,
    pub fix_type: u8,
    pub timestamp: u8,
    pub off_position: bool,
    /// Regional AtoN status bits.
    pub aton_status: u8,
    pub raim: bool,
    pub virtual_aton: bool,
    pub assigned_mode: bool,
    pub spare: u8,
    /// Up to 14 more characters of name, empty when absent.
    pub name_extension: String,
}

impl AidToNavigationReport {
    /// Name with its extension appended.
    pub fn full_name(&self) -> String {
        let mut name = self.name.clone();
        name.push_str(&self.name_extension);
        name
    }
}

impl FromPayload for AidToNavigationReport {
    const BIT_LENGTH: BitLength = BitLength::Range { min: 272, max: 360 };
    const MESSAGE_IDS: &'static [u8] = &[21];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        Ok(Self {
            header: Header::from_bits(bits)?,
            aton_type: reader.read_u8(5)?,
            name: reader.read_text(120)?,
            position_accuracy: reader.read_bool()?,
            position: reader.read_position(28, 27, TEN_THOUSANDTH_MINUTE)?,
            dimensions: read_dimensions(&mut reader)?,
            fix_type: reader.read_u8(4)?,
            timestamp: reader.read_u8(6)?,
            off_position: reader.read_bool()?,
            aton_status: reader.read_u8(8)?,
            raim: reader.read_bool()?,
            virtual_aton: reader.read_bool()?,
            assigned_mode: reader.read_bool()?,
            spare: reader.read_u8(1)?,
            name_extension: reader.read_text_to_end()?,
        })
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
