//! Typed AIS message records and the dispatch from message id to decoder.
//!
//! Every record implements [`FromPayload`]; [`decode`] reads the common header
//! first and hands the de-armored bits to the layout selected by the id.
pub mod aton;
pub mod base_station;
pub mod binary;
pub mod comm_state;
pub mod fields;
pub mod header;
pub mod link_management;
pub mod position;
pub mod safety;
pub mod static_data;

use crate::error::{DecodeError, Status};
use crate::infra::codec::armor::BitBuffer;
use crate::infra::codec::traits::FromPayload;
use crate::protocol::transport::sentence::Sentence;

use aton::AidToNavigationReport;
use base_station::{BaseStationReport, UtcDateInquiry};
use binary::addressed::AddressedBinary;
use binary::broadcast::BinaryBroadcast;
use binary::{BinaryAcknowledge, MultiSlotBinary, SingleSlotBinary};
use header::Header;
use link_management::{
    AssignedModeCommand, ChannelManagement, DataLinkManagement, GnssBroadcast, GroupAssignment,
    Interrogation,
};
use position::{
    ExtendedClassBPosition, LongRangePosition, PositionReportClassA, PositionReportClassB,
    SarAircraftPosition,
};
use safety::{AddressedSafety, SafetyBroadcast};
use static_data::{StaticAndVoyageData, StaticDataReport};

//==================================================================================AIS_MESSAGE
/// Any decoded AIS message, tagged by layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AisMessage {
    /// 1, 2, 3
    PositionReportClassA(PositionReportClassA),
    /// 4, 11
    BaseStationReport(BaseStationReport),
    /// 5
    StaticAndVoyageData(StaticAndVoyageData),
    /// 6
    AddressedBinary(AddressedBinary),
    /// 7, 13
    BinaryAcknowledge(BinaryAcknowledge),
    /// 8
    BinaryBroadcast(BinaryBroadcast),
    /// 9
    SarAircraftPosition(SarAircraftPosition),
    /// 10
    UtcDateInquiry(UtcDateInquiry),
    /// 12
    AddressedSafety(AddressedSafety),
    /// 14
    SafetyBroadcast(SafetyBroadcast),
    /// 15
    Interrogation(Interrogation),
    /// 16
    AssignedModeCommand(AssignedModeCommand),
    /// 17
    GnssBroadcast(GnssBroadcast),
    /// 18
    PositionReportClassB(PositionReportClassB),
    /// 19
    ExtendedClassBPosition(ExtendedClassBPosition),
    /// 20
    DataLinkManagement(DataLinkManagement),
    /// 21
    AidToNavigationReport(AidToNavigationReport),
    /// 22
    ChannelManagement(ChannelManagement),
    /// 23
    GroupAssignment(GroupAssignment),
    /// 24
    StaticDataReport(StaticDataReport),
    /// 25
    SingleSlotBinary(SingleSlotBinary),
    /// 26
    MultiSlotBinary(MultiSlotBinary),
    /// 27
    LongRangePosition(LongRangePosition),
    /// Ids 0 and 28 to 63: only the common header is meaningful.
    Unknown(Header),
}

impl AisMessage {
    /// Common header of the message.
    pub fn header(&self) -> Header {
        match self {
            AisMessage::PositionReportClassA(m) => m.header,
            AisMessage::BaseStationReport(m) => m.header,
            AisMessage::StaticAndVoyageData(m) => m.header,
            AisMessage::AddressedBinary(m) => m.header,
            AisMessage::BinaryAcknowledge(m) => m.header,
            AisMessage::BinaryBroadcast(m) => m.header,
            AisMessage::SarAircraftPosition(m) => m.header,
            AisMessage::UtcDateInquiry(m) => m.header,
            AisMessage::AddressedSafety(m) => m.header,
            AisMessage::SafetyBroadcast(m) => m.header,
            AisMessage::Interrogation(m) => m.header,
            AisMessage::AssignedModeCommand(m) => m.header,
            AisMessage::GnssBroadcast(m) => m.header,
            AisMessage::PositionReportClassB(m) => m.header,
            AisMessage::ExtendedClassBPosition(m) => m.header,
            AisMessage::DataLinkManagement(m) => m.header,
            AisMessage::AidToNavigationReport(m) => m.header,
            AisMessage::ChannelManagement(m) => m.header,
            AisMessage::GroupAssignment(m) => m.header,
            AisMessage::StaticDataReport(m) => m.header,
            AisMessage::SingleSlotBinary(m) => m.header,
            AisMessage::MultiSlotBinary(m) => m.header,
            AisMessage::LongRangePosition(m) => m.header,
            AisMessage::Unknown(header) => *header,
        }
    }

    /// How much of the message was understood.
    pub fn status(&self) -> Status {
        match self {
            AisMessage::AddressedBinary(m) => m.status,
            AisMessage::BinaryBroadcast(m) => m.status,
            AisMessage::Unknown(_) => Status::UnknownMessageType,
            _ => Status::Ok,
        }
    }
}

//==================================================================================DISPATCH
/// Decode an armored payload whose last `pad_bits` bits are fill.
///
/// The header is validated before anything else, so a payload shorter than
/// 38 bits fails with [`DecodeError::BadBitCount`] whatever its id.
pub fn decode(payload: &str, pad_bits: usize) -> Result<AisMessage, DecodeError> {
    let header = Header::from_payload(payload, pad_bits)?;
    let bits = BitBuffer::from_payload(payload, pad_bits)?;

    let message = match header.message_id {
        1..=3 => AisMessage::PositionReportClassA(PositionReportClassA::decode_bits(&bits)?),
        4 | 11 => AisMessage::BaseStationReport(BaseStationReport::decode_bits(&bits)?),
        5 => AisMessage::StaticAndVoyageData(StaticAndVoyageData::decode_bits(&bits)?),
        6 => AisMessage::AddressedBinary(AddressedBinary::decode_bits(&bits)?),
        7 | 13 => AisMessage::BinaryAcknowledge(BinaryAcknowledge::decode_bits(&bits)?),
        8 => AisMessage::BinaryBroadcast(BinaryBroadcast::decode_bits(&bits)?),
        9 => AisMessage::SarAircraftPosition(SarAircraftPosition::decode_bits(&bits)?),
        10 => AisMessage::UtcDateInquiry(UtcDateInquiry::decode_bits(&bits)?),
        12 => AisMessage::AddressedSafety(AddressedSafety::decode_bits(&bits)?),
        14 => AisMessage::SafetyBroadcast(SafetyBroadcast::decode_bits(&bits)?),
        15 => AisMessage::Interrogation(Interrogation::decode_bits(&bits)?),
        16 => AisMessage::AssignedModeCommand(AssignedModeCommand::decode_bits(&bits)?),
        17 => AisMessage::GnssBroadcast(GnssBroadcast::decode_bits(&bits)?),
        18 => AisMessage::PositionReportClassB(PositionReportClassB::decode_bits(&bits)?),
        19 => AisMessage::ExtendedClassBPosition(ExtendedClassBPosition::decode_bits(&bits)?),
        20 => AisMessage::DataLinkManagement(DataLinkManagement::decode_bits(&bits)?),
        21 => AisMessage::AidToNavigationReport(AidToNavigationReport::decode_bits(&bits)?),
        22 => AisMessage::ChannelManagement(ChannelManagement::decode_bits(&bits)?),
        23 => AisMessage::GroupAssignment(GroupAssignment::decode_bits(&bits)?),
        24 => AisMessage::StaticDataReport(StaticDataReport::decode_bits(&bits)?),
        25 => AisMessage::SingleSlotBinary(SingleSlotBinary::decode_bits(&bits)?),
        26 => AisMessage::MultiSlotBinary(MultiSlotBinary::decode_bits(&bits)?),
        27 => AisMessage::LongRangePosition(LongRangePosition::decode_bits(&bits)?),
        _ => {
            #[cfg(feature = "defmt")]
            defmt::debug!("No layout for message id {}", header.message_id);
            AisMessage::Unknown(header)
        }
    };

    #[cfg(feature = "defmt")]
    if !message.status().is_ok() {
        defmt::debug!(
            "Message {} from {} decoded with status {}",
            header.message_id,
            header.mmsi,
            message.status()
        );
    }
    Ok(message)
}

/// Decode a single-sentence `!AIVDM`/`!AIVDO` line.
///
/// Fragments of a longer transmission are rejected with
/// [`DecodeError::BadFragments`]; use the transport assembler for those.
pub fn decode_sentence(line: &str) -> Result<AisMessage, DecodeError> {
    let sentence = Sentence::parse(line)?;
    if !sentence.is_single() {
        return Err(DecodeError::BadFragments);
    }
    decode(sentence.body, sentence.pad_bits as usize)
}
