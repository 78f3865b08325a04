//! Message 8: broadcast binary data.
//!
//! The envelope dispatches on `(DAC, FI)`; the international (DAC 1) layouts
//! that are not weather, area notices or sensor reports live here.
use super::area_notice::AreaNotice;
use super::inland::{EmmaWarning, InlandPersonsOnBoard, InlandStaticVoyage, SignalStatus, WaterLevels};
use super::sensor_report::SensorReports;
use super::weather::{MetHydro, MetHydroV2, WeatherReport};
use super::{broadcast_data as reader, unparsed_data, ApplicationId};
use crate::core::{
    BitLength, Position, UtcTime, BROADCAST_BINARY_HEADER_BITS, HEADER_BITS, MAX_STANDARD_BITS,
    TEN_THOUSANDTH_MINUTE, THOUSANDTH_MINUTE,
};
use crate::error::{DecodeError, Status};
use crate::infra::codec::armor::BitBuffer;
use crate::infra::codec::bits::BitReader;
use crate::infra::codec::traits::FromPayload;
use crate::protocol::messages::header::Header;
use alloc::string::String;
use alloc::vec::Vec;

/// DACs with at least one decoded function identifier.
const KNOWN_DACS: &[u16] = &[1, 200];

//==================================================================================ENVELOPE
/// Message 8 with its decoded application content.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BinaryBroadcast {
    pub header: Header,
    pub spare: u8,
    pub application_id: ApplicationId,
    pub content: BroadcastContent,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BroadcastContent {
    Text(BroadcastText),
    MetHydro(MetHydro),
    FairwayClosed(FairwayClosed),
    AirGap(AirGap),
    PersonsOnBoard(PersonsOnBoardReport),
    VtsTargets(VtsTargets),
    MarineTrafficSignal(MarineTrafficSignal),
    WeatherReport(WeatherReport),
    AreaNotice(AreaNotice),
    ExtendedShipData(ExtendedShipData),
    SensorReports(SensorReports),
    Route(Route),
    TextDescription(TextDescription),
    MetHydroV2(MetHydroV2),
    InlandStaticVoyage(InlandStaticVoyage),
    EmmaWarning(EmmaWarning),
    WaterLevels(WaterLevels),
    SignalStatus(SignalStatus),
    InlandPersonsOnBoard(InlandPersonsOnBoard),
    /// Application data nobody here decodes, packed MSB first.
    Unparsed { data: Vec<u8> },
}

impl BroadcastContent {
    /// Decode the application data selected by `(dac, fi)`.
    pub fn decode(id: ApplicationId, bits: &BitBuffer) -> Result<(Self, Status), DecodeError> {
        let content = match (id.dac, id.fi) {
            (1, 0) => BroadcastText::decode_bits(bits).map(Self::Text),
            (1, 11) => MetHydro::decode_bits(bits).map(Self::MetHydro),
            (1, 13) => FairwayClosed::decode_bits(bits).map(Self::FairwayClosed),
            (1, 15) => AirGap::decode_bits(bits).map(Self::AirGap),
            (1, 16) => PersonsOnBoardReport::decode_bits(bits).map(Self::PersonsOnBoard),
            (1, 17) => VtsTargets::decode_bits(bits).map(Self::VtsTargets),
            (1, 19) => MarineTrafficSignal::decode_bits(bits).map(Self::MarineTrafficSignal),
            (1, 21) => WeatherReport::decode_bits(bits).map(Self::WeatherReport),
            (1, 22) => AreaNotice::decode_bits(bits).map(Self::AreaNotice),
            (1, 24) => ExtendedShipData::decode_bits(bits).map(Self::ExtendedShipData),
            (1, 26) => SensorReports::decode_bits(bits).map(Self::SensorReports),
            (1, 27) => Route::decode_bits(bits).map(Self::Route),
            (1, 29) => TextDescription::decode_bits(bits).map(Self::TextDescription),
            (1, 31) => MetHydroV2::decode_bits(bits).map(Self::MetHydroV2),
            (200, 10) => InlandStaticVoyage::decode_bits(bits).map(Self::InlandStaticVoyage),
            (200, 23) => EmmaWarning::decode_bits(bits).map(Self::EmmaWarning),
            (200, 24) => WaterLevels::decode_bits(bits).map(Self::WaterLevels),
            (200, 40) => SignalStatus::decode_bits(bits).map(Self::SignalStatus),
            (200, 55) => InlandPersonsOnBoard::decode_bits(bits).map(Self::InlandPersonsOnBoard),
            _ => {
                let status = if KNOWN_DACS.contains(&id.dac) {
                    Status::SubMessageNotImplemented
                } else {
                    Status::UnknownMessageType
                };
                #[cfg(feature = "defmt")]
                defmt::debug!("Message 8 application {}/{} kept raw", id.dac, id.fi);
                let data = unparsed_data(reader(bits))?;
                return Ok((Self::Unparsed { data }, status));
            }
        }?;
        let status = content.status();
        Ok((content, status))
    }

    /// Outcome of decoded content: reserved sub-records downgrade it.
    fn status(&self) -> Status {
        match self {
            BroadcastContent::AreaNotice(notice) => notice.status(),
            BroadcastContent::SensorReports(reports) => reports.status(),
            _ => Status::Ok,
        }
    }
}

impl FromPayload for BinaryBroadcast {
    const BIT_LENGTH: BitLength = BitLength::Range {
        min: BROADCAST_BINARY_HEADER_BITS,
        max: MAX_STANDARD_BITS,
    };
    const MESSAGE_IDS: &'static [u8] = &[8];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        let header = Header::from_bits(bits)?;
        let spare = reader.read_u8(2)?;
        let application_id = ApplicationId::read(&mut reader)?;
        let (content, status) = BroadcastContent::decode(application_id, bits)?;

        Ok(Self {
            header,
            spare,
            application_id,
            content,
            status,
        })
    }
}

//==================================================================================DAC_1
/// 8/1/0: broadcast text telegram.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BroadcastText {
    pub ack_required: bool,
    pub sequence_number: u16,
    pub text: String,
}

impl FromPayload for BroadcastText {
    const BIT_LENGTH: BitLength = BitLength::Range {
        min: 68,
        max: MAX_STANDARD_BITS,
    };
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 0)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            ack_required: reader.read_bool()?,
            sequence_number: reader.read_u16(11)?,
            text: reader.read_text_to_end()?,
        })
    }
}

/// Day (5) / month (4) / hour (5) / minute (6) stamp used by 8/1/13.
fn read_day_first(reader: &mut BitReader) -> Result<UtcTime, DecodeError> {
    let day = reader.read_opt_u8(5, 0)?;
    let month = reader.read_opt_u8(4, 0)?;
    Ok(UtcTime {
        month,
        day,
        hour: reader.read_opt_u8(5, 24)?,
        minute: reader.read_opt_u8(6, 60)?,
    })
}

/// 8/1/13: fairway closed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FairwayClosed {
    pub reason: String,
    pub location_from: String,
    pub location_to: String,
    pub radius: u16,
    pub distance_unit: u8,
    pub closed_from: UtcTime,
    pub closed_until: UtcTime,
    pub spare: u8,
}

impl FromPayload for FairwayClosed {
    const BIT_LENGTH: BitLength = BitLength::Exact(472);
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 13)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            reason: reader.read_text(120)?,
            location_from: reader.read_text(120)?,
            location_to: reader.read_text(120)?,
            radius: reader.read_u16(10)?,
            distance_unit: reader.read_u8(2)?,
            closed_from: read_day_first(&mut reader)?,
            closed_until: read_day_first(&mut reader)?,
            spare: reader.read_u8(4)?,
        })
    }
}

/// 8/1/15: extended ship static data, air draught only.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AirGap {
    /// Metres, `None` when not available.
    pub air_draught: Option<f64>,
    pub spare: u8,
}

impl FromPayload for AirGap {
    const BIT_LENGTH: BitLength = BitLength::Exact(72);
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 15)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            air_draught: reader.read_opt_u16(11, 0)?.map(|raw| raw as f64 / 10.0),
            spare: reader.read_u8(5)?,
        })
    }
}

/// 8/1/16: number of persons on board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PersonsOnBoardReport {
    pub persons: u16,
    pub spare: u8,
}

impl FromPayload for PersonsOnBoardReport {
    const BIT_LENGTH: BitLength = BitLength::Exact(72);
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 16)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            persons: reader.read_u16(13)?,
            spare: reader.read_u8(3)?,
        })
    }
}

/// One target seen by a VTS.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VtsTarget {
    /// 0 MMSI, 1 IMO number, 2 call sign, 3 other.
    pub id_type: u8,
    pub id: String,
    pub spare: u8,
    pub position: Position,
    pub cog: Option<u16>,
    pub timestamp: u8,
    /// Knots, `None` when not available.
    pub sog: Option<u8>,
}

/// 8/1/17: VTS-generated synthetic targets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VtsTargets {
    pub targets: Vec<VtsTarget>,
}

impl FromPayload for VtsTargets {
    const BIT_LENGTH: BitLength = BitLength::Repeated {
        header: 56,
        record: 120,
        min_records: 0,
        max_records: 4,
    };
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 17)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        let mut targets = Vec::new();
        for _ in 0..Self::BIT_LENGTH.record_count(bits.len()) {
            targets.push(VtsTarget {
                id_type: reader.read_u8(2)?,
                id: reader.read_text(42)?,
                spare: reader.read_u8(4)?,
                position: reader.read_position_lat_first(24, 25, THOUSANDTH_MINUTE)?,
                cog: reader.read_u16_below(9, 360)?,
                timestamp: reader.read_u8(6)?,
                sog: reader.read_opt_u8(8, 255)?,
            });
        }
        Ok(Self { targets })
    }
}

/// 8/1/19: marine traffic signal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarineTrafficSignal {
    pub link_id: u16,
    pub station_name: String,
    pub position: Position,
    pub status: u8,
    pub signal: u8,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub next_signal: u8,
}

impl FromPayload for MarineTrafficSignal {
    // 360 when padded to two slots.
    const BIT_LENGTH: BitLength = BitLength::OneOf(&[258, 360]);
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 19)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            link_id: reader.read_u16(10)?,
            station_name: reader.read_text(120)?,
            position: reader.read_position(25, 24, THOUSANDTH_MINUTE)?,
            status: reader.read_u8(2)?,
            signal: reader.read_u8(5)?,
            hour: reader.read_opt_u8(5, 24)?,
            minute: reader.read_opt_u8(6, 60)?,
            next_signal: reader.read_u8(5)?,
        })
    }
}

/// 8/1/24: extended ship static and voyage related data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExtendedShipData {
    pub link_id: u16,
    /// Metres, `None` when not available.
    pub air_draught: Option<f64>,
    pub last_port: String,
    pub next_ports: [String; 2],
    /// SOLAS equipment status, two bits per item.
    pub solas_status: [u8; 26],
    pub ice_class: u8,
    /// Horsepower.
    pub shaft_power: u32,
    pub vhf_channel: u16,
    pub lloyds_ship_type: String,
    pub gross_tonnage: u32,
    pub laden_ballast: u8,
    pub heavy_fuel_oil: u8,
    pub light_fuel_oil: u8,
    pub diesel: u8,
    /// Tonnes.
    pub bunker_oil: u16,
    pub persons: u16,
    pub spare: u16,
}

impl FromPayload for ExtendedShipData {
    const BIT_LENGTH: BitLength = BitLength::Exact(360);
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 24)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        let link_id = reader.read_u16(10)?;
        let air_draught = reader.read_opt_u16(13, 0)?.map(|raw| raw as f64 / 10.0);
        let last_port = reader.read_text(30)?;
        let next_ports = [reader.read_text(30)?, reader.read_text(30)?];
        let mut solas_status = [0u8; 26];
        for status in solas_status.iter_mut() {
            *status = reader.read_u8(2)?;
        }
        Ok(Self {
            link_id,
            air_draught,
            last_port,
            next_ports,
            solas_status,
            ice_class: reader.read_u8(4)?,
            shaft_power: reader.read_u32(18)?,
            vhf_channel: reader.read_u16(12)?,
            lloyds_ship_type: reader.read_text(42)?,
            gross_tonnage: reader.read_u32(18)?,
            laden_ballast: reader.read_u8(2)?,
            heavy_fuel_oil: reader.read_u8(2)?,
            light_fuel_oil: reader.read_u8(2)?,
            diesel: reader.read_u8(2)?,
            bunker_oil: reader.read_u16(14)?,
            persons: reader.read_u16(13)?,
            spare: reader.read_u16(10)?,
        })
    }
}

/// 8/1/27: route information broadcast.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    pub link_id: u16,
    pub sender_type: u8,
    pub route_type: u8,
    pub start: UtcTime,
    /// Minutes.
    pub duration: u32,
    /// Waypoint count as transmitted; `waypoints` holds what the length carries.
    pub stated_waypoints: u8,
    pub waypoints: Vec<Position>,
}

impl FromPayload for Route {
    const BIT_LENGTH: BitLength = BitLength::Repeated {
        header: 117,
        record: 55,
        min_records: 0,
        max_records: 16,
    };
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 27)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        let link_id = reader.read_u16(10)?;
        let sender_type = reader.read_u8(3)?;
        let route_type = reader.read_u8(5)?;
        let start = reader.read_month_day_hour_minute()?;
        let duration = reader.read_u32(18)?;
        let stated_waypoints = reader.read_u8(5)?;
        let waypoints = (0..Self::BIT_LENGTH.record_count(bits.len()))
            .map(|_| reader.read_position(28, 27, TEN_THOUSANDTH_MINUTE))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            link_id,
            sender_type,
            route_type,
            start,
            duration,
            stated_waypoints,
            waypoints,
        })
    }
}

/// 8/1/29: text description linked to another application message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextDescription {
    pub link_id: u16,
    pub text: String,
}

impl FromPayload for TextDescription {
    const BIT_LENGTH: BitLength = BitLength::Range {
        min: 72,
        max: MAX_STANDARD_BITS,
    };
    const MESSAGE_IDS: &'static [u8] = &[8];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 29)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            link_id: reader.read_u16(10)?,
            text: reader.read_text_to_end()?,
        })
    }
}
