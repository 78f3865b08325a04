//! Message 6: addressed binary data and its application sub-layouts.
//!
//! International function messages (DAC 1, IMO Circ 236/289), the test
//! application (DAC 0) and the UK/ROI lighthouse authorities' AtoN monitoring
//! (DAC 235 and 250, FI 10).
use super::{addressed_data as reader, unparsed_data, ApplicationId};
use crate::core::{
    BitLength, Position, UtcTime, ADDRESSED_BINARY_HEADER_BITS, HEADER_BITS, MAX_STANDARD_BITS,
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
const KNOWN_DACS: &[u16] = &[0, 1, 235, 250];

//==================================================================================ENVELOPE
/// Message 6 with its addressing fields and decoded application content.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AddressedBinary {
    pub header: Header,
    pub sequence_number: u8,
    pub destination_mmsi: u32,
    pub retransmitted: bool,
    pub spare: u8,
    pub application_id: ApplicationId,
    pub content: AddressedContent,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AddressedContent {
    AtonMonitoring(AtonMonitoring),
    TextTelegram(TextTelegram),
    ApplicationAck(ApplicationAck),
    DacFiInterrogation(DacFiInterrogation),
    CapabilityInterrogation(CapabilityInterrogation),
    CapabilityReply(CapabilityReply),
    AckWithResponse(AckWithResponse),
    DangerousCargoIndication(DangerousCargoIndication),
    TidalWindow(TidalWindow),
    ClearanceToEnterPort(ClearanceToEnterPort),
    BerthingData(BerthingData),
    DangerousCargo(DangerousCargo),
    TidalWindowV2(TidalWindowV2),
    PersonsOnBoard(PersonsOnBoard),
    LighthouseAtonMonitoring(LighthouseAtonMonitoring),
    /// Application data nobody here decodes, packed MSB first.
    Unparsed { data: Vec<u8> },
}

impl AddressedContent {
    /// Decode the application data selected by `(dac, fi)`.
    pub fn decode(id: ApplicationId, bits: &BitBuffer) -> Result<(Self, Status), DecodeError> {
        let content = match (id.dac, id.fi) {
            (0, 0) => AtonMonitoring::decode_bits(bits).map(Self::AtonMonitoring),
            (1, 0) => TextTelegram::decode_bits(bits).map(Self::TextTelegram),
            (1, 1) => ApplicationAck::decode_bits(bits).map(Self::ApplicationAck),
            (1, 2) => DacFiInterrogation::decode_bits(bits).map(Self::DacFiInterrogation),
            (1, 3) => {
                CapabilityInterrogation::decode_bits(bits).map(Self::CapabilityInterrogation)
            }
            (1, 4) => CapabilityReply::decode_bits(bits).map(Self::CapabilityReply),
            (1, 5) => AckWithResponse::decode_bits(bits).map(Self::AckWithResponse),
            (1, 12) => {
                DangerousCargoIndication::decode_bits(bits).map(Self::DangerousCargoIndication)
            }
            (1, 14) => TidalWindow::decode_bits(bits).map(Self::TidalWindow),
            (1, 18) => ClearanceToEnterPort::decode_bits(bits).map(Self::ClearanceToEnterPort),
            (1, 20) => BerthingData::decode_bits(bits).map(Self::BerthingData),
            (1, 25) => DangerousCargo::decode_bits(bits).map(Self::DangerousCargo),
            (1, 32) => TidalWindowV2::decode_bits(bits).map(Self::TidalWindowV2),
            (1, 40) => PersonsOnBoard::decode_bits(bits).map(Self::PersonsOnBoard),
            (235 | 250, 10) => {
                LighthouseAtonMonitoring::decode_bits(bits).map(Self::LighthouseAtonMonitoring)
            }
            _ => {
                let status = if KNOWN_DACS.contains(&id.dac) {
                    Status::SubMessageNotImplemented
                } else {
                    Status::UnknownMessageType
                };
                #[cfg(feature = "defmt")]
                defmt::debug!("Message 6 application {}/{} kept raw", id.dac, id.fi);
                let data = unparsed_data(reader(bits))?;
                return Ok((Self::Unparsed { data }, status));
            }
        }?;
        Ok((content, Status::Ok))
    }
}

impl FromPayload for AddressedBinary {
    const BIT_LENGTH: BitLength = BitLength::Range {
        min: ADDRESSED_BINARY_HEADER_BITS,
        max: MAX_STANDARD_BITS,
    };
    const MESSAGE_IDS: &'static [u8] = &[6];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = BitReader::at(bits, HEADER_BITS);
        let header = Header::from_bits(bits)?;
        let sequence_number = reader.read_u8(2)?;
        let destination_mmsi = reader.read_u32(30)?;
        let retransmitted = reader.read_bool()?;
        let spare = reader.read_u8(1)?;
        let application_id = ApplicationId::read(&mut reader)?;
        let (content, status) = AddressedContent::decode(application_id, bits)?;

        Ok(Self {
            header,
            sequence_number,
            destination_mmsi,
            retransmitted,
            spare,
            application_id,
            content,
            status,
        })
    }
}

//==================================================================================DAC_0
/// 6/0/0: AtoN monitoring test application.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AtonMonitoring {
    pub sub_id: u16,
    /// Volts.
    pub voltage: f64,
    /// Amperes.
    pub current: f64,
    pub dc_power_supply: bool,
    pub light_on: bool,
    pub battery_low: bool,
    pub off_position: bool,
    pub spare: u8,
}

impl FromPayload for AtonMonitoring {
    const BIT_LENGTH: BitLength = BitLength::Exact(136);
    const MESSAGE_IDS: &'static [u8] = &[6];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(0, 0)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            sub_id: reader.read_u16(16)?,
            voltage: reader.read_u16(12)? as f64 / 10.0,
            current: reader.read_u16(10)? as f64 / 10.0,
            dc_power_supply: reader.read_bool()?,
            light_on: reader.read_bool()?,
            battery_low: reader.read_bool()?,
            off_position: reader.read_bool()?,
            spare: reader.read_u8(6)?,
        })
    }
}

//==================================================================================DAC_1
/// 6/1/0: addressed text telegram.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextTelegram {
    pub ack_required: bool,
    pub sequence_number: u16,
    pub text: String,
}

impl FromPayload for TextTelegram {
    const BIT_LENGTH: BitLength = BitLength::Range {
        min: 100,
        max: MAX_STANDARD_BITS,
    };
    const MESSAGE_IDS: &'static [u8] = &[6];
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

/// 6/1/1: acknowledgement of an addressed application message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ApplicationAck {
    pub ack_dac: u16,
    pub sequence_number: u16,
    pub spare: u8,
}

impl FromPayload for ApplicationAck {
    const BIT_LENGTH: BitLength = BitLength::Exact(112);
    const MESSAGE_IDS: &'static [u8] = &[6];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 1)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            ack_dac: reader.read_u16(10)?,
            sequence_number: reader.read_u16(11)?,
            spare: reader.read_u8(3)?,
        })
    }
}

/// 6/1/2: request for a specific application message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DacFiInterrogation {
    pub requested: ApplicationId,
}

impl FromPayload for DacFiInterrogation {
    const BIT_LENGTH: BitLength = BitLength::Exact(104);
    const MESSAGE_IDS: &'static [u8] = &[6];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 2)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        Ok(Self {
            requested: ApplicationId::read(&mut reader(bits))?,
        })
    }
}

/// 6/1/3: request for the function identifiers supported under a DAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CapabilityInterrogation {
    pub requested_dac: u16,
    pub spare: u8,
}

impl FromPayload for CapabilityInterrogation {
    const BIT_LENGTH: BitLength = BitLength::Exact(104);
    const MESSAGE_IDS: &'static [u8] = &[6];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 3)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            requested_dac: reader.read_u16(10)?,
            spare: reader.read_u8(6)?,
        })
    }
}

/// 6/1/4: function identifiers supported under a DAC.
///
/// Bit `n` of `available` (and of `reserved`) describes FI `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CapabilityReply {
    pub ack_dac: u16,
    pub available: u64,
    pub reserved: u64,
    pub spare: u8,
}

impl CapabilityReply {
    pub fn is_available(&self, fi: u8) -> bool {
        fi < 64 && (self.available >> fi) & 1 == 1
    }
}

impl FromPayload for CapabilityReply {
    const BIT_LENGTH: BitLength = BitLength::Exact(232);
    const MESSAGE_IDS: &'static [u8] = &[6];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 4)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        let ack_dac = reader.read_u16(10)?;
        let mut available = 0u64;
        let mut reserved = 0u64;
        for fi in 0..64 {
            available |= (reader.read_bool()? as u64) << fi;
            reserved |= (reader.read_bool()? as u64) << fi;
        }
        Ok(Self {
            ack_dac,
            available,
            reserved,
            spare: reader.read_u8(6)?,
        })
    }
}

/// 6/1/5: acknowledgement carrying an application response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AckWithResponse {
    pub acknowledged: ApplicationId,
    pub sequence_number: u16,
    pub ai_available: bool,
    pub ai_response: u8,
    pub spare: u64,
}

impl FromPayload for AckWithResponse {
    const BIT_LENGTH: BitLength = BitLength::Exact(168);
    const MESSAGE_IDS: &'static [u8] = &[6];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 5)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            acknowledged: ApplicationId::read(&mut reader)?,
            sequence_number: reader.read_u16(11)?,
            ai_available: reader.read_bool()?,
            ai_response: reader.read_u8(3)?,
            spare: reader.read_u64(49)?,
        })
    }
}

/// 6/1/12: dangerous cargo indication (withdrawn IMO Circ 236 layout).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DangerousCargoIndication {
    /// UN/LOCODE.
    pub last_port: String,
    pub departure: UtcTime,
    pub next_port: String,
    pub arrival: UtcTime,
    pub main_danger: String,
    pub imo_category: String,
    pub un_number: u16,
    pub quantity: u16,
    pub quantity_unit: u8,
    pub spare: u8,
}

impl FromPayload for DangerousCargoIndication {
    const BIT_LENGTH: BitLength = BitLength::Exact(360);
    const MESSAGE_IDS: &'static [u8] = &[6];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 12)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            last_port: reader.read_text(30)?,
            departure: reader.read_month_day_hour_minute()?,
            next_port: reader.read_text(30)?,
            arrival: reader.read_month_day_hour_minute()?,
            main_danger: reader.read_text(120)?,
            imo_category: reader.read_text(24)?,
            un_number: reader.read_u16(13)?,
            quantity: reader.read_u16(10)?,
            quantity_unit: reader.read_u8(2)?,
            spare: reader.read_u8(3)?,
        })
    }
}

/// Window of tidal passage for one point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TidalPassage {
    pub position: Position,
    pub from_hour: u8,
    pub from_minute: u8,
    pub to_hour: u8,
    pub to_minute: u8,
    pub current_direction: Option<u16>,
    /// Knots.
    pub current_speed: f64,
}

/// 6/1/14: tidal window (IMO Circ 236), up to three passages.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TidalWindow {
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub passages: Vec<TidalPassage>,
}

impl FromPayload for TidalWindow {
    const BIT_LENGTH: BitLength = BitLength::Repeated {
        header: 97,
        record: 93,
        min_records: 1,
        max_records: 3,
    };
    const MESSAGE_IDS: &'static [u8] = &[6];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 14)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        let month = reader.read_opt_u8(4, 0)?;
        let day = reader.read_opt_u8(5, 0)?;
        let mut passages = Vec::new();
        for _ in 0..Self::BIT_LENGTH.record_count(bits.len()) {
            passages.push(TidalPassage {
                position: reader.read_position_lat_first(27, 28, TEN_THOUSANDTH_MINUTE)?,
                from_hour: reader.read_u8(5)?,
                from_minute: reader.read_u8(6)?,
                to_hour: reader.read_u8(5)?,
                to_minute: reader.read_u8(6)?,
                current_direction: reader.read_u16_below(9, 360)?,
                current_speed: reader.read_u8(7)? as f64 / 10.0,
            });
        }
        Ok(Self {
            month,
            day,
            passages,
        })
    }
}

/// 6/1/18: clearance time to enter port.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClearanceToEnterPort {
    pub link_id: u16,
    pub clearance: UtcTime,
    pub port_and_berth: String,
    pub destination: String,
    /// 1/1000 minute resolution.
    pub position: Position,
    pub spare: u64,
}

impl FromPayload for ClearanceToEnterPort {
    const BIT_LENGTH: BitLength = BitLength::Exact(360);
    const MESSAGE_IDS: &'static [u8] = &[6];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 18)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            link_id: reader.read_u16(10)?,
            clearance: reader.read_month_day_hour_minute()?,
            port_and_berth: reader.read_text(120)?,
            destination: reader.read_text(30)?,
            position: reader.read_position(25, 24, THOUSANDTH_MINUTE)?,
            spare: reader.read_u64(43)?,
        })
    }
}

/// 6/1/20: berthing data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BerthingData {
    pub link_id: u16,
    /// Metres.
    pub berth_length: u16,
    /// Metres.
    pub water_depth: f64,
    pub mooring_position: u8,
    pub berthing_time: UtcTime,
    pub services_known: bool,
    /// 26 two-bit service status codes (agent, fuel, chandler, ...).
    pub services: [u8; 26],
    pub berth_name: String,
    pub position: Position,
}

impl FromPayload for BerthingData {
    const BIT_LENGTH: BitLength = BitLength::Exact(360);
    const MESSAGE_IDS: &'static [u8] = &[6];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 20)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        let link_id = reader.read_u16(10)?;
        let berth_length = reader.read_u16(9)?;
        let water_depth = reader.read_u8(8)? as f64 / 10.0;
        let mooring_position = reader.read_u8(3)?;
        let berthing_time = reader.read_month_day_hour_minute()?;
        let services_known = reader.read_bool()?;
        let mut services = [0u8; 26];
        for service in services.iter_mut() {
            *service = reader.read_u8(2)?;
        }
        Ok(Self {
            link_id,
            berth_length,
            water_depth,
            mooring_position,
            berthing_time,
            services_known,
            services,
            berth_name: reader.read_text(120)?,
            position: reader.read_position(25, 24, THOUSANDTH_MINUTE)?,
        })
    }
}

/// One cargo entry of 6/1/25, tagged by its 4-bit code type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CargoEntry {
    ImdgClass { class: u8 },
    /// IMSBC (bulk cargo) group with its IMDG class.
    BulkCargo { bc_group: u8, imdg_class: u8 },
    MarpolOil { oil_type: u8 },
    MarpolCategory { category: u8 },
    /// Code type without a defined sub-layout; the 13 bits are kept.
    Other { code: u8, raw: u16 },
}

impl CargoEntry {
    fn read(reader: &mut BitReader) -> Result<Self, DecodeError> {
        let code = reader.read_u8(4)?;
        let entry = match code {
            1 => {
                let class = reader.read_u8(7)?;
                reader.advance(6)?;
                CargoEntry::ImdgClass { class }
            }
            2 => {
                let bc_group = reader.read_u8(3)?;
                let imdg_class = reader.read_u8(7)?;
                reader.advance(3)?;
                CargoEntry::BulkCargo {
                    bc_group,
                    imdg_class,
                }
            }
            3 => {
                let oil_type = reader.read_u8(4)?;
                reader.advance(9)?;
                CargoEntry::MarpolOil { oil_type }
            }
            4 => {
                let category = reader.read_u8(3)?;
                reader.advance(10)?;
                CargoEntry::MarpolCategory { category }
            }
            _ => CargoEntry::Other {
                code,
                raw: reader.read_u16(13)?,
            },
        };
        Ok(entry)
    }
}

/// 6/1/25: dangerous cargo indication, up to 28 entries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DangerousCargo {
    pub amount_unit: u8,
    pub amount: u16,
    pub cargos: Vec<CargoEntry>,
}

impl FromPayload for DangerousCargo {
    const BIT_LENGTH: BitLength = BitLength::Repeated {
        header: 100,
        record: 17,
        min_records: 0,
        max_records: 28,
    };
    const MESSAGE_IDS: &'static [u8] = &[6];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 25)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        let amount_unit = reader.read_u8(2)?;
        let amount = reader.read_u16(10)?;
        let cargos = (0..Self::BIT_LENGTH.record_count(bits.len()))
            .map(|_| CargoEntry::read(&mut reader))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            amount_unit,
            amount,
            cargos,
        })
    }
}

/// 6/1/32: tidal window (IMO Circ 289), up to three passages at 1/1000 minute.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TidalWindowV2 {
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub passages: Vec<TidalPassage>,
}

impl FromPayload for TidalWindowV2 {
    const BIT_LENGTH: BitLength = BitLength::Repeated {
        header: 97,
        record: 88,
        min_records: 1,
        max_records: 3,
    };
    const MESSAGE_IDS: &'static [u8] = &[6];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 32)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        let month = reader.read_opt_u8(4, 0)?;
        let day = reader.read_opt_u8(5, 0)?;
        let mut passages = Vec::new();
        for _ in 0..Self::BIT_LENGTH.record_count(bits.len()) {
            passages.push(TidalPassage {
                position: reader.read_position(25, 24, THOUSANDTH_MINUTE)?,
                from_hour: reader.read_u8(5)?,
                from_minute: reader.read_u8(6)?,
                to_hour: reader.read_u8(5)?,
                to_minute: reader.read_u8(6)?,
                current_direction: reader.read_u16_below(9, 360)?,
                current_speed: reader.read_u8(8)? as f64 / 10.0,
            });
        }
        Ok(Self {
            month,
            day,
            passages,
        })
    }
}

/// 6/1/40: number of persons on board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PersonsOnBoard {
    pub persons: u16,
    pub spare: u8,
}

impl FromPayload for PersonsOnBoard {
    const BIT_LENGTH: BitLength = BitLength::Exact(104);
    const MESSAGE_IDS: &'static [u8] = &[6];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(1, 40)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            persons: reader.read_u16(13)?,
            spare: reader.read_u8(3)?,
        })
    }
}

//==================================================================================DAC_235_250
/// 6/235/10 and 6/250/10: lighthouse authority AtoN monitoring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LighthouseAtonMonitoring {
    /// Internal supply, volts.
    pub analogue_internal: f64,
    /// External analogue inputs, volts.
    pub analogue_external_1: f64,
    pub analogue_external_2: f64,
    pub racon_status: u8,
    pub light_status: u8,
    pub alarm: bool,
    /// Digital inputs 7..0.
    pub digital_inputs: u8,
    pub off_position: bool,
    pub spare: u8,
}

/// Volts per count of the analogue inputs.
const ANALOGUE_SCALE: f64 = 0.05;

impl FromPayload for LighthouseAtonMonitoring {
    const BIT_LENGTH: BitLength = BitLength::Exact(136);
    const MESSAGE_IDS: &'static [u8] = &[6];
    const APPLICATION_IDS: &'static [(u16, u8)] = &[(235, 10), (250, 10)];

    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        let mut reader = reader(bits);
        Ok(Self {
            analogue_internal: reader.read_u16(10)? as f64 * ANALOGUE_SCALE,
            analogue_external_1: reader.read_u16(10)? as f64 * ANALOGUE_SCALE,
            analogue_external_2: reader.read_u16(10)? as f64 * ANALOGUE_SCALE,
            racon_status: reader.read_u8(2)?,
            light_status: reader.read_u8(2)?,
            alarm: reader.read_bool()?,
            digital_inputs: reader.read_u8(8)?,
            off_position: reader.read_bool()?,
            spare: reader.read_u8(4)?,
        })
    }
}
