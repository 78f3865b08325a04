//! Public traits exposed by the codec layer. They decouple the typed message
//! records from armoring and length validation and give the dispatch layer a
//! uniform entry point.
use crate::core::BitLength;
use crate::error::DecodeError;
use crate::infra::codec::armor::BitBuffer;

//==================================================================================FROM_PAYLOAD
/// Decode an armored AIS payload into a typed record.
///
/// Implementors describe their layout through the associated constants and read
/// their fields in [`FromPayload::from_bits`]. Validation happens once in the
/// provided methods, so `from_bits` never runs on a payload of the wrong length
/// or on another message's bits.
pub trait FromPayload: Sized {
    /// Accepted payload lengths, pad bits removed.
    const BIT_LENGTH: BitLength;
    /// Message ids sharing this layout.
    const MESSAGE_IDS: &'static [u8];
    /// `(DAC, FI)` pairs for application-specific binary content; empty for
    /// plain message layouts.
    const APPLICATION_IDS: &'static [(u16, u8)] = &[];

    /// Read every field from a buffer already validated by [`FromPayload::decode_bits`].
    fn from_bits(bits: &BitBuffer) -> Result<Self, DecodeError>;

    /// Check the length rule and the identifiers, then decode.
    fn decode_bits(bits: &BitBuffer) -> Result<Self, DecodeError> {
        Self::BIT_LENGTH.check(bits.len())?;

        let message_id = bits.unsigned(0, 6) as u8;
        if !Self::MESSAGE_IDS.contains(&message_id) {
            return Err(DecodeError::BadMsgContent);
        }
        if !Self::APPLICATION_IDS.is_empty() {
            match application_id(message_id, bits) {
                Some(id) if Self::APPLICATION_IDS.contains(&id) => {}
                _ => return Err(DecodeError::BadMsgContent),
            }
        }

        Self::from_bits(bits)
    }

    /// De-armor `payload`, drop its `pad_bits` fill bits, then decode.
    fn from_payload(payload: &str, pad_bits: usize) -> Result<Self, DecodeError> {
        let bits = BitBuffer::from_payload(payload, pad_bits)?;
        Self::decode_bits(&bits)
    }
}

/// `(DAC, FI)` of an addressed (6) or broadcast (8) binary message.
pub fn application_id(message_id: u8, bits: &BitBuffer) -> Option<(u16, u8)> {
    let offset = match message_id {
        6 => 72,
        8 => 40,
        _ => return None,
    };
    if bits.len() < offset + 16 {
        return None;
    }
    Some((
        bits.unsigned(offset, 10) as u16,
        bits.unsigned(offset + 10, 6) as u8,
    ))
}
