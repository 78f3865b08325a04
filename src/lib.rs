//! `korri-ais` library: primitives and protocols required to decode AIS
//! (ITU-R M.1371) radio messages carried in NMEA 0183 `!AIVDM`/`!AIVDO`
//! sentences in a `no_std` environment. The crate exposes the infrastructure
//! modules (6-bit armoring, bit reading), protocol logic (sentence framing,
//! fragment reassembly, message decoders, dispatch) and a batch
//! position-report extractor.
#![no_std]
extern crate alloc;
//==================================================================================
/// Core data types shared by the codec primitives and the message decoders.
pub mod core;
/// Decode errors (bit counts, armoring, framing, fragment sequencing) and the
/// soft decode status attached to partially understood messages.
pub mod error;
/// 6-bit armoring and bit-level readers.
pub mod infra;
/// AIS protocol implementation: sentence transport, message layouts,
/// lookup tables, and position reports.
pub mod protocol;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{DecodeError, ReassemblyError, Status};
pub use protocol::messages::{decode, decode_sentence, AisMessage};
//==================================================================================
