//! AIS transport layer: NMEA 0183 `!AIVDM`/`!AIVDO` framing, checksum
//! validation, and reassembly of multi-sentence payloads.
//!
//! A payload longer than one sentence is split across up to nine fragments
//! sharing a sequential message id; only the last one carries the pad bits.

pub mod assembler;
pub mod sentence;

/// Highest fragment count a sentence may announce.
pub const MAX_FRAGMENTS: u8 = 9;
