//! Payload codec: armor alphabet, MSB-first bit reader, and the decoding trait
//! implemented by every message record.
pub mod armor;
pub mod bits;
pub mod traits;
