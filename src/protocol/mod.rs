//! High-level components of the AIS protocol: lookup tables, sentence
//! transport, message structures, and position-report extraction.
pub mod lookups;
pub mod messages;
pub mod reports;
pub mod transport;
