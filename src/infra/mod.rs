//! Low-level infrastructure shared by every message layout.
pub mod codec;
