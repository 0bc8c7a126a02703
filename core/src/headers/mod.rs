//! headers/mod.rs
//! Container envelope: fixed header, encode/decode, payload marker dispatch.
//!
//! Byte layout (big-endian):
//! ```text
//! 0..4  magic "CPSL"
//! 4     flags  bit0=STORED bit1=ENCRYPTED
//! 5..9  payload length (u32)
//! 9..   payload
//! ```

pub mod types;
pub mod encode;
pub mod decode;
pub mod payload;

pub use types::*;
pub use encode::*;
pub use decode::*;
pub use payload::*;
