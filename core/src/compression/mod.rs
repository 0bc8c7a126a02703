//! compression/mod.rs
//! Compression strategies, registry, and selection.
//!
//! Notes:
//! - Every non-stored payload starts with the producing strategy's marker byte.
//! - Markers 0 and 1 are reserved: a payload starting with them is a legacy
//!   marker-less LZSS stream (see headers::payload).
//! - The registry is immutable and shared by reference into the selector.

pub mod analysis;
pub mod codecs;
pub mod constants;
pub mod registry;
pub mod select;
pub mod types;

pub use constants::*;
pub use registry::*;
pub use select::select;
pub use types::*;
