//! pipeline/mod.rs
//! Orchestration facade: in-memory byte operations and the path-based `Capsule`.

pub mod bytes;
pub mod io;
pub mod core;

pub use bytes::*;
pub use self::core::*;
