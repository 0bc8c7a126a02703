//! telemetry/mod.rs
//! Operation reports and the append-only operation log.
//!
//! Notes:
//! - Reports are immutable values returned to the caller.
//! - Diagnostics go through `tracing`; the operation log is a separate,
//!   user-facing text record with a fixed line format.

pub mod report;
pub mod oplog;

pub use report::*;
pub use oplog::*;
