//! capsule-core
//!
//! Self-describing container for compressed and optionally
//! password-obfuscated files. Pure Rust, synchronous, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;

// Layers, bottom-up
pub mod compression;
pub mod headers;
pub mod crypto;
pub mod telemetry;

// Facade
pub mod pipeline;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{Algorithm, CompressionStrategy, StrategyRegistry};
    pub use crate::config::{CapsuleConfig, SelectorConfig};
    pub use crate::pipeline::{
        compress_bytes, compress_encrypt_bytes, decompress_bytes, decrypt_decompress_bytes,
        validate_password_bytes, Capsule, Decoded, Encoded,
    };
    pub use crate::telemetry::{OperationMode, OperationReport};
    pub use crate::types::{CapsuleError, ErrorKind, FormatError, ModeError};
}
