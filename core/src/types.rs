//! types.rs
//! Error types shared across layers.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::headers::fmt_bytes;
use crate::telemetry::OperationMode;

/// Structural problem in a container, payload, or token stream.
///
/// Raised on the first inconsistency; nothing is repaired silently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("container too short: {have} < {need} bytes")]
    TooShort { have: usize, need: usize },

    #[error("invalid magic: expected {}, got {}", fmt_bytes(.need), fmt_bytes(.have))]
    InvalidMagic { have: [u8; 4], need: [u8; 4] },

    #[error("reserved flag bits set: 0x{0:02x}")]
    ReservedFlags(u8),

    #[error("payload length mismatch: header declares {declared}, {actual} bytes follow")]
    LengthMismatch { declared: u32, actual: usize },

    #[error("payload too large for a container: {len} bytes")]
    PayloadTooLarge { len: usize },

    #[error("empty payload in a non-stored container")]
    EmptyPayload,

    #[error("unknown strategy marker: 0x{0:02x}")]
    UnknownMarker(u8),

    #[error("unknown token flag 0x{flag:02x} at offset {offset}")]
    UnknownTokenFlag { flag: u8, offset: usize },

    #[error("token stream truncated at offset {offset}")]
    TruncatedToken { offset: usize },

    #[error("reference distance {distance} out of range ({produced} bytes produced)")]
    DistanceOutOfRange { distance: u16, produced: usize },

    #[error("{codec} payload is corrupt: {msg}")]
    Corrupt { codec: &'static str, msg: String },
}

/// Operation does not match the container's encryption flag.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ModeError {
    #[error("container is encrypted; use decrypt+decompress")]
    EncryptedContainer,
    #[error("container is not encrypted; use decompress")]
    PlainContainer,
}

/// Coarse error classification, stable across context wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Format,
    Mode,
    Credential,
    Config,
    Validation,
}

/// Unified error for the facade.
/// - `From` impls enable `?` from every layer.
/// - `Operation` adds paths and mode; `kind()` sees through it.
#[derive(Debug, Error)]
pub enum CapsuleError {
    #[error("I/O error on {}: {source}", path.display())]
    Io { path: PathBuf, #[source] source: io::Error },

    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("mode error: {0}")]
    Mode(#[from] ModeError),

    /// Decrypted bytes did not parse. The format has no integrity check, so
    /// this is the only signal of a wrong password.
    #[error("payload did not parse after decryption (wrong password?): {0}")]
    Credential(#[source] FormatError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("password must not be empty")]
    EmptyPassword,

    #[error("{mode} {} -> {}: {source}", input.display(), output.display())]
    Operation {
        mode: OperationMode,
        input: PathBuf,
        output: PathBuf,
        #[source]
        source: Box<CapsuleError>,
    },
}

impl CapsuleError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CapsuleError::Io { path: path.into(), source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CapsuleError::Io { .. } => ErrorKind::Io,
            CapsuleError::Format(_) => ErrorKind::Format,
            CapsuleError::Mode(_) => ErrorKind::Mode,
            CapsuleError::Credential(_) => ErrorKind::Credential,
            CapsuleError::Config(_) => ErrorKind::Config,
            CapsuleError::EmptyPassword => ErrorKind::Validation,
            CapsuleError::Operation { source, .. } => source.kind(),
        }
    }

    /// Innermost error, with operation context stripped.
    pub fn root(&self) -> &CapsuleError {
        match self {
            CapsuleError::Operation { source, .. } => source.root(),
            other => other,
        }
    }
}
