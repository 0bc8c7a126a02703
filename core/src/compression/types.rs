//! compression/types.rs
//! Token model, strategy trait, marker ids, and compression errors.
use std::fmt;
use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::compression::constants::{marker_ids, LITERAL_TOKEN_LEN, REFERENCE_TOKEN_LEN};
use crate::types::FormatError;

/// Built-in strategy markers.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum Marker {
    Lzss    = marker_ids::LZSS,
    Deflate = marker_ids::DEFLATE,
    Zstd    = marker_ids::ZSTD,
}

impl Marker {
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Marker::Lzss => "LZSS",
            Marker::Deflate => "DEFLATE",
            Marker::Zstd => "ZSTD",
        }
    }
}

/// Atomic unit of the match-based codec.
///
/// `Reference` copies `length` bytes starting `distance` bytes behind the
/// current end of output. The source range may overlap the bytes the same
/// reference is producing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Literal(u8),
    Reference { distance: u16, length: u8 },
}

impl Token {
    /// Size of this token on the wire, flag byte included.
    #[inline]
    pub const fn encoded_len(&self) -> usize {
        match self {
            Token::Literal(_) => LITERAL_TOKEN_LEN,
            Token::Reference { .. } => REFERENCE_TOKEN_LEN,
        }
    }

    /// Number of output bytes this token expands to.
    #[inline]
    pub const fn expanded_len(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Reference { length, .. } => *length as usize,
        }
    }
}

/// Which encoding produced (or was detected in) a payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Payload is the original bytes verbatim.
    Stored,
    /// Payload is `[marker][strategy bytes]`.
    Compressed { marker: u8, name: &'static str },
    /// Marker-less LZSS token stream written by early format revisions.
    LegacyLzss,
}

impl Algorithm {
    pub fn from_marker(marker: Marker) -> Self {
        Algorithm::Compressed { marker: marker.as_byte(), name: marker.name() }
    }

    pub fn is_stored(&self) -> bool {
        matches!(self, Algorithm::Stored)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Stored => write!(f, "STORED"),
            Algorithm::Compressed { name, .. } => write!(f, "{}", name),
            Algorithm::LegacyLzss => write!(f, "LZSS-LEGACY"),
        }
    }
}

/// Outcome of strategy selection for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionResult {
    pub used_stored_fallback: bool,
    pub algorithm: Algorithm,
    /// Stored: the original bytes. Otherwise: `[marker][strategy bytes]`.
    pub payload: Vec<u8>,
}

impl CompressionResult {
    pub fn stored(input: &[u8]) -> Self {
        Self {
            used_stored_fallback: true,
            algorithm: Algorithm::Stored,
            payload: input.to_vec(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("codec {codec} failed: {msg}")]
    CodecProcessFailed { codec: &'static str, msg: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("marker 0x{0:02x} is reserved for legacy payload detection")]
    ReservedMarker(u8),
    #[error("marker 0x{0:02x} registered twice")]
    DuplicateMarker(u8),
    #[error("registry must contain at least one strategy")]
    Empty,
}

/// Uniform interface over every compression algorithm the selector can race.
///
/// Implementations must be deterministic and stateless so that a single
/// instance can live in the process-wide registry.
pub trait CompressionStrategy: Send + Sync {
    /// Marker byte written in front of this strategy's output.
    fn marker(&self) -> u8;

    /// Human-readable name used in logs and operation reports.
    fn name(&self) -> &'static str;

    /// Compress `input`; output does NOT include the marker byte.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError>;

    /// Inverse of `compress`; input does NOT include the marker byte.
    fn decompress(&self, payload: &[u8]) -> Result<Vec<u8>, FormatError>;

    /// Whether the selector must decode this strategy's output and compare it
    /// with the original before accepting it.
    fn requires_self_check(&self) -> bool {
        false
    }

    /// Cheap structural check of the leading part of a payload.
    fn probe(&self, payload: &[u8]) -> Result<(), FormatError> {
        self.decompress(payload).map(|_| ())
    }
}
