//! headers/payload.rs
//! Marker dispatch for non-stored payloads.
//!
//! Layout: `[marker][strategy bytes]`. Payloads whose first byte is 0 or 1
//! predate the marker byte and are a bare LZSS token stream; the registry
//! refuses those marker values so the two cases never collide.

use crate::compression::codecs::lzss;
use crate::compression::registry::StrategyRegistry;
use crate::compression::types::Algorithm;
use crate::constants::{PASSWORD_PROBE_TOKENS, RESERVED_MARKERS};
use crate::types::FormatError;

/// Identify the encoding of a non-stored payload from its first byte.
pub fn detect_algorithm(payload: &[u8], registry: &StrategyRegistry) -> Result<Algorithm, FormatError> {
    let first = *payload.first().ok_or(FormatError::EmptyPayload)?;
    if RESERVED_MARKERS.contains(&first) {
        return Ok(Algorithm::LegacyLzss);
    }
    registry
        .by_marker(first)
        .map(|s| Algorithm::Compressed { marker: first, name: s.name() })
        .ok_or(FormatError::UnknownMarker(first))
}

/// Decode a non-stored payload back to the original bytes.
pub fn decode_payload(
    payload: &[u8],
    registry: &StrategyRegistry,
) -> Result<(Algorithm, Vec<u8>), FormatError> {
    let algorithm = detect_algorithm(payload, registry)?;
    let out = match algorithm {
        Algorithm::LegacyLzss => lzss::decompress(payload)?,
        Algorithm::Compressed { marker, .. } => registry
            .by_marker(marker)
            .ok_or(FormatError::UnknownMarker(marker))?
            .decompress(&payload[1..])?,
        Algorithm::Stored => payload.to_vec(),
    };
    Ok((algorithm, out))
}

/// Structural check of the leading part of a non-stored payload.
pub fn probe_payload(payload: &[u8], registry: &StrategyRegistry) -> Result<Algorithm, FormatError> {
    let algorithm = detect_algorithm(payload, registry)?;
    match algorithm {
        Algorithm::LegacyLzss => lzss::probe(payload, PASSWORD_PROBE_TOKENS)?,
        Algorithm::Compressed { marker, .. } => registry
            .by_marker(marker)
            .ok_or(FormatError::UnknownMarker(marker))?
            .probe(&payload[1..])?,
        Algorithm::Stored => {}
    }
    Ok(algorithm)
}
