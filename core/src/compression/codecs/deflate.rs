//! Raw DEFLATE (RFC 1951, no zlib wrapper) via flate2.

use std::io::{Read, Write};
use flate2::{Compression, write::DeflateEncoder, read::DeflateDecoder};

use crate::compression::constants::{marker_ids, DEFAULT_LEVEL_DEFLATE};
use crate::compression::types::{CompressionError, CompressionStrategy};
use crate::constants::PASSWORD_PROBE_BYTES;
use crate::types::FormatError;

pub struct DeflateStrategy {
    level: Compression,
}

impl DeflateStrategy {
    /// Levels outside 0..=9 fall back to flate2's default.
    pub fn new(level: u32) -> Self {
        let level = match level {
            0..=9 => Compression::new(level),
            _ => Compression::default(),
        };
        Self { level }
    }

    pub fn level(&self) -> u32 {
        self.level.level()
    }
}

impl Default for DeflateStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL_DEFLATE)
    }
}

fn corrupt(e: std::io::Error) -> FormatError {
    FormatError::Corrupt { codec: "deflate", msg: e.to_string() }
}

impl CompressionStrategy for DeflateStrategy {
    fn marker(&self) -> u8 {
        marker_ids::DEFLATE
    }

    fn name(&self) -> &'static str {
        "DEFLATE"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut enc = DeflateEncoder::new(Vec::with_capacity(input.len() / 2), self.level);
        enc.write_all(input)
            .map_err(|e| CompressionError::CodecProcessFailed { codec: "deflate", msg: e.to_string() })?;
        enc.finish()
            .map_err(|e| CompressionError::CodecProcessFailed { codec: "deflate", msg: e.to_string() })
    }

    fn decompress(&self, payload: &[u8]) -> Result<Vec<u8>, FormatError> {
        let mut dec = DeflateDecoder::new(payload);
        let mut out = Vec::with_capacity(payload.len() * 3);
        dec.read_to_end(&mut out).map_err(corrupt)?;
        Ok(out)
    }

    fn probe(&self, payload: &[u8]) -> Result<(), FormatError> {
        // A bounded prefix is enough to catch most garbage streams.
        let mut prefix = Vec::with_capacity(PASSWORD_PROBE_BYTES);
        DeflateDecoder::new(payload)
            .take(PASSWORD_PROBE_BYTES as u64)
            .read_to_end(&mut prefix)
            .map_err(corrupt)?;
        Ok(())
    }
}
