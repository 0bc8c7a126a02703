//! src/compression/codecs/zstd.rs
//!
//! Zstandard strategy.
//!
//! Design notes:
//! - Uses the bulk API: one frame per payload, content size recorded in the
//!   frame header so decompression can size its buffer up front.
//! - Errors are mapped into `CompressionError` / `FormatError` with codec context.

use std::io::Read;

use crate::compression::constants::{marker_ids, DEFAULT_LEVEL_ZSTD};
use crate::compression::types::{CompressionError, CompressionStrategy};
use crate::constants::PASSWORD_PROBE_BYTES;
use crate::types::FormatError;

pub struct ZstdStrategy {
    level: i32,
}

impl ZstdStrategy {
    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

impl Default for ZstdStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL_ZSTD)
    }
}

fn corrupt(msg: impl ToString) -> FormatError {
    FormatError::Corrupt { codec: "zstd", msg: msg.to_string() }
}

impl CompressionStrategy for ZstdStrategy {
    fn marker(&self) -> u8 {
        marker_ids::ZSTD
    }

    fn name(&self) -> &'static str {
        "ZSTD"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        zstd::bulk::compress(input, self.level)
            .map_err(|e| CompressionError::CodecProcessFailed { codec: "zstd", msg: e.to_string() })
    }

    fn decompress(&self, payload: &[u8]) -> Result<Vec<u8>, FormatError> {
        // The content size comes from the (untrusted) frame header; let the
        // streaming decoder grow the buffer instead of trusting it.
        let mut out = Vec::new();
        zstd::stream::read::Decoder::new(payload)
            .map_err(corrupt)?
            .read_to_end(&mut out)
            .map_err(corrupt)?;
        Ok(out)
    }

    fn probe(&self, payload: &[u8]) -> Result<(), FormatError> {
        let mut prefix = Vec::with_capacity(PASSWORD_PROBE_BYTES);
        zstd::stream::read::Decoder::new(payload)
            .map_err(corrupt)?
            .take(PASSWORD_PROBE_BYTES as u64)
            .read_to_end(&mut prefix)
            .map_err(corrupt)?;
        Ok(())
    }
}
