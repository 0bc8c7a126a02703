//! telemetry/report.rs
//! Per-call operation report and its log-line rendering.
//!
//! Summary: every path-in/path-out facade call produces one immutable
//! `OperationReport`; the operation log writes it as a single text line.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, TimeZone};
use serde::{Serialize, Serializer};

use crate::compression::types::Algorithm;

/// Which facade operation produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperationMode {
    #[serde(rename = "COMPRESS")]
    Compress,
    #[serde(rename = "DECOMPRESS")]
    Decompress,
    #[serde(rename = "COMPRESS+ENCRYPT")]
    CompressEncrypt,
    #[serde(rename = "DECRYPT+DECOMPRESS")]
    DecryptDecompress,
}

impl OperationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationMode::Compress => "COMPRESS",
            OperationMode::Decompress => "DECOMPRESS",
            OperationMode::CompressEncrypt => "COMPRESS+ENCRYPT",
            OperationMode::DecryptDecompress => "DECRYPT+DECOMPRESS",
        }
    }

    pub fn is_encrypted(&self) -> bool {
        matches!(self, OperationMode::CompressEncrypt | OperationMode::DecryptDecompress)
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable summary of one facade call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationReport {
    pub mode: OperationMode,
    #[serde(serialize_with = "serialize_display")]
    pub algorithm: Algorithm,
    pub input: PathBuf,
    pub input_bytes: u64,
    pub output: PathBuf,
    pub output_bytes: u64,
}

impl OperationReport {
    /// `100 * (1 - out/in)`; 0 for empty input. Negative when the output grew.
    pub fn ratio_percent(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        100.0 * (1.0 - self.output_bytes as f64 / self.input_bytes as f64)
    }

    /// Render as one operation-log line (no trailing newline).
    pub fn to_log_line<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        format!(
            "[{}] mode={} | alg={} | in={} ({} bytes) | out={} ({} bytes) | ratio={:.2}%",
            at.format("%Y-%m-%d %H:%M:%S"),
            self.mode,
            self.algorithm,
            self.input.display(),
            self.input_bytes,
            self.output.display(),
            self.output_bytes,
            self.ratio_percent(),
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn serialize_display<T: fmt::Display, S: Serializer>(value: &T, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}
