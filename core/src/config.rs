//! config.rs
//! Runtime configuration for selection thresholds and the operation log.
//!
//! Every field has a default, so a JSON file only needs the keys it changes:
//!
//! ```json
//! { "selector": { "stored_ratio": 0.95 }, "log_path": "/var/log/capsule.log" }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_ENTROPY_SAMPLE_BYTES, DEFAULT_ENTROPY_THRESHOLD, DEFAULT_FAST_DEFLATE_LEVEL,
    DEFAULT_LARGE_INPUT_BYTES, DEFAULT_LOG_FILE, DEFAULT_STORED_RATIO,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read { path: PathBuf, #[source] source: std::io::Error },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {msg}")]
    Invalid { field: &'static str, msg: String },
}

/// Strategy-selection thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// A compressed candidate must be strictly smaller than
    /// `stored_ratio * input_len` to beat the stored fallback.
    pub stored_ratio: f64,
    /// Sampled entropy (bits/byte) above which only the fast path runs.
    pub entropy_threshold: f64,
    /// Inputs at least this large only take the fast path.
    pub large_input_bytes: usize,
    /// Prefix length used for the entropy estimate.
    pub entropy_sample_bytes: usize,
    /// DEFLATE level of the fast path.
    pub fast_level: u32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            stored_ratio: DEFAULT_STORED_RATIO,
            entropy_threshold: DEFAULT_ENTROPY_THRESHOLD,
            large_input_bytes: DEFAULT_LARGE_INPUT_BYTES,
            entropy_sample_bytes: DEFAULT_ENTROPY_SAMPLE_BYTES,
            fast_level: DEFAULT_FAST_DEFLATE_LEVEL,
        }
    }
}

impl SelectorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.stored_ratio > 0.0 && self.stored_ratio <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "selector.stored_ratio",
                msg: format!("{} not in (0, 1]", self.stored_ratio),
            });
        }
        if !(0.0..=8.0).contains(&self.entropy_threshold) {
            return Err(ConfigError::Invalid {
                field: "selector.entropy_threshold",
                msg: format!("{} not in [0, 8]", self.entropy_threshold),
            });
        }
        if self.entropy_sample_bytes == 0 {
            return Err(ConfigError::Invalid {
                field: "selector.entropy_sample_bytes",
                msg: "must be non-zero".into(),
            });
        }
        if self.fast_level > 9 {
            return Err(ConfigError::Invalid {
                field: "selector.fast_level",
                msg: format!("{} > 9", self.fast_level),
            });
        }
        Ok(())
    }
}

/// Top-level configuration for a `Capsule` facade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapsuleConfig {
    pub selector: SelectorConfig,
    /// Append-only operation log location.
    pub log_path: PathBuf,
    /// When false, no operation log lines are written.
    pub log_enabled: bool,
}

impl Default for CapsuleConfig {
    fn default() -> Self {
        Self {
            selector: SelectorConfig::default(),
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            log_enabled: true,
        }
    }
}

impl CapsuleConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_json_str(&raw)
    }

    /// Same defaults, operation log at `path`.
    pub fn with_log_path(path: impl Into<PathBuf>) -> Self {
        Self { log_path: path.into(), ..Default::default() }
    }

    /// Same defaults, operation log disabled.
    pub fn without_log() -> Self {
        Self { log_enabled: false, ..Default::default() }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.selector.validate()?;
        if self.log_enabled && self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "log_path",
                msg: "empty path with logging enabled".into(),
            });
        }
        Ok(())
    }
}
