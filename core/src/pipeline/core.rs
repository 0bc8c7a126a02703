//! pipeline/core.rs
//! Path-in/path-out facade.
//!
//! Each call reads its input fully, runs the in-memory operation, writes the
//! output atomically and appends one operation-log line. Errors carry the
//! mode and both paths.

use std::path::Path;

use tracing::{info, warn};

use crate::compression::registry::StrategyRegistry;
use crate::compression::types::Algorithm;
use crate::config::CapsuleConfig;
use crate::pipeline::bytes::{
    compress_bytes, compress_encrypt_bytes, decompress_bytes, decrypt_decompress_bytes,
    validate_password_bytes,
};
use crate::pipeline::io::{read_input, write_atomic};
use crate::telemetry::{OperationLog, OperationMode, OperationReport};
use crate::types::CapsuleError;

#[derive(Debug, Clone)]
pub struct Capsule {
    config: CapsuleConfig,
    registry: &'static StrategyRegistry,
    log: Option<OperationLog>,
}

impl Capsule {
    /// Facade over the built-in strategy registry.
    pub fn new(config: CapsuleConfig) -> Result<Self, CapsuleError> {
        Self::with_registry(config, StrategyRegistry::global())
    }

    pub fn with_registry(
        config: CapsuleConfig,
        registry: &'static StrategyRegistry,
    ) -> Result<Self, CapsuleError> {
        config.validate()?;
        let log = config.log_enabled.then(|| OperationLog::new(config.log_path.clone()));
        Ok(Self { config, registry, log })
    }

    pub fn config(&self) -> &CapsuleConfig {
        &self.config
    }

    pub fn registry(&self) -> &'static StrategyRegistry {
        self.registry
    }

    pub fn compress(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<OperationReport, CapsuleError> {
        self.run(OperationMode::Compress, input.as_ref(), output.as_ref(), |data| {
            let enc = compress_bytes(data, &self.config.selector, self.registry)?;
            Ok((enc.container, enc.algorithm))
        })
    }

    pub fn decompress(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<OperationReport, CapsuleError> {
        self.run(OperationMode::Decompress, input.as_ref(), output.as_ref(), |data| {
            let dec = decompress_bytes(data, self.registry)?;
            Ok((dec.data, dec.algorithm))
        })
    }

    pub fn compress_encrypt(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        password: &str,
    ) -> Result<OperationReport, CapsuleError> {
        self.run(OperationMode::CompressEncrypt, input.as_ref(), output.as_ref(), |data| {
            let enc = compress_encrypt_bytes(data, password, &self.config.selector, self.registry)?;
            Ok((enc.container, enc.algorithm))
        })
    }

    pub fn decrypt_decompress(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        password: &str,
    ) -> Result<OperationReport, CapsuleError> {
        self.run(OperationMode::DecryptDecompress, input.as_ref(), output.as_ref(), |data| {
            let dec = decrypt_decompress_bytes(data, password, self.registry)?;
            Ok((dec.data, dec.algorithm))
        })
    }

    /// True if `password` plausibly opens the encrypted container at `path`.
    /// Writes nothing and never logs an operation line.
    pub fn validate_password(&self, path: impl AsRef<Path>, password: &str) -> bool {
        let path = path.as_ref();
        match read_input(path) {
            Ok(data) => {
                let ok = validate_password_bytes(&data, password, self.registry);
                info!(path = %path.display(), ok, "password validation");
                ok
            }
            Err(e) => {
                warn!(error = %e, "password validation could not read input");
                false
            }
        }
    }

    fn run<F>(
        &self,
        mode: OperationMode,
        input: &Path,
        output: &Path,
        op: F,
    ) -> Result<OperationReport, CapsuleError>
    where
        F: FnOnce(&[u8]) -> Result<(Vec<u8>, Algorithm), CapsuleError>,
    {
        let report = execute(mode, input, output, op).map_err(|e| CapsuleError::Operation {
            mode,
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            source: Box::new(e),
        })?;

        info!(
            %mode,
            alg = %report.algorithm,
            input = %input.display(),
            output = %output.display(),
            in_bytes = report.input_bytes,
            out_bytes = report.output_bytes,
            "operation complete"
        );

        if let Some(log) = &self.log {
            if let Err(e) = log.append(&report) {
                warn!(log = %log.path().display(), error = %e, "operation log write failed");
            }
        }
        Ok(report)
    }
}

fn execute<F>(
    mode: OperationMode,
    input: &Path,
    output: &Path,
    op: F,
) -> Result<OperationReport, CapsuleError>
where
    F: FnOnce(&[u8]) -> Result<(Vec<u8>, Algorithm), CapsuleError>,
{
    let data = read_input(input)?;
    let (out, algorithm) = op(&data)?;
    write_atomic(output, &out)?;

    Ok(OperationReport {
        mode,
        algorithm,
        input: input.to_path_buf(),
        input_bytes: data.len() as u64,
        output: output.to_path_buf(),
        output_bytes: out.len() as u64,
    })
}
