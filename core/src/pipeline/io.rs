//! pipeline/io.rs
//! Whole-file reads and atomic writes for the path-based facade.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::types::CapsuleError;

pub fn read_input(path: &Path) -> Result<Vec<u8>, CapsuleError> {
    fs::read(path).map_err(|e| CapsuleError::io(path, e))
}

/// Write `data` to a temporary file next to `path`, then rename it into place.
///
/// Nothing appears at `path` unless every byte was written.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<(), CapsuleError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| CapsuleError::io(dir, e))?;
    tmp.write_all(data).map_err(|e| CapsuleError::io(path, e))?;
    tmp.as_file().sync_all().map_err(|e| CapsuleError::io(path, e))?;
    tmp.persist(path).map_err(|e| CapsuleError::io(path, e.error))?;
    Ok(())
}
