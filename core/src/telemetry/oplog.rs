//! telemetry/oplog.rs
//! Append-only operation log.
//!
//! Design notes:
//! - One line per call, opened in append mode each time, so several facades
//!   may share a file without coordinating.
//! - Timestamps are local wall-clock time.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::telemetry::report::OperationReport;

#[derive(Debug, Clone)]
pub struct OperationLog {
    path: PathBuf,
}

impl OperationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `report` stamped with the current local time.
    pub fn append(&self, report: &OperationReport) -> io::Result<()> {
        self.append_at(report, &Local::now())
    }

    pub fn append_at(&self, report: &OperationReport, at: &DateTime<Local>) -> io::Result<()> {
        let mut line = report.to_log_line(at);
        line.push('\n');
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        // Single write per line keeps concurrent appenders from interleaving mid-line.
        file.write_all(line.as_bytes())
    }
}
