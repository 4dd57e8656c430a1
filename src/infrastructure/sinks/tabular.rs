//! CSV report sink
//!
//! Writes the missing and outdated tables as two CSV files with the
//! columns `Client, Category, Item, Folder`.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ReportConfig;
use crate::domain::entities::{ComplianceReport, ReportEntry};
use crate::domain::ports::ReportSink;
use crate::error::{LegajoError, LegajoResult};
use crate::infrastructure::fs::atomic_write;

pub const HEADER: [&str; 4] = ["Client", "Category", "Item", "Folder"];

/// Writes one table of report entries as CSV.
pub fn write_table<W: Write>(writer: W, entries: &[ReportEntry]) -> LegajoResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER)?;
    for entry in entries {
        let folder = entry.folder.to_string_lossy().into_owned();
        out.write_record([
            entry.client.as_str(),
            entry.category.as_str(),
            entry.item.as_str(),
            folder.as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Report sink producing two CSV files in one directory
#[derive(Debug, Clone)]
pub struct CsvReportSink {
    missing_path: PathBuf,
    outdated_path: PathBuf,
}

impl CsvReportSink {
    pub fn new(missing_path: impl Into<PathBuf>, outdated_path: impl Into<PathBuf>) -> Self {
        Self {
            missing_path: missing_path.into(),
            outdated_path: outdated_path.into(),
        }
    }

    /// Sink writing into `output_dir` with the configured file names.
    pub fn from_config(config: &ReportConfig, output_dir: impl Into<PathBuf>) -> Self {
        let dir = output_dir.into();
        Self::new(
            dir.join(&config.missing_file),
            dir.join(&config.outdated_file),
        )
    }

    fn write_file(&self, path: &Path, entries: &[ReportEntry]) -> LegajoResult<()> {
        let mut buf = Vec::new();
        write_table(&mut buf, entries)?;
        atomic_write(path, &buf).map_err(|e| LegajoError::ReportSink {
            sink: self.name().to_string(),
            message: format!("{}: {}", path.display(), e),
        })?;
        debug!(path = %path.display(), rows = entries.len(), "wrote CSV table");
        Ok(())
    }
}

impl ReportSink for CsvReportSink {
    fn name(&self) -> &str {
        "csv"
    }

    fn write(&self, report: &ComplianceReport) -> LegajoResult<Vec<PathBuf>> {
        self.write_file(&self.missing_path, report.missing())?;
        self.write_file(&self.outdated_path, report.outdated())?;
        Ok(vec![self.missing_path.clone(), self.outdated_path.clone()])
    }
}
