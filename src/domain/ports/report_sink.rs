//! ReportSink port - tabular persistence of a finished report

use std::path::PathBuf;

use crate::domain::entities::ComplianceReport;
use crate::error::LegajoResult;

pub trait ReportSink {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Persist the report; returns the files written.
    fn write(&self, report: &ComplianceReport) -> LegajoResult<Vec<PathBuf>>;
}
