//! Notifier port - delivery of a finished report to people
//!
//! Failures are reported to the caller but never stop an audit: the
//! application layer logs and drops them.

use std::path::PathBuf;

use crate::domain::entities::ComplianceReport;
use crate::error::LegajoResult;

pub trait Notifier {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Send a summary of `report`, attaching the files a sink produced.
    fn notify(&self, report: &ComplianceReport, attachments: &[PathBuf]) -> LegajoResult<()>;
}
