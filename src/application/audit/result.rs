//! Audit Result

use std::path::PathBuf;

use crate::domain::entities::ComplianceReport;

/// Outcome of one audit run
///
/// Delivery problems (sink or notifier failures) never discard the report;
/// they are listed in `delivery_errors` instead.
#[derive(Debug, Clone)]
pub struct AuditResult {
    pub report: ComplianceReport,
    /// Files written by report sinks
    pub written: Vec<PathBuf>,
    /// Whether a notification was queued
    pub notified: bool,
    pub delivery_errors: Vec<String>,
}

impl AuditResult {
    pub fn is_compliant(&self) -> bool {
        self.report.is_compliant()
    }
}
