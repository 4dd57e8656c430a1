//! Audit Options

use std::path::PathBuf;

/// Options for the audit use case
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Directory holding one subfolder per client
    pub root: PathBuf,
    /// Hand the report to the configured sinks
    pub write_report: bool,
    /// Hand the report to the configured notifier
    pub notify: bool,
}

impl AuditOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_report: true,
            notify: false,
        }
    }

    pub fn with_report(mut self, yes: bool) -> Self {
        self.write_report = yes;
        self
    }

    pub fn with_notify(mut self, yes: bool) -> Self {
        self.notify = yes;
        self
    }
}
