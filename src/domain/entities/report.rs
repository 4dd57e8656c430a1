//! Compliance results and the aggregated report.
//!
//! `ComplianceReport` is the only value handed to report sinks and the
//! notifier. It is built once by the aggregator and exposes no mutators.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{ClientFolder, Document, RequirementDefinition};
use crate::domain::policies::StaleReason;
use crate::domain::value_objects::Category;

/// A periodic document that exceeded its renewal cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutdatedDocument {
    pub document: Document,
    /// Most specific catalog entry the document path matches, if any
    pub requirement: Option<RequirementDefinition>,
    pub reason: StaleReason,
}

/// Outcome of matching one classified client against its catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceResult {
    pub client: ClientFolder,
    pub missing: Vec<RequirementDefinition>,
    pub outdated: Vec<OutdatedDocument>,
}

impl ComplianceResult {
    pub fn is_compliant(&self) -> bool {
        self.missing.is_empty() && self.outdated.is_empty()
    }
}

/// One row of the missing or outdated table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub client: String,
    pub category: Category,
    pub item: String,
    pub folder: PathBuf,
}

/// Aggregated audit outcome across all clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    results: Vec<ComplianceResult>,
    missing: Vec<ReportEntry>,
    outdated: Vec<ReportEntry>,
    unclassified: Vec<ClientFolder>,
    generated_at: DateTime<Utc>,
}

impl ComplianceReport {
    pub(crate) fn new(
        results: Vec<ComplianceResult>,
        missing: Vec<ReportEntry>,
        outdated: Vec<ReportEntry>,
        unclassified: Vec<ClientFolder>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            results,
            missing,
            outdated,
            unclassified,
            generated_at,
        }
    }

    pub fn results(&self) -> &[ComplianceResult] {
        &self.results
    }

    pub fn missing(&self) -> &[ReportEntry] {
        &self.missing
    }

    pub fn outdated(&self) -> &[ReportEntry] {
        &self.outdated
    }

    /// Folders skipped because no classification rule matched.
    pub fn unclassified(&self) -> &[ClientFolder] {
        &self.unclassified
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn client_count(&self) -> usize {
        self.results.len()
    }

    pub fn is_compliant(&self) -> bool {
        self.results.iter().all(ComplianceResult::is_compliant)
    }
}
