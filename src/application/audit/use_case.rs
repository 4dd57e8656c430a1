//! Audit Use Case
//!
//! Orchestrates one audit run:
//! 1. List client folders under the root
//! 2. Classify each folder (unclassified ones are skipped with a warning)
//! 3. Enumerate and parse the documents of each classified client
//! 4. Match documents against the category requirements
//! 5. Aggregate the report
//! 6. Hand the report to sinks and the notifier
//!
//! This use case is pure orchestration - all business rules live in the
//! domain layer.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::entities::{ClientFolder, ComplianceReport, Document, RequirementCatalog};
use crate::domain::ports::{Clock, FileEnumerator, Notifier, ReportSink};
use crate::domain::services::{aggregate, ComplianceMatcher};
use crate::error::LegajoResult;

use super::options::AuditOptions;
use super::result::AuditResult;

/// Audit use case - parameterized by its ports
pub struct AuditUseCase<FE, C>
where
    FE: FileEnumerator,
    C: Clock,
{
    enumerator: FE,
    clock: C,
    catalog: RequirementCatalog,
    config: Config,
    sinks: Vec<Box<dyn ReportSink>>,
    notifier: Option<Box<dyn Notifier>>,
}

impl<FE, C> AuditUseCase<FE, C>
where
    FE: FileEnumerator,
    C: Clock,
{
    pub fn new(enumerator: FE, clock: C, catalog: RequirementCatalog, config: Config) -> Self {
        Self {
            enumerator,
            clock,
            catalog,
            config,
            sinks: Vec::new(),
            notifier: None,
        }
    }

    pub fn with_sink(mut self, sink: Box<dyn ReportSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Build the report for `root` without delivering it.
    ///
    /// Enumeration failures abort the run: a partial report would look like
    /// missing documents.
    pub fn scan(&self, root: &Path) -> LegajoResult<ComplianceReport> {
        let today = self.clock.today();
        let matcher = ComplianceMatcher::for_catalog(&self.catalog, today);
        let client_dirs = self.enumerator.list_client_dirs(root)?;
        info!(root = %root.display(), clients = client_dirs.len(), %today, "starting audit");

        let mut results = Vec::new();
        let mut unclassified = Vec::new();

        for dir in client_dirs {
            let client = ClientFolder::from_path(dir);
            if !client.category().is_known() {
                warn!(
                    client = client.display_name(),
                    "folder matches no client category; skipping"
                );
                unclassified.push(client);
                continue;
            }

            let documents = self.load_documents(&client)?;
            let requirements = self.catalog.requirements(client.category());
            let result = matcher.match_client(&client, &documents, requirements);
            debug!(
                client = client.display_name(),
                category = %client.category(),
                documents = documents.len(),
                missing = result.missing.len(),
                outdated = result.outdated.len(),
                "client audited"
            );
            results.push(result);
        }

        Ok(aggregate(results, unclassified, self.clock.now()))
    }

    /// Scan, then deliver the report according to `options`.
    pub fn execute(&self, options: &AuditOptions) -> LegajoResult<AuditResult> {
        let report = self.scan(&options.root)?;
        info!(
            clients = report.client_count(),
            missing = report.missing().len(),
            outdated = report.outdated().len(),
            unclassified = report.unclassified().len(),
            "audit finished"
        );

        let mut written = Vec::new();
        let mut delivery_errors = Vec::new();

        if options.write_report {
            for sink in &self.sinks {
                match sink.write(&report) {
                    Ok(paths) => written.extend(paths),
                    Err(e) => {
                        warn!(sink = sink.name(), error = %e, "report sink failed");
                        delivery_errors.push(e.to_string());
                    }
                }
            }
        }

        let mut notified = false;
        if options.notify {
            match &self.notifier {
                Some(notifier) => match notifier.notify(&report, &written) {
                    Ok(()) => notified = true,
                    Err(e) => {
                        warn!(channel = notifier.name(), error = %e, "notification failed");
                        delivery_errors.push(e.to_string());
                    }
                },
                None => {
                    warn!("notification requested but no channel configured");
                    delivery_errors.push("no notification channel configured".to_string());
                }
            }
        }

        Ok(AuditResult {
            report,
            written,
            notified,
            delivery_errors,
        })
    }

    fn load_documents(&self, client: &ClientFolder) -> LegajoResult<Vec<Document>> {
        let files = self.enumerator.list_files(client.path())?;
        Ok(files
            .into_iter()
            .filter(|path| {
                self.config
                    .accepts_extension(path.extension().and_then(|e| e.to_str()))
            })
            .map(Document::from_path)
            .collect())
    }
}
