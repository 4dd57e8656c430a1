//! Report aggregation service
//!
//! Flattens per-client results into the missing/outdated tables consumed by
//! report sinks. No formatting happens here.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::domain::entities::{ClientFolder, ComplianceReport, ComplianceResult, ReportEntry};

/// Build the report from per-client results, preserving their order.
///
/// Results for `Unknown` clients are moved to the unclassified list.
pub fn aggregate(
    results: Vec<ComplianceResult>,
    mut unclassified: Vec<ClientFolder>,
    generated_at: DateTime<Utc>,
) -> ComplianceReport {
    let mut kept = Vec::with_capacity(results.len());
    let mut missing = Vec::new();
    let mut outdated = Vec::new();

    for result in results {
        let client = &result.client;
        if !client.category().is_known() {
            warn!(client = client.display_name(), "dropping result for unclassified client");
            unclassified.push(result.client);
            continue;
        }

        missing.extend(result.missing.iter().map(|def| ReportEntry {
            client: client.display_name().to_string(),
            category: client.category(),
            item: def.key.clone(),
            folder: client.path().to_path_buf(),
        }));
        outdated.extend(result.outdated.iter().map(|o| ReportEntry {
            client: client.display_name().to_string(),
            category: client.category(),
            item: o.document.file_name(),
            folder: client.path().to_path_buf(),
        }));
        kept.push(result);
    }

    ComplianceReport::new(kept, missing, outdated, unclassified, generated_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Document, OutdatedDocument, RequirementDefinition};
    use crate::domain::policies::StaleReason;
    use crate::domain::value_objects::{Category, RenewalCycle};
    use chrono::TimeZone;
    use std::path::Path;

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn result(folder: &str, missing: &[&str], outdated: &[&str]) -> ComplianceResult {
        let client = ClientFolder::from_path(folder);
        ComplianceResult {
            missing: missing
                .iter()
                .map(|k| RequirementDefinition::new(*k, *k, RenewalCycle::Annual))
                .collect(),
            outdated: outdated
                .iter()
                .map(|f| OutdatedDocument {
                    document: Document::from_path(client.path().join(f)),
                    requirement: None,
                    reason: StaleReason::Annual,
                })
                .collect(),
            client,
        }
    }

    #[test]
    fn empty_results_are_compliant() {
        let report = aggregate(Vec::new(), Vec::new(), stamp());
        assert!(report.is_compliant());
        assert!(report.missing().is_empty());
        assert_eq!(report.generated_at(), stamp());
    }

    #[test]
    fn entries_are_tagged_with_client_data() {
        let report = aggregate(
            vec![result("/c/ACME PYME", &["Balance"], &["IVA ENE 22.pdf"])],
            Vec::new(),
            stamp(),
        );

        assert!(!report.is_compliant());
        assert_eq!(
            report.missing(),
            &[ReportEntry {
                client: "ACME PYME".to_string(),
                category: Category::Pyme,
                item: "Balance".to_string(),
                folder: "/c/ACME PYME".into(),
            }]
        );
        assert_eq!(report.outdated()[0].item, "IVA ENE 22.pdf");
        assert_eq!(report.outdated()[0].folder, Path::new("/c/ACME PYME"));
    }

    #[test]
    fn preserves_client_order() {
        let report = aggregate(
            vec![
                result("/c/B PYME", &["x"], &[]),
                result("/c/A PYME", &["y"], &[]),
            ],
            Vec::new(),
            stamp(),
        );
        let clients: Vec<_> = report.missing().iter().map(|e| e.client.as_str()).collect();
        assert_eq!(clients, ["B PYME", "A PYME"]);
    }

    #[test]
    fn unknown_results_are_moved_to_unclassified() {
        let report = aggregate(
            vec![result("/c/Varios", &["x"], &[])],
            Vec::new(),
            stamp(),
        );
        assert_eq!(report.client_count(), 0);
        assert!(report.missing().is_empty());
        assert_eq!(report.unclassified().len(), 1);
    }
}
