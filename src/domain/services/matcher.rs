//! Compliance matching service
//!
//! Combines one client's documents with its category requirements to find
//! missing filings and filings past their renewal cycle. The current period
//! is injected, so a matcher run is a pure function of its inputs.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::entities::{
    ClientFolder, ComplianceResult, Document, OutdatedDocument, RequirementCatalog,
    RequirementDefinition,
};
use crate::domain::policies::staleness;
use crate::domain::value_objects::{Period, RenewalCycle};

/// Matches client documents against a requirement list
#[derive(Debug, Clone)]
pub struct ComplianceMatcher {
    today: Period,
    balance_families: HashSet<String>,
}

impl ComplianceMatcher {
    pub fn new(today: Period, balance_families: &[String]) -> Self {
        Self {
            today,
            balance_families: balance_families.iter().cloned().collect(),
        }
    }

    pub fn for_catalog(catalog: &RequirementCatalog, today: Period) -> Self {
        Self::new(today, catalog.balance_families())
    }

    pub fn match_client(
        &self,
        client: &ClientFolder,
        documents: &[Document],
        requirements: &[RequirementDefinition],
    ) -> ComplianceResult {
        let missing = requirements
            .iter()
            .filter(|def| !documents.iter().any(|doc| doc.path_contains(&def.match_token)))
            .cloned()
            .collect();

        let one_time = tokens_with_cycle(requirements, RenewalCycle::OneTime);
        let quarterly = tokens_with_cycle(requirements, RenewalCycle::Quarterly);

        let mut outdated = Vec::new();
        for doc in documents {
            let Some(period) = doc.period() else {
                continue;
            };
            let token = doc.leading_token();
            if one_time.contains(token) {
                continue;
            }
            // Balance sheets are reviewed per category configuration, not here.
            if self.balance_families.contains(token) {
                debug!(document = %doc.absolute_path().display(), "skipping balance filing");
                continue;
            }

            if let Some(reason) = staleness(period, self.today, quarterly.contains(token)) {
                debug!(
                    document = %doc.absolute_path().display(),
                    period = %period,
                    ?reason,
                    "document outdated"
                );
                outdated.push(OutdatedDocument {
                    document: doc.clone(),
                    requirement: best_match(doc, requirements).cloned(),
                    reason,
                });
            }
        }

        ComplianceResult {
            client: client.clone(),
            missing,
            outdated,
        }
    }
}

fn tokens_with_cycle(requirements: &[RequirementDefinition], cycle: RenewalCycle) -> HashSet<&str> {
    requirements
        .iter()
        .filter(|def| def.cycle == cycle)
        .map(|def| def.match_token.as_str())
        .collect()
}

/// Longest matching token wins; ties keep catalog order.
fn best_match<'a>(
    doc: &Document,
    requirements: &'a [RequirementDefinition],
) -> Option<&'a RequirementDefinition> {
    requirements
        .iter()
        .filter(|def| doc.path_contains(&def.match_token))
        .fold(None::<&RequirementDefinition>, |best, def| match best {
            Some(b) if b.match_token.len() >= def.match_token.len() => Some(b),
            _ => Some(def),
        })
}
