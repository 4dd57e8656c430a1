//! Property tests for the compliance matcher.

use std::path::PathBuf;

use proptest::prelude::*;

use legajo::domain::entities::{ClientFolder, Document, RequirementCatalog};
use legajo::domain::policies::MONTH_ABBREVIATIONS;
use legajo::domain::services::ComplianceMatcher;
use legajo::domain::value_objects::{Category, Period};

const TOKENS: &[&str] = &[
    "DNI", "CUIL", "GANANCIAS", "BIENES", "MONOTRIBUTO", "BALANCE", "INFORME",
];

fn file_name() -> impl Strategy<Value = String> {
    (
        prop::sample::select(TOKENS),
        prop::option::of((prop::sample::select(MONTH_ABBREVIATIONS.to_vec()), 15u32..30)),
    )
        .prop_map(|(token, period)| match period {
            Some((month, yy)) => format!("{} {} {:02}.pdf", token, month, yy),
            None => format!("{}.pdf", token),
        })
}

fn documents() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(file_name(), 0..12).prop_map(|names| {
        names
            .into_iter()
            .map(|n| Document::from_path(PathBuf::from("/clientes/Ana 27-11222333-4").join(n)))
            .collect()
    })
}

fn today() -> impl Strategy<Value = Period> {
    (2020i32..2032, 1u32..=12).prop_map(|(y, m)| Period::new(y, m).expect("valid month"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Matching the same inputs twice yields identical results.
    #[test]
    fn property_matcher_idempotent(docs in documents(), today in today()) {
        let catalog = RequirementCatalog::builtin();
        let client = ClientFolder::from_path("/clientes/Ana 27-11222333-4");
        let matcher = ComplianceMatcher::for_catalog(&catalog, today);
        let requirements = catalog.requirements(Category::Persona);

        let first = matcher.match_client(&client, &docs, requirements);
        let second = matcher.match_client(&client, &docs, requirements);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Missing entries keep catalog order and never exceed the catalog.
    #[test]
    fn property_missing_is_ordered_subset(docs in documents(), today in today()) {
        let catalog = RequirementCatalog::builtin();
        let client = ClientFolder::from_path("/clientes/Ana 27-11222333-4");
        let matcher = ComplianceMatcher::for_catalog(&catalog, today);
        let requirements = catalog.requirements(Category::Persona);

        let result = matcher.match_client(&client, &docs, requirements);
        let positions: Vec<usize> = result
            .missing
            .iter()
            .map(|m| requirements.iter().position(|r| r == m).expect("missing entry from catalog"))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// PROPERTY: Documents without a period, one-time tokens and balance
    /// filings are never outdated.
    #[test]
    fn property_exempt_documents_never_outdated(docs in documents(), today in today()) {
        let catalog = RequirementCatalog::builtin();
        let client = ClientFolder::from_path("/clientes/Ana 27-11222333-4");
        let matcher = ComplianceMatcher::for_catalog(&catalog, today);

        let result = matcher.match_client(&client, &docs, catalog.requirements(Category::Persona));
        for outdated in &result.outdated {
            prop_assert!(outdated.document.period().is_some());
            let token = outdated.document.leading_token();
            prop_assert!(token != "DNI" && token != "CUIL" && token != "BALANCE");
        }
    }

    /// PROPERTY: With no documents every requirement is missing, in catalog order.
    #[test]
    fn property_empty_folder_misses_everything(today in today()) {
        let catalog = RequirementCatalog::builtin();
        let client = ClientFolder::from_path("/clientes/Ana 27-11222333-4");
        let matcher = ComplianceMatcher::for_catalog(&catalog, today);
        let requirements = catalog.requirements(Category::Persona);

        let result = matcher.match_client(&client, &[], requirements);
        prop_assert_eq!(result.missing.as_slice(), requirements);
        prop_assert!(result.outdated.is_empty());
    }
}
