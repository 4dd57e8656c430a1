//! Requirement Catalog
//!
//! Per-category ordered lists of the documents a client folder must hold.
//! The catalog is configuration data: the engine only reads it.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Category, RenewalCycle};
use crate::error::{LegajoError, LegajoResult};

/// Leading tokens of the recurring balance-sheet filings.
pub const DEFAULT_BALANCE_FAMILIES: &[&str] = &["BALANCE"];

/// One required document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequirementDefinition {
    /// Display label
    pub key: String,
    /// Case-insensitive substring searched in each document path
    #[serde(rename = "token")]
    pub match_token: String,
    /// How often the document must be refreshed
    #[serde(default)]
    pub cycle: RenewalCycle,
}

impl RequirementDefinition {
    pub fn new(key: impl Into<String>, match_token: impl Into<String>, cycle: RenewalCycle) -> Self {
        Self {
            key: key.into(),
            match_token: match_token.into(),
            cycle,
        }
    }
}

/// Immutable category → requirements lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementCatalog {
    requirements: HashMap<Category, Vec<RequirementDefinition>>,
    balance_families: Vec<String>,
}

impl RequirementCatalog {
    /// The catalog the practice ships with.
    pub fn builtin() -> Self {
        use RenewalCycle::*;

        let req = RequirementDefinition::new;
        let mut requirements = HashMap::new();
        requirements.insert(
            Category::Persona,
            vec![
                req("DNI", "DNI", OneTime),
                req("Constancia de CUIL", "CUIL", OneTime),
                req("DDJJ Ganancias", "GANANCIAS", Annual),
                req("DDJJ Bienes Personales", "BIENES", Annual),
                req("Monotributo", "MONOTRIBUTO", Quarterly),
            ],
        );
        requirements.insert(
            Category::Pyme,
            vec![
                req("Estatuto social", "ESTATUTO", OneTime),
                req("Certificado MiPyME", "CERTIFICADO", Annual),
                req("Balance", "BALANCE", Annual),
                req("DDJJ IVA", "IVA", Quarterly),
                req("Ingresos Brutos", "IIBB", Quarterly),
            ],
        );
        requirements.insert(
            Category::Empresa,
            vec![
                req("Estatuto social", "ESTATUTO", OneTime),
                req("Acta de autoridades", "ACTA", OneTime),
                req("Balance", "BALANCE", Annual),
                req("DDJJ Ganancias", "GANANCIAS", Annual),
                req("DDJJ IVA", "IVA", Quarterly),
                req("Cargas sociales F931", "F931", Quarterly),
            ],
        );

        Self {
            requirements,
            balance_families: DEFAULT_BALANCE_FAMILIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Replace the requirement list of one category.
    ///
    /// Fails when the list repeats a key or carries an empty match token.
    pub fn with_requirements(
        mut self,
        category: Category,
        requirements: Vec<RequirementDefinition>,
    ) -> LegajoResult<Self> {
        if !category.is_known() {
            return Err(LegajoError::InvalidCatalog {
                category,
                message: "only persona, pyme and empresa carry requirements".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for def in &requirements {
            if def.match_token.trim().is_empty() {
                return Err(LegajoError::InvalidCatalog {
                    category,
                    message: format!("requirement '{}' has an empty token", def.key),
                });
            }
            if !seen.insert(def.key.as_str()) {
                return Err(LegajoError::InvalidCatalog {
                    category,
                    message: format!("duplicate requirement key '{}'", def.key),
                });
            }
        }

        self.requirements.insert(category, requirements);
        Ok(self)
    }

    pub fn with_balance_families(mut self, families: Vec<String>) -> Self {
        self.balance_families = families;
        self
    }

    /// Ordered requirements for a category; empty for `Unknown`.
    pub fn requirements(&self, category: Category) -> &[RequirementDefinition] {
        self.requirements
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn balance_families(&self) -> &[String] {
        &self.balance_families
    }
}

impl Default for RequirementCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_audited_categories() {
        let catalog = RequirementCatalog::builtin();
        for category in Category::AUDITED {
            assert!(!catalog.requirements(category).is_empty(), "{}", category);
        }
        assert!(catalog.requirements(Category::Unknown).is_empty());
    }

    #[test]
    fn builtin_keys_are_unique_per_category() {
        let catalog = RequirementCatalog::builtin();
        for category in Category::AUDITED {
            let defs = catalog.requirements(category).to_vec();
            assert!(catalog.clone().with_requirements(category, defs).is_ok());
        }
    }

    #[test]
    fn rejects_duplicate_keys() {
        let defs = vec![
            RequirementDefinition::new("DNI", "DNI", RenewalCycle::OneTime),
            RequirementDefinition::new("DNI", "DOCUMENTO", RenewalCycle::OneTime),
        ];
        let err = RequirementCatalog::builtin()
            .with_requirements(Category::Persona, defs)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate requirement key 'DNI'"));
    }

    #[test]
    fn rejects_empty_token() {
        let defs = vec![RequirementDefinition::new("DNI", "  ", RenewalCycle::OneTime)];
        assert!(RequirementCatalog::builtin()
            .with_requirements(Category::Persona, defs)
            .is_err());
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(RequirementCatalog::builtin()
            .with_requirements(Category::Unknown, Vec::new())
            .is_err());
    }

    #[test]
    fn replacing_keeps_declared_order() {
        let defs = vec![
            RequirementDefinition::new("B", "B", RenewalCycle::Annual),
            RequirementDefinition::new("A", "A", RenewalCycle::Annual),
        ];
        let catalog = RequirementCatalog::builtin()
            .with_requirements(Category::Pyme, defs)
            .unwrap();
        let keys: Vec<_> = catalog
            .requirements(Category::Pyme)
            .iter()
            .map(|d| d.key.as_str())
            .collect();
        assert_eq!(keys, ["B", "A"]);
    }
}
