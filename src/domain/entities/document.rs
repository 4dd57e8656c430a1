//! Document Entity

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::policies::{extract_period, leading_token};
use crate::domain::value_objects::Period;

/// A file found inside a client folder
///
/// Everything but the path is derived from the file name stem when the
/// document is created; documents are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    absolute_path: PathBuf,
    file_name_stem: String,
    leading_token: String,
    period: Option<Period>,
}

impl Document {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let absolute_path = path.into();
        let file_name_stem = absolute_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            leading_token: leading_token(&file_name_stem),
            period: extract_period(&file_name_stem),
            absolute_path,
            file_name_stem,
        }
    }

    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    /// File name including extension, for display.
    pub fn file_name(&self) -> String {
        self.absolute_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file_name_stem.clone())
    }

    pub fn file_name_stem(&self) -> &str {
        &self.file_name_stem
    }

    pub fn leading_token(&self) -> &str {
        &self.leading_token
    }

    pub fn period(&self) -> Option<Period> {
        self.period
    }

    /// Case-insensitive containment test against the full path.
    pub fn path_contains(&self, token: &str) -> bool {
        self.absolute_path
            .to_string_lossy()
            .to_lowercase()
            .contains(&token.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_fields_from_stem() {
        let doc = Document::from_path("/clientes/ACME PYME/balances/BALANCE DIC 23.pdf");
        assert_eq!(doc.file_name_stem(), "BALANCE DIC 23");
        assert_eq!(doc.leading_token(), "BALANCE");
        assert_eq!(doc.period(), Period::new(2023, 12));
        assert_eq!(doc.file_name(), "BALANCE DIC 23.pdf");
    }

    #[test]
    fn document_without_period() {
        let doc = Document::from_path("/clientes/x/DNI frente.jpg");
        assert_eq!(doc.leading_token(), "DNI");
        assert_eq!(doc.period(), None);
    }

    #[test]
    fn path_containment_ignores_case_and_covers_folders() {
        let doc = Document::from_path("/clientes/ACME/Ganancias/ddjj 2023.pdf");
        assert!(doc.path_contains("GANANCIAS"));
        assert!(doc.path_contains("DDJJ"));
        assert!(!doc.path_contains("IVA"));
    }
}
