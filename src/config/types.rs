//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{RequirementCatalog, RequirementDefinition};
use crate::domain::value_objects::Category;
use crate::error::LegajoResult;

use super::loader::{self, ConfigWarning};

/// File name looked up inside the audited root
pub const ROOT_CONFIG_FILE: &str = ".legajo.toml";

/// Scan configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScanConfig {
    /// Only consider files with these extensions (case-insensitive, no dot).
    /// Empty means every file.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Descend into hidden files and folders
    #[serde(default)]
    pub include_hidden: bool,
}

/// Tabular report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Directory for the CSV files; the audited root when unset
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default = "default_missing_file")]
    pub missing_file: String,

    #[serde(default = "default_outdated_file")]
    pub outdated_file: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output_dir: None,
            missing_file: default_missing_file(),
            outdated_file: default_outdated_file(),
        }
    }
}

fn default_missing_file() -> String {
    "Estatus de legajos - faltantes.csv".to_string()
}

fn default_outdated_file() -> String {
    "Estatus de legajos - desactualizados.csv".to_string()
}

/// Notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Outbox directory picked up by the mail relay
    #[serde(default)]
    pub outbox: Option<PathBuf>,

    #[serde(default)]
    pub recipients: Vec<String>,

    #[serde(default = "default_subject")]
    pub subject: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            outbox: None,
            recipients: Vec::new(),
            subject: default_subject(),
        }
    }
}

fn default_subject() -> String {
    "Estatus de legajos".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Requirement catalog overrides
///
/// ```toml
/// [catalog]
/// balance_families = ["BALANCE", "EECC"]
///
/// [[catalog.persona]]
/// key = "DNI"
/// token = "DNI"
/// cycle = "one-time"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub balance_families: Option<Vec<String>>,

    #[serde(default)]
    pub persona: Option<Vec<RequirementDefinition>>,

    #[serde(default)]
    pub pyme: Option<Vec<RequirementDefinition>>,

    #[serde(default)]
    pub empresa: Option<Vec<RequirementDefinition>>,
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub notify: NotifyConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LegajoResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LegajoResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Built-in catalog with this configuration's overrides applied.
    pub fn requirement_catalog(&self) -> LegajoResult<RequirementCatalog> {
        let mut catalog = RequirementCatalog::builtin();

        let overrides = [
            (Category::Persona, &self.catalog.persona),
            (Category::Pyme, &self.catalog.pyme),
            (Category::Empresa, &self.catalog.empresa),
        ];
        for (category, list) in overrides {
            if let Some(list) = list {
                catalog = catalog.with_requirements(category, list.clone())?;
            }
        }

        if let Some(families) = &self.catalog.balance_families {
            catalog = catalog.with_balance_families(families.clone());
        }

        Ok(catalog)
    }

    /// Whether a file with this extension takes part in the audit.
    pub fn accepts_extension(&self, extension: Option<&str>) -> bool {
        if self.scan.extensions.is_empty() {
            return true;
        }
        let Some(ext) = extension else {
            return false;
        };
        self.scan
            .extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}
