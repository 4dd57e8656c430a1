//! Configuration module for Legajo
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LEGAJO_*)
//! 3. File passed with `--config`
//! 4. Audit root config (<ROOT>/.legajo.toml)
//! 5. User config (~/.config/legajo/config.toml)
//! 6. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{resolve, ConfigWarning, LoadedConfig};
pub use types::{
    CatalogConfig, ColorMode, Config, NotifyConfig, OutputConfig, ReportConfig, ScanConfig,
    ROOT_CONFIG_FILE,
};
