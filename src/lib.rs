//! Legajo - document compliance auditor for accounting practices
//!
//! Scans a root directory holding one folder per client, classifies each
//! client (individual, small business, company), and reports required
//! documents that are missing or past their renewal cycle.
//!
//! ## Layers
//!
//! - `domain` - classification, period parsing, staleness rules, matching
//! - `application` - the audit use case wiring ports together
//! - `infrastructure` - disk walk, clock, CSV sink, outbox notifier
//! - `config` - TOML configuration and `LEGAJO_*` overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{AuditOptions, AuditResult, AuditUseCase};
pub use config::Config;
pub use domain::entities::{ComplianceReport, RequirementCatalog};
pub use domain::policies::{classify, extract_period};
pub use domain::value_objects::{Category, Period, RenewalCycle};
pub use error::{LegajoError, LegajoResult};
