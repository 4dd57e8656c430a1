//! Domain Entities
//!
//! Core entities produced by a scan. All of them are immutable once built.

mod catalog;
mod client_folder;
mod document;
mod report;

pub use catalog::{RequirementCatalog, RequirementDefinition, DEFAULT_BALANCE_FAMILIES};
pub use client_folder::ClientFolder;
pub use document::Document;
pub use report::{ComplianceReport, ComplianceResult, OutdatedDocument, ReportEntry};
