//! Audit Use Case Module
//!
//! Runs the compliance engine over a client root and delivers the report.

mod options;
mod result;
mod use_case;

pub use options::AuditOptions;
pub use result::AuditResult;
pub use use_case::AuditUseCase;
