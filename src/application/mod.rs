//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AuditUseCase` - Enumerate, classify, match, aggregate, deliver

pub mod audit;

pub use audit::{AuditOptions, AuditResult, AuditUseCase};
