//! Domain Services
//!
//! Stateless services operating on domain entities.

mod aggregator;
mod matcher;

pub use aggregator::aggregate;
pub use matcher::ComplianceMatcher;
