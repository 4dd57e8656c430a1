//! Domain Policies
//!
//! Business rules that govern classification, period parsing and staleness.
//! These are pure functions over domain values.

mod classifier;
mod period_extractor;
mod staleness;

pub use classifier::classify;
pub use period_extractor::{extract_period, leading_token, MONTH_ABBREVIATIONS};
pub use staleness::{is_outdated_annual, is_outdated_quarterly, staleness, StaleReason};
