//! Staleness rules for periodic filings.
//!
//! Both predicates are pure functions of the filing period and the injected
//! current period; nothing here reads the system clock.
//!
//! The annual rule compares two-digit years and, when the filing is from the
//! previous year, compares the month distance against the filing month
//! itself. That is not a "more than twelve months" check; it reproduces the
//! rule the practice has always applied and must not be changed without
//! sign-off from the accounting team.

use serde::Serialize;

use crate::domain::value_objects::Period;

/// Which rule flagged a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleReason {
    Annual,
    Quarterly,
}

/// Annual renewal rule, applied to every periodic document.
pub fn is_outdated_annual(filed: Period, today: Period) -> bool {
    let year_diff = today.year().rem_euclid(100) - filed.year().rem_euclid(100);
    let month_diff = (today.month() as i32 - filed.month() as i32).rem_euclid(12);

    match year_diff {
        d if d > 1 => true,
        1 => month_diff >= filed.month() as i32,
        _ => false,
    }
}

/// Quarterly renewal rule, compared on full years.
pub fn is_outdated_quarterly(filed: Period, today: Period) -> bool {
    if filed.year() < today.year() {
        return true;
    }
    filed.year() == today.year() && filed.quarter() < today.quarter()
}

/// Compose both rules: annual first, quarterly only for eligible documents
/// the annual rule let through.
pub fn staleness(filed: Period, today: Period, quarterly_eligible: bool) -> Option<StaleReason> {
    if is_outdated_annual(filed, today) {
        return Some(StaleReason::Annual);
    }
    if quarterly_eligible && is_outdated_quarterly(filed, today) {
        return Some(StaleReason::Quarterly);
    }
    None
}
