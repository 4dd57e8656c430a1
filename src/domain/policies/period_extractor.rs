//! Filing period extraction from file names.
//!
//! File names follow the practice's convention `<TYPE> [words...] <MON> <YY>`,
//! e.g. `BALANCE DIC 23` or `IVA DDJJ MAR 24`. Only the rightmost
//! month/year pair counts.
//!
//! This is a pure domain policy - no I/O operations.

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::value_objects::Period;

/// Month abbreviations in calendar order (January first).
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "ENE", "FEB", "MAR", "ABR", "MAY", "JUN", "JUL", "AGO", "SEP", "OCT", "NOV", "DIC",
];

lazy_static! {
    /// `<abbreviation><space><2-digit year>` with anything before it; the
    /// greedy prefix pins the match to the last occurrence in the stem.
    static ref TRAILING_PERIOD_PATTERN: Regex =
        Regex::new(r"^.*([A-Za-z]{3}) (\d{2})(?:\D|$)").unwrap();
}

/// Parse the filing period out of a file name stem.
///
/// Returns `None` when the stem carries no `<MON> <YY>` pair or when the
/// rightmost pair uses an abbreviation outside [`MONTH_ABBREVIATIONS`].
pub fn extract_period(file_name_stem: &str) -> Option<Period> {
    let caps = TRAILING_PERIOD_PATTERN.captures(file_name_stem)?;
    let month = month_number(&caps[1])?;
    let short_year: u32 = caps[2].parse().ok()?;
    Period::from_short_year(short_year, month)
}

/// First whitespace-delimited word of the stem (empty for a blank stem).
pub fn leading_token(file_name_stem: &str) -> String {
    file_name_stem
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

fn month_number(abbreviation: &str) -> Option<u32> {
    let upper = abbreviation.to_uppercase();
    MONTH_ABBREVIATIONS
        .iter()
        .position(|m| *m == upper)
        .map(|idx| idx as u32 + 1)
}
