//! Period Value Object
//!
//! A calendar month. Used both for the filing period parsed out of a file name
//! and for the injected "current date" the staleness policy compares against.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A (year, month) pair with `month` always in `1..=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Returns `None` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Interpret a two-digit year token as `2000 + token`.
    pub fn from_short_year(short_year: u32, month: u32) -> Option<Self> {
        if short_year > 99 {
            return None;
        }
        Self::new(2000 + short_year as i32, month)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Calendar quarter, `1..=4`.
    pub fn quarter(&self) -> u32 {
        self.month.div_ceil(3)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = String;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("invalid period '{}' (expected YYYY-MM)", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("invalid year in period '{}'", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("invalid month in period '{}'", s))?;
        Period::new(year, month).ok_or_else(|| format!("month out of range in period '{}'", s))
    }
}
