//! Clock port - the single source of "now" for an audit run

use chrono::{DateTime, Utc};

use crate::domain::value_objects::Period;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar month, in local time.
    fn today(&self) -> Period;
}

/// Fixed clock for tests and `--today` overrides
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    today: Period,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>, today: Period) -> Self {
        Self { now, today }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> Period {
        self.today
    }
}
