//! System clock adapter

use chrono::{DateTime, Local, Utc};

use crate::domain::ports::Clock;
use crate::domain::value_objects::Period;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> Period {
        Period::from_date(Local::now().date_naive())
    }
}
