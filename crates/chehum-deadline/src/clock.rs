//! Source of "today".

use chrono::{Duration, NaiveDate, Utc};

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock shifted by a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    utc_offset_hours: i32,
}

impl SystemClock {
    pub fn new(utc_offset_hours: i32) -> Self {
        Self { utc_offset_hours }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(9)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        (Utc::now() + Duration::hours(self.utc_offset_hours as i64)).date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<T: Clock + ?Sized> Clock for std::sync::Arc<T> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
