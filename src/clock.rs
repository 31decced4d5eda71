//! Source of "now" for birthday queries.

use chrono::{Local, NaiveDateTime};

/// Provides the current local date and time.
///
/// The session asks its clock instead of reading the system time directly,
/// which lets tests pin the date the `birthdays` command runs on.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a single moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
