/*!
 * Injectable source of today's date.
 *
 * Age derivation and the future-date check both depend on "today". The
 * engine never reads an ambient global for it; callers inject a `Clock`
 * so date-dependent validation stays deterministic under test.
 */

use chrono::{Local, NaiveDate};

/// Source of the current date
pub trait Clock {
    /// Today's date in the local calendar
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
