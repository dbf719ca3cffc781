//! Source of "today" for range validation and trailing-day trimming.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt::Debug;

/// Supplies the current local calendar date.
///
/// Inject a [`FixedClock`] to make validation and trimming deterministic.
pub trait Clock: Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock date of the machine running the fetch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen on a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The date `years` years before `today`.
///
/// February 29th maps to February 28th when the target year is not a leap year.
/// Returns `None` only when the result falls outside chrono's supported range.
pub fn years_before(today: NaiveDate, years: i32) -> Option<NaiveDate> {
    let year = today.year().checked_sub(years)?;
    NaiveDate::from_ymd_opt(year, today.month(), today.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, today.month(), today.day() - 1))
}
