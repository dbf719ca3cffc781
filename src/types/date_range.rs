//! Validated start/end calendar date pair for historical fetches.

use crate::types::error::ValidationError;
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
use std::fmt;
use std::fmt::{Display, Formatter};

/// An inclusive range of calendar days, validated against "today".
///
/// A `DateRange` can only be obtained through [`DateRange::parse`] or [`DateRange::new`],
/// both of which enforce `start < end <= today` and `start < today`. Nothing downstream
/// validates it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Validates an already-parsed pair of dates.
    ///
    /// # Errors
    ///
    /// Returns the first ordering violation found, checked in the order
    /// start/end, start/today, end/today.
    pub fn new(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::StartNotBeforeEnd { start, end });
        }
        if start >= today {
            return Err(ValidationError::StartNotBeforeToday { start, today });
        }
        if end > today {
            return Err(ValidationError::EndAfterToday { end, today });
        }
        Ok(Self { start, end })
    }

    /// Parses two caller-supplied strings and validates them.
    ///
    /// Accepts plain dates (`2024-05-01`) as well as datetimes, whose time of day is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use meteo::{DateRange, ValidationError};
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    /// let range = DateRange::parse("2024-05-01", "2024-05-03 18:00:00", today).unwrap();
    /// assert_eq!(range.end(), NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
    ///
    /// let err = DateRange::parse("2024-05-03", "2024-05-01", today).unwrap_err();
    /// assert!(matches!(err, ValidationError::StartNotBeforeEnd { .. }));
    /// ```
    pub fn parse(start: &str, end: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let start = parse_calendar_date(start)?;
        let end = parse_calendar_date(end)?;
        Self::new(start, end, today)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Every day from the lookback day (`start - 1`) through `end`, inclusive, in order.
    pub fn days_with_lookback(&self) -> Vec<NaiveDate> {
        let first = self
            .start
            .checked_sub_days(Days::new(1))
            .unwrap_or(self.start);
        first.iter_days().take_while(|day| *day <= self.end).collect()
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Boolean form of [`DateRange::parse`]: `true` when the pair is a valid range.
pub fn validate(start: &str, end: &str, today: NaiveDate) -> bool {
    DateRange::parse(start, end, today).is_ok()
}

fn parse_calendar_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|datetime| datetime.date())
        .ok_or_else(|| ValidationError::Unparseable(input.to_string()))
}
