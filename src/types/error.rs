use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Could not parse '{0}' as a calendar date")]
    Unparseable(String),

    #[error("Start date {start} must be earlier than end date {end}")]
    StartNotBeforeEnd { start: NaiveDate, end: NaiveDate },

    #[error("Start date {start} must be earlier than today ({today})")]
    StartNotBeforeToday { start: NaiveDate, today: NaiveDate },

    #[error("End date {end} must not be later than today ({today})")]
    EndAfterToday { end: NaiveDate, today: NaiveDate },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MalformedRecordError {
    #[error("Record {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("Record {index} is missing timestamp field '{field}'")]
    MissingTimestamp { index: usize, field: String },

    #[error("Record {index} has unparseable timestamp '{value}' in field '{field}'")]
    UnparseableTimestamp {
        index: usize,
        field: String,
        value: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Metric '{name}' does not exist in the series")]
pub struct UnknownMetricError {
    pub name: String,
}

/// Why a metric could not be extracted from a series.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetricError {
    #[error(transparent)]
    Unknown(#[from] UnknownMetricError),

    #[error("Metric '{name}' is not numeric (row {index} holds {value})")]
    NonNumeric {
        name: String,
        index: usize,
        value: String,
    },
}
