use crate::types::error::{MalformedRecordError, MetricError, ValidationError};
use crate::weather_data::error::{TransportError, WeatherDataError};
use polars::error::PolarsError;
use std::fmt;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Which fetched series a [`MeteoError::MissingData`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    History,
    Forecast,
}

impl Display for SeriesKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::History => write!(f, "historical"),
            SeriesKind::Forecast => write!(f, "forecast"),
        }
    }
}

#[derive(Debug, Error)]
pub enum MeteoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    WeatherData(#[from] WeatherDataError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecordError),

    #[error(transparent)]
    Metric(#[from] MetricError),

    #[error("No {0} data has been fetched")]
    MissingData(SeriesKind),

    #[error("Failed processing DataFrame")]
    DataFrame(#[from] PolarsError),
}

impl MeteoError {
    /// Process exit code conventionally associated with this error category:
    /// 1 for validation, transport and data errors, 2 for an unknown or non-numeric metric,
    /// 3 when a series was read before it was fetched.
    pub fn exit_code(&self) -> i32 {
        match self {
            MeteoError::Metric(_) => 2,
            MeteoError::MissingData(_) => 3,
            MeteoError::Validation(_)
            | MeteoError::WeatherData(_)
            | MeteoError::Transport(_)
            | MeteoError::MalformedRecord(_)
            | MeteoError::DataFrame(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::error::UnknownMetricError;
    use chrono::NaiveDate;

    #[test]
    fn test_exit_codes() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let validation = MeteoError::from(ValidationError::EndAfterToday {
            end: day,
            today: day,
        });
        assert_eq!(validation.exit_code(), 1);

        let unknown = MeteoError::from(MetricError::from(UnknownMetricError {
            name: "windGust".to_string(),
        }));
        assert_eq!(unknown.exit_code(), 2);
        assert_eq!(unknown.to_string(), "Metric 'windGust' does not exist in the series");

        let non_numeric = MeteoError::from(MetricError::NonNumeric {
            name: "conditionCode".to_string(),
            index: 3,
            value: "\"snow\"".to_string(),
        });
        assert_eq!(non_numeric.exit_code(), 2);

        let missing = MeteoError::MissingData(SeriesKind::Forecast);
        assert_eq!(missing.exit_code(), 3);
        assert_eq!(missing.to_string(), "No forecast data has been fetched");
    }
}
