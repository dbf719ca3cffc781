use crate::types::error::{MalformedRecordError, ValidationError};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Response body from {0} is not valid JSON")]
    Decode(String, #[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum WeatherDataError {
    #[error("Invalid date range")]
    InvalidRange(#[source] ValidationError),

    #[error("Fetching observations for station '{station}' on {day} failed")]
    DayFetch {
        station: String,
        day: NaiveDate,
        #[source]
        source: TransportError,
    },

    #[error("Fetching forecast for place '{place}' failed")]
    ForecastFetch {
        place: String,
        #[source]
        source: TransportError,
    },

    #[error("Response from {url} does not contain a '{field}' array")]
    UnexpectedPayload {
        url: String,
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecordError),
}
