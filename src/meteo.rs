//! This module provides the main entry point for retrieving weather data: a client bound to
//! one observation station and one forecast place of the API.

use crate::error::MeteoError;
use crate::types::clock::{Clock, SystemClock};
use crate::types::date_range::DateRange;
use crate::types::time_series::TimeSeries;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::fetcher::WeatherFetcher;
use crate::weather_data::throttle::Throttle;
use crate::weather_data::transport::{HttpTransport, Transport};
use bon::bon;
use std::sync::Arc;

/// The main client struct for accessing historical observations and forecasts.
///
/// Every call returns a freshly built [`TimeSeries`]; the client keeps no fetched state.
///
/// # Examples
///
/// ```no_run
/// use meteo::{HttpTransport, MeteoClient, MeteoError};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), MeteoError> {
/// let client = MeteoClient::builder()
///     .transport(HttpTransport::new(Duration::from_secs(10))?)
///     .base_url("https://api.meteo.lt/v1")
///     .station("vilniaus-ams")
///     .place("vilnius")
///     .build();
///
/// let history = client.historical("2024-05-01", "2024-05-07").await?;
/// let forecast = client.forecast().await?;
/// println!("{} historical rows, {} forecast rows", history.len(), forecast.len());
/// # Ok(())
/// # }
/// ```
pub struct MeteoClient<T = HttpTransport> {
    fetcher: WeatherFetcher<T>,
    station: String,
    place: String,
    clock: Arc<dyn Clock>,
}

#[bon]
impl<T: Transport> MeteoClient<T> {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `transport` - The HTTP collaborator, usually an [`HttpTransport`].
    /// * `base_url` - API root, with or without a trailing slash.
    /// * `station` - Station code used for historical observations.
    /// * `place` - Place code used for the long-term forecast.
    /// * `throttle` - Delay between daily requests. Defaults to 350 ms.
    /// * `clock` - Source of today's date. Defaults to the system's local date.
    #[builder]
    pub fn new(
        transport: T,
        #[builder(into)] base_url: String,
        #[builder(into)] station: String,
        #[builder(into)] place: String,
        #[builder(default)] throttle: Throttle,
        clock: Option<Arc<dyn Clock>>,
    ) -> Self {
        Self {
            fetcher: WeatherFetcher::new(transport, &base_url, throttle),
            station,
            place,
            clock: clock.unwrap_or_else(|| Arc::new(SystemClock)),
        }
    }

    pub fn station(&self) -> &str {
        &self.station
    }

    pub fn place(&self) -> &str {
        &self.place
    }

    pub fn base_url(&self) -> &str {
        self.fetcher.base_url()
    }

    /// Today's date according to the client's clock.
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Validates `start`/`end` against today and fetches the historical observations.
    ///
    /// The result starts at local midnight of `start` and ends at the last local hour of
    /// `end`, or at the latest available hour when `end` is today.
    ///
    /// # Errors
    ///
    /// * [`MeteoError::WeatherData`] wrapping [`WeatherDataError::InvalidRange`] if the dates
    ///   are unparseable or out of order.
    /// * [`MeteoError::WeatherData`] wrapping [`WeatherDataError::DayFetch`] if any single
    ///   day's request fails. No partial series is returned.
    pub async fn historical(&self, start: &str, end: &str) -> Result<TimeSeries, MeteoError> {
        let today = self.clock.today();
        let range = DateRange::parse(start, end, today).map_err(WeatherDataError::InvalidRange)?;
        self.historical_range(&range).await
    }

    /// Fetches historical observations for an already validated range.
    pub async fn historical_range(&self, range: &DateRange) -> Result<TimeSeries, MeteoError> {
        let today = self.clock.today();
        Ok(self
            .fetcher
            .observations(&self.station, range, today)
            .await?)
    }

    /// Fetches the long-term forecast for the configured place.
    pub async fn forecast(&self) -> Result<TimeSeries, MeteoError> {
        Ok(self.fetcher.forecast(&self.place).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::clock::FixedClock;
    use crate::types::error::ValidationError;
    use crate::weather_data::error::TransportError;
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    /// Answers every observation request with a full UTC day of hourly rows.
    struct SyntheticDays;

    impl Transport for SyntheticDays {
        async fn get_json(&self, url: &str) -> Result<Value, TransportError> {
            if url.ends_with("/forecasts/long-term") {
                return Ok(json!({
                    "forecastTimestamps": [
                        { "forecastTimeUtc": "2024-05-21 10:00:00", "airTemperature": 14.0 }
                    ]
                }));
            }
            let day = url.rsplit('/').next().unwrap_or_default().to_string();
            let observations: Vec<Value> = (0..24)
                .map(|h| json!({ "observationTimeUtc": format!("{day} {h:02}:00:00"), "airTemperature": 10.0 }))
                .collect();
            Ok(json!({ "observations": observations }))
        }
    }

    fn client() -> MeteoClient<SyntheticDays> {
        let today = NaiveDate::from_ymd_opt(2024, 5, 21).unwrap();
        MeteoClient::builder()
            .transport(SyntheticDays)
            .base_url("https://api.test/v1/")
            .station("vilniaus-ams")
            .place("vilnius")
            .throttle(Throttle::none())
            .clock(Arc::new(FixedClock(today)))
            .build()
    }

    #[test]
    fn test_builder_defaults() {
        let client = MeteoClient::builder()
            .transport(SyntheticDays)
            .base_url("https://api.test/v1/")
            .station("s")
            .place("p")
            .build();
        assert_eq!(client.base_url(), "https://api.test/v1");
        assert_eq!(client.station(), "s");
        assert_eq!(client.place(), "p");
    }

    #[tokio::test]
    async fn test_historical_two_days() -> Result<(), MeteoError> {
        let series = client().historical("2024-05-18", "2024-05-19").await?;
        assert_eq!(series.len(), 48);
        Ok(())
    }

    #[tokio::test]
    async fn test_historical_invalid_range() {
        let err = client()
            .historical("2024-05-21", "2024-05-22")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MeteoError::WeatherData(WeatherDataError::InvalidRange(
                ValidationError::StartNotBeforeToday { .. }
            ))
        ));
        assert_eq!(err.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_forecast() -> Result<(), MeteoError> {
        let series = client().forecast().await?;
        assert_eq!(series.len(), 1);
        Ok(())
    }
}
