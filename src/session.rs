//! A caller-side holder for one historical and one forecast snapshot.

use crate::error::{MeteoError, SeriesKind};
use crate::meteo::MeteoClient;
use crate::types::metric_series::MetricSeries;
use crate::types::time_series::TimeSeries;
use crate::weather_data::transport::{HttpTransport, Transport};
use log::info;

/// Owns a [`MeteoClient`] and the requested date range, and keeps the most recently
/// fetched history and forecast.
///
/// Each fetch replaces the previous snapshot with a new series; reading a series
/// that was never fetched is a [`MeteoError::MissingData`].
pub struct WeatherSession<T = HttpTransport> {
    client: MeteoClient<T>,
    start: String,
    end: String,
    history: Option<TimeSeries>,
    forecast: Option<TimeSeries>,
}

impl<T: Transport> WeatherSession<T> {
    pub fn new(client: MeteoClient<T>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            client,
            start: start.into(),
            end: end.into(),
            history: None,
            forecast: None,
        }
    }

    pub fn client(&self) -> &MeteoClient<T> {
        &self.client
    }

    /// Fetches the historical observations for the session's range.
    pub async fn fetch_history(&mut self) -> Result<&TimeSeries, MeteoError> {
        let series = self.client.historical(&self.start, &self.end).await?;
        info!(
            "Session history for {}..{} refreshed with {} rows",
            self.start,
            self.end,
            series.len()
        );
        Ok(&*self.history.insert(series))
    }

    /// Fetches the long-term forecast.
    pub async fn fetch_forecast(&mut self) -> Result<&TimeSeries, MeteoError> {
        let series = self.client.forecast().await?;
        info!("Session forecast refreshed with {} rows", series.len());
        Ok(&*self.forecast.insert(series))
    }

    pub fn history(&self) -> Result<&TimeSeries, MeteoError> {
        self.history
            .as_ref()
            .ok_or(MeteoError::MissingData(SeriesKind::History))
    }

    pub fn forecast(&self) -> Result<&TimeSeries, MeteoError> {
        self.forecast
            .as_ref()
            .ok_or(MeteoError::MissingData(SeriesKind::Forecast))
    }

    /// A named metric of the fetched history.
    pub fn history_metric(&self, name: &str) -> Result<MetricSeries, MeteoError> {
        Ok(self.history()?.metric(name)?)
    }

    /// A named metric of the fetched forecast.
    pub fn forecast_metric(&self, name: &str) -> Result<MetricSeries, MeteoError> {
        Ok(self.forecast()?.metric(name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::clock::FixedClock;
    use crate::types::error::MetricError;
    use crate::weather_data::error::TransportError;
    use crate::weather_data::throttle::Throttle;
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use std::sync::Arc;

    struct OneDayApi;

    impl Transport for OneDayApi {
        async fn get_json(&self, url: &str) -> Result<Value, TransportError> {
            if url.contains("/places/") {
                return Ok(json!({
                    "forecastTimestamps": [
                        { "forecastTimeUtc": "2024-05-03 12:00:00", "airTemperature": 17.0 },
                        { "forecastTimeUtc": "2024-05-03 13:00:00", "airTemperature": 18.0 }
                    ]
                }));
            }
            let day = url.rsplit('/').next().unwrap_or_default().to_string();
            let observations: Vec<Value> = (0..24)
                .map(|h| json!({ "observationTimeUtc": format!("{day} {h:02}:00:00"), "airTemperature": h }))
                .collect();
            Ok(json!({ "observations": observations }))
        }
    }

    fn session() -> WeatherSession<OneDayApi> {
        let client = MeteoClient::builder()
            .transport(OneDayApi)
            .base_url("https://api.test/v1")
            .station("vilniaus-ams")
            .place("vilnius")
            .throttle(Throttle::none())
            .clock(Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 5, 3).unwrap())))
            .build();
        WeatherSession::new(client, "2024-05-01", "2024-05-02")
    }

    #[test]
    fn test_unfetched_series_is_missing_data() {
        let session = session();
        let err = session.history().unwrap_err();
        assert!(matches!(err, MeteoError::MissingData(SeriesKind::History)));
        assert_eq!(err.exit_code(), 3);
        assert!(matches!(
            session.forecast_metric("airTemperature"),
            Err(MeteoError::MissingData(SeriesKind::Forecast))
        ));
    }

    #[tokio::test]
    async fn test_fetch_then_read_metrics() -> Result<(), MeteoError> {
        let mut session = session();
        assert_eq!(session.fetch_history().await?.len(), 48);
        assert_eq!(session.fetch_forecast().await?.len(), 2);

        let temp = session.history_metric("airTemperature")?;
        assert_eq!(temp.len(), 48);
        assert_eq!(session.forecast_metric("airTemperature")?.len(), 2);

        let err = session.history_metric("cloudCover").unwrap_err();
        assert!(matches!(err, MeteoError::Metric(MetricError::Unknown(_))));
        Ok(())
    }
}
