use crate::types::date_range::DateRange;
use crate::types::time_series::{TimeSeries, LOCAL_OFFSET_HOURS};
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::throttle::Throttle;
use crate::weather_data::transport::Transport;
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;

const OBSERVATION_TIME_FIELD: &str = "observationTimeUtc";
const FORECAST_TIME_FIELD: &str = "forecastTimeUtc";

#[derive(Deserialize)]
struct ObservationsPayload {
    observations: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastPayload {
    forecast_timestamps: Vec<Value>,
}

/// Issues the raw requests against the API and assembles the results into series.
pub struct WeatherFetcher<T> {
    transport: T,
    base_url: String,
    throttle: Throttle,
}

impl<T: Transport> WeatherFetcher<T> {
    pub fn new(transport: T, base_url: &str, throttle: Throttle) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            throttle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches every day of `range` plus the lookback day, one request per day,
    /// and trims the result to whole local days.
    ///
    /// The leading `24 - offset` rows (the part of the lookback day that is still
    /// yesterday in local time) are always dropped. The trailing `offset` rows spill
    /// into the day after the last fetched UTC day; they are dropped unless the series
    /// reaches into `today`, in which case the partial current day is kept.
    pub async fn observations(
        &self,
        station: &str,
        range: &DateRange,
        today: NaiveDate,
    ) -> Result<TimeSeries, WeatherDataError> {
        let days = range.days_with_lookback();
        let mut records = Vec::new();

        for (i, day) in days.iter().enumerate() {
            if i > 0 {
                self.throttle.pause().await;
            }
            let url = format!(
                "{}/stations/{}/observations/{}",
                self.base_url,
                station,
                day.format("%Y-%m-%d")
            );
            debug!("Fetching observations for station {} on {}", station, day);
            let body = self.transport.get_json(&url).await.map_err(|e| {
                warn!("Observation request for {} failed: {}", day, e);
                WeatherDataError::DayFetch {
                    station: station.to_string(),
                    day: *day,
                    source: e,
                }
            })?;
            let payload: ObservationsPayload =
                serde_json::from_value(body).map_err(|e| WeatherDataError::UnexpectedPayload {
                    url,
                    field: "observations",
                    source: e,
                })?;
            records.extend(payload.observations);
        }

        let series = TimeSeries::from_records(records, OBSERVATION_TIME_FIELD)?;
        let series = trim_to_local_days(series, today);
        info!(
            "Fetched {} observation rows for station {} over {} ({} requests)",
            series.len(),
            station,
            range,
            days.len()
        );
        Ok(series)
    }

    /// Fetches the long-term forecast for `place`. No trimming is applied.
    pub async fn forecast(&self, place: &str) -> Result<TimeSeries, WeatherDataError> {
        let url = format!("{}/places/{}/forecasts/long-term", self.base_url, place);
        let body = self
            .transport
            .get_json(&url)
            .await
            .map_err(|e| {
                warn!("Forecast request for {} failed: {}", place, e);
                WeatherDataError::ForecastFetch {
                    place: place.to_string(),
                    source: e,
                }
            })?;
        let payload: ForecastPayload =
            serde_json::from_value(body).map_err(|e| WeatherDataError::UnexpectedPayload {
                url,
                field: "forecastTimestamps",
                source: e,
            })?;
        let series = TimeSeries::from_records(payload.forecast_timestamps, FORECAST_TIME_FIELD)?;
        info!("Fetched {} forecast rows for place {}", series.len(), place);
        Ok(series)
    }
}

fn trim_to_local_days(series: TimeSeries, today: NaiveDate) -> TimeSeries {
    let offset = LOCAL_OFFSET_HOURS as usize;
    let series = series.skip_leading(24 - offset);

    if series.len() <= offset {
        warn!(
            "Only {} rows left after dropping the lookback day, skipping trailing trim",
            series.len()
        );
        return series;
    }

    let probe = series.rows()[series.len() - (offset + 1)].time.date_naive();
    if probe == today {
        debug!("Series reaches into today ({}), keeping trailing rows", today);
        series
    } else {
        debug!(
            "Series ends on {} before today ({}), dropping {} trailing rows",
            probe, today, offset
        );
        series.drop_trailing(offset)
    }
}
