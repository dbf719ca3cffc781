//! Contains the `TimeSeries` structure: an ordered sequence of JSON records keyed by
//! their timestamp in the fixed local offset.

use crate::types::error::{MalformedRecordError, MetricError, UnknownMetricError};
use crate::types::metric_series::MetricSeries;
use crate::types::weather_condition::WeatherCondition;
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

/// Hours east of UTC for every timestamp in a series. Fixed, no daylight saving.
pub const LOCAL_OFFSET_HOURS: i32 = 2;

/// The `FixedOffset` matching [`LOCAL_OFFSET_HOURS`].
pub const LOCAL_OFFSET: FixedOffset = match FixedOffset::east_opt(LOCAL_OFFSET_HOURS * 3600) {
    Some(offset) => offset,
    None => panic!("local offset out of range"),
};

/// Field carrying the condition code on both observation and forecast rows.
pub const CONDITION_FIELD: &str = "conditionCode";

/// A single row of a [`TimeSeries`]: the local timestamp plus every other field of the
/// source record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub time: DateTime<FixedOffset>,
    pub fields: Map<String, Value>,
}

impl Observation {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The parsed `conditionCode`, if present and a string.
    pub fn condition(&self) -> Option<WeatherCondition> {
        self.fields
            .get(CONDITION_FIELD)
            .and_then(WeatherCondition::from_value)
    }
}

/// An ordered, immutable sequence of [`Observation`]s.
///
/// Series built from the API are in chronological order because requests are issued
/// day by day and each day's payload is already sorted. [`TimeSeries::from_records`]
/// neither sorts nor deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeSeries {
    rows: Vec<Observation>,
}

impl TimeSeries {
    /// Builds a series from raw JSON records.
    ///
    /// `timestamp_field` is read from each record as a UTC instant, converted to
    /// [`LOCAL_OFFSET`] and removed from the record's remaining fields.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedRecordError`] for the first record that is not an object,
    /// lacks the timestamp field, or carries a timestamp that cannot be parsed.
    ///
    /// # Example
    ///
    /// ```
    /// use meteo::TimeSeries;
    /// use serde_json::json;
    ///
    /// let records = vec![
    ///     json!({"observationTimeUtc": "2024-05-01 22:00:00", "airTemperature": 11.5}),
    ///     json!({"observationTimeUtc": "2024-05-01 23:00:00", "airTemperature": 10.9}),
    /// ];
    /// let series = TimeSeries::from_records(records, "observationTimeUtc").unwrap();
    /// assert_eq!(series.len(), 2);
    /// assert_eq!(series.rows()[0].time.to_rfc3339(), "2024-05-02T00:00:00+02:00");
    /// assert!(series.rows()[0].get("observationTimeUtc").is_none());
    /// ```
    pub fn from_records(
        records: Vec<Value>,
        timestamp_field: &str,
    ) -> Result<Self, MalformedRecordError> {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let Value::Object(mut fields) = record else {
                    return Err(MalformedRecordError::NotAnObject { index });
                };
                let raw = fields.remove(timestamp_field).ok_or_else(|| {
                    MalformedRecordError::MissingTimestamp {
                        index,
                        field: timestamp_field.to_string(),
                    }
                })?;
                let time = raw
                    .as_str()
                    .and_then(parse_utc_timestamp)
                    .ok_or_else(|| MalformedRecordError::UnparseableTimestamp {
                        index,
                        field: timestamp_field.to_string(),
                        value: raw.to_string(),
                    })?;
                Ok(Observation {
                    time: time.with_timezone(&LOCAL_OFFSET),
                    fields,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Built series of {} rows keyed by '{}'", rows.len(), timestamp_field);
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first(&self) -> Option<&Observation> {
        self.rows.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.rows.last()
    }

    /// A new series without the first `count` rows.
    pub fn skip_leading(self, count: usize) -> Self {
        let mut rows = self.rows;
        rows.drain(..count.min(rows.len()));
        Self { rows }
    }

    /// A new series without the last `count` rows.
    pub fn drop_trailing(self, count: usize) -> Self {
        let mut rows = self.rows;
        rows.truncate(rows.len().saturating_sub(count));
        Self { rows }
    }

    /// Extracts a named numeric field as a [`MetricSeries`].
    ///
    /// Rows where the field is absent or `null` yield `None` values. The metric is
    /// unknown when no row carries the field at all, and non-numeric when any row
    /// holds something other than a number for it (e.g. `conditionCode`).
    pub fn metric(&self, name: &str) -> Result<MetricSeries, MetricError> {
        if !self.rows.iter().any(|row| row.fields.contains_key(name)) {
            return Err(UnknownMetricError {
                name: name.to_string(),
            }
            .into());
        }
        let mut points = Vec::with_capacity(self.rows.len());
        for (index, row) in self.rows.iter().enumerate() {
            let value = match row.get(name) {
                None | Some(Value::Null) => None,
                Some(Value::Number(number)) => number.as_f64(),
                Some(other) => {
                    return Err(MetricError::NonNumeric {
                        name: name.to_string(),
                        index,
                        value: other.to_string(),
                    });
                }
            };
            points.push((row.time, value));
        }
        Ok(MetricSeries::new(name, points))
    }
}

impl IntoIterator for TimeSeries {
    type Item = Observation;
    type IntoIter = std::vec::IntoIter<Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl FromIterator<Observation> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

// The API emits "YYYY-MM-DD HH:MM:SS" in UTC; RFC 3339 is accepted as well.
fn parse_utc_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime);
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}
