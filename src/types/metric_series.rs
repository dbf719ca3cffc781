//! A single named scalar column drawn from a [`crate::TimeSeries`].

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use polars::prelude::*;
use serde::Serialize;

/// Name of the timestamp column in frames produced by [`MetricSeries::to_frame`].
pub const DATETIME_COLUMN: &str = "datetime";

/// Timestamped values of one metric. `None` marks a row where the metric was missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    name: String,
    points: Vec<(DateTime<FixedOffset>, Option<f64>)>,
}

impl MetricSeries {
    pub fn new(name: impl Into<String>, points: Vec<(DateTime<FixedOffset>, Option<f64>)>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[(DateTime<FixedOffset>, Option<f64>)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn times(&self) -> Vec<DateTime<FixedOffset>> {
        self.points.iter().map(|(time, _)| *time).collect()
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|(_, value)| *value).collect()
    }

    /// Keeps only the last `count` points.
    pub fn tail(self, count: usize) -> Self {
        let skip = self.points.len().saturating_sub(count);
        self.skip(skip)
    }

    /// Drops the first `count` points.
    pub fn skip(self, count: usize) -> Self {
        let mut points = self.points;
        points.drain(..count.min(points.len()));
        Self {
            name: self.name,
            points,
        }
    }

    /// Name of the value column in [`MetricSeries::to_frame`].
    ///
    /// The metric name, unless it collides with [`DATETIME_COLUMN`], in which case
    /// it gets a `_value` suffix.
    pub fn value_column(&self) -> String {
        if self.name == DATETIME_COLUMN {
            format!("{}_value", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Converts the series into a two-column Polars `DataFrame`.
    ///
    /// The `datetime` column holds the timezone-naive *local* wall-clock time, so
    /// `dt().hour()` on it yields the local hour. The value column is named by
    /// [`MetricSeries::value_column`].
    ///
    /// # Errors
    ///
    /// Returns a [`PolarsError`] if the frame cannot be assembled.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let datetimes: Vec<NaiveDateTime> = self
            .points
            .iter()
            .map(|(time, _)| time.naive_local())
            .collect();
        let values = self.values();
        DataFrame::new(vec![
            Column::new(DATETIME_COLUMN.into(), datetimes),
            Column::new(self.value_column().into(), values),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::time_series::LOCAL_OFFSET;
    use chrono::TimeZone;

    fn series(values: &[Option<f64>]) -> MetricSeries {
        let start = LOCAL_OFFSET.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| (start + chrono::Duration::hours(i as i64), *v))
            .collect();
        MetricSeries::new("airTemperature", points)
    }

    #[test]
    fn test_tail_and_skip() {
        let s = series(&[Some(1.0), Some(2.0), Some(3.0), None]);
        assert_eq!(s.clone().tail(2).values(), vec![Some(3.0), None]);
        assert_eq!(s.clone().tail(10).len(), 4);
        assert_eq!(s.clone().skip(1).values(), vec![Some(2.0), Some(3.0), None]);
        assert!(s.skip(9).is_empty());
    }

    #[test]
    fn test_to_frame_schema() -> Result<(), Box<dyn std::error::Error>> {
        let df = series(&[Some(1.5), None]).to_frame()?;
        assert_eq!(df.height(), 2);
        assert!(matches!(
            df.column(DATETIME_COLUMN)?.dtype(),
            DataType::Datetime(_, None)
        ));
        let values = df.column("airTemperature")?.f64()?;
        assert_eq!(values.get(0), Some(1.5));
        assert_eq!(values.get(1), None);
        Ok(())
    }

    #[test]
    fn test_to_frame_metric_named_datetime() -> Result<(), Box<dyn std::error::Error>> {
        let start = LOCAL_OFFSET.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let metric = MetricSeries::new(DATETIME_COLUMN, vec![(start, Some(7.0))]);
        assert_eq!(metric.value_column(), "datetime_value");

        let df = metric.to_frame()?;
        assert_eq!(df.width(), 2);
        assert_eq!(df.column("datetime_value")?.f64()?.get(0), Some(7.0));
        Ok(())
    }
}
