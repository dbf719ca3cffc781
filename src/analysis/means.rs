//! Arithmetic means of a metric over the whole series or over the day/night partition
//! of local hours, evaluated as lazy Polars filters.

use crate::error::MeteoError;
use crate::types::metric_series::{MetricSeries, DATETIME_COLUMN};
use crate::types::time_series::TimeSeries;
use polars::prelude::*;

/// First local hour counted as day time.
pub const DAY_START_HOUR: i32 = 8;
/// Last local hour counted as day time (inclusive).
pub const DAY_END_HOUR: i32 = 20;

/// Which rows of a series contribute to a mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPart {
    /// Every row.
    All,
    /// Local hours 8 through 20, inclusive.
    Day,
    /// Local hours before 8 or after 20.
    Night,
}

impl DayPart {
    fn predicate(self) -> Expr {
        let hour = col(DATETIME_COLUMN).dt().hour();
        match self {
            DayPart::All => lit(true),
            DayPart::Day => hour
                .clone()
                .gt_eq(lit(DAY_START_HOUR))
                .and(hour.lt_eq(lit(DAY_END_HOUR))),
            DayPart::Night => hour
                .clone()
                .lt(lit(DAY_START_HOUR))
                .or(hour.gt(lit(DAY_END_HOUR))),
        }
    }
}

/// Mean of the present values of `metric` within `part`.
///
/// Missing values are ignored. Returns `Ok(None)` when the partition holds no values,
/// which is the "no data" result rather than a division error.
pub fn partition_mean(metric: &MetricSeries, part: DayPart) -> PolarsResult<Option<f64>> {
    let name = metric.value_column();
    let df = metric
        .to_frame()?
        .lazy()
        .filter(part.predicate())
        .select([col(name.as_str()).mean()])
        .collect()?;
    Ok(df.column(&name)?.f64()?.get(0))
}

/// Mean of `metric` over every row of `series`.
pub fn mean(series: &TimeSeries, metric: &str) -> Result<Option<f64>, MeteoError> {
    Ok(partition_mean(&series.metric(metric)?, DayPart::All)?)
}

/// Mean of `metric` over local hours 8..=20.
pub fn day_mean(series: &TimeSeries, metric: &str) -> Result<Option<f64>, MeteoError> {
    Ok(partition_mean(&series.metric(metric)?, DayPart::Day)?)
}

/// Mean of `metric` over local hours outside 8..=20.
pub fn night_mean(series: &TimeSeries, metric: &str) -> Result<Option<f64>, MeteoError> {
    Ok(partition_mean(&series.metric(metric)?, DayPart::Night)?)
}
