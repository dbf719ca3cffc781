use crate::types::metric_series::MetricSeries;
use chrono::Timelike;

/// Drops leading forecast points so the forecast picks up one hour after the history ends.
///
/// `gap = last_history_hour - first_forecast_hour + 1`; when positive, that many points
/// are removed from the front of `forecast`. Otherwise the forecast is returned unchanged,
/// as it is when either series is empty. Only the hour of day is compared.
pub fn stitch_forecast_after_history(history: &MetricSeries, forecast: MetricSeries) -> MetricSeries {
    let last_hour = history.points().last().map(|(time, _)| time.hour());
    let first_hour = forecast.points().first().map(|(time, _)| time.hour());
    let (Some(last), Some(first)) = (last_hour, first_hour) else {
        return forecast;
    };

    let gap = i64::from(last) - i64::from(first) + 1;
    if gap > 0 {
        forecast.skip(gap as usize)
    } else {
        forecast
    }
}

/// The trailing `days` days of an hourly series (the last `days * 24` points).
pub fn last_n_days(metric: MetricSeries, days: usize) -> MetricSeries {
    metric.tail(days.saturating_mul(24))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::time_series::LOCAL_OFFSET;
    use chrono::{DateTime, Datelike, FixedOffset, TimeDelta, TimeZone};

    fn hourly(day: u32, first_hour: u32, count: usize) -> MetricSeries {
        let start: DateTime<FixedOffset> = LOCAL_OFFSET
            .with_ymd_and_hms(2024, 5, day, first_hour, 0, 0)
            .unwrap();
        let points = (0..count)
            .map(|i| (start + TimeDelta::hours(i as i64), Some(i as f64)))
            .collect();
        MetricSeries::new("airTemperature", points)
    }

    #[test]
    fn test_overlapping_hour_is_dropped() {
        let history = hourly(10, 10, 5); // ends at 14:00
        let forecast = hourly(10, 14, 6); // starts at 14:00
        let stitched = stitch_forecast_after_history(&history, forecast);
        assert_eq!(stitched.len(), 5);
        assert_eq!(stitched.points()[0].0.hour(), 15);
    }

    #[test]
    fn test_forecast_after_gap_unchanged() {
        let history = hourly(10, 10, 5); // ends at 14:00
        let forecast = hourly(10, 16, 6); // starts at 16:00
        let stitched = stitch_forecast_after_history(&history, forecast.clone());
        assert_eq!(stitched, forecast);
    }

    #[test]
    fn test_forecast_starting_next_hour_unchanged() {
        let history = hourly(10, 10, 5);
        let forecast = hourly(10, 15, 3);
        assert_eq!(stitch_forecast_after_history(&history, forecast.clone()), forecast);
    }

    #[test]
    fn test_empty_history_leaves_forecast() {
        let history = MetricSeries::new("airTemperature", Vec::new());
        let forecast = hourly(10, 3, 4);
        assert_eq!(stitch_forecast_after_history(&history, forecast.clone()), forecast);
    }

    #[test]
    fn test_last_n_days() {
        let metric = hourly(1, 0, 24 * 5);
        let tail = last_n_days(metric, 2);
        assert_eq!(tail.len(), 48);
        assert_eq!(tail.points()[0].0.day(), 4);
        assert_eq!(last_n_days(hourly(1, 0, 10), 3).len(), 10);
    }
}
