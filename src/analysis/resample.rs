//! Regridding of a metric onto a fixed 5-minute grid.

use crate::types::metric_series::MetricSeries;
use chrono::{DateTime, FixedOffset, TimeDelta};
use std::collections::BTreeMap;

const BUCKET_SECONDS: i64 = 5 * 60;

/// Resamples `metric` onto a 5-minute grid spanning its first to last bucket.
///
/// Each bucket takes the mean of the values whose timestamps fall into it. Empty
/// buckets are filled by linear interpolation between the surrounding known buckets;
/// buckets before the first known value stay `None`, buckets after the last known
/// value repeat it. A series that is already on the grid with no gaps comes back unchanged.
pub fn resample_to_five_minutes(metric: &MetricSeries) -> MetricSeries {
    let mut buckets: BTreeMap<DateTime<FixedOffset>, (f64, usize)> = BTreeMap::new();
    for (time, value) in metric.points() {
        let bucket = buckets.entry(bucket_start(*time)).or_insert((0.0, 0));
        if let Some(v) = value {
            bucket.0 += v;
            bucket.1 += 1;
        }
    }

    let (Some(first), Some(last)) = (
        buckets.keys().next().copied(),
        buckets.keys().next_back().copied(),
    ) else {
        return MetricSeries::new(metric.name(), Vec::new());
    };

    let step = TimeDelta::seconds(BUCKET_SECONDS);
    let mut grid = Vec::new();
    let mut time = first;
    while time <= last {
        let value = buckets
            .get(&time)
            .filter(|(_, count)| *count > 0)
            .map(|(sum, count)| sum / *count as f64);
        grid.push((time, value));
        time += step;
    }

    interpolate(&mut grid);
    MetricSeries::new(metric.name(), grid)
}

fn bucket_start(time: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let seconds = time.timestamp();
    let excess = seconds.rem_euclid(BUCKET_SECONDS);
    time - TimeDelta::seconds(excess) - TimeDelta::nanoseconds(time.timestamp_subsec_nanos() as i64)
}

fn interpolate(grid: &mut [(DateTime<FixedOffset>, Option<f64>)]) {
    let known: Vec<usize> = grid
        .iter()
        .enumerate()
        .filter_map(|(i, (_, v))| v.map(|_| i))
        .collect();

    for pair in known.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        let (Some(a), Some(b)) = (grid[left].1, grid[right].1) else {
            continue;
        };
        let span = (right - left) as f64;
        for i in left + 1..right {
            grid[i].1 = Some(a + (b - a) * (i - left) as f64 / span);
        }
    }

    if let Some(&last_known) = known.last() {
        let fill = grid[last_known].1;
        for point in grid.iter_mut().skip(last_known + 1) {
            point.1 = fill;
        }
    }
}
