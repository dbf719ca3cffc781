use crate::types::time_series::TimeSeries;
use crate::types::weather_condition::WeatherCondition;
use chrono::{Datelike, IsoWeek, Weekday};
use std::collections::BTreeMap;

/// How a weekend qualifies as rainy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekendRule {
    /// At least one rain row on Saturday or Sunday.
    #[default]
    AnyDay,
    /// At least one rain row on Saturday and at least one on Sunday.
    BothDays,
}

#[derive(Debug, Default, Clone, Copy)]
struct WeekendRain {
    saturday: bool,
    sunday: bool,
}

/// Number of ISO weeks (Monday to Sunday) whose weekend had rain on either day.
pub fn rainy_weekend_count(series: &TimeSeries) -> usize {
    rainy_weekend_count_with(series, WeekendRule::AnyDay)
}

/// Number of ISO weeks whose weekend rows satisfy `rule`.
///
/// A row is rainy when its condition code is in the rain category
/// (see [`WeatherCondition::is_rain`]). Weekdays are taken in local time.
pub fn rainy_weekend_count_with(series: &TimeSeries, rule: WeekendRule) -> usize {
    let mut weeks: BTreeMap<IsoWeek, WeekendRain> = BTreeMap::new();

    for row in series.rows() {
        let weekday = row.time.weekday();
        if !matches!(weekday, Weekday::Sat | Weekday::Sun) {
            continue;
        }
        let rain = row.condition().is_some_and(WeatherCondition::is_rain);
        let week = weeks.entry(row.time.iso_week()).or_default();
        if weekday == Weekday::Sat {
            week.saturday |= rain;
        } else {
            week.sunday |= rain;
        }
    }

    weeks
        .values()
        .filter(|w| match rule {
            WeekendRule::AnyDay => w.saturday || w.sunday,
            WeekendRule::BothDays => w.saturday && w.sunday,
        })
        .count()
}
