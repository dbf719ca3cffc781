pub mod clock;
pub mod date_range;
pub mod error;
pub mod metric_series;
pub mod time_series;
pub mod weather_condition;
