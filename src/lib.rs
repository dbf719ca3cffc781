mod analysis;
mod error;
mod meteo;
mod session;
mod types;
mod weather_data;

pub use error::{MeteoError, SeriesKind};
pub use meteo::*;
pub use session::WeatherSession;

pub use types::clock::{years_before, Clock, FixedClock, SystemClock};
pub use types::date_range::{validate, DateRange};
pub use types::error::{MalformedRecordError, MetricError, UnknownMetricError, ValidationError};
pub use types::metric_series::{MetricSeries, DATETIME_COLUMN};
pub use types::time_series::{
    Observation, TimeSeries, CONDITION_FIELD, LOCAL_OFFSET, LOCAL_OFFSET_HOURS,
};
pub use types::weather_condition::WeatherCondition;

pub use weather_data::error::{TransportError, WeatherDataError};
pub use weather_data::throttle::{Throttle, DEFAULT_THROTTLE};
pub use weather_data::transport::{HttpTransport, Transport, DEFAULT_TIMEOUT};

pub use analysis::means::{
    day_mean, mean, night_mean, partition_mean, DayPart, DAY_END_HOUR, DAY_START_HOUR,
};
pub use analysis::resample::resample_to_five_minutes;
pub use analysis::reshape::{last_n_days, stitch_forecast_after_history};
pub use analysis::weekends::{rainy_weekend_count, rainy_weekend_count_with, WeekendRule};
