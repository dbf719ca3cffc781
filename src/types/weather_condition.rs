//! Defines the `WeatherCondition` enum, mapping the API's textual condition codes
//! (the `conditionCode` field of observations and forecasts) to descriptive variants.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents the categorical weather state reported for a single row.
///
/// Codes arrive as kebab-case strings such as `"clear"` or `"heavy-rain"`.
/// Codes that are not known to this crate deserialize to [`WeatherCondition::Unknown`]
/// rather than failing, since the station network occasionally introduces new ones.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    /// Sky is clear.
    Clear,
    /// Few clouds.
    PartlyCloudy,
    /// Variable cloudiness, reported by some observation stations.
    VariableCloudiness,
    /// Cloudy with sunny intervals.
    CloudyWithSunnyIntervals,
    /// Overcast.
    Cloudy,
    /// Light rain.
    LightRain,
    /// Moderate rain.
    Rain,
    /// Heavy rain.
    HeavyRain,
    /// Thunder without precipitation.
    Thunder,
    /// Isolated thunderstorms.
    IsolatedThunderstorms,
    /// Thunderstorms.
    Thunderstorms,
    /// Heavy rain with thunderstorms.
    HeavyRainWithThunderstorms,
    /// Light sleet.
    LightSleet,
    /// Sleet.
    Sleet,
    /// Freezing rain (glaze).
    FreezingRain,
    /// Hail.
    Hail,
    /// Light snowfall.
    LightSnow,
    /// Moderate snowfall.
    Snow,
    /// Heavy snowfall.
    HeavySnow,
    /// Fog.
    Fog,
    /// Any code not listed above.
    #[serde(other)]
    Unknown,
}

impl WeatherCondition {
    /// Reads a condition from a raw JSON field value.
    ///
    /// Returns `None` for `null` and for non-string values.
    ///
    /// ```rust
    /// use meteo::WeatherCondition;
    /// use serde_json::json;
    ///
    /// assert_eq!(WeatherCondition::from_value(&json!("heavy-rain")), Some(WeatherCondition::HeavyRain));
    /// assert_eq!(WeatherCondition::from_value(&json!("dust-storm")), Some(WeatherCondition::Unknown));
    /// assert_eq!(WeatherCondition::from_value(&json!(null)), None);
    /// ```
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) => WeatherCondition::deserialize(value).ok(),
            _ => None,
        }
    }

    /// Whether this condition belongs to the "rain" category used for weekend statistics.
    ///
    /// Only `rain`, `heavy-rain` and `freezing-rain` qualify; light rain and showers
    /// accompanying thunderstorms do not.
    pub fn is_rain(self) -> bool {
        matches!(
            self,
            WeatherCondition::Rain | WeatherCondition::HeavyRain | WeatherCondition::FreezingRain
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_codes_parse() {
        assert_eq!(
            WeatherCondition::from_value(&json!("cloudy-with-sunny-intervals")),
            Some(WeatherCondition::CloudyWithSunnyIntervals)
        );
        assert_eq!(
            WeatherCondition::from_value(&json!("freezing-rain")),
            Some(WeatherCondition::FreezingRain)
        );
    }

    #[test]
    fn test_non_string_is_none() {
        assert_eq!(WeatherCondition::from_value(&json!(3)), None);
        assert_eq!(WeatherCondition::from_value(&json!(null)), None);
    }

    #[test]
    fn test_rain_category() {
        assert!(WeatherCondition::Rain.is_rain());
        assert!(WeatherCondition::HeavyRain.is_rain());
        assert!(WeatherCondition::FreezingRain.is_rain());
        assert!(!WeatherCondition::LightRain.is_rain());
        assert!(!WeatherCondition::Clear.is_rain());
        assert!(!WeatherCondition::Unknown.is_rain());
    }
}
