//! Weather snapshot and forecast entry models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::units::Unit;

/// A single point-in-time weather reading for a city.
///
/// Immutable once fetched. Temperatures are stored in Celsius and converted
/// only at display time.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Resolved location name as reported by the API
    pub name: String,
    /// Country code (ISO 3166-1 alpha-2)
    pub country: String,
    /// Human-readable description of conditions
    pub description: String,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Perceived temperature in Celsius
    pub feels_like_c: f64,
    /// Atmospheric pressure in hPa
    pub pressure_hpa: u32,
    /// Relative humidity in percent
    pub humidity_pct: u8,
    /// Wind speed in m/s
    pub wind_speed_ms: f64,
}

impl WeatherSnapshot {
    /// Format temperature in the given display unit
    #[must_use]
    pub fn format_temperature(&self, unit: Unit) -> String {
        format!("{:.1}{}", unit.convert(self.temperature_c), unit.symbol())
    }

    /// Format perceived temperature in the given display unit
    #[must_use]
    pub fn format_feels_like(&self, unit: Unit) -> String {
        format!("{:.1}{}", unit.convert(self.feels_like_c), unit.symbol())
    }

    /// Conditions with each word capitalized, e.g. "Light Rain"
    #[must_use]
    pub fn format_description(&self) -> String {
        title_case(&self.description)
    }
}

/// One timestamped forecast data point (3-hour granularity upstream)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastEntry {
    /// Forecast timestamp
    pub timestamp: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Human-readable description of conditions
    pub description: String,
}

/// Capitalize the first letter of each whitespace-separated word
#[must_use]
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
