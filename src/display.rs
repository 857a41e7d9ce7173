//! Terminal rendering for weather data
//!
//! Rendering is pure: functions build strings and the session loop prints
//! them. Absent data always renders a user-facing notice instead of failing.

use crate::models::{DaySummary, WeatherSnapshot};
use crate::units::Unit;

/// Icon for a conditions description, covering the common OpenWeatherMap
/// descriptions. Unknown conditions get no icon.
#[must_use]
pub fn condition_icon(description: &str) -> Option<&'static str> {
    match description.to_lowercase().as_str() {
        "clear sky" => Some("☀️"),
        "few clouds" => Some("🌤️"),
        "scattered clouds" => Some("⛅"),
        "broken clouds" | "overcast clouds" => Some("☁️"),
        "light rain" => Some("🌦️"),
        "moderate rain" => Some("🌧️"),
        "heavy rain" | "thunderstorm" => Some("⛈️"),
        "snow" => Some("❄️"),
        "mist" | "fog" => Some("🌫️"),
        _ => None,
    }
}

/// Conditions description with icon appended when one is known
fn decorated_conditions(description: &str, formatted: String) -> String {
    match condition_icon(description) {
        Some(icon) => format!("{formatted} {icon}"),
        None => formatted,
    }
}

/// Render current conditions, or a notice when no data is available
#[must_use]
pub fn render_current(snapshot: Option<&WeatherSnapshot>, unit: Unit) -> String {
    let Some(snapshot) = snapshot else {
        return "No weather data to display.".to_string();
    };

    let conditions = decorated_conditions(&snapshot.description, snapshot.format_description());

    format!(
        "Weather for {}, {}\n\
         Conditions: {}\n\
         Temperature: {}\n\
         Feels like: {}\n\
         Pressure: {} hPa\n\
         Humidity: {}%\n\
         Wind speed: {:.1} m/s",
        snapshot.name,
        snapshot.country,
        conditions,
        snapshot.format_temperature(unit),
        snapshot.format_feels_like(unit),
        snapshot.pressure_hpa,
        snapshot.humidity_pct,
        snapshot.wind_speed_ms,
    )
}

/// Render the 5-day forecast block, or a notice when no data is available
#[must_use]
pub fn render_forecast(summaries: &[DaySummary]) -> String {
    if summaries.is_empty() {
        return "No forecast data to display.".to_string();
    }

    let mut out = String::from("5-day forecast:");
    for day in summaries {
        let conditions = decorated_conditions(&day.description, day.format_description());
        out.push_str(&format!(
            "\n\nDate: {}\n  High: {:.1}°C, Low: {:.1}°C\n  Conditions: {}",
            day.date.format("%Y-%m-%d"),
            day.high_c,
            day.low_c,
            conditions,
        ));
    }
    out
}

/// One line of the favorites listing: temperature plus conditions, or a
/// notice when the city could not be fetched
#[must_use]
pub fn render_favorite_line(city: &str, snapshot: Option<&WeatherSnapshot>, unit: Unit) -> String {
    match snapshot {
        Some(snapshot) => format!(
            "{city}: {} - {}",
            snapshot.format_temperature(unit),
            snapshot.format_description()
        ),
        None => format!("{city}: no data"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            name: "Paris".to_string(),
            country: "FR".to_string(),
            description: "light rain".to_string(),
            temperature_c: 18.3,
            feels_like_c: 17.9,
            pressure_hpa: 1009,
            humidity_pct: 72,
            wind_speed_ms: 3.6,
        }
    }

    #[test]
    fn test_render_current_with_data() {
        let snapshot = sample_snapshot();
        let rendered = render_current(Some(&snapshot), Unit::Celsius);

        assert!(rendered.contains("Weather for Paris, FR"));
        assert!(rendered.contains("Conditions: Light Rain 🌦️"));
        assert!(rendered.contains("Temperature: 18.3°C"));
        assert!(rendered.contains("Feels like: 17.9°C"));
        assert!(rendered.contains("Pressure: 1009 hPa"));
        assert!(rendered.contains("Humidity: 72%"));
        assert!(rendered.contains("Wind speed: 3.6 m/s"));
    }

    #[test]
    fn test_render_current_converts_units() {
        let snapshot = sample_snapshot();
        let rendered = render_current(Some(&snapshot), Unit::Fahrenheit);
        assert!(rendered.contains("Temperature: 64.9°F"));
    }

    #[test]
    fn test_render_current_without_data() {
        assert_eq!(
            render_current(None, Unit::Celsius),
            "No weather data to display."
        );
    }

    #[test]
    fn test_render_forecast() {
        let summaries = vec![DaySummary {
            date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            high_c: 23.0,
            low_c: 12.5,
            description: "scattered clouds".to_string(),
        }];

        let rendered = render_forecast(&summaries);
        assert!(rendered.contains("5-day forecast:"));
        assert!(rendered.contains("Date: 2026-08-07"));
        assert!(rendered.contains("High: 23.0°C, Low: 12.5°C"));
        assert!(rendered.contains("Conditions: Scattered Clouds ⛅"));
    }

    #[test]
    fn test_render_forecast_without_data() {
        assert_eq!(render_forecast(&[]), "No forecast data to display.");
    }

    #[test]
    fn test_render_favorite_line() {
        let snapshot = sample_snapshot();
        assert_eq!(
            render_favorite_line("Paris", Some(&snapshot), Unit::Celsius),
            "Paris: 18.3°C - Light Rain"
        );
        assert_eq!(
            render_favorite_line("Atlantis", None, Unit::Celsius),
            "Atlantis: no data"
        );
    }

    #[test]
    fn test_condition_icons() {
        assert_eq!(condition_icon("clear sky"), Some("☀️"));
        assert_eq!(condition_icon("Broken Clouds"), Some("☁️"));
        assert_eq!(condition_icon("volcanic ash"), None);
    }
}
