//! Skycast - terminal weather lookup
//!
//! This library provides the building blocks for the `skycast` binary:
//! fetching current conditions and forecasts from OpenWeatherMap, deriving
//! per-day forecast summaries, caching lookups for a freshness window, and
//! managing a persisted list of favorite cities.

pub mod app;
pub mod cache;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod favorites;
pub mod models;
pub mod units;

// Re-export core types for public API
pub use cache::WeatherCache;
pub use client::{CurrentWeatherProvider, WeatherClient};
pub use config::SkycastConfig;
pub use error::SkycastError;
pub use favorites::{FavoritesError, FavoritesStore};
pub use models::{DaySummary, ForecastEntry, WeatherSnapshot};
pub use units::Unit;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkycastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
