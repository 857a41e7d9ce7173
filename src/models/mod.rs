//! Data models for the Skycast application
//!
//! Core domain models organized by concern:
//! - Weather: a point-in-time reading and raw forecast entries
//! - Forecast: per-day summaries derived from forecast entries

pub mod forecast;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::DaySummary;
pub use weather::{ForecastEntry, WeatherSnapshot};
