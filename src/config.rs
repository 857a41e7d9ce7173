//! Configuration management for the Skycast application
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, and provides validation for all configuration settings.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::SkycastError;

/// Root configuration structure for the Skycast application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkycastConfig {
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Freshness cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Favorites storage configuration
    #[serde(default)]
    pub favorites: FavoritesConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    pub api_key: Option<String>,
    /// Base URL for the weather API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Freshness cache configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Seconds a cached snapshot stays fresh
    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,
}

/// Favorites storage configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesConfig {
    /// Path of the favorites JSON file
    #[serde(default = "default_favorites_path")]
    pub path: PathBuf,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_cache_ttl() -> u64 {
    1800
}

fn default_favorites_path() -> PathBuf {
    PathBuf::from("data/cities.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_cache_ttl(),
        }
    }
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            path: default_favorites_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl SkycastConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::default_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with SKYCAST_ prefix,
        // e.g. SKYCAST_WEATHER__API_KEY maps to weather.api_key
        builder = builder.add_source(
            Environment::with_prefix("SKYCAST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: SkycastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skycast").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if let Some(api_key) = &self.weather.api_key {
            if api_key.is_empty() {
                return Err(SkycastError::config(
                    "Weather API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }
        }

        if self.weather.timeout_seconds == 0 || self.weather.timeout_seconds > 300 {
            return Err(
                SkycastError::config("Request timeout must be between 1 and 300 seconds").into(),
            );
        }

        if self.cache.ttl_seconds == 0 {
            return Err(SkycastError::config("Cache TTL must be at least 1 second").into());
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(SkycastError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SkycastError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SkycastConfig::default();
        assert_eq!(
            config.weather.base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert_eq!(config.weather.timeout_seconds, 10);
        assert_eq!(config.cache.ttl_seconds, 1800);
        assert_eq!(config.favorites.path, PathBuf::from("data/cities.json"));
        assert_eq!(config.logging.level, "info");
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SkycastConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_api_key() {
        let mut config = SkycastConfig::default();
        config.weather.api_key = Some(String::new());
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API key"));
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = SkycastConfig::default();
        config.weather.timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.weather.timeout_seconds = 301;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_invalid_base_url() {
        let mut config = SkycastConfig::default();
        config.weather.base_url = "ftp://example.com".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base URL"));
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = SkycastConfig::default();
        config.logging.level = "loud".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_path_generation() {
        let path = SkycastConfig::default_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("skycast"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
