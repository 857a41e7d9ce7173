//! Error types and handling for the Skycast application

use thiserror::Error;

use crate::favorites::FavoritesError;

/// Main error type for the Skycast application
#[derive(Error, Debug)]
pub enum SkycastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Weather API errors (unexpected payloads, rejected requests)
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// HTTP transport errors (connection, timeout, status)
    #[error("HTTP error: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    /// Favorites storage errors
    #[error("Favorites error: {source}")]
    Favorites {
        #[from]
        source: FavoritesError,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SkycastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkycastError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            SkycastError::Api { message } => {
                format!("Weather service error: {message}")
            }
            SkycastError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            SkycastError::Http { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            SkycastError::Favorites { .. } => {
                "Could not read or write the favorites file.".to_string()
            }
            SkycastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = SkycastError::config("missing API key");
        assert!(matches!(config_err, SkycastError::Config { .. }));

        let api_err = SkycastError::api("rejected request");
        assert!(matches!(api_err, SkycastError::Api { .. }));

        let validation_err = SkycastError::validation("empty city name");
        assert!(matches!(validation_err, SkycastError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = SkycastError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = SkycastError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let skycast_err: SkycastError = io_err.into();
        assert!(matches!(skycast_err, SkycastError::Io { .. }));
    }

    #[test]
    fn test_favorites_error_conversion() {
        let favorites_err = FavoritesError::Missing {
            path: std::path::PathBuf::from("data/cities.json"),
        };
        let skycast_err: SkycastError = favorites_err.into();
        assert!(matches!(skycast_err, SkycastError::Favorites { .. }));
    }
}
