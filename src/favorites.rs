//! Persisted favorites list
//!
//! Favorite cities are stored as a JSON array of strings, pretty-printed with
//! two-space indentation. City names are unique case-insensitively, with the
//! original spelling preserved.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Why loading the favorites file produced no list.
///
/// A missing file is normal on first run; malformed content usually means the
/// file was edited by hand. Callers that only need a best-effort list can use
/// [`FavoritesStore::load_or_default`].
#[derive(Error, Debug)]
pub enum FavoritesError {
    /// The favorites file does not exist yet
    #[error("Favorites file not found at {path}")]
    Missing {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The file exists but does not contain a JSON array of strings
    #[error("Favorites file is malformed: {source}")]
    Malformed {
        #[from]
        source: serde_json::Error,
    },

    /// Reading or writing the file failed
    #[error("Favorites I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// JSON-backed store for favorite city names
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the favorites list, distinguishing a missing file from malformed
    /// content
    pub fn load(&self) -> Result<Vec<String>, FavoritesError> {
        if !self.path.exists() {
            return Err(FavoritesError::Missing {
                path: self.path.clone(),
            });
        }

        let contents = fs::read_to_string(&self.path)?;
        let cities: Vec<String> = serde_json::from_str(&contents)?;
        Ok(cities)
    }

    /// Load the favorites list, falling back to an empty list. A missing file
    /// is expected on first run; any other failure is logged.
    #[must_use]
    pub fn load_or_default(&self) -> Vec<String> {
        match self.load() {
            Ok(cities) => cities,
            Err(FavoritesError::Missing { path }) => {
                debug!("No favorites file at {}", path.display());
                Vec::new()
            }
            Err(e) => {
                warn!("Could not load favorites: {e}");
                Vec::new()
            }
        }
    }

    /// Add a city unless a case-insensitive match already exists, persisting
    /// the whole list. Returns whether the list changed.
    pub fn add(&self, city: &str) -> Result<bool, FavoritesError> {
        let mut cities = self.load_or_default();
        let needle = city.to_lowercase();
        if cities.iter().any(|c| c.to_lowercase() == needle) {
            return Ok(false);
        }

        cities.push(city.to_string());
        self.persist(&cities)?;
        Ok(true)
    }

    /// Remove all case-insensitive matches for a city, persisting the whole
    /// list. Returns whether the list changed.
    pub fn remove(&self, city: &str) -> Result<bool, FavoritesError> {
        let mut cities = self.load_or_default();
        let needle = city.to_lowercase();
        let before = cities.len();
        cities.retain(|c| c.to_lowercase() != needle);
        if cities.len() == before {
            return Ok(false);
        }

        self.persist(&cities)?;
        Ok(true)
    }

    fn persist(&self, cities: &[String]) -> Result<(), FavoritesError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(cities)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
