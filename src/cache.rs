//! In-memory freshness cache for current weather lookups

use std::collections::HashMap;
use std::time::{Duration, SystemTime};

use tracing::{debug, warn};

use crate::client::CurrentWeatherProvider;
use crate::models::WeatherSnapshot;

/// Default freshness window in seconds
pub const DEFAULT_TTL_SECS: u64 = 1800;

/// A cached snapshot together with the moment it was fetched
#[derive(Debug, Clone)]
struct CacheEntry {
    snapshot: WeatherSnapshot,
    fetched_at: SystemTime,
}

/// Process-lifetime map from city name to its most recent snapshot.
///
/// Keys are case-sensitive. An entry older than the TTL is treated as absent;
/// there is no eviction beyond that check on read. Not thread-safe: the cache
/// is constructed once at startup and owned by the single thread of control.
#[derive(Debug)]
pub struct WeatherCache {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
}

impl WeatherCache {
    /// Create a cache with the given freshness window
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Return the cached snapshot for `city` if one exists and is still fresh
    #[must_use]
    pub fn get(&self, city: &str) -> Option<&WeatherSnapshot> {
        self.get_at(city, SystemTime::now())
    }

    /// Freshness check against an explicit clock
    #[must_use]
    pub fn get_at(&self, city: &str, now: SystemTime) -> Option<&WeatherSnapshot> {
        let entry = self.entries.get(city)?;
        let age = now.duration_since(entry.fetched_at).ok()?;
        if age < self.ttl {
            Some(&entry.snapshot)
        } else {
            None
        }
    }

    /// Store a snapshot fetched now
    pub fn insert(&mut self, city: &str, snapshot: WeatherSnapshot) {
        self.insert_at(city, snapshot, SystemTime::now());
    }

    /// Store a snapshot with an explicit fetch time
    pub fn insert_at(&mut self, city: &str, snapshot: WeatherSnapshot, fetched_at: SystemTime) {
        self.entries.insert(
            city.to_string(),
            CacheEntry {
                snapshot,
                fetched_at,
            },
        );
    }

    /// Return a live snapshot for `city`, fetching through `provider` when the
    /// cache holds nothing fresh. A successful fetch is stored with the
    /// current timestamp; a provider failure is logged and reported as `None`.
    pub async fn get_or_fetch(
        &mut self,
        provider: &dyn CurrentWeatherProvider,
        city: &str,
    ) -> Option<WeatherSnapshot> {
        if let Some(snapshot) = self.get(city) {
            debug!("Using cached weather for {city}");
            return Some(snapshot.clone());
        }

        match provider.current_weather(city).await {
            Ok(snapshot) => {
                self.insert(city, snapshot.clone());
                Some(snapshot)
            }
            Err(e) => {
                warn!("Failed to fetch current weather for {city}: {e}");
                None
            }
        }
    }
}

impl Default for WeatherCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TTL_SECS))
    }
}
