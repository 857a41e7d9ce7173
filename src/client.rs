//! OpenWeatherMap client for current conditions and forecasts

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::Result;
use crate::config::WeatherConfig;
use crate::models::{ForecastEntry, WeatherSnapshot};

/// Source of current weather readings.
///
/// The freshness cache talks to this trait instead of the concrete HTTP
/// client, so cache behavior can be exercised with a fake provider.
#[async_trait]
pub trait CurrentWeatherProvider {
    /// Fetch the current weather for a city
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot>;
}

/// HTTP client for the OpenWeatherMap API
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Build a client from configuration. The timeout applies to each whole
    /// request; a request that exceeds it fails like any other fetch error.
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().unwrap_or_default(),
        })
    }

    /// Fetch the current weather for a city
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot> {
        let url = format!(
            "{}/weather?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(city),
            self.api_key
        );
        debug!("Fetching current weather for {city}");

        let response: openweathermap::CurrentResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response.try_into()
    }

    /// Fetch the raw forecast series for a city (3-hourly entries)
    pub async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>> {
        let url = format!(
            "{}/forecast?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(city),
            self.api_key
        );
        debug!("Fetching forecast for {city}");

        let response: openweathermap::ForecastResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.into_entries())
    }
}

#[async_trait]
impl CurrentWeatherProvider for WeatherClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot> {
        self.fetch_current(city).await
    }
}

/// OpenWeatherMap API response structures and conversion utilities
mod openweathermap {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    use crate::error::SkycastError;
    use crate::models::{ForecastEntry, WeatherSnapshot};

    /// Response from the current-weather endpoint
    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub name: String,
        pub sys: Sys,
        pub weather: Vec<Condition>,
        pub main: Main,
        pub wind: Wind,
    }

    #[derive(Debug, Deserialize)]
    pub struct Sys {
        #[serde(default)]
        pub country: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub description: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct Main {
        pub temp: f64,
        pub feels_like: f64,
        pub pressure: u32,
        pub humidity: u8,
    }

    #[derive(Debug, Deserialize)]
    pub struct Wind {
        pub speed: f64,
    }

    /// Response from the forecast endpoint
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastItem>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastItem {
        pub dt: i64,
        pub main: ForecastMain,
        pub weather: Vec<Condition>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastMain {
        pub temp: f64,
    }

    impl TryFrom<CurrentResponse> for WeatherSnapshot {
        type Error = SkycastError;

        fn try_from(response: CurrentResponse) -> Result<Self, Self::Error> {
            let condition = response
                .weather
                .into_iter()
                .next()
                .ok_or_else(|| SkycastError::api("Response contained no weather conditions"))?;

            Ok(WeatherSnapshot {
                name: response.name,
                country: response.sys.country,
                description: condition.description,
                temperature_c: response.main.temp,
                feels_like_c: response.main.feels_like,
                pressure_hpa: response.main.pressure,
                humidity_pct: response.main.humidity,
                wind_speed_ms: response.wind.speed,
            })
        }
    }

    impl ForecastResponse {
        /// Flatten the 3-hourly list into domain entries. Items without a
        /// condition block or with an unrepresentable timestamp are skipped.
        pub fn into_entries(self) -> Vec<ForecastEntry> {
            self.list
                .into_iter()
                .filter_map(|item| {
                    let description = item.weather.into_iter().next()?.description;
                    let timestamp = DateTime::<Utc>::from_timestamp(item.dt, 0)?;
                    Some(ForecastEntry {
                        timestamp,
                        temperature_c: item.main.temp,
                        description,
                    })
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::openweathermap::{CurrentResponse, ForecastResponse};
    use crate::error::SkycastError;
    use crate::models::WeatherSnapshot;

    const CURRENT_JSON: &str = r#"{
        "name": "Paris",
        "sys": { "country": "FR", "sunrise": 1754539200, "sunset": 1754593200 },
        "weather": [ { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" } ],
        "main": { "temp": 18.3, "feels_like": 17.9, "temp_min": 16.0, "temp_max": 20.1, "pressure": 1009, "humidity": 72 },
        "wind": { "speed": 3.6, "deg": 220 }
    }"#;

    const FORECAST_JSON: &str = r#"{
        "cod": "200",
        "cnt": 3,
        "list": [
            { "dt": 1754557200, "main": { "temp": 18.3, "pressure": 1009, "humidity": 72 },
              "weather": [ { "description": "light rain" } ] },
            { "dt": 1754568000, "main": { "temp": 20.1, "pressure": 1010, "humidity": 64 },
              "weather": [ { "description": "scattered clouds" } ] },
            { "dt": 1754578800, "main": { "temp": 16.8, "pressure": 1011, "humidity": 70 },
              "weather": [] }
        ]
    }"#;

    #[test]
    fn test_parse_current_response() {
        let response: CurrentResponse = serde_json::from_str(CURRENT_JSON).unwrap();
        let snapshot: WeatherSnapshot = response.try_into().unwrap();

        assert_eq!(snapshot.name, "Paris");
        assert_eq!(snapshot.country, "FR");
        assert_eq!(snapshot.description, "light rain");
        assert_eq!(snapshot.temperature_c, 18.3);
        assert_eq!(snapshot.feels_like_c, 17.9);
        assert_eq!(snapshot.pressure_hpa, 1009);
        assert_eq!(snapshot.humidity_pct, 72);
        assert_eq!(snapshot.wind_speed_ms, 3.6);
    }

    #[test]
    fn test_current_response_without_conditions_is_an_error() {
        let json = r#"{
            "name": "Paris",
            "sys": { "country": "FR" },
            "weather": [],
            "main": { "temp": 18.3, "feels_like": 17.9, "pressure": 1009, "humidity": 72 },
            "wind": { "speed": 3.6 }
        }"#;

        let response: CurrentResponse = serde_json::from_str(json).unwrap();
        let result: Result<WeatherSnapshot, SkycastError> = response.try_into();
        assert!(matches!(result, Err(SkycastError::Api { .. })));
    }

    #[test]
    fn test_parse_forecast_response_skips_items_without_conditions() {
        let response: ForecastResponse = serde_json::from_str(FORECAST_JSON).unwrap();
        let entries = response.into_entries();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "light rain");
        assert_eq!(entries[0].temperature_c, 18.3);
        assert_eq!(entries[0].timestamp.timestamp(), 1_754_557_200);
        assert_eq!(entries[1].description, "scattered clouds");
    }
}
