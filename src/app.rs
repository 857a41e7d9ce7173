//! Interactive terminal session
//!
//! A small menu loop: look up current weather or a 5-day forecast for a city,
//! switch display units, and manage the favorites list. Fetches happen one at
//! a time; a failed fetch prints a notice and the loop continues.

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use tracing::warn;

use crate::cache::WeatherCache;
use crate::client::WeatherClient;
use crate::config::SkycastConfig;
use crate::display;
use crate::favorites::FavoritesStore;
use crate::models::forecast;
use crate::units::Unit;

const MENU: &str = "\
What would you like to do?
  1) Current weather
  2) 5-day forecast
  3) Change display unit
  4) Save a favorite city
  5) Remove a favorite city
  6) Show favorite cities
  q) Quit";

/// Interactive session state
pub struct App {
    client: WeatherClient,
    cache: WeatherCache,
    favorites: FavoritesStore,
    unit: Unit,
}

impl App {
    /// Build the session from configuration
    pub fn new(config: &SkycastConfig) -> Result<Self> {
        Ok(Self {
            client: WeatherClient::new(&config.weather)?,
            cache: WeatherCache::new(Duration::from_secs(config.cache.ttl_seconds)),
            favorites: FavoritesStore::new(config.favorites.path.clone()),
            unit: Unit::Celsius,
        })
    }

    /// Currently selected display unit
    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Run the menu loop until the user quits or input ends
    pub async fn run(&mut self, input: &mut impl BufRead) -> Result<()> {
        loop {
            println!("\n{MENU}");
            let Some(choice) = prompt(input, "> ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.show_current(input).await?,
                "2" => self.show_forecast(input).await?,
                "3" => self.change_unit(input)?,
                "4" => self.save_favorite(input)?,
                "5" => self.remove_favorite(input)?,
                "6" => self.show_favorites().await,
                "q" | "Q" => {
                    println!("Goodbye!");
                    return Ok(());
                }
                "" => {}
                other => println!("Unknown option: {other}"),
            }
        }
    }

    async fn show_current(&mut self, input: &mut impl BufRead) -> Result<()> {
        let Some(city) = prompt_city(input)? else {
            return Ok(());
        };

        let snapshot = self.cache.get_or_fetch(&self.client, &city).await;
        println!("{}", display::render_current(snapshot.as_ref(), self.unit));
        Ok(())
    }

    async fn show_forecast(&mut self, input: &mut impl BufRead) -> Result<()> {
        let Some(city) = prompt_city(input)? else {
            return Ok(());
        };

        let entries = match self.client.fetch_forecast(&city).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to fetch forecast for {city}: {e}");
                Vec::new()
            }
        };

        let summaries = forecast::summarize(&entries);
        println!("{}", display::render_forecast(&summaries));
        Ok(())
    }

    fn change_unit(&mut self, input: &mut impl BufRead) -> Result<()> {
        let Some(answer) = prompt(input, "Display unit [C/F/K]: ")? else {
            return Ok(());
        };

        match Unit::parse(&answer) {
            Some(unit) => {
                self.unit = unit;
                println!("Temperatures will be shown in {}.", unit.symbol());
            }
            None => println!("Unknown unit: {answer}"),
        }
        Ok(())
    }

    fn save_favorite(&mut self, input: &mut impl BufRead) -> Result<()> {
        let Some(city) = prompt_city(input)? else {
            return Ok(());
        };

        match self.favorites.add(&city) {
            Ok(true) => println!("{city} saved to favorites."),
            Ok(false) => println!("{city} is already a favorite."),
            Err(e) => {
                warn!("Could not save favorite {city}: {e}");
                println!("Could not save {city} to favorites.");
            }
        }
        Ok(())
    }

    fn remove_favorite(&mut self, input: &mut impl BufRead) -> Result<()> {
        let Some(city) = prompt_city(input)? else {
            return Ok(());
        };

        match self.favorites.remove(&city) {
            Ok(true) => println!("{city} removed from favorites."),
            Ok(false) => println!("{city} was not in favorites."),
            Err(e) => {
                warn!("Could not remove favorite {city}: {e}");
                println!("Could not remove {city} from favorites.");
            }
        }
        Ok(())
    }

    async fn show_favorites(&mut self) {
        let cities = self.favorites.load_or_default();
        if cities.is_empty() {
            println!("No saved cities.");
            return;
        }

        println!("Saved cities:");
        // one city at a time, reusing anything still fresh in the cache
        for city in cities {
            let snapshot = self.cache.get_or_fetch(&self.client, &city).await;
            println!(
                "  {}",
                display::render_favorite_line(&city, snapshot.as_ref(), self.unit)
            );
        }
    }
}

/// Print a prompt and read one trimmed line; `None` on end of input
fn prompt(input: &mut impl BufRead, text: &str) -> Result<Option<String>> {
    print!("{text}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a non-empty city name
fn prompt_city(input: &mut impl BufRead) -> Result<Option<String>> {
    let Some(city) = prompt(input, "Enter the city name: ")? else {
        return Ok(None);
    };

    if city.is_empty() {
        println!("City name cannot be empty.");
        return Ok(None);
    }
    Ok(Some(city))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> SkycastConfig {
        let mut config = SkycastConfig::default();
        config.favorites.path = dir.path().join("cities.json");
        config
    }

    #[tokio::test]
    async fn test_quit_ends_loop() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(&test_config(&dir)).unwrap();
        let mut input = Cursor::new(b"q\n".to_vec());

        app.run(&mut input).await.unwrap();
    }

    #[tokio::test]
    async fn test_end_of_input_ends_loop() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(&test_config(&dir)).unwrap();
        let mut input = Cursor::new(Vec::new());

        app.run(&mut input).await.unwrap();
    }

    #[tokio::test]
    async fn test_unit_change_sticks() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(&test_config(&dir)).unwrap();
        let mut input = Cursor::new(b"3\nF\nq\n".to_vec());

        app.run(&mut input).await.unwrap();
        assert_eq!(app.unit(), Unit::Fahrenheit);
    }

    #[tokio::test]
    async fn test_favorites_flow_without_network() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(&test_config(&dir)).unwrap();
        let mut input = Cursor::new(b"4\nParis\n4\nparis\n5\nPARIS\nq\n".to_vec());

        app.run(&mut input).await.unwrap();
        assert!(app.favorites.load_or_default().is_empty());
    }
}
