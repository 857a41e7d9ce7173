//! Temperature units and conversions
//!
//! Temperatures are Celsius everywhere at rest and converted only when
//! rendered for the terminal.

/// Convert a Celsius temperature to Fahrenheit
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert a Celsius temperature to Kelvin
#[must_use]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + 273.15
}

/// Display unit for temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Degrees Celsius
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
}

impl Unit {
    /// Convert a Celsius value into this unit
    #[must_use]
    pub fn convert(self, celsius: f64) -> f64 {
        match self {
            Unit::Celsius => celsius,
            Unit::Fahrenheit => celsius_to_fahrenheit(celsius),
            Unit::Kelvin => celsius_to_kelvin(celsius),
        }
    }

    /// Unit symbol for display
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
        }
    }

    /// Parse a unit from user input ("C", "F" or "K", case-insensitive)
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "C" => Some(Unit::Celsius),
            "F" => Some(Unit::Fahrenheit),
            "K" => Some(Unit::Kelvin),
            _ => None,
        }
    }
}
