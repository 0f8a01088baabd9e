//! Core data types: zip codes, unit selection, and temperature readings.

use crate::TempRelayError;
use std::fmt;
use std::str::FromStr;

/// A validated five-digit US zip code.
///
/// Construction goes through [`FromStr`]; once built the value is known to be
/// exactly five ASCII decimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipCode(String);

impl ZipCode {
    /// The zip code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ZipCode {
    type Err = TempRelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 5 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(TempRelayError::validation(format!(
                "zip code must be exactly five digits, got '{s}'"
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unit system requested from the weather API.
///
/// Derived once from the CLI flags and used for both the query and any
/// labeling, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Fahrenheit,
    Celsius,
}

impl Units {
    /// Resolve the unit from the two CLI flags. Celsius wins when both are set.
    #[must_use]
    pub fn from_flags(_fahrenheit: bool, celsius: bool) -> Self {
        if celsius {
            Self::Celsius
        } else {
            Self::Fahrenheit
        }
    }

    /// The `units` query parameter value OpenWeatherMap expects.
    #[must_use]
    pub fn api_param(self) -> &'static str {
        match self {
            Self::Fahrenheit => "imperial",
            Self::Celsius => "metric",
        }
    }
}

/// Current, daily-high, and daily-low temperatures as returned by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureReading {
    pub temp: f64,
    pub temp_max: f64,
    pub temp_min: f64,
}

impl TemperatureReading {
    /// The current temperature truncated toward zero, as sent over serial.
    #[must_use]
    pub fn truncated(&self) -> i64 {
        self.temp.trunc() as i64
    }
}
