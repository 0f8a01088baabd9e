//! `temprelay` - Weather-to-serial temperature relay
//!
//! This library fetches the current temperature for a US zip code from
//! OpenWeatherMap and relays the truncated integer value as a text line
//! over a serial connection to a microcontroller.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod relay;
pub mod runner;
pub mod weather;

// Re-export core types for public API
pub use cli::Cli;
pub use config::{LoggingConfig, SerialConfig, TempRelayConfig, WeatherConfig};
pub use error::TempRelayError;
pub use models::{TemperatureReading, Units, ZipCode};
pub use relay::SerialRelay;
pub use weather::WeatherApiClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TempRelayError>;
