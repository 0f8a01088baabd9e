//! Weather API client for OpenWeatherMap
//!
//! This module provides HTTP client functionality for retrieving the current
//! weather observation for a US zip code from the OpenWeatherMap API.

use crate::config::WeatherConfig;
use crate::models::{TemperatureReading, Units, ZipCode};
use crate::{Result, TempRelayError};
use reqwest::blocking::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

/// Weather API client for OpenWeatherMap
#[derive(Debug)]
pub struct WeatherApiClient {
    /// HTTP client
    client: Client,
    /// API configuration
    config: WeatherConfig,
    /// API key, checked at construction so queries never run without one
    api_key: String,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            TempRelayError::config(
                "Weather API key is not configured. \
                 Set TEMPRELAY_WEATHER__API_KEY or add it to the config file.",
            )
        })?;

        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("temprelay/{}", crate::VERSION))
            .build()
            .map_err(|e| TempRelayError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    /// Get the current weather observation for a zip code.
    ///
    /// Country is fixed to `US`; the unit system is whatever the caller
    /// resolved from the CLI flags.
    #[instrument(skip(self), fields(zip = %zip, units = units.api_param()))]
    pub fn current_by_zip(&self, zip: &ZipCode, units: Units) -> Result<TemperatureReading> {
        info!("Querying current weather for zip code {zip}");
        let start_time = Instant::now();

        let url = self.build_current_url(zip, units);
        // Never log the appid
        debug!(
            "OpenWeatherMap request URL: {}",
            url.split("appid=").next().unwrap_or(&url)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| {
                error!("HTTP request failed: {e}");
                TempRelayError::query(format!("request failed: {e}"))
            })?;

        let status = response.status();
        if status.as_u16() == 401 {
            error!("API authentication failed (HTTP 401)");
            return Err(TempRelayError::query(
                "invalid API key rejected by OpenWeatherMap",
            ));
        }
        if status.as_u16() == 404 {
            warn!("No weather data for zip code {zip} (HTTP 404)");
            return Err(TempRelayError::query(format!(
                "no weather data found for zip code {zip}"
            )));
        }
        if !status.is_success() {
            warn!("Unexpected HTTP status: {status}");
            return Err(TempRelayError::query(format!(
                "request failed with status {status}"
            )));
        }

        let observation: openweathermap::CurrentResponse = response.json().map_err(|e| {
            error!("Failed to parse weather response: {e}");
            TempRelayError::query("invalid weather data received from OpenWeatherMap")
        })?;

        let total_duration = start_time.elapsed();
        info!(
            "Successfully retrieved current weather for {} in {:.3}s",
            observation.name.as_deref().unwrap_or(zip.as_str()),
            total_duration.as_secs_f64()
        );

        if total_duration.as_secs() > 5 {
            warn!(
                "Slow API response detected: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        Ok(TemperatureReading {
            temp: observation.main.temp,
            temp_max: observation.main.temp_max,
            temp_min: observation.main.temp_min,
        })
    }

    /// Build the current-weather request URL for a zip code
    fn build_current_url(&self, zip: &ZipCode, units: Units) -> String {
        format!(
            "{}/weather?zip={},US&units={}&appid={}",
            self.config.base_url,
            zip,
            units.api_param(),
            self.api_key
        )
    }
}

/// OpenWeatherMap API response structures
mod openweathermap {
    use serde::Deserialize;

    /// Current weather observation envelope; only the fields this
    /// application reads are modeled
    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub main: MainData,
        /// Resolved place name, when the API provides one
        pub name: Option<String>,
    }

    /// Temperature block of a current weather observation
    #[derive(Debug, Deserialize)]
    pub struct MainData {
        pub temp: f64,
        pub temp_max: f64,
        pub temp_min: f64,
    }
}
