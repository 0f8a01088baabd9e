//! The single control flow: validate, query, print, relay.

use crate::Result;
use crate::cli::Cli;
use crate::config::TempRelayConfig;
use crate::models::ZipCode;
use crate::relay::SerialRelay;
use crate::weather::WeatherApiClient;

/// Run one weather-and-relay invocation.
///
/// The zip code is validated before anything else happens, so an invalid
/// input never reaches the weather service or the serial device.
pub fn run(cli: &Cli, config: &TempRelayConfig) -> Result<()> {
    let zip: ZipCode = cli.zip_code.parse()?;
    let units = cli.units();

    let client = WeatherApiClient::new(&config.weather)?;
    let reading = client.current_by_zip(&zip, units)?;

    println!("Temperature: {}", reading.temp);
    println!("High for the day: {}", reading.temp_max);
    println!("Low for the day: {}", reading.temp_min);

    SerialRelay::new(&config.serial).send(reading.truncated())
}
