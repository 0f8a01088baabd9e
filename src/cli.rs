use clap::Parser;
use std::path::PathBuf;

use crate::models::Units;

#[derive(Parser, Debug)]
#[command(
    name = "temprelay",
    version,
    about = "Fetches current weather for a US zip code and relays the temperature over serial"
)]
pub struct Cli {
    #[arg(
        short = 'z',
        long,
        default_value = "94305",
        help = "Zip code to return weather data for"
    )]
    pub zip_code: String,
    #[arg(short = 'f', long, help = "Return temperature in fahrenheit (default)")]
    pub fahrenheit: bool,
    #[arg(
        short = 'c',
        long,
        help = "Return temperature in celsius; takes precedence over --fahrenheit"
    )]
    pub celsius: bool,
    #[arg(long, help = "Path to an explicit config file")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The unit system resolved from the flags, used for both the query
    /// and the printed values.
    #[must_use]
    pub fn units(&self) -> Units {
        Units::from_flags(self.fahrenheit, self.celsius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["temprelay"]).unwrap();
        assert_eq!(cli.zip_code, "94305");
        assert!(!cli.celsius);
        assert_eq!(cli.units(), Units::Fahrenheit);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_zip_code_flag() {
        let cli = Cli::try_parse_from(["temprelay", "-z", "10001"]).unwrap();
        assert_eq!(cli.zip_code, "10001");

        let cli = Cli::try_parse_from(["temprelay", "--zip-code", "60601"]).unwrap();
        assert_eq!(cli.zip_code, "60601");
    }

    #[test]
    fn test_celsius_takes_precedence() {
        let cli = Cli::try_parse_from(["temprelay", "-c"]).unwrap();
        assert_eq!(cli.units(), Units::Celsius);

        let cli = Cli::try_parse_from(["temprelay", "-f", "-c"]).unwrap();
        assert_eq!(cli.units(), Units::Celsius);

        let cli = Cli::try_parse_from(["temprelay", "-f"]).unwrap();
        assert_eq!(cli.units(), Units::Fahrenheit);
    }
}
