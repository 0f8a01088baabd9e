use clap::Parser;
use temprelay::{Cli, TempRelayConfig, TempRelayError, ZipCode, runner};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // The zip check runs before the config file is read, so an invalid
    // input stops here without touching config or any external service.
    if let Err(e) = cli.zip_code.parse::<ZipCode>() {
        println!("{}", e.user_message());
        return;
    }

    let config = match TempRelayConfig::load_from_path(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            // Failures are reported as text only; the process exits 0.
            let message = e
                .downcast_ref::<TempRelayError>()
                .map(TempRelayError::user_message)
                .unwrap_or_else(|| TempRelayError::config(e.to_string()).user_message());
            println!("{message}");
            return;
        }
    };

    init_tracing(&config);

    if let Err(e) = runner::run(&cli, &config) {
        tracing::error!("{e}");
        println!("{}", e.user_message());
    }
}

/// Diagnostics go to stderr so the operator-facing stdout lines stay clean.
fn init_tracing(config: &TempRelayConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
