//! Error types and handling for `temprelay`

use thiserror::Error;

/// Main error type for the `temprelay` application
#[derive(Error, Debug)]
pub enum TempRelayError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Weather query errors (network, HTTP status, response parsing)
    #[error("Query error: {message}")]
    Query { message: String },

    /// Serial transmission errors
    #[error("Transmit error: {message}")]
    Transmit { message: String },
}

impl TempRelayError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new query error
    pub fn query<S: Into<String>>(message: S) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a new transmit error
    pub fn transmit<S: Into<String>>(message: S) -> Self {
        Self::Transmit {
            message: message.into(),
        }
    }

    /// Get the user-facing message for this error.
    ///
    /// Query and transmit failures deliberately collapse into the same
    /// generic line; the actual cause is only visible in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TempRelayError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            TempRelayError::Validation { .. } => "Please enter a valid zip code".to_string(),
            TempRelayError::Query { .. } | TempRelayError::Transmit { .. } => {
                "Open Weather Map was unable to identify the given zip code. \
                 Please enter a valid zip code."
                    .to_string()
            }
        }
    }
}
