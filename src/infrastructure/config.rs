//! Application configuration management.
//!
//! Configuration is loaded once at startup from environment variables
//! (with a `.env` file honored when present). The service has no external
//! collaborators, so only the HTTP bind address is configurable.

use std::env;
use std::num::ParseIntError;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration.
///
/// Values are loaded from environment variables using
/// [`AppConfig::from_env`]; both are optional and default to listening on
/// `0.0.0.0:3000`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `APP_HOST`: Server host (optional, default: "0.0.0.0")
    /// - `APP_PORT`: Server port (optional, default: 3000)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `APP_PORT` is set but cannot
    /// be parsed as a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let app_host = get_optional_env("APP_HOST", "0.0.0.0".to_string());
        let app_port = get_optional_env_parsed("APP_PORT", 3000)?;

        Ok(Self { app_host, app_port })
    }

    /// Creates a new `AppConfig` with the given values.
    #[must_use]
    pub const fn new(app_host: String, app_port: u16) -> Self {
        Self { app_host, app_port }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new("0.0.0.0".to_string(), 3000)
    }
}

/// Gets an optional environment variable with a default value.
fn get_optional_env(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

/// Gets an optional environment variable and parses it, with a default
/// value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the variable is set but cannot
/// be parsed.
fn get_optional_env_parsed<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    env::var(key).map_or_else(
        |_| Ok(default),
        |value| {
            value
                .parse()
                .map_err(|error: ParseIntError| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: error.to_string(),
                })
        },
    )
}
