use std::time::Duration;
use thiserror::Error;
use tracing::info;

const API_BASE_VAR: &str = "SEARCHSYNC_API_BASE";
const API_ENDPOINT_VAR: &str = "SEARCHSYNC_API_ENDPOINT";
const SETTLE_DELAY_VAR: &str = "SEARCHSYNC_SETTLE_DELAY_MS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Application configuration
/// In debug builds: loads from .env file, then environment variables
/// In release builds: environment variables only
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL the search endpoint is resolved against
    pub api_base: String,
    /// Relative path of the search endpoint
    pub api_endpoint: String,
    /// Pause after each fetch before its results are published
    pub settle_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:3000/".to_string(),
            api_endpoint: "api/whatever".to_string(),
            settle_delay: Duration::ZERO,
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using environment only");
            }
        }

        Self::from_vars(std::env::vars())
    }

    /// Load configuration from a specific env file, ignoring the process environment
    #[cfg(test)]
    pub fn from_env_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let vars = dotenvy::from_path_iter(path.as_ref())?.collect::<Result<Vec<_>, _>>()?;
        Self::from_vars(vars)
    }

    /// Build configuration from key/value pairs; unknown keys are ignored
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();

        for (key, value) in vars {
            let value = value.into();
            match key.as_ref() {
                API_BASE_VAR => config.api_base = value,
                API_ENDPOINT_VAR => config.api_endpoint = value,
                SETTLE_DELAY_VAR => {
                    let millis =
                        value
                            .trim()
                            .parse::<u64>()
                            .map_err(|_| ConfigError::InvalidValue {
                                key: SETTLE_DELAY_VAR.to_string(),
                                value: value.clone(),
                            })?;
                    config.settle_delay = Duration::from_millis(millis);
                }
                _ => {}
            }
        }

        info!(
            "Config: search endpoint {}{} (settle delay {:?})",
            config.api_base, config.api_endpoint, config.settle_delay
        );

        Ok(config)
    }
}
