//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;
use url::Url;

use crate::config::schema::MessengerConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {0}")]
    Validation(String),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<MessengerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: MessengerConfig = toml::from_str(&content)?;

    validate_config(&config)?;

    Ok(config)
}

/// Semantic checks beyond what serde enforces.
pub fn validate_config(config: &MessengerConfig) -> Result<(), ConfigError> {
    if Url::parse(&config.rpc.endpoint_url).is_err() {
        return Err(ConfigError::Validation(format!(
            "rpc.endpoint_url is not a valid URL: '{}'",
            config.rpc.endpoint_url
        )));
    }
    if config.contract.contract_id.is_empty() {
        return Err(ConfigError::Validation(
            "contract.contract_id must not be empty".to_string(),
        ));
    }
    if config.contract.read_function.is_empty() || config.contract.write_function.is_empty() {
        return Err(ConfigError::Validation(
            "contract entry point names must not be empty".to_string(),
        ));
    }
    if config.confirmation.poll_interval_ms == 0 {
        return Err(ConfigError::Validation(
            "confirmation.poll_interval_ms must be greater than zero".to_string(),
        ));
    }
    if config.confirmation.max_poll_attempts == 0 {
        return Err(ConfigError::Validation(
            "confirmation.max_poll_attempts must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
