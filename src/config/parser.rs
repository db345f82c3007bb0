use crate::config::types::{Config, FetchConfig};
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;

    if config.output.root.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output.root cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}
