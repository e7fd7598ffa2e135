//! Configuration management for the API tester.
//!
//! Configuration is read from a JSON settings object under the "api-tester"
//! key, merged with defaults, validated, and kept in a process-wide singleton.

pub mod schema;

pub use schema::ApiTesterConfig;

use log::warn;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::RwLock;
use thiserror::Error;

/// Settings key the configuration is read from.
pub const SETTINGS_KEY: &str = "api-tester";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting has a value outside its allowed range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// A settings file could not be read.
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// A settings file is not valid JSON.
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Global configuration instance.
static CONFIG: Lazy<RwLock<ApiTesterConfig>> =
    Lazy::new(|| RwLock::new(ApiTesterConfig::default()));

/// Loads configuration from a settings JSON value.
///
/// Settings under the "api-tester" key replace the defaults. Settings that do
/// not deserialize are ignored with a warning and the defaults are used.
///
/// # Arguments
///
/// * `settings_json` - Optional JSON value containing settings under "api-tester"
///
/// # Returns
///
/// `Ok(ApiTesterConfig)` with the loaded configuration, or `Err` if validation fails.
///
/// # Example
///
/// ```
/// use api_tester::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "api-tester": {
///         "timeout": 60000,
///         "historyLimit": 25
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.timeout, 60000);
/// assert_eq!(config.history_limit, 25);
/// # api_tester::config::reset_config();
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<ApiTesterConfig, ConfigError> {
    let mut config = ApiTesterConfig::default();

    if let Some(settings) = settings_json.as_ref().and_then(|s| s.get(SETTINGS_KEY)) {
        match serde_json::from_value::<ApiTesterConfig>(settings.clone()) {
            Ok(user_config) => config = user_config,
            Err(e) => warn!(
                "failed to parse {} settings: {}; using defaults",
                SETTINGS_KEY, e
            ),
        }
    }

    config.validate()?;

    if let Ok(mut global_config) = CONFIG.write() {
        *global_config = config.clone();
    }

    Ok(config)
}

/// Loads configuration from a JSON settings file.
///
/// # Arguments
///
/// * `path` - Path to a JSON file with an "api-tester" object
pub fn load_config_file(path: &std::path::Path) -> Result<ApiTesterConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let settings: Value = serde_json::from_str(&content)?;
    load_config(Some(settings))
}

/// Gets the current global configuration.
///
/// Returns the defaults if configuration has not been loaded yet.
pub fn get_config() -> ApiTesterConfig {
    CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_else(|_| ApiTesterConfig::default())
}

/// Updates the global configuration in place.
///
/// If the update leaves the configuration invalid, it is reset to defaults.
///
/// # Example
///
/// ```
/// use api_tester::config::{get_config, reset_config, update_config};
///
/// update_config(|config| config.history_limit = 3);
/// assert_eq!(get_config().history_limit, 3);
/// # reset_config();
/// ```
pub fn update_config<F>(updater: F)
where
    F: FnOnce(&mut ApiTesterConfig),
{
    if let Ok(mut config) = CONFIG.write() {
        updater(&mut config);

        if let Err(e) = config.validate() {
            warn!("configuration update rejected: {}", e);
            *config = ApiTesterConfig::default();
        }
    }
}

/// Resets the configuration to defaults.
pub fn reset_config() {
    if let Ok(mut config) = CONFIG.write() {
        *config = ApiTesterConfig::default();
    }
}
