//! Configuration schema for the API tester.
//!
//! This module defines the configuration structure and validation logic for
//! the settings that shape request execution and history retention.

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// All settings can be supplied under the "api-tester" key of a settings
/// object. Missing settings fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTesterConfig {
    /// Request timeout in milliseconds.
    ///
    /// Maximum time the transport waits for a complete response. Defaults to
    /// 30000ms (30 seconds). Must be greater than 0.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Whether to automatically follow HTTP redirects.
    ///
    /// Defaults to true.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,

    /// Maximum number of redirects to follow.
    ///
    /// Only used when `follow_redirects` is true. Defaults to 10.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: u32,

    /// Whether to validate SSL/TLS certificates.
    ///
    /// **Warning:** Disabling SSL validation can expose you to security risks.
    #[serde(default = "default_validate_ssl")]
    pub validate_ssl: bool,

    /// Maximum number of requests to keep in history, newest first.
    ///
    /// Defaults to 10. Must be > 0.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for ApiTesterConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            follow_redirects: default_follow_redirects(),
            max_redirects: default_max_redirects(),
            validate_ssl: default_validate_ssl(),
            history_limit: default_history_limit(),
        }
    }
}

impl ApiTesterConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or `Err(ConfigError::Invalid)`
    /// naming the offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout == 0 {
            return Err(ConfigError::Invalid(
                "timeout must be greater than 0".to_string(),
            ));
        }

        if self.history_limit == 0 {
            return Err(ConfigError::Invalid(
                "historyLimit must be greater than 0".to_string(),
            ));
        }

        // max_redirects can be 0 (no redirects)

        Ok(())
    }

    /// Returns the timeout as a `std::time::Duration`.
    pub fn timeout_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout)
    }
}

// Default value functions for serde

fn default_timeout() -> u64 {
    30000 // 30 seconds in milliseconds
}

fn default_follow_redirects() -> bool {
    true
}

fn default_max_redirects() -> u32 {
    10
}

fn default_validate_ssl() -> bool {
    true
}

fn default_history_limit() -> usize {
    10
}
