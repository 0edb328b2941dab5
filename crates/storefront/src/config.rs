//! # Configuration
//!
//! Tunables for the storefront actor and the hero animation. Every field has a
//! default matching the shipped page, so a config file only needs the keys it
//! overrides:
//!
//! ```json
//! { "notice_ttl_ms": 2500, "vessel": { "tilt": 0.3 } }
//! ```
//!
//! [`StorefrontConfig::load`] reads the file named by `POPCORN_CONFIG` when the
//! variable is set and falls back to the defaults otherwise.

use crate::notice::NOTICE_TTL;
use crate::vessel::VesselConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// How long a cart notice stays visible.
    pub notice_ttl_ms: u64,
    /// Capacity of the storefront actor's inbox. Must be at least 1.
    pub channel_capacity: usize,
    pub vessel: VesselConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            notice_ttl_ms: NOTICE_TTL.as_millis() as u64,
            channel_capacity: 32,
            vessel: VesselConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Environment variable holding the path of a JSON config file.
    pub const ENV_VAR: &'static str = "POPCORN_CONFIG";

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the runtime cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "channel_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Loads from `POPCORN_CONFIG` if set, otherwise returns the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_constants() {
        let config = StorefrontConfig::default();
        assert_eq!(config.notice_ttl(), Duration::from_millis(1800));
        assert_eq!(config.vessel.tilt, 0.4);
        assert_eq!(config.vessel.spring.stiffness, 40.0);
        assert_eq!(config.vessel.spring.damping, 20.0);
        assert_eq!(config.vessel.regular_scale, [1.7, 2.4, 1.9]);
        assert_eq!(config.vessel.small_scale, [1.2, 1.6, 1.4]);
    }

    #[test]
    fn test_partial_override() {
        let config =
            StorefrontConfig::from_json_str(r#"{ "notice_ttl_ms": 2500, "vessel": { "tilt": 0.3 } }"#)
                .unwrap();
        assert_eq!(config.notice_ttl(), Duration::from_millis(2500));
        assert_eq!(config.vessel.tilt, 0.3);
        assert_eq!(config.vessel.small_viewport_width, 768.0);
        assert_eq!(config.channel_capacity, 32);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let result = StorefrontConfig::from_json_str(r#"{ "notice_ttl_ms": "soon" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_channel_capacity_is_rejected() {
        let result = StorefrontConfig::from_json_str(r#"{ "channel_capacity": 0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(msg)) if msg.contains("channel_capacity")));

        let config = StorefrontConfig {
            channel_capacity: 0,
            ..StorefrontConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(StorefrontConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let result = StorefrontConfig::from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
