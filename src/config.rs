use std::time::Duration;

use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};

/// Runtime settings for the storefront demo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSON catalog to load instead of the built-in listings
    #[serde(default)]
    pub catalog_path: Option<String>,
    #[serde(default = "default_auth_delay_ms")]
    pub auth_delay_ms: u64,
    #[serde(default = "default_booking_delay_ms")]
    pub booking_delay_ms: u64,
    #[serde(default = "default_booking_timeout_ms")]
    pub booking_timeout_ms: u64,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_auth_delay_ms() -> u64 {
    1000
}

fn default_booking_delay_ms() -> u64 {
    2000
}

fn default_booking_timeout_ms() -> u64 {
    10_000
}

fn default_output_path() -> String {
    "bookings.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            auth_delay_ms: default_auth_delay_ms(),
            booking_delay_ms: default_booking_delay_ms(),
            booking_timeout_ms: default_booking_timeout_ms(),
            output_path: default_output_path(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load from `storefront.toml` (optional) and `STOREFRONT_*` variables
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(config::File::with_name("storefront.toml").required(false))
            .add_source(config::Environment::with_prefix("STOREFRONT"))
            .build()?;
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.booking_timeout_ms == 0 {
            return Err(ConfigError::Message("booking_timeout_ms must be positive".to_string()));
        }
        Ok(())
    }

    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    pub fn booking_delay(&self) -> Duration {
        Duration::from_millis(self.booking_delay_ms)
    }

    pub fn booking_timeout(&self) -> Duration {
        Duration::from_millis(self.booking_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let settings = Config::builder()
            .set_override("auth_delay_ms", 5)
            .unwrap()
            .build()
            .unwrap();
        let config: AppConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.auth_delay(), Duration::from_millis(5));
        assert_eq!(config.booking_delay_ms, 2000);
        assert_eq!(config.output_path, "bookings.json");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = AppConfig {
            booking_timeout_ms: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(AppConfig::default().validate().is_ok());
    }
}
