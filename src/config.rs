// Config module for environment-driven settings

use crate::constants;
use crate::error::{MarketError, Result};
use crate::platform::Platform;

/// Settings shared by the library and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub platform: Platform,
    pub lookup_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            lookup_endpoint: constants::LOOKUP_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from `MARKET_PLATFORM` and `MARKET_LOOKUP_URL`,
    /// falling back to the build's platform and the public lookup endpoint.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(constants::PLATFORM_ENV).ok(),
            std::env::var(constants::LOOKUP_URL_ENV).ok(),
        )
    }

    fn from_vars(platform: Option<String>, lookup_endpoint: Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = platform.filter(|v| !v.trim().is_empty()) {
            config.platform = value.parse().map_err(|_| {
                MarketError::Config(format!(
                    "{} must be 'ios' or 'android', got '{}'",
                    constants::PLATFORM_ENV,
                    value
                ))
            })?;
        }

        if let Some(endpoint) = lookup_endpoint.filter(|v| !v.trim().is_empty()) {
            reqwest::Url::parse(&endpoint).map_err(|e| {
                MarketError::Config(format!(
                    "{} is not a valid URL ('{}'): {}",
                    constants::LOOKUP_URL_ENV,
                    endpoint,
                    e
                ))
            })?;
            config.lookup_endpoint = endpoint;
        }

        Ok(config)
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}
