//! Client configuration.
//!
//! There is no process environment in the browser, so values come from a
//! lookup function: the web crate feeds it values baked in at build time,
//! tests feed it maps.

use std::{num::ParseIntError, time::Duration};

use rusty_money::iso::{Currency, EUR, GBP, USD};
use thiserror::Error;

/// Environment key for the API base URL.
pub const API_BASE_KEY: &str = "STOREFRONT_API_BASE";

/// Environment key for the cart polling interval in milliseconds.
pub const POLL_INTERVAL_KEY: &str = "STOREFRONT_POLL_INTERVAL_MS";

/// Environment key for the notification lifetime in milliseconds.
pub const NOTIFICATION_KEY: &str = "STOREFRONT_NOTIFICATION_MS";

/// Environment key for the display currency's ISO code.
pub const CURRENCY_KEY: &str = "STOREFRONT_CURRENCY";

/// Environment key for the log filter.
pub const LOG_LEVEL_KEY: &str = "STOREFRONT_LOG_LEVEL";

const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
const DEFAULT_POLL_INTERVAL_MS: u64 = 2_000;
const DEFAULT_NOTIFICATION_MS: u64 = 3_000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must not be empty")]
    Empty { key: &'static str },

    #[error("{key} must be a whole number of milliseconds")]
    InvalidMillis {
        key: &'static str,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Storefront client settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the shop API, without a trailing slash.
    pub api_base: String,

    /// Interval between background cart refreshes. Zero disables polling.
    pub poll_interval: Duration,

    /// How long a notification stays on screen.
    pub notification_ttl: Duration,

    /// Currency amounts are displayed in.
    pub currency: &'static Currency,

    /// Log filter directive, e.g. `info` or `storefront_client=debug`.
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            notification_ttl: Duration::from_millis(DEFAULT_NOTIFICATION_MS),
            currency: USD,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a key lookup, falling back to defaults for
    /// missing keys.
    ///
    /// # Errors
    ///
    /// Returns an error if a present value is empty, not a number where one
    /// is expected, or names an unsupported currency.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(api_base) = lookup(API_BASE_KEY) {
            let api_base = api_base.trim().trim_end_matches('/');

            if api_base.is_empty() {
                return Err(ConfigError::Empty { key: API_BASE_KEY });
            }

            config.api_base = api_base.to_string();
        }

        if let Some(raw) = lookup(POLL_INTERVAL_KEY) {
            config.poll_interval = parse_millis(POLL_INTERVAL_KEY, &raw)?;
        }

        if let Some(raw) = lookup(NOTIFICATION_KEY) {
            config.notification_ttl = parse_millis(NOTIFICATION_KEY, &raw)?;
        }

        if let Some(code) = lookup(CURRENCY_KEY) {
            config.currency = parse_currency(&code)?;
        }

        if let Some(level) = lookup(LOG_LEVEL_KEY) {
            let level = level.trim();

            if level.is_empty() {
                return Err(ConfigError::Empty { key: LOG_LEVEL_KEY });
            }

            config.log_level = level.to_string();
        }

        Ok(config)
    }
}

fn parse_millis(key: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|source| ConfigError::InvalidMillis { key, source })
}

fn parse_currency(code: &str) -> Result<&'static Currency, ConfigError> {
    match code.trim().to_ascii_uppercase().as_str() {
        "USD" => Ok(USD),
        "GBP" => Ok(GBP),
        "EUR" => Ok(EUR),
        other => Err(ConfigError::UnknownCurrency(other.to_string())),
    }
}
