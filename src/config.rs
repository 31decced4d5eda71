//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file. Nothing here touches
//! stdout, which carries the conversation with the user.

use crate::book::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Longest birthday look-ahead accepted from the environment.
pub const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Days ahead the `birthdays` command looks (default: 7)
    pub birthday_window_days: u32,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: Look-ahead for upcoming birthdays, 0-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine; dotenvy doesn't print to stdout
        let _ = dotenvy::dotenv();

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_WINDOW_DAYS)?;

        if birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be at most {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
