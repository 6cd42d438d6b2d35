//! services/quote/src/config.rs
//!
//! Defines the service configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use booking_core::domain::parse_calendar_date;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub settings_dir: PathBuf,
    pub log_level: Level,
    /// Overrides the current date used by the full-weekend rules.
    pub today: Option<NaiveDate>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let settings_dir = std::env::var("SETTINGS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./rooms"));

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let today = match std::env::var("BOOKING_TODAY") {
            Ok(raw) => Some(parse_calendar_date(&raw).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "BOOKING_TODAY".to_string(),
                    format!("'{}' is not a calendar date", raw),
                )
            })?),
            Err(_) => None,
        };

        Ok(Self {
            settings_dir,
            log_level,
            today,
        })
    }

    /// The configured current date, or the local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
