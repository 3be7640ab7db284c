// Process configuration read from the environment (optionally seeded from a
// `.env` file by the binary).

use crate::modules::meal_log::core::calendar::WeekdayLocale;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const ADDR_VAR: &str = "MEAL_CHECKINS_ADDR";
pub const DATA_DIR_VAR: &str = "MEAL_CHECKINS_DATA_DIR";
pub const MIRROR_DIR_VAR: &str = "MEAL_CHECKINS_MIRROR_DIR";
pub const LOCALE_VAR: &str = "MEAL_CHECKINS_LOCALE";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a socket address: '{value}'")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: {reason}")]
    InvalidLocale { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    /// Directory of the JSON file store. In-memory when unset.
    pub data_dir: Option<PathBuf>,
    pub mirror_dir: Option<PathBuf>,
    pub locale: WeekdayLocale,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let addr_value = read(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value.parse().map_err(|_| ConfigError::InvalidAddr {
            var: ADDR_VAR,
            value: addr_value.clone(),
        })?;

        let locale = match read(LOCALE_VAR) {
            Some(value) => value
                .parse()
                .map_err(|reason| ConfigError::InvalidLocale { var: LOCALE_VAR, reason })?,
            None => WeekdayLocale::default(),
        };

        Ok(Self {
            addr,
            data_dir: read(DATA_DIR_VAR).map(PathBuf::from),
            mirror_dir: read(MIRROR_DIR_VAR).map(PathBuf::from),
            locale,
        })
    }
}
