use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::shared::core::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageLimits};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

/// Settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` runs on the in-memory store.
    pub database: Option<DatabaseConfig>,
    pub page_limits: PageLimits,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = parse_or(&lookup, "EVENTS_BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 8080)))?;

        let database = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                let max_connections: u32 = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?;
                if max_connections == 0 {
                    return Err(invalid("DATABASE_MAX_CONNECTIONS", max_connections));
                }
                let acquire_timeout_secs: u64 =
                    parse_or(&lookup, "DATABASE_ACQUIRE_TIMEOUT_SECS", 3)?;
                if acquire_timeout_secs == 0 {
                    return Err(invalid("DATABASE_ACQUIRE_TIMEOUT_SECS", acquire_timeout_secs));
                }
                Some(DatabaseConfig {
                    url,
                    max_connections,
                    acquire_timeout: Duration::from_secs(acquire_timeout_secs),
                })
            }
            None => None,
        };

        let default_size: u64 = parse_or(&lookup, "EVENTS_DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let max_size: u64 = parse_or(&lookup, "EVENTS_MAX_PAGE_SIZE", MAX_PAGE_SIZE)?;
        if max_size == 0 {
            return Err(invalid("EVENTS_MAX_PAGE_SIZE", max_size));
        }
        if default_size == 0 || default_size > max_size {
            return Err(invalid("EVENTS_DEFAULT_PAGE_SIZE", default_size));
        }

        Ok(Self {
            bind_addr,
            database,
            page_limits: PageLimits {
                default_size,
                max_size,
            },
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

fn invalid(name: &'static str, value: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
    }
}
