//! Server configuration read from the environment

use std::net::SocketAddr;
use std::time::Duration;
use storefinder_core::{DEFAULT_GEO_SET, DEFAULT_REDIS_URL};
use thiserror::Error;

const DEFAULT_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_INDEX_TIMEOUT_MS: u64 = 2000;

/// Invalid configuration values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Which geospatial index implementation to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexBackend {
    Redis,
    Memory,
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address
    pub addr: SocketAddr,

    /// Whether lookups also write the record into the geospatial index
    pub enable_index_write: bool,

    pub index_backend: IndexBackend,

    pub redis_url: String,

    /// Set that records are added to
    pub geo_set: String,

    /// Upper bound on a single index write
    pub index_timeout: Duration,

    /// `*` or a comma-separated origin list; `None` allows localhost only
    pub cors_origins: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            enable_index_write: false,
            index_backend: IndexBackend::Redis,
            redis_url: DEFAULT_REDIS_URL.to_string(),
            geo_set: DEFAULT_GEO_SET.to_string(),
            index_timeout: Duration::from_millis(DEFAULT_INDEX_TIMEOUT_MS),
            cors_origins: None,
        }
    }
}

impl Config {
    /// Load configuration from `STOREFINDER_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let addr_var = "STOREFINDER_ADDR";
        let addr_raw = get(addr_var).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_raw
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| invalid(addr_var, &addr_raw, e))?;

        let enable_index_write = match get("STOREFINDER_INDEX_WRITE") {
            Some(raw) => parse_bool("STOREFINDER_INDEX_WRITE", &raw)?,
            None => false,
        };

        let index_backend = match get("STOREFINDER_INDEX_BACKEND") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "redis" => IndexBackend::Redis,
                "memory" => IndexBackend::Memory,
                _ => {
                    return Err(invalid(
                        "STOREFINDER_INDEX_BACKEND",
                        &raw,
                        "expected redis or memory",
                    ))
                }
            },
            None => IndexBackend::Redis,
        };

        let timeout_var = "STOREFINDER_INDEX_TIMEOUT_MS";
        let index_timeout = match get(timeout_var) {
            Some(raw) => {
                let ms: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| invalid(timeout_var, &raw, e))?;
                if ms == 0 {
                    return Err(invalid(timeout_var, &raw, "must be greater than zero"));
                }
                Duration::from_millis(ms)
            }
            None => Duration::from_millis(DEFAULT_INDEX_TIMEOUT_MS),
        };

        Ok(Self {
            addr,
            enable_index_write,
            index_backend,
            redis_url: get("STOREFINDER_REDIS_URL").unwrap_or_else(|| DEFAULT_REDIS_URL.to_string()),
            geo_set: get("STOREFINDER_GEO_SET").unwrap_or_else(|| DEFAULT_GEO_SET.to_string()),
            index_timeout,
            cors_origins: get("STOREFINDER_CORS_ORIGINS"),
        })
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(var, raw, "expected a boolean")),
    }
}

fn invalid(var: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        var,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
