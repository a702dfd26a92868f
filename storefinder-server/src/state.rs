//! Application state

use crate::config::{Config, IndexBackend};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use storefinder_core::{GeoIndex, MemoryGeoIndex, RedisGeoIndex, DEFAULT_GEO_SET};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Geospatial index that records are written to
    pub index: Arc<dyn GeoIndex>,

    /// Whether lookups write to the index at all
    pub enable_index_write: bool,

    /// Name of the set records are added to
    pub geo_set: String,

    /// Upper bound on a single index write
    pub index_timeout: Duration,
}

impl AppState {
    /// Create application state from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let index: Arc<dyn GeoIndex> = match config.index_backend {
            IndexBackend::Redis => Arc::new(RedisGeoIndex::open(&config.redis_url)?),
            IndexBackend::Memory => Arc::new(MemoryGeoIndex::new()),
        };

        Ok(Self {
            index,
            enable_index_write: config.enable_index_write,
            geo_set: config.geo_set.clone(),
            index_timeout: config.index_timeout,
        })
    }

    /// State around an existing index, with default set name and timeout
    pub fn with_index(index: Arc<dyn GeoIndex>, enable_index_write: bool) -> Self {
        Self {
            index,
            enable_index_write,
            geo_set: DEFAULT_GEO_SET.to_string(),
            index_timeout: Config::default().index_timeout,
        }
    }
}
