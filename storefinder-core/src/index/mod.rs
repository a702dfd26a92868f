//! Geospatial index abstraction
//!
//! The service only ever writes to the index: each lookup may add one
//! `(longitude, latitude, member)` tuple to a named set.

mod memory;
mod redis_store;

pub use self::memory::MemoryGeoIndex;
pub use self::redis_store::{RedisGeoIndex, DEFAULT_REDIS_URL};

use crate::error::IndexError;
use crate::types::{Coordinates, StoreRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default name of the set store records are written to
pub const DEFAULT_GEO_SET: &str = "stores";

/// Result type for index operations
pub type IndexResult<T> = std::result::Result<T, IndexError>;

/// A single insert into a geospatial set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoIndexEntry {
    pub longitude: f64,
    pub latitude: f64,
    pub member: String,
}

impl GeoIndexEntry {
    /// Entry placing a serialized store record at the queried coordinates
    pub fn for_record(coords: Coordinates, record: &StoreRecord) -> serde_json::Result<Self> {
        Ok(Self {
            longitude: coords.longitude,
            latitude: coords.latitude,
            member: record.to_member()?,
        })
    }
}

/// Write-only geospatial index backend
#[async_trait]
pub trait GeoIndex: Send + Sync {
    /// Add an entry to the named set
    async fn geo_add(&self, set: &str, entry: GeoIndexEntry) -> IndexResult<()>;

    /// Short backend name for logging
    fn name(&self) -> &'static str;
}
