//! Storefinder Core Library
//!
//! This crate provides the types and logic behind the store lookup endpoint:
//! coordinate validation, the synthetic store id, and the write-only
//! geospatial index the resulting records can be added to.

pub mod error;
pub mod index;
pub mod store_id;
pub mod types;

pub use error::{IndexError, ValidationError};
pub use index::{
    GeoIndex, GeoIndexEntry, MemoryGeoIndex, RedisGeoIndex, DEFAULT_GEO_SET, DEFAULT_REDIS_URL,
};
pub use store_id::{compute_store_id, STORE_ID_SPACE};
pub use types::{Coordinates, StoreRecord};

/// Validate raw query parameters and build the store record for them
pub fn lookup_store(
    lat: Option<&str>,
    long: Option<&str>,
) -> Result<(Coordinates, StoreRecord), ValidationError> {
    let coords = Coordinates::from_query(lat, long)?;
    Ok((coords, StoreRecord::for_location(coords)))
}
