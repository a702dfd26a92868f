//! In-process geospatial index

use super::{GeoIndex, GeoIndexEntry, IndexResult};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Index that keeps every insert in memory, in insertion order.
/// Nothing is deduplicated.
#[derive(Debug, Default)]
pub struct MemoryGeoIndex {
    sets: RwLock<HashMap<String, Vec<GeoIndexEntry>>>,
}

impl MemoryGeoIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the entries in a set
    pub async fn entries(&self, set: &str) -> Vec<GeoIndexEntry> {
        self.sets.read().await.get(set).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl GeoIndex for MemoryGeoIndex {
    async fn geo_add(&self, set: &str, entry: GeoIndexEntry) -> IndexResult<()> {
        self.sets
            .write()
            .await
            .entry(set.to_string())
            .or_default()
            .push(entry);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(lng: f64, lat: f64) -> GeoIndexEntry {
        GeoIndexEntry {
            longitude: lng,
            latitude: lat,
            member: "m".to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_set() {
        let index = MemoryGeoIndex::new();
        assert!(index.entries("stores").await.is_empty());
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let index = MemoryGeoIndex::new();
        index.geo_add("stores", entry(2.5, 1.5)).await.unwrap();
        index.geo_add("stores", entry(2.5, 1.5)).await.unwrap();
        index.geo_add("other", entry(0.0, 0.0)).await.unwrap();

        let entries = index.entries("stores").await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entry(2.5, 1.5));
        assert_eq!(index.entries("other").await.len(), 1);
    }
}
