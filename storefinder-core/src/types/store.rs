//! The synthetic store record returned for every lookup

use super::coordinates::Coordinates;
use crate::store_id::compute_store_id;
use serde::{Deserialize, Serialize};

/// Address reported for every store
pub const SAMPLE_STORE_ADDRESS: &str = "SAMPLE STORE ADDRESS";

/// Name reported for every store
pub const SAMPLE_STORE_NAME: &str = "SAMPLE STORE NAME";

/// A store record. Only `id` depends on the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub address: String,
    pub name: String,
    pub id: u32,
}

impl StoreRecord {
    /// Build the record for the given coordinates
    pub fn for_location(coords: Coordinates) -> Self {
        Self {
            address: SAMPLE_STORE_ADDRESS.to_string(),
            name: SAMPLE_STORE_NAME.to_string(),
            id: compute_store_id(coords),
        }
    }

    /// Compact JSON used as the geospatial member value
    pub fn to_member(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_for_location() {
        let coords = Coordinates::new(1.5, 2.5).unwrap();
        let record = StoreRecord::for_location(coords);
        assert_eq!(record.address, "SAMPLE STORE ADDRESS");
        assert_eq!(record.name, "SAMPLE STORE NAME");
        assert_eq!(record.id, 40000);
    }

    #[test]
    fn test_member_field_order() {
        let coords = Coordinates::new(1.5, 2.5).unwrap();
        let member = StoreRecord::for_location(coords).to_member().unwrap();
        assert_eq!(
            member,
            r#"{"address":"SAMPLE STORE ADDRESS","name":"SAMPLE STORE NAME","id":40000}"#
        );
    }

    #[test]
    fn test_member_decodes_to_record() {
        let coords = Coordinates::new(-12.25, 130.8).unwrap();
        let record = StoreRecord::for_location(coords);
        let decoded: StoreRecord = serde_json::from_str(&record.to_member().unwrap()).unwrap();
        assert_eq!(decoded, record);
    }
}
