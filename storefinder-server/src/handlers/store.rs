//! Store lookup handler

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use storefinder_core::{lookup_store, Coordinates, GeoIndexEntry, IndexError, StoreRecord};

/// First value of a query parameter. Repeated keys keep their first value
/// and are otherwise ignored.
fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Look up the store for a location.
///
/// The query string is taken as raw pairs; parsing happens in the core crate
/// so that bad values produce a JSON error instead of axum's plain-text
/// rejection.
pub async fn get_store(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<StoreRecord>, ApiError> {
    let (coords, record) = lookup_store(first_param(&params, "lat"), first_param(&params, "long"))?;

    if state.enable_index_write {
        index_store(&state, coords, &record).await;
    }

    Ok(Json(record))
}

/// Write the record into the geospatial index.
/// Failures are logged and otherwise ignored.
async fn index_store(state: &AppState, coords: Coordinates, record: &StoreRecord) {
    let entry = match GeoIndexEntry::for_record(coords, record) {
        Ok(entry) => entry,
        Err(e) => {
            tracing::warn!("Failed to serialize store {} for indexing: {}", record.id, e);
            return;
        }
    };

    let result = match tokio::time::timeout(
        state.index_timeout,
        state.index.geo_add(&state.geo_set, entry),
    )
    .await
    {
        Ok(result) => result,
        Err(_) => Err(IndexError::Timeout(state.index_timeout)),
    };

    match result {
        Ok(()) => tracing::debug!(
            "Indexed store {} at ({}, {}) in {} set {}",
            record.id,
            coords.longitude,
            coords.latitude,
            state.index.name(),
            state.geo_set
        ),
        Err(e) => tracing::warn!(
            "Failed to index store {} at ({}, {}): {}",
            record.id,
            coords.longitude,
            coords.latitude,
            e
        ),
    }
}
