//! Query coordinates

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair, always finite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build coordinates from already-parsed values
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            latitude: ensure_finite("lat", latitude)?,
            longitude: ensure_finite("long", longitude)?,
        })
    }

    /// Parse the raw `lat` and `long` query parameters.
    ///
    /// Missing or blank parameters, unparseable numbers and NaN/infinity are
    /// all rejected. `lat` is checked before `long`.
    pub fn from_query(lat: Option<&str>, long: Option<&str>) -> Result<Self, ValidationError> {
        let latitude = parse_param("lat", lat)?;
        let longitude = parse_param("long", long)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

fn parse_param(param: &'static str, raw: Option<&str>) -> Result<f64, ValidationError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::MissingParameter(param))?;

    let value: f64 = raw.parse().map_err(|_| ValidationError::InvalidNumber {
        param,
        value: raw.to_string(),
    })?;

    ensure_finite(param, value)
}

fn ensure_finite(param: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { param })
    }
}
