//! Error types for Storefinder Core

use std::time::Duration;
use thiserror::Error;

/// Errors raised while turning query parameters into coordinates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Parameter {param} is not a number: {value:?}")]
    InvalidNumber { param: &'static str, value: String },

    #[error("Parameter {param} must be a finite number")]
    NonFinite { param: &'static str },
}

/// Errors from the geospatial index backend
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Command failed: {0}")]
    Command(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}
