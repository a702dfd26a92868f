//! Request and response types

pub mod coordinates;
pub mod store;

pub use coordinates::Coordinates;
pub use store::{StoreRecord, SAMPLE_STORE_ADDRESS, SAMPLE_STORE_NAME};
