//! Synthetic store id derivation
//!
//! The id is `floor(((lat + long) mod 10) * 10000)`, with `mod` taken as the
//! Euclidean remainder so negative sums wrap into `[0, 10)`. For example
//! `lat = -1.0, long = 0.5` sums to `-0.5`, which wraps to `9.5` and gives
//! id `95000`.

use crate::types::Coordinates;

/// Modulus applied to the coordinate sum
const MODULUS: f64 = 10.0;

/// Scale applied to the remainder before truncation
const SCALE: f64 = 10_000.0;

/// Exclusive upper bound of every store id
pub const STORE_ID_SPACE: u32 = 100_000;

/// Derive the store id for a pair of coordinates
pub fn compute_store_id(coords: Coordinates) -> u32 {
    let mut remainder = (coords.latitude + coords.longitude).rem_euclid(MODULUS);

    // rem_euclid may return exactly MODULUS for tiny negative sums
    if remainder >= MODULUS {
        remainder = 0.0;
    }

    let scaled = (remainder * SCALE).floor() as u32;
    scaled.min(STORE_ID_SPACE - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn id(lat: f64, lng: f64) -> u32 {
        compute_store_id(Coordinates::new(lat, lng).unwrap())
    }

    #[test]
    fn test_positive_sum() {
        assert_eq!(id(1.5, 2.5), 40000);
    }

    #[test]
    fn test_negative_sum_wraps() {
        assert_eq!(id(-1.0, 0.5), 95000);
    }

    #[test]
    fn test_sum_past_modulus() {
        assert_eq!(id(12.0, 3.25), 52500);
        assert_eq!(id(5.0, 5.0), 0);
    }

    #[test]
    fn test_tiny_negative_sum_stays_in_range() {
        assert_eq!(id(-1e-20, 0.0), 0);
        assert!(id(-1e-15, 0.0) < STORE_ID_SPACE);
    }

    #[test]
    fn test_real_world_coordinates() {
        // -33.8688 + 151.2093 = 117.3405 -> 7.3405
        let store_id = id(-33.8688, 151.2093);
        assert!((73404..=73405).contains(&store_id));
    }

    proptest! {
        #[test]
        fn prop_id_in_range(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            prop_assert!(id(lat, lng) < STORE_ID_SPACE);
        }

        #[test]
        fn prop_id_in_range_any_finite(lat in proptest::num::f64::NORMAL, lng in proptest::num::f64::NORMAL) {
            prop_assume!((lat + lng).is_finite());
            prop_assert!(id(lat, lng) < STORE_ID_SPACE);
        }

        #[test]
        fn prop_id_is_deterministic(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            prop_assert_eq!(id(lat, lng), id(lat, lng));
        }
    }
}
