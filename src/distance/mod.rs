//! Great-circle distances and pairwise distance matrices.
//!
//! [`DistanceOracle`] is the seam between coordinates and the route
//! constructor: the constructor only ever sees a [`DistanceMatrix`], so a
//! different oracle can be swapped in without touching construction.

mod haversine;
mod matrix;
mod oracle;

pub use haversine::{great_circle_distance, HaversineOracle, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
pub use oracle::{build_matrix, DistanceOracle};

/// Rounds `value` to `places` decimal places, half away from zero.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(54.308543, 2), 54.31);
        assert_eq!(round_to(620.355, 0), 620.0);
        assert_eq!(round_to(0.0, 2), 0.0);
    }
}
