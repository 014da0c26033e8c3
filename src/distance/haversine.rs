//! Haversine great-circle distance.

use super::DistanceOracle;
use crate::models::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometres.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
/// The result is not rounded.
///
/// # Examples
///
/// ```
/// use fleet_route::distance::great_circle_distance;
/// use fleet_route::models::Coordinate;
///
/// let ludhiana = Coordinate::new(30.9010, 75.8573);
/// let jalandhar = Coordinate::new(31.3260, 75.5762);
/// let d = great_circle_distance(ludhiana, jalandhar);
/// assert!((d - 54.3085).abs() < 1e-3);
/// assert_eq!(great_circle_distance(ludhiana, ludhiana), 0.0);
/// ```
pub fn great_circle_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let delta_lat = (b.lat() - a.lat()).to_radians();
    let delta_lon = (b.lon() - a.lon()).to_radians();

    let h = ((delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance oracle backed by [`great_circle_distance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineOracle;

impl DistanceOracle for HaversineOracle {
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        great_circle_distance(from, to)
    }
}
