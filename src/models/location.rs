//! Coordinate and location types.

use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in decimal degrees.
///
/// Values are not range-checked on construction; use
/// [`Coordinate::is_in_range`] to detect latitudes outside `[-90, 90]` or
/// longitudes outside `[-180, 180]`.
///
/// # Examples
///
/// ```
/// use fleet_route::models::Coordinate;
///
/// let ludhiana = Coordinate::new(30.9010, 75.8573);
/// assert_eq!(ludhiana.lat(), 30.9010);
/// assert!(ludhiana.is_in_range());
/// assert!(!Coordinate::new(91.0, 0.0).is_in_range());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns `true` if both components lie within their valid ranges.
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// A named place with a resolved coordinate.
///
/// The key is stored normalized (trimmed, lowercase) so lookups are
/// case-insensitive; the display name keeps its original casing.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    key: String,
    name: String,
    coordinate: Coordinate,
}

impl Location {
    /// Creates a location, normalizing `key`.
    pub fn new(key: &str, name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            key: normalize(key),
            name: name.into(),
            coordinate,
        }
    }

    /// Normalized lookup key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved coordinate.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

/// Lowercases and trims an identifier for lookup.
pub(crate) fn normalize(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}
