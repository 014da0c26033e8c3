//! Built-in city table and the JSON registry document format.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Key of the built-in depot.
pub(super) const PUNJAB_DEPOT: &str = "depot";

/// `(key, display name, latitude, longitude)` for the built-in table.
pub(super) const PUNJAB_CITIES: &[(&str, &str, f64, f64)] = &[
    ("depot", "Depot", 30.9010, 75.8573),
    ("ludhiana", "Ludhiana", 30.9010, 75.8573),
    ("jalandhar", "Jalandhar", 31.3260, 75.5762),
    ("amritsar", "Amritsar", 31.6340, 74.8723),
    ("patiala", "Patiala", 30.3398, 76.3869),
    ("bathinda", "Bathinda", 30.2110, 74.9455),
    ("mohali", "Mohali", 30.7046, 76.7179),
    ("hoshiarpur", "Hoshiarpur", 31.5330, 75.9120),
    ("firozpur", "Firozpur", 30.9257, 74.6142),
    ("moga", "Moga", 30.8158, 75.1705),
    ("kapurthala", "Kapurthala", 31.3800, 75.3800),
];

/// Registry document:
///
/// ```json
/// { "depot": "hub", "locations": { "hub": { "lat": 1.0, "lon": 2.0, "name": "Hub" } } }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RegistryDocument {
    pub depot: String,
    pub locations: BTreeMap<String, LocationEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct LocationEntry {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub name: Option<String>,
}
