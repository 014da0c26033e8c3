//! Identifier lookup with depot fallback for unknown names.

use std::collections::HashMap;

use log::warn;

use super::table::{RegistryDocument, PUNJAB_CITIES, PUNJAB_DEPOT};
use crate::error::RegistryError;
use crate::models::{normalize, Coordinate, Location};

/// How an identifier was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionKind {
    /// The identifier is in the table.
    Matched,
    /// The identifier is unknown; the depot coordinate was substituted.
    Defaulted,
}

/// Outcome of [`LocationRegistry::resolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Resolved coordinate.
    pub coordinate: Coordinate,
    /// Whether the coordinate came from the table or the depot fallback.
    pub kind: ResolutionKind,
}

impl Resolution {
    /// Returns `true` if the depot fallback was used.
    pub fn is_defaulted(&self) -> bool {
        self.kind == ResolutionKind::Defaulted
    }
}

/// Read-only table of known locations with a designated depot.
///
/// # Examples
///
/// ```
/// use fleet_route::registry::{LocationRegistry, ResolutionKind};
///
/// let registry = LocationRegistry::punjab();
/// let hit = registry.resolve("  Amritsar ");
/// assert_eq!(hit.kind, ResolutionKind::Matched);
/// assert_eq!(hit.coordinate.lat(), 31.6340);
///
/// let miss = registry.resolve("atlantis");
/// assert!(miss.is_defaulted());
/// assert_eq!(miss.coordinate, registry.depot().coordinate());
/// ```
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    locations: HashMap<String, Location>,
    depot: String,
}

impl LocationRegistry {
    /// Builds a registry from `locations`, with `depot` naming the fallback.
    ///
    /// Later entries with the same normalized key replace earlier ones.
    pub fn new<I>(depot: &str, locations: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Location>,
    {
        let mut table = HashMap::new();
        for location in locations {
            if location.key().is_empty() {
                return Err(RegistryError::EmptyIdentifier);
            }
            if !location.coordinate().is_in_range() {
                warn!(
                    "location `{}` has out-of-range coordinate {:?}",
                    location.key(),
                    location.coordinate()
                );
            }
            table.insert(location.key().to_string(), location);
        }
        let depot = normalize(depot);
        if !table.contains_key(&depot) {
            return Err(RegistryError::MissingDepot(depot));
        }
        Ok(Self {
            locations: table,
            depot,
        })
    }

    /// The built-in table of Punjab cities, with the depot at Ludhiana.
    pub fn punjab() -> Self {
        let locations = PUNJAB_CITIES
            .iter()
            .map(|&(key, name, lat, lon)| {
                (key.to_string(), Location::new(key, name, Coordinate::new(lat, lon)))
            })
            .collect();
        Self {
            locations,
            depot: PUNJAB_DEPOT.to_string(),
        }
    }

    /// Loads a registry from a JSON document.
    ///
    /// ```
    /// use fleet_route::registry::LocationRegistry;
    ///
    /// let registry = LocationRegistry::from_json(r#"{
    ///     "depot": "Hub",
    ///     "locations": {
    ///         "hub": { "lat": 52.52, "lon": 13.40, "name": "Berlin Hub" },
    ///         "potsdam": { "lat": 52.39, "lon": 13.06 }
    ///     }
    /// }"#)?;
    /// assert_eq!(registry.depot().name(), "Berlin Hub");
    /// assert_eq!(registry.get("Potsdam").map(|l| l.name()), Some("potsdam"));
    /// # Ok::<(), fleet_route::RegistryError>(())
    /// ```
    pub fn from_json(document: &str) -> Result<Self, RegistryError> {
        let document: RegistryDocument = serde_json::from_str(document)?;
        let locations = document.locations.into_iter().map(|(key, entry)| {
            let name = entry.name.unwrap_or_else(|| key.clone());
            Location::new(&key, name, Coordinate::new(entry.lat, entry.lon))
        });
        Self::new(&document.depot, locations)
    }

    /// Resolves an identifier, falling back to the depot for unknown names.
    pub fn resolve(&self, identifier: &str) -> Resolution {
        match self.get(identifier) {
            Some(location) => Resolution {
                coordinate: location.coordinate(),
                kind: ResolutionKind::Matched,
            },
            None => {
                warn!("unknown location `{identifier}`, using depot coordinate");
                Resolution {
                    coordinate: self.depot().coordinate(),
                    kind: ResolutionKind::Defaulted,
                }
            }
        }
    }

    /// Resolved coordinate without the match tag.
    pub fn coordinate(&self, identifier: &str) -> Coordinate {
        self.resolve(identifier).coordinate
    }

    /// Looks up a known location.
    pub fn get(&self, identifier: &str) -> Option<&Location> {
        self.locations.get(&normalize(identifier))
    }

    /// The depot location.
    pub fn depot(&self) -> &Location {
        &self.locations[&self.depot]
    }

    /// Number of known locations, depot included.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the registry has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::punjab()
    }
}
