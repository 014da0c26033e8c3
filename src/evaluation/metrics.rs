//! Distance-derived route estimates.

use serde::{Deserialize, Serialize};

use crate::distance::round_to;
use crate::error::ValidationError;

/// Linear emission and travel-time model.
///
/// Both factors are checked on construction and on deserialization: the
/// emission factor must be finite and non-negative, the speed finite and
/// positive.
///
/// # Examples
///
/// ```
/// use fleet_route::evaluation::RouteMetrics;
///
/// let metrics = RouteMetrics::default();
/// assert_eq!(metrics.co2_kg(413.57), 165.43);
/// assert_eq!(metrics.estimated_minutes(413.57), 620.0);
/// assert!(RouteMetrics::new(0.4, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MetricsDocument")]
pub struct RouteMetrics {
    emission_factor_kg_per_km: f64,
    average_speed_kmh: f64,
}

/// Unchecked form read from config; missing fields take the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct MetricsDocument {
    emission_factor_kg_per_km: f64,
    average_speed_kmh: f64,
}

impl Default for MetricsDocument {
    fn default() -> Self {
        let metrics = RouteMetrics::default();
        Self {
            emission_factor_kg_per_km: metrics.emission_factor_kg_per_km,
            average_speed_kmh: metrics.average_speed_kmh,
        }
    }
}

impl TryFrom<MetricsDocument> for RouteMetrics {
    type Error = ValidationError;

    fn try_from(doc: MetricsDocument) -> Result<Self, Self::Error> {
        Self::new(doc.emission_factor_kg_per_km, doc.average_speed_kmh)
    }
}

impl Default for RouteMetrics {
    fn default() -> Self {
        Self {
            emission_factor_kg_per_km: 0.4,
            average_speed_kmh: 40.0,
        }
    }
}

impl RouteMetrics {
    /// Creates a metrics model with explicit factors.
    pub fn new(emission_factor_kg_per_km: f64, average_speed_kmh: f64) -> Result<Self, ValidationError> {
        if !emission_factor_kg_per_km.is_finite() || emission_factor_kg_per_km < 0.0 {
            return Err(ValidationError::InvalidEmissionFactor(emission_factor_kg_per_km));
        }
        if !average_speed_kmh.is_finite() || average_speed_kmh <= 0.0 {
            return Err(ValidationError::InvalidSpeed(average_speed_kmh));
        }
        Ok(Self {
            emission_factor_kg_per_km,
            average_speed_kmh,
        })
    }

    /// Kilograms of CO2 emitted per kilometre driven.
    pub fn emission_factor_kg_per_km(&self) -> f64 {
        self.emission_factor_kg_per_km
    }

    /// Assumed average speed in km/h.
    pub fn average_speed_kmh(&self) -> f64 {
        self.average_speed_kmh
    }

    /// CO2 estimate in kilograms for `distance_km`, rounded to 2 decimals.
    pub fn co2_kg(&self, distance_km: f64) -> f64 {
        debug_assert!(distance_km >= 0.0, "negative distance {distance_km}");
        round_to(distance_km * self.emission_factor_kg_per_km, 2)
    }

    /// Driving time in whole minutes for `distance_km`.
    pub fn estimated_minutes(&self, distance_km: f64) -> f64 {
        debug_assert!(distance_km >= 0.0, "negative distance {distance_km}");
        round_to(distance_km / self.average_speed_kmh * 60.0, 0)
    }
}
