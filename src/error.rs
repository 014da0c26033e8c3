//! Error types for request validation, registry loading, and optimization.

use thiserror::Error;

/// Malformed optimization input.
///
/// Raised before any distance or route computation begins; a request that
/// fails validation is never partially executed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// No locations were supplied, so there is no depot.
    #[error("at least one location (the depot) is required")]
    EmptyLocations,
    /// Location and demand lists differ in length.
    #[error("{locations} locations but {demands} demands")]
    LengthMismatch {
        /// Number of location identifiers.
        locations: usize,
        /// Number of demand entries.
        demands: usize,
    },
    /// The distance matrix does not cover every demand entry.
    #[error("distance matrix is {matrix}x{matrix} but {demands} demands were given")]
    MatrixSize {
        /// Side length of the matrix.
        matrix: usize,
        /// Number of demand entries.
        demands: usize,
    },
    /// The depot (index 0) carries a demand.
    #[error("depot demand must be 0, got {0}")]
    NonZeroDepotDemand(f64),
    /// A demand is negative or not finite.
    #[error("demand at index {index} must be finite and non-negative, got {demand}")]
    InvalidDemand {
        /// Location index.
        index: usize,
        /// Offending value.
        demand: f64,
    },
    /// The fleet has no vehicles.
    #[error("at least one vehicle is required")]
    NoVehicles,
    /// A vehicle capacity is zero, negative, or not finite.
    #[error("vehicle {vehicle_id} capacity must be positive, got {capacity}")]
    InvalidCapacity {
        /// 1-based vehicle number.
        vehicle_id: usize,
        /// Offending capacity.
        capacity: f64,
    },
    /// The average speed for travel-time estimates is zero, negative, or
    /// not finite.
    #[error("average speed must be positive and finite, got {0} km/h")]
    InvalidSpeed(f64),
    /// The CO2 emission factor is negative or not finite.
    #[error("emission factor must be finite and non-negative, got {0} kg/km")]
    InvalidEmissionFactor(f64),
    /// A capacity override names a vehicle outside the fleet.
    #[error("vehicle {0} is not part of the fleet")]
    UnknownVehicle(usize),
}

/// Errors from building a [`crate::registry::LocationRegistry`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry document is not valid JSON or has the wrong shape.
    #[error("invalid registry document: {0}")]
    Parse(#[from] serde_json::Error),
    /// A location key is empty after trimming.
    #[error("location identifiers must not be empty")]
    EmptyIdentifier,
    /// The designated depot key is not in the table.
    #[error("depot `{0}` is not a known location")]
    MissingDepot(String),
}

/// Errors from [`crate::optimizer::RouteOptimizer`] and
/// [`crate::models::OptimizationResult::into_complete`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// The request was malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The fleet could not cover every location.
    #[error("{} location(s) could not be assigned: {unassigned:?}", .unassigned.len())]
    Infeasible {
        /// Location indices left off every route, ascending.
        unassigned: Vec<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::LengthMismatch {
            locations: 3,
            demands: 2,
        };
        assert_eq!(err.to_string(), "3 locations but 2 demands");
        assert_eq!(
            ValidationError::NonZeroDepotDemand(5.0).to_string(),
            "depot demand must be 0, got 5"
        );
    }

    #[test]
    fn test_infeasible_message() {
        let err = OptimizeError::Infeasible {
            unassigned: vec![2, 4],
        };
        assert_eq!(
            err.to_string(),
            "2 location(s) could not be assigned: [2, 4]"
        );
    }

    #[test]
    fn test_validation_converts() {
        let err: OptimizeError = ValidationError::NoVehicles.into();
        assert_eq!(err, OptimizeError::Validation(ValidationError::NoVehicles));
        assert_eq!(err.to_string(), "at least one vehicle is required");
    }

    #[test]
    fn test_registry_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RegistryError::from(json_err);
        assert!(err.to_string().starts_with("invalid registry document"));
    }
}
