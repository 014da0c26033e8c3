//! End-to-end optimization: resolve, measure, construct, annotate.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constructive::nearest_feasible_neighbor;
use crate::distance::{DistanceOracle, HaversineOracle};
use crate::error::ValidationError;
use crate::evaluation::RouteMetrics;
use crate::models::{Coordinate, Demands, Fleet, OptimizationResult, Route};
use crate::registry::LocationRegistry;

/// Configuration for [`RouteOptimizer`].
///
/// Deserializes from partial documents; missing fields keep their defaults.
///
/// ```
/// use fleet_route::optimizer::OptimizerConfig;
///
/// let config: OptimizerConfig =
///     serde_json::from_str(r#"{ "metrics": { "emission_factor_kg_per_km": 0.3 } }"#).unwrap();
/// assert_eq!(config.metrics.emission_factor_kg_per_km(), 0.3);
/// assert_eq!(config.metrics.average_speed_kmh(), 40.0);
///
/// let bad = r#"{ "metrics": { "average_speed_kmh": 0.0 } }"#;
/// assert!(serde_json::from_str::<OptimizerConfig>(bad).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Emission and travel-time model applied to finished routes.
    pub metrics: RouteMetrics,
}

/// Routes a fleet over named locations.
///
/// Holds a shared registry, a distance oracle, and configuration. All
/// per-request state is created inside [`RouteOptimizer::optimize`], so one
/// optimizer can serve concurrent requests by shared reference.
///
/// # Examples
///
/// ```
/// use fleet_route::optimizer::RouteOptimizer;
/// use fleet_route::registry::LocationRegistry;
///
/// let registry = LocationRegistry::punjab();
/// let optimizer = RouteOptimizer::new(&registry);
/// let result = optimizer.optimize(
///     &["depot", "jalandhar", "amritsar", "patiala"],
///     &[0.0, 250.0, 300.0, 200.0],
///     3,
///     1000.0,
/// )?;
/// assert_eq!(result.routes()[0].stops(), &[0, 1, 2, 3, 0]);
/// assert_eq!(result.total_distance(), 413.57);
/// assert!(result.is_complete());
/// # Ok::<(), fleet_route::ValidationError>(())
/// ```
pub struct RouteOptimizer<'a, O = HaversineOracle> {
    registry: &'a LocationRegistry,
    oracle: O,
    config: OptimizerConfig,
}

impl<'a> RouteOptimizer<'a> {
    /// Creates an optimizer using haversine distances and default config.
    pub fn new(registry: &'a LocationRegistry) -> Self {
        Self::with_oracle(registry, HaversineOracle, OptimizerConfig::default())
    }
}

impl<'a, O: DistanceOracle> RouteOptimizer<'a, O> {
    /// Creates an optimizer with an explicit oracle and configuration.
    pub fn with_oracle(registry: &'a LocationRegistry, oracle: O, config: OptimizerConfig) -> Self {
        Self {
            registry,
            oracle,
            config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Routes `num_vehicles` vehicles of equal `capacity` over `locations`.
    ///
    /// `locations[0]` is the depot and `demands[i]` is the quantity for
    /// `locations[i]`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for empty or mismatched inputs, a
    /// non-zero or invalid demand, zero vehicles, or a non-positive capacity.
    /// Insufficient fleet capacity is not an error; see
    /// [`OptimizationResult::unassigned`].
    pub fn optimize<S: AsRef<str>>(
        &self,
        locations: &[S],
        demands: &[f64],
        num_vehicles: usize,
        capacity: f64,
    ) -> Result<OptimizationResult, ValidationError> {
        let demands = validate_request(locations, demands)?;
        let fleet = Fleet::uniform(num_vehicles, capacity)?;
        self.run(locations, &demands, &fleet)
    }

    /// Like [`RouteOptimizer::optimize`] with an explicit fleet, allowing
    /// per-vehicle capacities.
    pub fn optimize_with_fleet<S: AsRef<str>>(
        &self,
        locations: &[S],
        demands: &[f64],
        fleet: &Fleet,
    ) -> Result<OptimizationResult, ValidationError> {
        let demands = validate_request(locations, demands)?;
        self.run(locations, &demands, fleet)
    }

    fn run<S: AsRef<str>>(
        &self,
        locations: &[S],
        demands: &Demands,
        fleet: &Fleet,
    ) -> Result<OptimizationResult, ValidationError> {
        let mut coordinates: Vec<Coordinate> = Vec::with_capacity(locations.len());
        let mut defaulted = Vec::new();
        for (index, id) in locations.iter().enumerate() {
            let resolution = self.registry.resolve(id.as_ref());
            if resolution.is_defaulted() {
                defaulted.push(index);
            }
            coordinates.push(resolution.coordinate);
        }

        let matrix = self.oracle.matrix_for(&coordinates);
        debug!(
            "built {n}x{n} distance matrix, {} identifier(s) defaulted to depot",
            defaulted.len(),
            n = matrix.size()
        );

        let (routes, unassigned) = nearest_feasible_neighbor(&matrix, demands, fleet)?.into_parts();
        let routes: Vec<Route> = routes
            .into_iter()
            .map(|route| route.annotate(&self.config.metrics))
            .collect();

        let names = locations.iter().map(|id| id.as_ref().to_string()).collect();
        Ok(OptimizationResult::new(names, routes, unassigned, defaulted, matrix))
    }
}

fn validate_request<S: AsRef<str>>(
    locations: &[S],
    demands: &[f64],
) -> Result<Demands, ValidationError> {
    if locations.is_empty() {
        return Err(ValidationError::EmptyLocations);
    }
    if locations.len() != demands.len() {
        return Err(ValidationError::LengthMismatch {
            locations: locations.len(),
            demands: demands.len(),
        });
    }
    Demands::try_from(demands)
}
