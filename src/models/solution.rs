//! Construction output, optimization results, and audit violations.

use serde::{Deserialize, Serialize};

use super::{Route, DEPOT};
use crate::distance::{round_to, DistanceMatrix};
use crate::error::OptimizeError;

/// A kind of inconsistency found when auditing constructed routes.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Route does not start and end at the depot.
    NotFramed {
        /// Route index.
        route_index: usize,
    },
    /// Load exceeds the vehicle capacity.
    CapacityExceeded {
        /// Route index.
        route_index: usize,
        /// Recorded load.
        load: f64,
        /// Vehicle capacity.
        capacity: f64,
    },
    /// Recorded load differs from the sum of stop demands.
    LoadMismatch {
        /// Route index.
        route_index: usize,
        /// Load stored on the route.
        recorded: f64,
        /// Load recomputed from demands.
        computed: f64,
    },
    /// Recorded distance differs from the sum of hop distances.
    DistanceMismatch {
        /// Route index.
        route_index: usize,
        /// Distance stored on the route.
        recorded: f64,
        /// Distance recomputed from the matrix.
        computed: f64,
    },
    /// A location is on no route and not reported unassigned.
    Uncovered {
        /// Location index.
        location: usize,
    },
    /// A location is visited more than once, or both visited and unassigned.
    DuplicateVisit {
        /// Location index.
        location: usize,
    },
    /// A stop or unassigned entry names an index outside the problem.
    UnknownLocation {
        /// Route holding the stop, or `None` for an unassigned entry.
        route_index: Option<usize>,
        /// Offending index.
        location: usize,
    },
}

/// A constraint violation in a set of routes.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Output of one construction pass: one route per vehicle plus any
/// locations that no vehicle could take.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    routes: Vec<Route>,
    unassigned: Vec<usize>,
}

impl Assignment {
    /// Creates an assignment from finished routes and leftover indices.
    pub fn new(routes: Vec<Route>, unassigned: Vec<usize>) -> Self {
        Self { routes, unassigned }
    }

    /// Routes in vehicle order, one per vehicle.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Location indices left off every route, ascending.
    pub fn unassigned(&self) -> &[usize] {
        &self.unassigned
    }

    /// Number of locations served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Sum of route distances.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(Route::distance).sum()
    }

    /// Splits into routes and unassigned indices.
    pub fn into_parts(self) -> (Vec<Route>, Vec<usize>) {
        (self.routes, self.unassigned)
    }
}

/// Everything produced for one optimization request.
///
/// Holds annotated routes, aggregate totals, any unassigned locations, and
/// the distance matrix the routes were built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    locations: Vec<String>,
    routes: Vec<Route>,
    unassigned: Vec<usize>,
    defaulted: Vec<usize>,
    total_distance: f64,
    total_co2_kg: f64,
    matrix: DistanceMatrix,
}

impl OptimizationResult {
    /// Assembles a result and computes its totals.
    pub(crate) fn new(
        locations: Vec<String>,
        routes: Vec<Route>,
        unassigned: Vec<usize>,
        defaulted: Vec<usize>,
        matrix: DistanceMatrix,
    ) -> Self {
        let total_distance = round_to(routes.iter().map(Route::distance).sum(), 2);
        let total_co2_kg = round_to(routes.iter().map(Route::co2_kg).sum(), 2);
        Self {
            locations,
            routes,
            unassigned,
            defaulted,
            total_distance,
            total_co2_kg,
            matrix,
        }
    }

    /// Location identifiers as supplied by the caller.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Routes in vehicle order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Location indices no vehicle could take, ascending.
    pub fn unassigned(&self) -> &[usize] {
        &self.unassigned
    }

    /// Location indices whose identifiers were unknown and resolved to the
    /// depot coordinate.
    pub fn defaulted(&self) -> &[usize] {
        &self.defaulted
    }

    /// Total distance over all routes in kilometres.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Total estimated CO2 in kilograms.
    pub fn total_co2_kg(&self) -> f64 {
        self.total_co2_kg
    }

    /// Distance matrix used to build the routes.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Number of locations served.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Returns `true` if every non-depot location is on a route.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Converts a partial result into [`OptimizeError::Infeasible`].
    pub fn into_complete(self) -> Result<Self, OptimizeError> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(OptimizeError::Infeasible {
                unassigned: self.unassigned,
            })
        }
    }

    /// Stop identifiers for route `route_index`, with the depot shown as
    /// `"Depot"`.
    ///
    /// Returns `None` if the route index is out of range or the route
    /// holds a stop with no matching identifier.
    pub fn stop_labels(&self, route_index: usize) -> Option<Vec<&str>> {
        self.routes
            .get(route_index)?
            .stops()
            .iter()
            .map(|&stop| match stop {
                DEPOT => Some("Depot"),
                i => self.locations.get(i).map(String::as_str),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(unassigned: Vec<usize>) -> OptimizationResult {
        let matrix = DistanceMatrix::from_data(3, vec![0.0, 2.0, 3.0, 2.0, 0.0, 4.0, 3.0, 4.0, 0.0])
            .expect("valid");
        let routes = vec![
            Route::new(1, vec![0, 1, 0], 5.0, 4.004),
            Route::new(2, vec![0], 0.0, 0.0),
        ];
        OptimizationResult::new(
            vec!["depot".into(), "Moga".into(), "Bathinda".into()],
            routes,
            unassigned,
            vec![],
            matrix,
        )
    }

    #[test]
    fn test_assignment_counts() {
        let a = Assignment::new(
            vec![
                Route::new(1, vec![0, 1, 2, 0], 30.0, 50.0),
                Route::new(2, vec![0, 3, 0], 10.0, 80.0),
            ],
            vec![4],
        );
        assert_eq!(a.num_served(), 3);
        assert_eq!(a.unassigned(), &[4]);
        assert!((a.total_distance() - 130.0).abs() < 1e-10);
        let (routes, unassigned) = a.into_parts();
        assert_eq!(routes.len(), 2);
        assert_eq!(unassigned, vec![4]);
    }

    #[test]
    fn test_result_totals_rounded() {
        let result = sample_result(vec![2]);
        assert_eq!(result.total_distance(), 4.0);
        assert_eq!(result.num_served(), 1);
        assert!(!result.is_complete());
    }

    #[test]
    fn test_stop_labels() {
        let result = sample_result(vec![]);
        assert_eq!(result.stop_labels(0), Some(vec!["Depot", "Moga", "Depot"]));
        assert_eq!(result.stop_labels(1), Some(vec!["Depot"]));
        assert_eq!(result.stop_labels(2), None);
    }

    #[test]
    fn test_stop_labels_unknown_stop() {
        let mut json = serde_json::to_value(sample_result(vec![])).expect("serializable");
        json["routes"][0]["stops"] = serde_json::json!([0, 7, 0]);
        let result: OptimizationResult = serde_json::from_value(json).expect("deserializable");
        assert_eq!(result.stop_labels(0), None);
        assert_eq!(result.stop_labels(1), Some(vec!["Depot"]));
    }

    #[test]
    fn test_into_complete() {
        assert!(sample_result(vec![]).into_complete().is_ok());
        assert_eq!(
            sample_result(vec![2]).into_complete(),
            Err(OptimizeError::Infeasible {
                unassigned: vec![2]
            })
        );
    }

    #[test]
    fn test_violation_kind() {
        let v = Violation::new(ViolationType::CapacityExceeded {
            route_index: 0,
            load: 250.0,
            capacity: 200.0,
        });
        assert!(matches!(
            v.kind,
            ViolationType::CapacityExceeded { route_index: 0, .. }
        ));
    }
}
