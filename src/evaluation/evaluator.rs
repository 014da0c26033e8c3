//! Route auditor that recomputes load and distance and checks coverage.

use crate::distance::{round_to, DistanceMatrix};
use crate::models::{Demands, Fleet, Route, Violation, ViolationType, DEPOT};

const LOAD_TOLERANCE: f64 = 1e-9;
const DISTANCE_TOLERANCE: f64 = 1e-6;

/// Checks finished routes against the matrix and demands they were built
/// from: depot framing, capacity, recorded load and distance, and that each
/// location is covered exactly once.
///
/// # Examples
///
/// ```
/// use fleet_route::constructive::nearest_feasible_neighbor;
/// use fleet_route::distance::DistanceMatrix;
/// use fleet_route::evaluation::RouteEvaluator;
/// use fleet_route::models::{Demands, Fleet};
///
/// let dm = DistanceMatrix::from_data(3, vec![0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0]).unwrap();
/// let demands = Demands::new(vec![0.0, 5.0, 5.0]).unwrap();
/// let fleet = Fleet::uniform(1, 10.0).unwrap();
///
/// let assignment = nearest_feasible_neighbor(&dm, &demands, &fleet).unwrap();
/// let evaluator = RouteEvaluator::new(&dm, &demands);
/// assert!(evaluator.audit(assignment.routes(), &fleet, assignment.unassigned()).is_empty());
/// ```
pub struct RouteEvaluator<'a> {
    distances: &'a DistanceMatrix,
    demands: &'a Demands,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given problem data.
    pub fn new(distances: &'a DistanceMatrix, demands: &'a Demands) -> Self {
        Self { distances, demands }
    }

    /// Number of location indices known to both the matrix and the demands.
    fn known_locations(&self) -> usize {
        self.distances.size().min(self.demands.len())
    }

    /// Load served along a stop sequence, depot excluded.
    ///
    /// Every stop must be below [`Self::known_locations`].
    fn load_of(&self, stops: &[usize]) -> f64 {
        stops
            .iter()
            .filter(|&&s| s != DEPOT)
            .map(|&s| self.demands.get(s))
            .sum()
    }

    /// Sum of hop distances along a stop sequence, rounded to 2 decimals.
    ///
    /// Every stop must be below [`Self::known_locations`].
    fn distance_of(&self, stops: &[usize]) -> f64 {
        let total: f64 = stops
            .windows(2)
            .map(|hop| self.distances.get(hop[0], hop[1]))
            .sum();
        round_to(total, 2)
    }

    /// Checks a single route driven by a vehicle with `capacity`.
    ///
    /// Stops outside the problem are reported as
    /// [`ViolationType::UnknownLocation`]; load and distance are only
    /// recomputed when every stop is known.
    pub fn evaluate_route(&self, route_index: usize, route: &Route, capacity: f64) -> Vec<Violation> {
        let mut violations = Vec::new();
        let stops = route.stops();

        if stops.first() != Some(&DEPOT) || stops.last() != Some(&DEPOT) {
            violations.push(Violation::new(ViolationType::NotFramed { route_index }));
        }
        if route.load() > capacity + LOAD_TOLERANCE {
            violations.push(Violation::new(ViolationType::CapacityExceeded {
                route_index,
                load: route.load(),
                capacity,
            }));
        }

        let known = self.known_locations();
        let unknown: Vec<Violation> = stops
            .iter()
            .filter(|&&s| s >= known)
            .map(|&location| {
                Violation::new(ViolationType::UnknownLocation {
                    route_index: Some(route_index),
                    location,
                })
            })
            .collect();
        if !unknown.is_empty() {
            violations.extend(unknown);
            return violations;
        }

        let load = self.load_of(stops);
        if (load - route.load()).abs() > LOAD_TOLERANCE {
            violations.push(Violation::new(ViolationType::LoadMismatch {
                route_index,
                recorded: route.load(),
                computed: load,
            }));
        }

        let distance = self.distance_of(stops);
        if (distance - route.distance()).abs() > DISTANCE_TOLERANCE {
            violations.push(Violation::new(ViolationType::DistanceMismatch {
                route_index,
                recorded: route.distance(),
                computed: distance,
            }));
        }

        violations
    }

    /// Checks every route plus coverage of all non-depot locations.
    ///
    /// Routes are paired with fleet vehicles in order. Unknown indices in
    /// routes are reported by [`Self::evaluate_route`]; unknown entries in
    /// `unassigned` are reported here.
    pub fn audit(&self, routes: &[Route], fleet: &Fleet, unassigned: &[usize]) -> Vec<Violation> {
        let mut violations = Vec::new();
        for (idx, (route, vehicle)) in routes.iter().zip(fleet.vehicles()).enumerate() {
            violations.extend(self.evaluate_route(idx, route, vehicle.capacity()));
        }

        let mut seen = vec![0usize; self.known_locations()];
        let visits = routes
            .iter()
            .flat_map(|r| r.stops().iter().copied())
            .filter(|&s| s != DEPOT);
        for location in visits {
            if let Some(count) = seen.get_mut(location) {
                *count += 1;
            }
        }
        for &location in unassigned {
            match seen.get_mut(location) {
                Some(count) => *count += 1,
                None => violations.push(Violation::new(ViolationType::UnknownLocation {
                    route_index: None,
                    location,
                })),
            }
        }
        for (location, &count) in seen.iter().enumerate().skip(1) {
            match count {
                0 => violations.push(Violation::new(ViolationType::Uncovered { location })),
                1 => {}
                _ => violations.push(Violation::new(ViolationType::DuplicateVisit { location })),
            }
        }

        violations
    }
}
