//! Capacity-constrained nearest-feasible-neighbor construction.
//!
//! Vehicles are filled one at a time. The active vehicle repeatedly takes the
//! closest unvisited location whose demand still fits; when nothing fits it
//! returns to the depot and the next vehicle starts. Construction is a single
//! pass with no backtracking, so it terminates after at most
//! `locations + vehicles` steps.

use log::{debug, trace, warn};

use crate::distance::{round_to, DistanceMatrix};
use crate::error::ValidationError;
use crate::models::{Assignment, Demands, Fleet, Route, Vehicle, DEPOT};

/// Where the construction pass stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Vehicle at this fleet position is taking stops.
    Building(usize),
    /// Every location has been placed.
    AllAssigned,
    /// No vehicles remain and some locations are unplaced.
    ExhaustedFleet,
}

/// Mutable per-vehicle state during construction.
#[derive(Debug)]
struct VehicleState {
    vehicle: Vehicle,
    stops: Vec<usize>,
    load: f64,
    distance: f64,
}

impl VehicleState {
    fn new(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            stops: vec![DEPOT],
            load: 0.0,
            distance: 0.0,
        }
    }

    fn position(&self) -> usize {
        *self.stops.last().unwrap_or(&DEPOT)
    }

    fn visit(&mut self, stop: usize, demand: f64, hop: f64) {
        self.stops.push(stop);
        self.load += demand;
        self.distance += hop;
    }

    /// Drives back to the depot unless the vehicle is already there.
    fn return_to_depot(&mut self, distances: &DistanceMatrix) {
        let here = self.position();
        if here != DEPOT {
            self.distance += distances.get(here, DEPOT);
            self.stops.push(DEPOT);
        }
    }

    fn finish(self) -> Route {
        Route::new(
            self.vehicle.id(),
            self.stops,
            self.load,
            round_to(self.distance, 2),
        )
    }
}

/// Assigns locations to a fleet using greedy nearest-feasible-neighbor.
///
/// Location 0 is the depot. Every vehicle in `fleet` gets a route in the
/// output, in fleet order; vehicles that were never needed keep the route
/// `[0]`. Locations left over when the fleet runs out are reported in
/// [`Assignment::unassigned`] rather than treated as an error.
///
/// # Errors
///
/// Returns [`ValidationError::MatrixSize`] if `distances` and `demands`
/// disagree on the number of locations.
///
/// # Examples
///
/// ```
/// use fleet_route::constructive::nearest_feasible_neighbor;
/// use fleet_route::distance::DistanceMatrix;
/// use fleet_route::models::{Demands, Fleet};
///
/// // Depot and three stops on a line at 1, 2, 3.
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, 2.0, 3.0,
///     1.0, 0.0, 1.0, 2.0,
///     2.0, 1.0, 0.0, 1.0,
///     3.0, 2.0, 1.0, 0.0,
/// ]).unwrap();
/// let demands = Demands::new(vec![0.0, 10.0, 10.0, 10.0]).unwrap();
/// let fleet = Fleet::uniform(2, 20.0).unwrap();
///
/// let assignment = nearest_feasible_neighbor(&dm, &demands, &fleet)?;
/// assert_eq!(assignment.routes()[0].stops(), &[0, 1, 2, 0]);
/// assert_eq!(assignment.routes()[1].stops(), &[0, 3, 0]);
/// assert!(assignment.unassigned().is_empty());
/// # Ok::<(), fleet_route::ValidationError>(())
/// ```
pub fn nearest_feasible_neighbor(
    distances: &DistanceMatrix,
    demands: &Demands,
    fleet: &Fleet,
) -> Result<Assignment, ValidationError> {
    let n = demands.len();
    if distances.size() != n {
        return Err(ValidationError::MatrixSize {
            matrix: distances.size(),
            demands: n,
        });
    }

    let mut visited = vec![false; n];
    visited[DEPOT] = true;
    let mut remaining = n - 1;
    let mut working: Vec<VehicleState> =
        fleet.vehicles().iter().copied().map(VehicleState::new).collect();

    let mut phase = if remaining == 0 {
        Phase::AllAssigned
    } else {
        Phase::Building(0)
    };

    while let Phase::Building(cursor) = phase {
        let state = &mut working[cursor];
        let here = state.position();
        let (load, capacity) = (state.load, state.vehicle.capacity());
        let candidates = (1..n).filter(|&i| !visited[i] && load + demands.get(i) <= capacity);

        phase = match distances.nearest_among(here, candidates) {
            Some((next, hop)) => {
                trace!(
                    "vehicle {} moves {here} -> {next} ({hop} km)",
                    state.vehicle.id()
                );
                state.visit(next, demands.get(next), hop);
                visited[next] = true;
                remaining -= 1;
                if remaining == 0 {
                    Phase::AllAssigned
                } else {
                    Phase::Building(cursor)
                }
            }
            None => {
                state.return_to_depot(distances);
                if cursor + 1 < working.len() {
                    Phase::Building(cursor + 1)
                } else {
                    Phase::ExhaustedFleet
                }
            }
        };
    }

    if phase == Phase::ExhaustedFleet {
        warn!(
            "fleet of {} exhausted with {remaining} location(s) unassigned",
            working.len()
        );
    }

    for state in &mut working {
        state.return_to_depot(distances);
    }

    let unassigned: Vec<usize> = (1..n).filter(|&i| !visited[i]).collect();
    let routes: Vec<Route> = working.into_iter().map(VehicleState::finish).collect();
    let assignment = Assignment::new(routes, unassigned);
    debug!(
        "constructed {} route(s) over {n} location(s), {:.2} km, {} unassigned",
        assignment.routes().iter().filter(|r| !r.is_empty()).count(),
        assignment.total_distance(),
        assignment.unassigned().len()
    );

    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> DistanceMatrix {
        DistanceMatrix::from_data(
            4,
            vec![
                0.0, 1.0, 2.0, 3.0, //
                1.0, 0.0, 1.0, 2.0, //
                2.0, 1.0, 0.0, 1.0, //
                3.0, 2.0, 1.0, 0.0,
            ],
        )
        .expect("valid")
    }

    fn demands(values: &[f64]) -> Demands {
        Demands::new(values.to_vec()).expect("valid")
    }

    #[test]
    fn test_all_on_one_route() {
        let fleet = Fleet::uniform(1, 100.0).expect("valid");
        let a = nearest_feasible_neighbor(&line(), &demands(&[0.0, 10.0, 10.0, 10.0]), &fleet)
            .expect("valid");
        assert_eq!(a.routes().len(), 1);
        assert_eq!(a.routes()[0].stops(), &[0, 1, 2, 3, 0]);
        // 0→1 + 1→2 + 2→3 + 3→0 = 1 + 1 + 1 + 3
        assert_eq!(a.routes()[0].distance(), 6.0);
        assert_eq!(a.routes()[0].load(), 30.0);
        assert!(a.unassigned().is_empty());
    }

    #[test]
    fn test_split_routes() {
        let fleet = Fleet::uniform(2, 20.0).expect("valid");
        let a = nearest_feasible_neighbor(&line(), &demands(&[0.0, 10.0, 10.0, 10.0]), &fleet)
            .expect("valid");
        assert_eq!(a.routes()[0].stops(), &[0, 1, 2, 0]);
        assert_eq!(a.routes()[0].distance(), 4.0);
        assert_eq!(a.routes()[1].stops(), &[0, 3, 0]);
        assert_eq!(a.routes()[1].distance(), 6.0);
        assert_eq!(a.num_served(), 3);
    }

    #[test]
    fn test_skips_to_farther_feasible() {
        // Vehicle holds 15: after stop 1 (10), stop 2 (10) does not fit but 3 (5) does.
        let fleet = Fleet::uniform(2, 15.0).expect("valid");
        let a = nearest_feasible_neighbor(&line(), &demands(&[0.0, 10.0, 10.0, 5.0]), &fleet)
            .expect("valid");
        assert_eq!(a.routes()[0].stops(), &[0, 1, 3, 0]);
        assert_eq!(a.routes()[0].load(), 15.0);
        assert_eq!(a.routes()[1].stops(), &[0, 2, 0]);
    }

    #[test]
    fn test_insufficient_fleet() {
        let fleet = Fleet::uniform(1, 15.0).expect("valid");
        let a = nearest_feasible_neighbor(&line(), &demands(&[0.0, 10.0, 10.0, 10.0]), &fleet)
            .expect("valid");
        assert_eq!(a.routes()[0].stops(), &[0, 1, 0]);
        assert_eq!(a.unassigned(), &[2, 3]);
    }

    #[test]
    fn test_oversized_demand_unassigned() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 4.0, 4.0, 0.0]).expect("valid");
        let fleet = Fleet::uniform(1, 100.0).expect("valid");
        let a = nearest_feasible_neighbor(&dm, &demands(&[0.0, 250.0]), &fleet).expect("valid");
        assert_eq!(a.routes()[0].stops(), &[DEPOT]);
        assert_eq!(a.routes()[0].distance(), 0.0);
        assert_eq!(a.unassigned(), &[1]);
    }

    #[test]
    fn test_depot_only() {
        let dm = DistanceMatrix::new(1);
        let fleet = Fleet::uniform(3, 10.0).expect("valid");
        let a = nearest_feasible_neighbor(&dm, &demands(&[0.0]), &fleet).expect("valid");
        assert_eq!(a.routes().len(), 3);
        for route in a.routes() {
            assert_eq!(route.stops(), &[DEPOT]);
            assert_eq!(route.distance(), 0.0);
            assert_eq!(route.load(), 0.0);
        }
    }

    #[test]
    fn test_unused_vehicles_stay_at_depot() {
        let fleet = Fleet::uniform(3, 100.0).expect("valid");
        let a = nearest_feasible_neighbor(&line(), &demands(&[0.0, 1.0, 1.0, 1.0]), &fleet)
            .expect("valid");
        assert_eq!(a.routes()[1].stops(), &[DEPOT]);
        assert_eq!(a.routes()[2].stops(), &[DEPOT]);
        assert_eq!(a.routes()[2].vehicle_id(), 3);
    }

    #[test]
    fn test_tie_breaks_on_lowest_index() {
        let dm = DistanceMatrix::from_data(
            3,
            vec![0.0, 5.0, 5.0, 5.0, 0.0, 2.0, 5.0, 2.0, 0.0],
        )
        .expect("valid");
        let fleet = Fleet::uniform(1, 10.0).expect("valid");
        let a = nearest_feasible_neighbor(&dm, &demands(&[0.0, 1.0, 1.0]), &fleet).expect("valid");
        assert_eq!(a.routes()[0].stops(), &[0, 1, 2, 0]);
    }

    #[test]
    fn test_per_vehicle_capacity() {
        let fleet = Fleet::uniform(2, 10.0)
            .and_then(|f| f.with_capacity(1, 30.0))
            .expect("valid");
        let a = nearest_feasible_neighbor(&line(), &demands(&[0.0, 10.0, 10.0, 10.0]), &fleet)
            .expect("valid");
        assert_eq!(a.routes()[0].stops(), &[0, 1, 2, 3, 0]);
        assert_eq!(a.routes()[1].stops(), &[DEPOT]);
    }

    #[test]
    fn test_zero_demand_always_fits() {
        let fleet = Fleet::uniform(1, 10.0).expect("valid");
        let a = nearest_feasible_neighbor(&line(), &demands(&[0.0, 10.0, 0.0, 0.0]), &fleet)
            .expect("valid");
        assert_eq!(a.routes()[0].stops(), &[0, 1, 2, 3, 0]);
        assert_eq!(a.routes()[0].load(), 10.0);
    }

    #[test]
    fn test_matrix_size_mismatch() {
        let fleet = Fleet::uniform(1, 10.0).expect("valid");
        let err = nearest_feasible_neighbor(&line(), &demands(&[0.0, 1.0]), &fleet).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MatrixSize {
                matrix: 4,
                demands: 2
            }
        );
    }

    #[test]
    fn test_deterministic() {
        let fleet = Fleet::uniform(2, 20.0).expect("valid");
        let d = demands(&[0.0, 10.0, 10.0, 10.0]);
        let first = nearest_feasible_neighbor(&line(), &d, &fleet).expect("valid");
        let second = nearest_feasible_neighbor(&line(), &d, &fleet).expect("valid");
        assert_eq!(first, second);
    }
}
