//! Closed vehicle routes.

use serde::{Deserialize, Serialize};

use crate::evaluation::RouteMetrics;

/// Index of the depot in every location ordering.
pub const DEPOT: usize = 0;

/// The finished route of one vehicle.
///
/// `stops` holds location indices in visit order. A route that served
/// anything starts and ends at [`DEPOT`]; an unused vehicle's route is just
/// `[DEPOT]` with zero load and distance.
///
/// CO2 and travel time are zero until [`Route::annotate`] is applied.
///
/// # Examples
///
/// ```
/// use fleet_route::evaluation::RouteMetrics;
/// use fleet_route::models::Route;
///
/// let route = Route::new(1, vec![0, 2, 1, 0], 450.0, 100.0)
///     .annotate(&RouteMetrics::default());
/// assert_eq!(route.customer_ids(), vec![2, 1]);
/// assert_eq!(route.co2_kg(), 40.0);
/// assert_eq!(route.estimated_minutes(), 150.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    vehicle_id: usize,
    stops: Vec<usize>,
    load: f64,
    distance: f64,
    co2_kg: f64,
    estimated_minutes: f64,
}

impl Route {
    /// Creates an un-annotated route.
    pub fn new(vehicle_id: usize, stops: Vec<usize>, load: f64, distance: f64) -> Self {
        Self {
            vehicle_id,
            stops,
            load,
            distance,
            co2_kg: 0.0,
            estimated_minutes: 0.0,
        }
    }

    /// Fills in emission and travel-time estimates from the route distance.
    pub fn annotate(mut self, metrics: &RouteMetrics) -> Self {
        self.co2_kg = metrics.co2_kg(self.distance);
        self.estimated_minutes = metrics.estimated_minutes(self.distance);
        self
    }

    /// 1-based number of the vehicle driving this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Full stop sequence, depot visits included.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Visited locations in order, depot excluded.
    pub fn customer_ids(&self) -> Vec<usize> {
        self.stops.iter().copied().filter(|&s| s != DEPOT).collect()
    }

    /// Number of non-depot stops.
    pub fn len(&self) -> usize {
        self.stops.iter().filter(|&&s| s != DEPOT).count()
    }

    /// Returns `true` if the vehicle never left the depot.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of demands served.
    pub fn load(&self) -> f64 {
        self.load
    }

    /// Total distance in kilometres, rounded to 2 decimals.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Estimated CO2 emission in kilograms.
    pub fn co2_kg(&self) -> f64 {
        self.co2_kg
    }

    /// Estimated driving time in whole minutes.
    pub fn estimated_minutes(&self) -> f64 {
        self.estimated_minutes
    }
}
