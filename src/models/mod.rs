//! Domain model types for fleet routing.
//!
//! Provides the core abstractions: geographic coordinates and named
//! locations, validated demand vectors, a fleet of capacity-limited vehicles,
//! closed routes, and the result of one optimization request.

mod demand;
mod location;
mod route;
mod solution;
mod vehicle;

pub use demand::Demands;
pub use location::{Coordinate, Location};
pub(crate) use location::normalize;
pub use route::{Route, DEPOT};
pub use solution::{Assignment, OptimizationResult, Violation, ViolationType};
pub use vehicle::{Fleet, Vehicle};
