//! # fleet-route
//!
//! Capacity-constrained fleet routing from geographic coordinates alone:
//! named locations are resolved to coordinates, a haversine distance matrix
//! is built, and routes are constructed with a deterministic greedy
//! nearest-feasible-neighbor heuristic.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinate, Demands, Fleet, Route, OptimizationResult)
//! - [`registry`] — Identifier to coordinate lookup with depot fallback
//! - [`distance`] — Haversine distances, the oracle trait, and the distance matrix
//! - [`constructive`] — Greedy route construction (capacitated fleet, single tour)
//! - [`evaluation`] — CO2 and travel-time metrics, route auditing
//! - [`optimizer`] — End-to-end entry point tying the above together

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod optimizer;
pub mod registry;

pub use error::{OptimizeError, RegistryError, ValidationError};
pub use optimizer::{OptimizerConfig, RouteOptimizer};
