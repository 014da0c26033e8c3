//! Constructive heuristics for building routes from a distance matrix.
//!
//! - [`nearest_feasible_neighbor`] — capacity-constrained greedy assignment
//!   across a fleet, O(n²) per vehicle
//! - [`nearest_neighbor_tour`] — single uncapacitated closed tour, O(n²)
//!
//! Both break distance ties by the lowest location index.

mod nearest_neighbor;
mod tour;

pub use nearest_neighbor::nearest_feasible_neighbor;
pub use tour::{nearest_neighbor_tour, Tour};
