//! Route metrics and route auditing.
//!
//! - [`RouteMetrics`] derives CO2 and travel-time estimates from distance.
//! - [`RouteEvaluator`] recomputes load and distance for finished routes and
//!   reports inconsistencies as [`crate::models::Violation`]s.

mod evaluator;
mod metrics;

pub use evaluator::RouteEvaluator;
pub use metrics::RouteMetrics;
