//! Distance oracle trait and matrix construction.

use super::{round_to, DistanceMatrix};
use crate::models::Coordinate;
use crate::registry::LocationRegistry;

/// Pairwise distance source for coordinates.
///
/// Implementers supply [`DistanceOracle::distance`]; the provided
/// [`DistanceOracle::matrix_for`] fills an `n×n` matrix with exact zeros on
/// the diagonal and off-diagonal distances rounded to 2 decimals.
///
/// # Examples
///
/// ```
/// use fleet_route::distance::DistanceOracle;
/// use fleet_route::models::Coordinate;
///
/// struct Manhattan;
///
/// impl DistanceOracle for Manhattan {
///     fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
///         (a.lat() - b.lat()).abs() + (a.lon() - b.lon()).abs()
///     }
/// }
///
/// let m = Manhattan.matrix_for(&[Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 2.0)]);
/// assert_eq!(m.get(0, 1), 3.0);
/// assert_eq!(m.get(1, 1), 0.0);
/// ```
pub trait DistanceOracle: Send + Sync {
    /// Distance from `from` to `to` in kilometres.
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64;

    /// Builds the distance matrix for `coordinates` in the given order.
    fn matrix_for(&self, coordinates: &[Coordinate]) -> DistanceMatrix {
        let n = coordinates.len();
        let mut matrix = DistanceMatrix::new(n);
        for (i, &from) in coordinates.iter().enumerate() {
            for (j, &to) in coordinates.iter().enumerate() {
                if i != j {
                    matrix.set(i, j, round_to(self.distance(from, to), 2));
                }
            }
        }
        matrix
    }
}

/// Resolves `identifiers` through `registry` and builds their matrix.
///
/// Unknown identifiers resolve to the depot coordinate, so this never
/// fails.
///
/// # Examples
///
/// ```
/// use fleet_route::distance::{build_matrix, HaversineOracle};
/// use fleet_route::registry::LocationRegistry;
///
/// let registry = LocationRegistry::punjab();
/// let m = build_matrix(&HaversineOracle, &registry, &["depot", "jalandhar", "amritsar"]);
/// assert_eq!(m.size(), 3);
/// assert_eq!(m.get(0, 1), 54.31);
/// ```
pub fn build_matrix<O, S>(oracle: &O, registry: &LocationRegistry, identifiers: &[S]) -> DistanceMatrix
where
    O: DistanceOracle + ?Sized,
    S: AsRef<str>,
{
    let coordinates: Vec<Coordinate> = identifiers
        .iter()
        .map(|id| registry.coordinate(id.as_ref()))
        .collect();
    oracle.matrix_for(&coordinates)
}
