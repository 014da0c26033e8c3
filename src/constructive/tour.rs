//! Uncapacitated nearest-neighbor tour.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;

/// A closed tour through every location in a matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// Visit order, starting and ending at the start location.
    pub stops: Vec<usize>,
    /// Sum of hop distances, unrounded.
    pub distance: f64,
}

/// Builds a single closed tour from `start` by always moving to the nearest
/// unvisited location, ties going to the lowest index.
///
/// A one-location matrix yields `[start]` with zero distance. Returns `None`
/// if `start` is outside the matrix.
///
/// # Examples
///
/// ```
/// use fleet_route::constructive::nearest_neighbor_tour;
/// use fleet_route::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 9.0, 1.0,
///     9.0, 0.0, 2.0,
///     1.0, 2.0, 0.0,
/// ]).unwrap();
/// let tour = nearest_neighbor_tour(&dm, 0).unwrap();
/// assert_eq!(tour.stops, vec![0, 2, 1, 0]);
/// assert_eq!(tour.distance, 12.0);
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix, start: usize) -> Option<Tour> {
    let n = distances.size();
    if start >= n {
        return None;
    }

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut stops = vec![start];
    let mut distance = 0.0;
    let mut current = start;

    loop {
        let candidates = (0..n).filter(|&i| !visited[i]);
        let Some((next, hop)) = distances.nearest_among(current, candidates) else {
            break;
        };
        visited[next] = true;
        stops.push(next);
        distance += hop;
        current = next;
    }

    if current != start {
        distance += distances.get(current, start);
        stops.push(start);
    }

    Some(Tour { stops, distance })
}
