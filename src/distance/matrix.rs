//! Dense distance matrix.

use serde::{Deserialize, Serialize};

/// A dense n×n distance matrix stored in row-major order.
///
/// Indexed by position in the caller's location ordering, not by identity.
///
/// # Examples
///
/// ```
/// use fleet_route::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 5.0, 8.0,
///     5.0, 0.0, 4.0,
///     8.0, 4.0, 0.0,
/// ]).unwrap();
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.nearest_among(2, [0, 1]), Some((1, 4.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the candidate closest to `from` with its distance.
    ///
    /// Candidates are scanned in the order given; on equal distance the
    /// earlier candidate wins. Returns `None` if there are no candidates.
    pub fn nearest_among<I>(&self, from: usize, candidates: I) -> Option<(usize, f64)>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut best: Option<(usize, f64)> = None;
        for to in candidates {
            let d = self.get(from, to);
            if d.is_nan() {
                continue;
            }
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((to, d)),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::from_data(3, vec![0.0, 5.0, 8.0, 5.0, 0.0, 4.0, 8.0, 4.0, 0.0])
            .expect("valid")
    }

    #[test]
    fn test_new_is_zero() {
        let dm = DistanceMatrix::new(2);
        assert_eq!(dm.size(), 2);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_symmetric() {
        assert!(sample().is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_nearest_among_skips_nan() {
        let mut dm = sample();
        dm.set(0, 2, f64::NAN);
        assert_eq!(dm.nearest_among(0, [1, 2]), Some((1, 5.0)));

        let mut dm = sample();
        dm.set(0, 1, f64::NAN);
        assert_eq!(dm.nearest_among(0, [1, 2]), Some((2, 8.0)));
        assert_eq!(dm.nearest_among(0, [2, 1]), Some((2, 8.0)));
        assert_eq!(dm.nearest_among(0, [1]), None);
    }

    #[test]
    fn test_nearest_among() {
        let dm = sample();
        assert_eq!(dm.nearest_among(0, [1, 2]), Some((1, 5.0)));
        assert_eq!(dm.nearest_among(0, [2]), Some((2, 8.0)));
        assert_eq!(dm.nearest_among(0, []), None);
    }

    #[test]
    fn test_nearest_tie_takes_first() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, 7.0, 7.0, 7.0, 0.0, 1.0, 7.0, 1.0, 0.0])
            .expect("valid");
        assert_eq!(dm.nearest_among(0, [1, 2]), Some((1, 7.0)));
        assert_eq!(dm.nearest_among(0, [2, 1]), Some((2, 7.0)));
    }
}
