//! Validated per-location demand.

use crate::error::ValidationError;

/// Demand quantities indexed by location position, depot first.
///
/// Construction enforces that the list is non-empty, that the depot
/// (index 0) has zero demand, and that every other entry is finite and
/// non-negative.
///
/// # Examples
///
/// ```
/// use fleet_route::models::Demands;
///
/// let demands = Demands::new(vec![0.0, 250.0, 300.0, 200.0]).unwrap();
/// assert_eq!(demands.len(), 4);
/// assert_eq!(demands.total(), 750.0);
/// assert!(Demands::new(vec![10.0, 5.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Demands(Vec<f64>);

impl Demands {
    /// Validates and wraps a demand vector.
    pub fn new(demands: Vec<f64>) -> Result<Self, ValidationError> {
        let Some(&depot) = demands.first() else {
            return Err(ValidationError::EmptyLocations);
        };
        if depot != 0.0 {
            return Err(ValidationError::NonZeroDepotDemand(depot));
        }
        if let Some((index, &demand)) = demands
            .iter()
            .enumerate()
            .find(|(_, d)| !d.is_finite() || **d < 0.0)
        {
            return Err(ValidationError::InvalidDemand { index, demand });
        }
        Ok(Self(demands))
    }

    /// Demand at location `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> f64 {
        self.0[index]
    }

    /// Number of locations, depot included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a validated list contains at least the depot.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all demands.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Demand values as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<&[f64]> for Demands {
    type Error = ValidationError;

    fn try_from(demands: &[f64]) -> Result<Self, Self::Error> {
        Self::new(demands.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depot_only() {
        let d = Demands::new(vec![0.0]).expect("valid");
        assert_eq!(d.len(), 1);
        assert!(!d.is_empty());
        assert_eq!(d.total(), 0.0);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Demands::new(vec![]), Err(ValidationError::EmptyLocations));
    }

    #[test]
    fn test_depot_demand_rejected() {
        assert_eq!(
            Demands::new(vec![1.0, 2.0]),
            Err(ValidationError::NonZeroDepotDemand(1.0))
        );
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(
            Demands::new(vec![0.0, 5.0, -1.0]),
            Err(ValidationError::InvalidDemand {
                index: 2,
                demand: -1.0
            })
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            Demands::new(vec![0.0, f64::INFINITY]),
            Err(ValidationError::InvalidDemand { index: 1, .. })
        ));
    }

    #[test]
    fn test_zero_demand_stop_allowed() {
        let d = Demands::try_from(&[0.0, 0.0, 3.5][..]).expect("valid");
        assert_eq!(d.get(2), 3.5);
        assert_eq!(d.as_slice(), &[0.0, 0.0, 3.5]);
    }
}
