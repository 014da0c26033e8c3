//! Vehicle and fleet types.

use crate::error::ValidationError;

/// A delivery vehicle with a load capacity.
///
/// Vehicles are numbered from 1 in fleet order.
///
/// # Examples
///
/// ```
/// use fleet_route::models::Vehicle;
///
/// let v = Vehicle::new(1, 1000.0);
/// assert_eq!(v.id(), 1);
/// assert_eq!(v.capacity(), 1000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vehicle {
    id: usize,
    capacity: f64,
}

impl Vehicle {
    /// Creates a vehicle with the given number and capacity.
    pub fn new(id: usize, capacity: f64) -> Self {
        Self { id, capacity }
    }

    /// 1-based vehicle number.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}

/// An ordered, non-empty set of vehicles sharing the depot.
///
/// # Examples
///
/// ```
/// use fleet_route::models::Fleet;
///
/// let fleet = Fleet::uniform(3, 1000.0)?.with_capacity(2, 1500.0)?;
/// assert_eq!(fleet.len(), 3);
/// assert_eq!(fleet.vehicles()[1].capacity(), 1500.0);
/// assert_eq!(fleet.total_capacity(), 3500.0);
/// # Ok::<(), fleet_route::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Creates `count` vehicles numbered `1..=count`, all with `capacity`.
    pub fn uniform(count: usize, capacity: f64) -> Result<Self, ValidationError> {
        if count == 0 {
            return Err(ValidationError::NoVehicles);
        }
        check_capacity(1, capacity)?;
        Ok(Self {
            vehicles: (1..=count).map(|id| Vehicle::new(id, capacity)).collect(),
        })
    }

    /// Overrides the capacity of vehicle `vehicle_id`.
    pub fn with_capacity(mut self, vehicle_id: usize, capacity: f64) -> Result<Self, ValidationError> {
        check_capacity(vehicle_id, capacity)?;
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.id == vehicle_id)
            .ok_or(ValidationError::UnknownVehicle(vehicle_id))?;
        vehicle.capacity = capacity;
        Ok(self)
    }

    /// Vehicles in dispatch order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Number of vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Always `false`; a fleet has at least one vehicle.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Sum of all vehicle capacities.
    pub fn total_capacity(&self) -> f64 {
        self.vehicles.iter().map(Vehicle::capacity).sum()
    }
}

fn check_capacity(vehicle_id: usize, capacity: f64) -> Result<(), ValidationError> {
    if capacity.is_finite() && capacity > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidCapacity {
            vehicle_id,
            capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_uniform_fleet() {
        let fleet = Fleet::uniform(3, 1000.0).expect("valid");
        let ids: Vec<usize> = fleet.vehicles().iter().map(Vehicle::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(fleet.vehicles().iter().all(|v| v.capacity() == 1000.0));
        assert!(!fleet.is_empty());
    }

    #[test]
    fn test_no_vehicles() {
        assert_eq!(Fleet::uniform(0, 10.0), Err(ValidationError::NoVehicles));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-5.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_invalid_capacity(#[case] capacity: f64) {
        assert!(matches!(
            Fleet::uniform(2, capacity),
            Err(ValidationError::InvalidCapacity { vehicle_id: 1, .. })
        ));
    }

    #[test]
    fn test_override_capacity() {
        let fleet = Fleet::uniform(2, 100.0)
            .and_then(|f| f.with_capacity(2, 40.0))
            .expect("valid");
        assert_eq!(fleet.vehicles()[0].capacity(), 100.0);
        assert_eq!(fleet.vehicles()[1].capacity(), 40.0);
        assert_eq!(fleet.total_capacity(), 140.0);
    }

    #[test]
    fn test_override_unknown_vehicle() {
        let fleet = Fleet::uniform(2, 100.0).expect("valid");
        assert_eq!(
            fleet.with_capacity(3, 50.0),
            Err(ValidationError::UnknownVehicle(3))
        );
    }

    #[test]
    fn test_override_invalid_capacity() {
        let fleet = Fleet::uniform(2, 100.0).expect("valid");
        assert!(matches!(
            fleet.with_capacity(2, 0.0),
            Err(ValidationError::InvalidCapacity { vehicle_id: 2, .. })
        ));
    }
}
