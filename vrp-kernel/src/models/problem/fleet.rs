#[cfg(test)]
#[path = "../../../tests/unit/models/problem/fleet_test.rs"]
mod fleet_test;

use crate::models::common::{Distance, Duration, Load, Location, TimeWindow};
use crate::models::problem::Skills;
use crate::utils::Float;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Represents operating costs for driver and vehicle.
#[derive(Clone, Debug)]
pub struct Costs {
    /// A fixed cost to use an actor.
    pub fixed: Float,
    /// Cost per distance unit.
    pub per_distance: Float,
    /// Cost per driving time unit.
    pub per_driving_time: Float,
    /// Cost per waiting time unit.
    pub per_waiting_time: Float,
    /// Cost per service time unit.
    pub per_service_time: Float,
}

impl Costs {
    /// Returns costs which are all zero.
    pub fn empty() -> Self {
        Self { fixed: 0., per_distance: 0., per_driving_time: 0., per_waiting_time: 0., per_service_time: 0. }
    }
}

impl Default for Costs {
    fn default() -> Self {
        Self { per_distance: 1., ..Self::empty() }
    }
}

/// Represents a driver, person who drives a vehicle.
#[derive(Clone, Debug)]
pub struct Driver {
    /// Specifies operating costs for driver.
    pub costs: Costs,
}

impl Driver {
    /// Creates a driver which adds no costs to vehicle ones.
    pub fn empty() -> Self {
        Self { costs: Costs::empty() }
    }
}

/// Represents a vehicle.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// A vehicle id.
    pub id: String,
    /// A stable index assigned by problem builder.
    pub index: usize,
    /// A start location.
    pub start: Location,
    /// An end location, used only when vehicle returns to depot.
    pub end: Location,
    /// Specifies whether vehicle has to return to its end location.
    pub returns_to_depot: bool,
    /// Operating time: earliest start and latest arrival.
    pub time: TimeWindow,
    /// Vehicle capacity.
    pub capacity: Load,
    /// Vehicle skills.
    pub skills: Skills,
    /// Vehicle costs.
    pub costs: Costs,
    /// Max route duration.
    pub max_duration: Option<Duration>,
    /// Max route distance.
    pub max_distance: Option<Distance>,
    /// A multiplier applied to activity setup time.
    pub setup_coefficient: Float,
}

/// Represents an actor: a vehicle with its driver.
#[derive(Clone, Debug)]
pub struct Actor {
    /// A vehicle.
    pub vehicle: Arc<Vehicle>,
    /// A driver.
    pub driver: Arc<Driver>,
}

impl Actor {
    /// Creates a new instance of `Actor`.
    pub fn new(vehicle: Arc<Vehicle>, driver: Arc<Driver>) -> Self {
        Self { vehicle, driver }
    }
}

impl PartialEq for Actor {
    fn eq(&self, other: &Self) -> bool {
        self.vehicle.index == other.vehicle.index
    }
}

impl Eq for Actor {}

impl Hash for Actor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vehicle.index.hash(state);
    }
}

/// Represents available resources to serve jobs.
pub struct Fleet {
    /// All fleet drivers.
    pub drivers: Vec<Arc<Driver>>,
    /// All fleet vehicles ordered by their index.
    pub vehicles: Vec<Arc<Vehicle>>,
    /// All actors, one per vehicle.
    pub actors: Vec<Arc<Actor>>,
}

impl Fleet {
    /// Creates a new instance of `Fleet` pairing every vehicle with the first driver.
    pub fn new(drivers: Vec<Arc<Driver>>, vehicles: Vec<Arc<Vehicle>>) -> Self {
        let driver = drivers.first().cloned().unwrap_or_else(|| Arc::new(Driver::empty()));
        let actors = vehicles.iter().map(|vehicle| Arc::new(Actor::new(vehicle.clone(), driver.clone()))).collect();

        Self { drivers, vehicles, actors }
    }

    /// Returns dimension-wise max capacity across all vehicles.
    pub fn max_capacity(&self) -> Load {
        self.vehicles.iter().fold(Load::default(), |acc, vehicle| acc.max_load(vehicle.capacity))
    }
}
