#[cfg(test)]
#[path = "../../../tests/unit/models/problem/costs_test.rs"]
mod costs_test;

use crate::models::common::*;
use crate::models::problem::Actor;
use crate::models::solution::Activity;
use crate::utils::{Float, GenericResult};

/// Provides the way to get cost information for specific activities done by specific actor.
pub trait ActivityCost: Send + Sync {
    /// Returns cost to perform activity: waiting for time window opening plus service.
    fn cost(&self, actor: &Actor, activity: &Activity, arrival: Timestamp) -> Cost {
        let service = self.duration(actor, activity, arrival);

        self.waiting_cost(actor, activity, arrival)
            + service * (actor.driver.costs.per_service_time + actor.vehicle.costs.per_service_time)
    }

    /// Returns cost of waiting for the earliest time window which is still open at arrival.
    fn waiting_cost(&self, actor: &Actor, activity: &Activity, arrival: Timestamp) -> Cost {
        let waiting = (activity.select_time_window(arrival).start - arrival).max(0.);

        waiting * (actor.driver.costs.per_waiting_time + actor.vehicle.costs.per_waiting_time)
    }

    /// Returns operation duration of activity started at given arrival.
    fn duration(&self, actor: &Actor, activity: &Activity, arrival: Timestamp) -> Duration;
}

/// An actor independent activity costs.
#[derive(Default)]
pub struct SimpleActivityCost {}

impl ActivityCost for SimpleActivityCost {
    fn duration(&self, _: &Actor, activity: &Activity, _: Timestamp) -> Duration {
        activity.place.duration
    }
}

/// Provides the way to get routing information for specific locations and actor.
pub trait TransportCost: Send + Sync {
    /// Returns time-dependent transport cost between two locations for given actor.
    fn cost(&self, actor: &Actor, from: &Location, to: &Location, departure: Timestamp) -> Cost {
        let distance = self.distance(actor, from, to, departure);
        let duration = self.duration(actor, from, to, departure);

        distance * (actor.driver.costs.per_distance + actor.vehicle.costs.per_distance)
            + duration * (actor.driver.costs.per_driving_time + actor.vehicle.costs.per_driving_time)
    }

    /// Returns travel duration between locations when leaving at `departure`.
    fn duration(&self, actor: &Actor, from: &Location, to: &Location, departure: Timestamp) -> Duration;

    /// Returns travel duration between locations when arriving at `arrival`.
    fn backward_duration(&self, actor: &Actor, from: &Location, to: &Location, arrival: Timestamp) -> Duration {
        self.duration(actor, from, to, arrival)
    }

    /// Returns travel distance between locations.
    fn distance(&self, actor: &Actor, from: &Location, to: &Location, departure: Timestamp) -> Distance;
}

/// A transport cost which uses straight line distance between coordinates.
/// Locations without coordinates are considered to be at zero distance.
pub struct EuclideanTransportCost {
    speed: Float,
}

impl EuclideanTransportCost {
    /// Creates a new instance of `EuclideanTransportCost` with given speed.
    pub fn new(speed: Float) -> GenericResult<Self> {
        if speed <= 0. || !speed.is_finite() {
            return Err(format!("speed should be positive, got: {speed}").into());
        }

        Ok(Self { speed })
    }

    fn raw_distance(from: &Location, to: &Location) -> Distance {
        match (from.coordinate, to.coordinate) {
            (Some(from), Some(to)) => from.distance_to_point(&to),
            _ => 0.,
        }
    }
}

impl Default for EuclideanTransportCost {
    fn default() -> Self {
        Self { speed: 1. }
    }
}

impl TransportCost for EuclideanTransportCost {
    fn duration(&self, _: &Actor, from: &Location, to: &Location, _: Timestamp) -> Duration {
        Self::raw_distance(from, to) / self.speed
    }

    fn distance(&self, _: &Actor, from: &Location, to: &Location, _: Timestamp) -> Distance {
        Self::raw_distance(from, to)
    }
}

/// A time independent transport cost backed by dense routing matrices indexed by location index.
pub struct MatrixTransportCost {
    size: usize,
    durations: Vec<Duration>,
    distances: Vec<Distance>,
}

impl MatrixTransportCost {
    /// Creates a new instance of `MatrixTransportCost` from row-major square matrices.
    pub fn new(durations: Vec<Duration>, distances: Vec<Distance>) -> GenericResult<Self> {
        let size = (durations.len() as Float).sqrt().round() as usize;

        if size * size != durations.len() {
            return Err(format!("non-square duration matrix: {} values", durations.len()).into());
        }

        if durations.len() != distances.len() {
            return Err("duration and distance matrices have different sizes".into());
        }

        if durations.iter().chain(distances.iter()).any(|value| *value < 0. || value.is_nan()) {
            return Err("routing matrix contains negative or undefined value".into());
        }

        Ok(Self { size, durations, distances })
    }

    /// Returns amount of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    fn get(&self, matrix: &[Float], from: &Location, to: &Location) -> Float {
        // NOTE unknown locations are treated as unreachable
        if from.index >= self.size || to.index >= self.size {
            Float::MAX
        } else {
            matrix[from.index * self.size + to.index]
        }
    }
}

impl TransportCost for MatrixTransportCost {
    fn duration(&self, _: &Actor, from: &Location, to: &Location, _: Timestamp) -> Duration {
        self.get(&self.durations, from, to)
    }

    fn distance(&self, _: &Actor, from: &Location, to: &Location, _: Timestamp) -> Distance {
        self.get(&self.distances, from, to)
    }
}
