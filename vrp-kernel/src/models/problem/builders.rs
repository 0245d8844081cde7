#[cfg(test)]
#[path = "../../../tests/unit/models/problem/builders_test.rs"]
mod builders_test;

use crate::models::Problem;
use crate::models::common::*;
use crate::models::problem::*;
use crate::utils::{Float, GenericError, GenericResult};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Builds a job. Index is assigned later by [`ProblemBuilder`].
#[derive(Clone)]
pub struct JobBuilder {
    id: String,
    variant: JobVariant,
    size: Vec<i32>,
    skills: Vec<String>,
    max_time_in_vehicle: Option<Duration>,
}

impl JobBuilder {
    /// Creates a service job builder.
    pub fn service(id: &str, place: JobPlace) -> Self {
        Self::new(id, JobVariant::Service(place))
    }

    /// Creates a pickup job builder.
    pub fn pickup(id: &str, place: JobPlace) -> Self {
        Self::new(id, JobVariant::Pickup(place))
    }

    /// Creates a delivery job builder.
    pub fn delivery(id: &str, place: JobPlace) -> Self {
        Self::new(id, JobVariant::Delivery(place))
    }

    /// Creates a shipment job builder.
    pub fn shipment(id: &str, pickup: JobPlace, delivery: JobPlace) -> Self {
        Self::new(id, JobVariant::Shipment { pickup, delivery })
    }

    /// Creates a break job builder.
    pub fn rest(id: &str, place: JobPlace) -> Self {
        Self::new(id, JobVariant::Break(place))
    }

    fn new(id: &str, variant: JobVariant) -> Self {
        Self { id: id.to_string(), variant, size: vec![], skills: vec![], max_time_in_vehicle: None }
    }

    /// Sets job size.
    pub fn size(mut self, size: Vec<i32>) -> Self {
        self.size = size;
        self
    }

    /// Sets required skills.
    pub fn skills(mut self, skills: &[&str]) -> Self {
        self.skills = skills.iter().map(|skill| skill.to_string()).collect();
        self
    }

    /// Sets max time in vehicle.
    pub fn max_time_in_vehicle(mut self, duration: Duration) -> Self {
        self.max_time_in_vehicle = Some(duration);
        self
    }

    /// Builds a job with given index.
    pub fn build(self, index: usize) -> GenericResult<Job> {
        let size = Load::try_new(&self.size).map_err(|err| format!("job '{}': {err}", self.id))?;
        if size.has_negative() {
            return Err(format!("job '{}' has negative size, sign is defined by job variant", self.id).into());
        }

        let places: Vec<&JobPlace> = match &self.variant {
            JobVariant::Service(place)
            | JobVariant::Pickup(place)
            | JobVariant::Delivery(place)
            | JobVariant::Break(place) => vec![place],
            JobVariant::Shipment { pickup, delivery } => vec![pickup, delivery],
        };

        places.iter().try_for_each(|place| validate_place(&self.id, place))?;

        if let Some(duration) = self.max_time_in_vehicle {
            if duration < 0. || !matches!(self.variant, JobVariant::Shipment { .. }) {
                return Err(format!("job '{}': max time in vehicle is allowed only for shipments", self.id).into());
            }
        }

        Ok(Job::new(JobData {
            id: self.id,
            index,
            variant: self.variant,
            size,
            skills: self.skills.into_iter().collect(),
            max_time_in_vehicle: self.max_time_in_vehicle,
        }))
    }
}

fn validate_place(id: &str, place: &JobPlace) -> GenericResult<()> {
    if place.duration < 0. || place.setup < 0. {
        return Err(format!("job '{id}' has negative duration").into());
    }

    place.times.iter().try_for_each(|tw| tw.validate()).map_err(|err| format!("job '{id}': {err}").into())
}

/// Builds a vehicle. Index is assigned later by [`ProblemBuilder`].
#[derive(Clone)]
pub struct VehicleBuilder {
    id: String,
    start: Location,
    end: Option<Location>,
    returns_to_depot: bool,
    time: TimeWindow,
    capacity: Vec<i32>,
    skills: Vec<String>,
    costs: Costs,
    max_duration: Option<Duration>,
    max_distance: Option<Distance>,
    setup_coefficient: Float,
}

impl VehicleBuilder {
    /// Creates a vehicle builder which returns to its start location by default.
    pub fn new(id: &str, start: Location) -> Self {
        Self {
            id: id.to_string(),
            start,
            end: None,
            returns_to_depot: true,
            time: TimeWindow::max(),
            capacity: vec![],
            skills: vec![],
            costs: Costs::default(),
            max_duration: None,
            max_distance: None,
            setup_coefficient: 1.,
        }
    }

    /// Sets end location different from start.
    pub fn end(mut self, end: Location) -> Self {
        self.end = Some(end);
        self
    }

    /// Makes route open: vehicle finishes at its last job.
    pub fn open(mut self) -> Self {
        self.returns_to_depot = false;
        self
    }

    /// Sets operating time.
    pub fn time(mut self, time: TimeWindow) -> Self {
        self.time = time;
        self
    }

    /// Sets capacity.
    pub fn capacity(mut self, capacity: Vec<i32>) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets skills.
    pub fn skills(mut self, skills: &[&str]) -> Self {
        self.skills = skills.iter().map(|skill| skill.to_string()).collect();
        self
    }

    /// Sets costs.
    pub fn costs(mut self, costs: Costs) -> Self {
        self.costs = costs;
        self
    }

    /// Sets max route duration.
    pub fn max_duration(mut self, duration: Duration) -> Self {
        self.max_duration = Some(duration);
        self
    }

    /// Sets max route distance.
    pub fn max_distance(mut self, distance: Distance) -> Self {
        self.max_distance = Some(distance);
        self
    }

    /// Sets setup time coefficient.
    pub fn setup_coefficient(mut self, coefficient: Float) -> Self {
        self.setup_coefficient = coefficient;
        self
    }

    /// Builds a vehicle with given index.
    pub fn build(self, index: usize) -> GenericResult<Vehicle> {
        let id = self.id.as_str();
        let capacity = Load::try_new(&self.capacity).map_err(|err| format!("vehicle '{id}': {err}"))?;

        if capacity.has_negative() {
            return Err(format!("vehicle '{id}' has negative capacity").into());
        }

        self.time.validate().map_err(|err| format!("vehicle '{id}': {err}"))?;

        if self.max_duration.is_some_and(|value| value < 0.) || self.max_distance.is_some_and(|value| value < 0.) {
            return Err(format!("vehicle '{id}' has negative limit").into());
        }

        if self.setup_coefficient < 0. {
            return Err(format!("vehicle '{id}' has negative setup coefficient").into());
        }

        Ok(Vehicle {
            id: self.id.clone(),
            index,
            start: self.start,
            end: self.end.unwrap_or(self.start),
            returns_to_depot: self.returns_to_depot,
            time: self.time,
            capacity,
            skills: self.skills.into_iter().collect(),
            costs: self.costs,
            max_duration: self.max_duration,
            max_distance: self.max_distance,
            setup_coefficient: self.setup_coefficient,
        })
    }
}

/// Builds a problem assigning stable job and vehicle indices in insertion order.
pub struct ProblemBuilder {
    jobs: Vec<JobBuilder>,
    vehicles: Vec<VehicleBuilder>,
    driver: Driver,
    transport: Option<Arc<dyn TransportCost>>,
    activity: Option<Arc<dyn ActivityCost>>,
}

impl Default for ProblemBuilder {
    fn default() -> Self {
        Self { jobs: vec![], vehicles: vec![], driver: Driver::empty(), transport: None, activity: None }
    }
}

impl ProblemBuilder {
    /// Adds a job.
    pub fn add_job(mut self, job: JobBuilder) -> Self {
        self.jobs.push(job);
        self
    }

    /// Adds a vehicle.
    pub fn add_vehicle(mut self, vehicle: VehicleBuilder) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    /// Sets a driver used by all vehicles.
    pub fn with_driver(mut self, driver: Driver) -> Self {
        self.driver = driver;
        self
    }

    /// Sets transport costs. Euclidean with unit speed is used by default.
    pub fn with_transport_cost(mut self, transport: Arc<dyn TransportCost>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets activity costs.
    pub fn with_activity_cost(mut self, activity: Arc<dyn ActivityCost>) -> Self {
        self.activity = Some(activity);
        self
    }

    /// Validates configuration and builds the problem.
    pub fn build(self) -> GenericResult<Problem> {
        if self.vehicles.is_empty() {
            return Err("problem has no vehicles".into());
        }

        let mut errors = Vec::<GenericError>::new();

        let jobs = collect_unique(self.jobs.into_iter().map(|job| (job.id.clone(), job)), &mut errors, "job")
            .into_iter()
            .enumerate()
            .filter_map(|(index, job)| job.build(index).map_err(|err| errors.push(err)).ok())
            .collect::<Vec<_>>();

        let vehicles = collect_unique(self.vehicles.into_iter().map(|v| (v.id.clone(), v)), &mut errors, "vehicle")
            .into_iter()
            .enumerate()
            .filter_map(|(index, vehicle)| vehicle.build(index).map_err(|err| errors.push(err)).ok())
            .map(Arc::new)
            .collect::<Vec<_>>();

        if !errors.is_empty() {
            return Err(GenericError::join_many(&errors, "\n").into());
        }

        Ok(Problem {
            fleet: Arc::new(Fleet::new(vec![Arc::new(self.driver)], vehicles)),
            jobs: Arc::new(jobs),
            transport: self.transport.unwrap_or_else(|| Arc::new(EuclideanTransportCost::default())),
            activity: self.activity.unwrap_or_else(|| Arc::new(SimpleActivityCost::default())),
        })
    }
}

fn collect_unique<T>(items: impl Iterator<Item = (String, T)>, errors: &mut Vec<GenericError>, kind: &str) -> Vec<T> {
    let mut ids = FxHashSet::default();

    items
        .filter_map(|(id, item)| {
            if ids.insert(id.clone()) {
                Some(item)
            } else {
                errors.push(format!("duplicate {kind} id: '{id}'").into());
                None
            }
        })
        .collect()
}
