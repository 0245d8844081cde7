#[cfg(test)]
#[path = "../../../tests/unit/models/problem/jobs_test.rs"]
mod jobs_test;

use crate::models::common::{Duration, Load, Location, TimeWindow};
use crate::utils::compare_floats;
use rustc_hash::FxHashSet;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// A set of skills.
pub type Skills = FxHashSet<String>;

/// Specifies a place where job's work is performed.
#[derive(Clone, Debug)]
pub struct JobPlace {
    /// A place location. Can be unknown (e.g. a break taken wherever the vehicle is).
    pub location: Option<Location>,
    /// Operation duration.
    pub duration: Duration,
    /// Setup time charged on arrival from a different location.
    pub setup: Duration,
    /// Allowed operation start times ordered by their start.
    pub times: Vec<TimeWindow>,
}

impl JobPlace {
    /// Creates a new instance of `JobPlace` without setup time.
    pub fn new(location: Option<Location>, duration: Duration, mut times: Vec<TimeWindow>) -> Self {
        times.sort_by(|a, b| compare_floats(a.start, b.start));

        Self { location, duration, setup: 0., times }
    }

    /// Sets setup time.
    pub fn with_setup(mut self, setup: Duration) -> Self {
        self.setup = setup;
        self
    }

    /// Returns the first time window or unlimited one.
    pub fn default_time(&self) -> TimeWindow {
        self.times.first().copied().unwrap_or_else(TimeWindow::max)
    }
}

/// Specifies job variants.
#[derive(Clone, Debug)]
pub enum JobVariant {
    /// A visit which adds load which stays in the vehicle till the end of the route.
    Service(JobPlace),
    /// A pickup brought back to the depot.
    Pickup(JobPlace),
    /// A delivery loaded at the depot.
    Delivery(JobPlace),
    /// A paired pickup and delivery: load is added at pickup and removed at delivery.
    Shipment {
        /// Pickup place.
        pickup: JobPlace,
        /// Delivery place.
        delivery: JobPlace,
    },
    /// A driver break.
    Break(JobPlace),
}

/// Keeps job data shared between all activities created from the job.
pub struct JobData {
    /// A job id.
    pub id: String,
    /// A stable index assigned by problem builder.
    pub index: usize,
    /// A job variant with its places.
    pub variant: JobVariant,
    /// A job size, always non-negative. Activity load change derives sign from the variant.
    pub size: Load,
    /// Skills required from the vehicle.
    pub skills: Skills,
    /// Max time between pickup end and delivery start, used by shipments.
    pub max_time_in_vehicle: Option<Duration>,
}

/// Represents a job: a unit of demand. Jobs are cheap to clone and compared by their index.
#[derive(Clone)]
pub struct Job(Arc<JobData>);

impl Job {
    /// Creates a new instance of `Job`.
    pub fn new(data: JobData) -> Self {
        Self(Arc::new(data))
    }

    /// Returns job places in visit order.
    pub fn places(&self) -> impl Iterator<Item = &JobPlace> + '_ {
        let (first, second) = match &self.0.variant {
            JobVariant::Service(place)
            | JobVariant::Pickup(place)
            | JobVariant::Delivery(place)
            | JobVariant::Break(place) => (place, None),
            JobVariant::Shipment { pickup, delivery } => (pickup, Some(delivery)),
        };

        std::iter::once(first).chain(second)
    }

    /// Returns all known locations of the job.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.places().filter_map(|place| place.location)
    }

    /// Returns true if at least one job place has location with coordinate.
    pub fn has_coordinate(&self) -> bool {
        self.locations().any(|location| location.coordinate.is_some())
    }

    /// Returns true if job is a shipment.
    pub fn is_shipment(&self) -> bool {
        matches!(self.0.variant, JobVariant::Shipment { .. })
    }

    /// Returns true if job is a break.
    pub fn is_break(&self) -> bool {
        matches!(self.0.variant, JobVariant::Break(_))
    }
}

impl Deref for Job {
    type Target = JobData;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.0.index == other.0.index
    }
}

impl Eq for Job {}

impl Hash for Job {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.index.hash(state);
    }
}

impl Debug for Job {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Job").field("id", &self.0.id).field("index", &self.0.index).finish()
    }
}
