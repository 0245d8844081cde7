use crate::models::common::{Duration, Load, Location, Schedule, TimeWindow, Timestamp};
use crate::models::problem::{Actor, Job, JobPlace, JobVariant};

/// Specifies activity kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ActivityKind {
    /// A route start.
    Start,
    /// A route end.
    End,
    /// A pickup: either pickup job or shipment pickup.
    Pickup,
    /// A delivery: either delivery job or shipment delivery.
    Delivery,
    /// A service visit.
    Service,
    /// A break.
    Break,
}

/// Specifies activity place.
#[derive(Clone, Debug)]
pub struct Place {
    /// Location where activity is performed.
    pub location: Location,
    /// Operation duration.
    pub duration: Duration,
    /// Setup time charged when arriving from a different location.
    pub setup: Duration,
    /// Time window for operation start. For a job activity in a route, it is the one of job
    /// time windows selected by the last schedule update.
    pub time: TimeWindow,
}

/// Represents activity which is needed to be performed.
#[derive(Clone, Debug)]
pub struct Activity {
    /// Activity kind.
    pub kind: ActivityKind,
    /// Specifies activity details.
    pub place: Place,
    /// Signed load change: positive when load is added, negative when it is removed.
    pub load_change: Load,
    /// Specifies activity schedule, set by state propagation.
    pub schedule: Schedule,
    /// A job which activity belongs to. `None` for start and end.
    pub job: Option<Job>,
}

impl Activity {
    /// Creates a route start activity for given actor.
    pub fn new_start(actor: &Actor) -> Self {
        let vehicle = &actor.vehicle;
        let departure = vehicle.time.start;

        Self {
            kind: ActivityKind::Start,
            place: Place { location: vehicle.start, duration: 0., setup: 0., time: vehicle.time },
            load_change: Load::default(),
            schedule: Schedule::new(departure, departure, departure),
            job: None,
        }
    }

    /// Creates a route end activity for given actor.
    pub fn new_end(actor: &Actor) -> Self {
        let vehicle = &actor.vehicle;

        Self {
            kind: ActivityKind::End,
            place: Place { location: vehicle.end, duration: 0., setup: 0., time: vehicle.time },
            load_change: Load::default(),
            schedule: Schedule::default(),
            job: None,
        }
    }

    /// Creates activities for all job places in visit order using the first time window of each place.
    /// Places without location get `fallback` location. Other time windows are still considered by
    /// schedule updates and constraints, see [`Activity::select_time_window`].
    pub fn from_job(job: &Job, fallback: Location) -> Vec<Activity> {
        let create = |kind: ActivityKind, place: &JobPlace, load_change: Load| Activity {
            kind,
            place: Place {
                location: place.location.unwrap_or(fallback),
                duration: place.duration,
                setup: place.setup,
                time: place.default_time(),
            },
            load_change,
            schedule: Schedule::default(),
            job: Some(job.clone()),
        };

        match &job.variant {
            JobVariant::Service(place) => vec![create(ActivityKind::Service, place, job.size)],
            JobVariant::Pickup(place) => vec![create(ActivityKind::Pickup, place, job.size)],
            JobVariant::Delivery(place) => vec![create(ActivityKind::Delivery, place, -job.size)],
            JobVariant::Break(place) => vec![create(ActivityKind::Break, place, Load::default())],
            JobVariant::Shipment { pickup, delivery } => vec![
                create(ActivityKind::Pickup, pickup, job.size),
                create(ActivityKind::Delivery, delivery, -job.size),
            ],
        }
    }

    /// Returns all allowed time windows of operation start ordered by their start.
    pub fn time_windows(&self) -> &[TimeWindow] {
        let place = self.job.as_ref().and_then(|job| match (&job.variant, self.kind) {
            (JobVariant::Shipment { pickup, .. }, ActivityKind::Pickup) => Some(pickup),
            (JobVariant::Shipment { delivery, .. }, ActivityKind::Delivery) => Some(delivery),
            (JobVariant::Shipment { .. }, _) => None,
            (
                JobVariant::Service(place)
                | JobVariant::Pickup(place)
                | JobVariant::Delivery(place)
                | JobVariant::Break(place),
                _,
            ) => Some(place),
        });

        match place {
            Some(place) if !place.times.is_empty() => place.times.as_slice(),
            _ => std::slice::from_ref(&self.place.time),
        }
    }

    /// Returns the earliest time window which is still open at given arrival or the last one
    /// when all of them are closed.
    pub fn select_time_window(&self, arrival: Timestamp) -> TimeWindow {
        let windows = self.time_windows();

        windows.iter().find(|time| time.end >= arrival).or(windows.last()).copied().unwrap_or(self.place.time)
    }

    /// Returns true if activity belongs to a shipment.
    pub fn is_shipment(&self) -> bool {
        self.job.as_ref().is_some_and(|job| job.is_shipment())
    }

    /// Returns true if activity belongs to given job.
    pub fn has_same_job(&self, job: &Job) -> bool {
        self.job.as_ref().is_some_and(|activity_job| activity_job == job)
    }

    /// Returns true if activity is a delivery which load is taken at route start.
    pub fn is_depot_delivery(&self) -> bool {
        self.kind == ActivityKind::Delivery && !self.is_shipment()
    }

    /// Returns true if activity adds load which is brought to route end.
    pub fn is_depot_pickup(&self) -> bool {
        matches!(self.kind, ActivityKind::Pickup | ActivityKind::Service) && !self.is_shipment()
    }

    /// Returns job id if activity has a job.
    pub fn job_id(&self) -> Option<&str> {
        self.job.as_ref().map(|job| job.id.as_str())
    }
}
