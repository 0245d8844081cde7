#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/context_test.rs"]
mod context_test;

use crate::construction::states::RouteState;
use crate::models::common::Timestamp;
use crate::models::problem::{Actor, Job};
use crate::models::solution::{Activity, ActivityKind, Route};
use std::sync::Arc;

/// Keeps a route together with its cached state.
#[derive(Clone)]
pub struct RouteContext {
    route: Route,
    state: RouteState,
}

impl RouteContext {
    /// Creates a new instance of `RouteContext` with an empty route for given actor.
    pub fn new(actor: Arc<Actor>) -> Self {
        Self { route: Route::new(actor), state: RouteState::default() }
    }

    /// Creates a new instance of `RouteContext` from existing route and state.
    pub fn new_with_state(route: Route, state: RouteState) -> Self {
        Self { route, state }
    }

    /// Returns a reference to route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Returns a mutable reference to route. Cached state is dropped as it becomes invalid.
    pub fn route_mut(&mut self) -> &mut Route {
        self.state.clear();
        &mut self.route
    }

    /// Returns a reference to state.
    pub fn state(&self) -> &RouteState {
        &self.state
    }

    /// Returns a mutable reference to state.
    pub fn state_mut(&mut self) -> &mut RouteState {
        &mut self.state
    }

    /// Returns route and state for updating non structural route data, such as schedules.
    pub fn as_mut(&mut self) -> (&mut Route, &mut RouteState) {
        (&mut self.route, &mut self.state)
    }
}

/// Keeps information about already placed sibling activity of a multi-activity job.
#[derive(Clone, Copy, Debug)]
pub struct RelatedActivityContext {
    /// Index of the activity after which the sibling was inserted.
    pub index: usize,
    /// Sibling arrival time.
    pub arrival: Timestamp,
    /// Sibling departure time.
    pub departure: Timestamp,
}

/// Describes a single insertion attempt of a job into a route.
pub struct JobInsertionContext<'a> {
    /// Route where job is inserted.
    pub route_ctx: &'a RouteContext,
    /// A job to insert.
    pub job: &'a Job,
    /// A candidate actor, can differ from route's one.
    pub new_actor: &'a Arc<Actor>,
    /// Departure time from the start with candidate actor.
    pub new_departure: Timestamp,
    /// Index of the activity after which job is inserted.
    pub insertion_index: usize,
    /// Context of already placed sibling activity.
    pub related: Option<RelatedActivityContext>,
}

impl<'a> JobInsertionContext<'a> {
    /// Creates a new instance of `JobInsertionContext`.
    pub fn new(route_ctx: &'a RouteContext, job: &'a Job, new_actor: &'a Arc<Actor>) -> Self {
        let route = route_ctx.route();
        let new_departure = if route.actor.as_ref() == new_actor.as_ref() && route.tour.has_jobs() {
            route.tour.start().schedule.departure
        } else {
            new_actor.vehicle.time.start
        };

        Self { route_ctx, job, new_actor, new_departure, insertion_index: 0, related: None }
    }

    /// Sets insertion index.
    pub fn with_insertion_index(mut self, index: usize) -> Self {
        self.insertion_index = index;
        self
    }

    /// Sets related activity context.
    pub fn with_related(mut self, related: RelatedActivityContext) -> Self {
        self.related = Some(related);
        self
    }

    /// Returns true if candidate actor differs from the route's one.
    pub fn is_vehicle_switch(&self) -> bool {
        self.route_ctx.route().actor.as_ref() != self.new_actor.as_ref()
    }
}

/// Describes a candidate activity placement between two neighbour activities.
pub struct ActivityContext<'a> {
    /// Index of `prev` in the route tour. When `prev` is a sibling activity which is not yet
    /// in the tour, it is the index of the tour activity after which the sibling is placed.
    pub index: usize,
    /// Previous activity.
    pub prev: &'a Activity,
    /// Target activity.
    pub target: &'a Activity,
    /// Next activity.
    pub next: &'a Activity,
    /// Departure time from previous activity. It has to include the shift caused by
    /// an already placed sibling activity.
    pub prev_departure: Timestamp,
}

impl ActivityContext<'_> {
    /// Returns true if next activity is the end of an open route of given actor:
    /// there is no leg from target to next.
    pub fn is_open_end(&self, actor: &Actor) -> bool {
        self.next.kind == ActivityKind::End && !actor.vehicle.returns_to_depot
    }

    /// Returns true if previous activity is the not yet placed sibling of target.
    pub fn is_prev_sibling(&self) -> bool {
        self.target.job.as_ref().is_some_and(|job| self.prev.has_same_job(job))
    }
}
