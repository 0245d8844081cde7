#[cfg(test)]
#[path = "../../../tests/unit/construction/states/schedule_test.rs"]
mod schedule_test;

use crate::construction::heuristics::RouteContext;
use crate::construction::states::{StateKey, StateUpdater, StateValue};
use crate::models::common::{Duration, Location, Schedule, TimeWindow, Timestamp};
use crate::models::problem::{Actor, ActivityCost, TransportCost};
use crate::models::solution::{Activity, ActivityKind, Route};
use std::sync::Arc;

/// Specifies when activity operation starts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ActivityStartPolicy {
    /// Wait till time window opens.
    #[default]
    WaitForTimeWindow,
    /// Start immediately on arrival.
    StartOnArrival,
}

impl ActivityStartPolicy {
    /// Returns operation start for given arrival.
    pub fn operation_start(&self, arrival: Timestamp, time: &TimeWindow) -> Timestamp {
        match self {
            ActivityStartPolicy::WaitForTimeWindow => arrival.max(time.start),
            ActivityStartPolicy::StartOnArrival => arrival,
        }
    }
}

/// Returns setup time charged on arrival at target from given location.
pub fn setup_time(actor: &Actor, from: &Location, target: &Activity) -> Duration {
    if target.place.location != *from { target.place.setup * actor.vehicle.setup_coefficient } else { 0. }
}

/// Estimates arrival at target when leaving `from` at `departure`, setup time included.
pub fn estimate_arrival(
    transport: &dyn TransportCost,
    actor: &Actor,
    from: &Location,
    departure: Timestamp,
    target: &Activity,
) -> Timestamp {
    departure + transport.duration(actor, from, &target.place.location, departure) + setup_time(actor, from, target)
}

/// Recalculates arrival, start and departure of every activity in the route.
pub fn update_route_schedule(
    route: &mut Route,
    transport: &dyn TransportCost,
    activity: &dyn ActivityCost,
    policy: ActivityStartPolicy,
) {
    let actor = route.actor.clone();
    let total = route.tour.total();

    let (mut prev_location, mut prev_departure) = match route.tour.get_mut(0) {
        Some(start) => {
            let departure = start.schedule.departure.max(actor.vehicle.time.start);
            start.schedule = Schedule::new(departure, departure, departure);
            (start.place.location, departure)
        }
        None => return,
    };

    (1..total).for_each(|idx| {
        let Some(target) = route.tour.get_mut(idx) else { return };

        target.schedule = if target.kind == ActivityKind::End && !actor.vehicle.returns_to_depot {
            Schedule::new(prev_departure, prev_departure, prev_departure)
        } else {
            let arrival = estimate_arrival(transport, &actor, &prev_location, prev_departure, target);
            target.place.time = target.select_time_window(arrival);
            let start = policy.operation_start(arrival, &target.place.time);
            let duration = if target.kind == ActivityKind::End { 0. } else { activity.duration(&actor, target, arrival) };

            Schedule::new(arrival, start, start + duration)
        };

        prev_location = target.place.location;
        prev_departure = target.schedule.departure;
    });
}

/// Updates activity schedules and total route duration.
pub struct ScheduleUpdater {
    transport: Arc<dyn TransportCost>,
    activity: Arc<dyn ActivityCost>,
    policy: ActivityStartPolicy,
}

impl ScheduleUpdater {
    /// Creates a new instance of `ScheduleUpdater` which waits for time window opening.
    pub fn new(transport: Arc<dyn TransportCost>, activity: Arc<dyn ActivityCost>) -> Self {
        Self { transport, activity, policy: ActivityStartPolicy::default() }
    }

    /// Sets activity start policy.
    pub fn with_policy(mut self, policy: ActivityStartPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl StateUpdater for ScheduleUpdater {
    fn update_route(&self, route_ctx: &mut RouteContext) {
        let (route, state) = route_ctx.as_mut();

        update_route_schedule(route, self.transport.as_ref(), self.activity.as_ref(), self.policy);

        let duration = route.tour.end().schedule.departure - route.tour.start().schedule.departure;
        state.set_route_state(StateKey::TotalDuration, None, StateValue::Scalar(duration));
    }
}
