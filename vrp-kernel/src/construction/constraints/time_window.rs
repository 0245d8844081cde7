#[cfg(test)]
#[path = "../../../tests/unit/construction/constraints/time_window_test.rs"]
mod time_window_test;

use crate::construction::constraints::*;
use crate::construction::heuristics::{ActivityContext, JobInsertionContext};
use crate::construction::states::{StateKey, estimate_arrival, setup_time};
use crate::models::common::Timestamp;
use crate::models::problem::{ActivityCost, TransportCost, Vehicle};
use crate::models::solution::{Activity, ActivityKind};
use crate::utils::Float;
use std::sync::Arc;

/// Returns earliest operation start and latest operation end of activity as seen by given vehicle:
/// route start and end use vehicle's time window, jobs use bounds over all their time windows.
fn operation_bounds(activity: &Activity, vehicle: &Vehicle) -> (Timestamp, Timestamp) {
    match activity.kind {
        ActivityKind::Start | ActivityKind::End => (vehicle.time.start, vehicle.time.end),
        _ => {
            let windows = activity.time_windows();
            let earliest = windows.first().map_or(activity.place.time.start, |time| time.start);
            let latest = windows.iter().map(|time| time.end).fold(activity.place.time.end, Float::max);

            (earliest, latest)
        }
    }
}

/// Checks that target and all following activities can start within their time windows.
/// Uses latest start state calculated for candidate vehicle, so no route scan is needed.
pub struct TimeWindowConstraint {
    transport: Arc<dyn TransportCost>,
    activity: Arc<dyn ActivityCost>,
}

impl TimeWindowConstraint {
    /// Creates a new instance of `TimeWindowConstraint`.
    pub fn new(transport: Arc<dyn TransportCost>, activity: Arc<dyn ActivityCost>) -> Self {
        Self { transport, activity }
    }
}

impl Constraint for TimeWindowConstraint {
    fn name(&self) -> &str {
        "time_window"
    }

    fn as_hard_activity(&self) -> Option<&dyn HardActivityConstraint> {
        Some(self)
    }
}

impl HardActivityConstraint for TimeWindowConstraint {
    fn evaluate_activity(&self, ctx: &JobInsertionContext, activity_ctx: &ActivityContext) -> ConstraintStatus {
        let actor = ctx.new_actor.as_ref();
        let vehicle = actor.vehicle.as_ref();
        let (prev, target, next) = (activity_ctx.prev, activity_ctx.target, activity_ctx.next);
        let prev_departure = activity_ctx.prev_departure;

        let (prev_earliest, _) = operation_bounds(prev, vehicle);
        let (target_earliest, target_latest) = operation_bounds(target, vehicle);
        let (next_earliest, next_latest) = operation_bounds(next, vehicle);

        let latest_vehicle_arrival = if vehicle.returns_to_depot { vehicle.time.end } else { Float::MAX };
        if latest_vehicle_arrival < prev_earliest
            || latest_vehicle_arrival < target_earliest
            || latest_vehicle_arrival < next_earliest
        {
            return ConstraintStatus::NotFulfilledBreak;
        }

        // NOTE target closes before prev opens, moving further only makes it worse
        if target_latest < prev_earliest {
            return ConstraintStatus::NotFulfilledBreak;
        }

        let is_open_end = activity_ctx.is_open_end(actor);
        let latest_at_next = if is_open_end {
            Float::MAX
        } else {
            let state = ctx.route_ctx.state();
            let next_idx = activity_ctx.index + 1;
            state.activity_scalar(StateKey::LatestStart, Some(vehicle.index), next_idx).min(next_latest)
        };

        if !is_open_end {
            let direct_arrival =
                estimate_arrival(self.transport.as_ref(), actor, &prev.place.location, prev_departure, next);
            if direct_arrival > latest_at_next {
                return ConstraintStatus::NotFulfilledBreak;
            }

            if target_earliest > next_latest {
                return ConstraintStatus::NotFulfilled;
            }
        }

        let arrival = estimate_arrival(self.transport.as_ref(), actor, &prev.place.location, prev_departure, target);
        let target_tw = target.select_time_window(arrival);
        let duration = self.activity.duration(actor, target, arrival);
        let departure = arrival.max(target_tw.start) + duration;

        let latest_at_target = if is_open_end {
            target_tw.end
        } else {
            let location = &target.place.location;
            let travel = self.transport.backward_duration(actor, location, &next.place.location, latest_at_next);
            let potential = latest_at_next - travel - setup_time(actor, location, next) - duration;

            target_tw.end.min(potential)
        };

        if arrival > latest_at_target {
            return ConstraintStatus::NotFulfilled;
        }

        if is_open_end {
            return ConstraintStatus::Fulfilled;
        }

        let next_arrival =
            estimate_arrival(self.transport.as_ref(), actor, &target.place.location, departure, next);

        if next_arrival > latest_at_next { ConstraintStatus::NotFulfilled } else { ConstraintStatus::Fulfilled }
    }
}
