#[cfg(test)]
#[path = "../../../tests/unit/construction/constraints/travel_limits_test.rs"]
mod travel_limits_test;

use crate::construction::constraints::*;
use crate::construction::heuristics::{ActivityContext, JobInsertionContext};
use crate::construction::states::{ActivityStartPolicy, StateKey, setup_time};
use crate::models::common::{Distance, Location, Timestamp};
use crate::models::problem::{Actor, ActivityCost, JobVariant, TransportCost, Vehicle};
use crate::models::solution::{Activity, ActivityKind};
use crate::utils::GenericResult;
use std::sync::Arc;

/// Checks max distance of candidate vehicle using per vehicle distance states.
pub struct MaxDistanceConstraint {
    transport: Arc<dyn TransportCost>,
    limits: Vec<Option<Distance>>,
}

impl MaxDistanceConstraint {
    /// Creates a new instance of `MaxDistanceConstraint` with limits taken from vehicles.
    /// Vehicles have to be indexed densely from zero.
    pub fn new(transport: Arc<dyn TransportCost>, vehicles: &[Arc<Vehicle>]) -> GenericResult<Self> {
        let mut limits = vec![None; vehicles.len()];
        let mut assigned = vec![false; vehicles.len()];

        for vehicle in vehicles {
            match assigned.get_mut(vehicle.index) {
                Some(is_assigned) if !*is_assigned => {
                    *is_assigned = true;
                    limits[vehicle.index] = vehicle.max_distance;
                }
                Some(_) => return Err(format!("vehicle index {} is used twice", vehicle.index).into()),
                None => {
                    return Err(format!("vehicle '{}' has unassigned index {}", vehicle.id, vehicle.index).into());
                }
            }
        }

        Ok(Self { transport, limits })
    }
}

impl Constraint for MaxDistanceConstraint {
    fn name(&self) -> &str {
        "max_distance"
    }

    fn as_hard_activity(&self) -> Option<&dyn HardActivityConstraint> {
        Some(self)
    }
}

impl MaxDistanceConstraint {
    /// Returns distance added by already placed pickup of a shipment when target is its delivery.
    /// Route distance states do not include the pickup as it is not yet in the tour.
    fn pickup_delta(&self, ctx: &JobInsertionContext, activity_ctx: &ActivityContext) -> Distance {
        let (Some(related), JobVariant::Shipment { pickup, .. }) = (ctx.related, &ctx.job.variant) else { return 0. };
        if activity_ctx.target.kind != ActivityKind::Delivery {
            return 0.;
        }

        let actor = ctx.new_actor.as_ref();
        let tour = &ctx.route_ctx.route().tour;
        let (Some(prev), Some(next)) = (tour.get(related.index), tour.get(related.index + 1)) else { return 0. };

        let (prev_loc, next_loc) = (&prev.place.location, &next.place.location);
        let pickup_loc = pickup.location.unwrap_or(*prev_loc);
        let prev_pickup = self.transport.distance(actor, prev_loc, &pickup_loc, related.arrival);

        if next.kind == ActivityKind::End && !actor.vehicle.returns_to_depot {
            prev_pickup
        } else {
            prev_pickup + self.transport.distance(actor, &pickup_loc, next_loc, related.departure)
                - self.transport.distance(actor, prev_loc, next_loc, related.arrival)
        }
    }
}

impl HardActivityConstraint for MaxDistanceConstraint {
    fn evaluate_activity(&self, ctx: &JobInsertionContext, activity_ctx: &ActivityContext) -> ConstraintStatus {
        let actor = ctx.new_actor.as_ref();
        let vehicle_idx = actor.vehicle.index;
        let Some(limit) = self.limits.get(vehicle_idx).copied().flatten() else { return ConstraintStatus::Fulfilled };

        let (prev, target, next) = (activity_ctx.prev, activity_ctx.target, activity_ctx.next);
        let departure = activity_ctx.prev_departure;
        let state = ctx.route_ctx.state();

        let pickup_delta = self.pickup_delta(ctx, activity_ctx);
        let prev_target = self.transport.distance(actor, &prev.place.location, &target.place.location, departure);

        // NOTE travelled distance till prev only grows with position
        if !activity_ctx.is_prev_sibling() {
            let traveled = state.activity_scalar(StateKey::TraveledDistance, Some(vehicle_idx), activity_ctx.index);
            let pickup_before = ctx.related.is_some_and(|related| related.index < activity_ctx.index);
            let traveled = if pickup_before { traveled + pickup_delta } else { traveled };

            if traveled + prev_target > limit {
                return ConstraintStatus::NotFulfilledBreak;
            }
        }

        let delta = if activity_ctx.is_open_end(actor) {
            prev_target
        } else {
            let (prev_loc, target_loc, next_loc) = (&prev.place.location, &target.place.location, &next.place.location);
            prev_target + self.transport.distance(actor, target_loc, next_loc, departure)
                - self.transport.distance(actor, prev_loc, next_loc, departure)
        };

        let current = state.route_scalar(StateKey::TotalDistance, Some(vehicle_idx));

        if current + pickup_delta + delta > limit {
            ConstraintStatus::NotFulfilled
        } else {
            ConstraintStatus::Fulfilled
        }
    }
}

/// Checks max route duration of candidate vehicle: the schedule is replayed from target till
/// the route end, so waiting for time windows and the shift of following activities are counted.
pub struct MaxDurationConstraint {
    transport: Arc<dyn TransportCost>,
    activity: Arc<dyn ActivityCost>,
    policy: ActivityStartPolicy,
}

impl MaxDurationConstraint {
    /// Creates a new instance of `MaxDurationConstraint` which waits for time window opening.
    pub fn new(transport: Arc<dyn TransportCost>, activity: Arc<dyn ActivityCost>) -> Self {
        Self { transport, activity, policy: ActivityStartPolicy::default() }
    }

    /// Sets activity start policy, it has to match the one used by the schedule updater.
    pub fn with_policy(mut self, policy: ActivityStartPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns departure from the route end when target is inserted.
    fn end_departure(&self, ctx: &JobInsertionContext, activity_ctx: &ActivityContext) -> Timestamp {
        let actor = ctx.new_actor.as_ref();
        let can_reuse_schedule = !ctx.is_vehicle_switch();

        let from = actor_location(actor, activity_ctx.prev);
        let (mut location, mut departure) =
            self.departure(actor, &from, activity_ctx.prev_departure, activity_ctx.target);

        let tour = &ctx.route_ctx.route().tour;
        for activity in tour.all_activities().skip(activity_ctx.index + 1) {
            if activity.kind == ActivityKind::End && !actor.vehicle.returns_to_depot {
                break;
            }

            (location, departure) = self.departure(actor, &location, departure, activity);

            // NOTE the rest of the schedule is not affected
            if can_reuse_schedule && departure <= activity.schedule.departure {
                return tour.end().schedule.departure;
            }
        }

        departure
    }

    /// Returns location and departure of activity reached from given location.
    fn departure(
        &self,
        actor: &Actor,
        from: &Location,
        departure: Timestamp,
        activity: &Activity,
    ) -> (Location, Timestamp) {
        let location = actor_location(actor, activity);
        let arrival = departure
            + self.transport.duration(actor, from, &location, departure)
            + setup_time(actor, from, activity);
        let start = self.policy.operation_start(arrival, &activity.select_time_window(arrival));
        let duration =
            if activity.kind == ActivityKind::End { 0. } else { self.activity.duration(actor, activity, arrival) };

        (location, start + duration)
    }
}

/// Returns activity location where route start and end are taken from the actor's vehicle.
fn actor_location(actor: &Actor, activity: &Activity) -> Location {
    match activity.kind {
        ActivityKind::Start => actor.vehicle.start,
        ActivityKind::End => actor.vehicle.end,
        _ => activity.place.location,
    }
}

impl Constraint for MaxDurationConstraint {
    fn name(&self) -> &str {
        "max_duration"
    }

    fn as_hard_activity(&self) -> Option<&dyn HardActivityConstraint> {
        Some(self)
    }
}

impl HardActivityConstraint for MaxDurationConstraint {
    fn evaluate_activity(&self, ctx: &JobInsertionContext, activity_ctx: &ActivityContext) -> ConstraintStatus {
        let Some(limit) = ctx.new_actor.vehicle.max_duration else { return ConstraintStatus::Fulfilled };

        let duration = self.end_departure(ctx, activity_ctx) - ctx.new_departure;

        if duration > limit { ConstraintStatus::NotFulfilled } else { ConstraintStatus::Fulfilled }
    }
}
