#[cfg(test)]
#[path = "../../../tests/unit/construction/constraints/time_in_vehicle_test.rs"]
mod time_in_vehicle_test;

use crate::construction::constraints::*;
use crate::construction::heuristics::{ActivityContext, JobInsertionContext};
use crate::construction::states::{StateKey, estimate_arrival};
use crate::models::problem::{ActivityCost, TransportCost};
use crate::models::solution::ActivityKind;
use crate::utils::Float;
use std::sync::Arc;

/// Checks max time in vehicle of shipments: both of the inserted one and of the ones already
/// on board which are delayed by insertion.
pub struct MaxTimeInVehicleConstraint {
    transport: Arc<dyn TransportCost>,
    activity: Arc<dyn ActivityCost>,
}

impl MaxTimeInVehicleConstraint {
    /// Creates a new instance of `MaxTimeInVehicleConstraint`.
    pub fn new(transport: Arc<dyn TransportCost>, activity: Arc<dyn ActivityCost>) -> Self {
        Self { transport, activity }
    }
}

impl Constraint for MaxTimeInVehicleConstraint {
    fn name(&self) -> &str {
        "max_time_in_vehicle"
    }

    fn as_hard_activity(&self) -> Option<&dyn HardActivityConstraint> {
        Some(self)
    }
}

impl HardActivityConstraint for MaxTimeInVehicleConstraint {
    fn evaluate_activity(&self, ctx: &JobInsertionContext, activity_ctx: &ActivityContext) -> ConstraintStatus {
        let actor = ctx.new_actor.as_ref();
        let transport = self.transport.as_ref();
        let (prev, target, next) = (activity_ctx.prev, activity_ctx.target, activity_ctx.next);

        let arrival = estimate_arrival(transport, actor, &prev.place.location, activity_ctx.prev_departure, target);
        let start = arrival.max(target.select_time_window(arrival).start);

        if target.kind == ActivityKind::Delivery && target.is_shipment() {
            let limit = ctx.job.max_time_in_vehicle;
            if let (Some(limit), Some(related)) = (limit, ctx.related) {
                if start - related.departure > limit {
                    return ConstraintStatus::NotFulfilledBreak;
                }
            }
        }

        if activity_ctx.is_open_end(actor) {
            return ConstraintStatus::Fulfilled;
        }

        let slack = ctx.route_ctx.state().activity_scalar(StateKey::TimeInVehicleSlack, None, activity_ctx.index);
        if slack == Float::MAX {
            return ConstraintStatus::Fulfilled;
        }

        let departure = start + self.activity.duration(actor, target, arrival);
        let next_arrival = estimate_arrival(transport, actor, &target.place.location, departure, next);
        let delay = next_arrival.max(next.select_time_window(next_arrival).start) - next.schedule.start;

        if delay > slack { ConstraintStatus::NotFulfilled } else { ConstraintStatus::Fulfilled }
    }
}
