#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/evaluators_test.rs"]
mod evaluators_test;

use crate::construction::constraints::{Constraint, SoftActivityConstraint};
use crate::construction::heuristics::{ActivityContext, JobInsertionContext};
use crate::construction::states::estimate_arrival;
use crate::models::common::{Cost, Timestamp};
use crate::models::problem::{Actor, ActivityCost, TransportCost};
use crate::models::solution::{Activity, ActivityKind};
use std::sync::Arc;

/// Evaluates marginal transport and time window cost of placing an activity between two others.
pub struct InsertionCostEvaluator {
    transport: Arc<dyn TransportCost>,
    activity: Arc<dyn ActivityCost>,
}

impl InsertionCostEvaluator {
    /// Creates a new instance of `InsertionCostEvaluator`.
    pub fn new(transport: Arc<dyn TransportCost>, activity: Arc<dyn ActivityCost>) -> Self {
        Self { transport, activity }
    }

    /// Returns marginal cost: `cost(prev, target) + cost(target, next) + waiting costs - cost(prev, next)`.
    /// When next is the end of an open route, only `cost(prev, target)` with target waiting cost
    /// is returned as there is no leg to the end. Service cost does not depend on insertion place
    /// and is not included.
    pub fn evaluate(&self, ctx: &JobInsertionContext, activity_ctx: &ActivityContext) -> Cost {
        let actor = ctx.new_actor.as_ref();
        let (prev, target, next) = (activity_ctx.prev, activity_ctx.target, activity_ctx.next);
        let prev_departure = activity_ctx.prev_departure;

        let prev_target = self.transport.cost(actor, &prev.place.location, &target.place.location, prev_departure);
        let target_arrival = self.arrival(actor, prev, prev_departure, target);
        let target_cost = self.activity.waiting_cost(actor, target, target_arrival);

        if activity_ctx.is_open_end(actor) {
            return prev_target + target_cost;
        }

        let target_departure = target_arrival.max(target.select_time_window(target_arrival).start)
            + self.activity.duration(actor, target, target_arrival);
        let target_next = self.transport.cost(actor, &target.place.location, &next.place.location, target_departure);
        let next_cost = self.soft_time_window_cost(actor, next, self.arrival(actor, target, target_departure, next));

        let new_costs = prev_target + target_next + target_cost + next_cost;

        let route = ctx.route_ctx.route();
        let old_costs = if !route.tour.has_jobs() || activity_ctx.is_prev_sibling() {
            self.leg_cost(actor, prev, prev_departure, next)
        } else {
            self.leg_cost(route.actor.as_ref(), prev, prev.schedule.departure, next)
        };

        new_costs - old_costs
    }

    fn leg_cost(&self, actor: &Actor, prev: &Activity, departure: Timestamp, next: &Activity) -> Cost {
        let arrival = self.arrival(actor, prev, departure, next);

        self.transport.cost(actor, &prev.place.location, &next.place.location, departure)
            + self.soft_time_window_cost(actor, next, arrival)
    }

    fn soft_time_window_cost(&self, actor: &Actor, activity: &Activity, arrival: Timestamp) -> Cost {
        if activity.kind == ActivityKind::End { 0. } else { self.activity.waiting_cost(actor, activity, arrival) }
    }

    fn arrival(&self, actor: &Actor, from: &Activity, departure: Timestamp, to: &Activity) -> Timestamp {
        estimate_arrival(self.transport.as_ref(), actor, &from.place.location, departure, to)
    }
}

impl Constraint for InsertionCostEvaluator {
    fn name(&self) -> &str {
        "insertion_cost"
    }

    fn as_soft_activity(&self) -> Option<&dyn SoftActivityConstraint> {
        Some(self)
    }
}

impl SoftActivityConstraint for InsertionCostEvaluator {
    fn estimate_activity(&self, ctx: &JobInsertionContext, activity_ctx: &ActivityContext) -> Cost {
        self.evaluate(ctx, activity_ctx)
    }
}
