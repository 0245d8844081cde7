#[cfg(test)]
#[path = "../../../tests/unit/construction/constraints/capacity_test.rs"]
mod capacity_test;

use crate::construction::constraints::*;
use crate::construction::heuristics::{ActivityContext, JobInsertionContext};
use crate::construction::states::StateKey;
use crate::models::common::Load;
use crate::models::problem::JobVariant;
use crate::models::solution::ActivityKind;

/// Checks vehicle capacity using cached load extremes:
/// * delivery loaded at route start increases load of every activity before it;
/// * pickup or service brought to route end increases load of every activity after it;
/// * shipment increases load between its pickup and delivery.
#[derive(Default)]
pub struct CapacityConstraint {}

impl Constraint for CapacityConstraint {
    fn name(&self) -> &str {
        "capacity"
    }

    fn as_hard_route(&self) -> Option<&dyn HardRouteConstraint> {
        Some(self)
    }

    fn as_hard_activity(&self) -> Option<&dyn HardActivityConstraint> {
        Some(self)
    }
}

impl HardRouteConstraint for CapacityConstraint {
    fn evaluate_job(&self, ctx: &JobInsertionContext) -> bool {
        let capacity = &ctx.new_actor.vehicle.capacity;
        let state = ctx.route_ctx.state();
        let size = ctx.job.size;

        let can_fit_job = match &ctx.job.variant {
            JobVariant::Delivery(_) => capacity.can_fit(&(state.route_load(StateKey::LoadAtBeginning) + size)),
            JobVariant::Pickup(_) | JobVariant::Service(_) => {
                capacity.can_fit(&(state.route_load(StateKey::LoadAtEnd) + size))
            }
            JobVariant::Shipment { .. } => capacity.can_fit(&size),
            JobVariant::Break(_) => true,
        };

        can_fit_job && (!ctx.is_vehicle_switch() || capacity.can_fit(&state.route_load(StateKey::MaxLoad)))
    }
}

impl HardActivityConstraint for CapacityConstraint {
    fn evaluate_activity(&self, ctx: &JobInsertionContext, activity_ctx: &ActivityContext) -> ConstraintStatus {
        let capacity = &ctx.new_actor.vehicle.capacity;
        let state = ctx.route_ctx.state();
        let target = activity_ctx.target;
        let prev_idx = activity_ctx.index;

        let (is_fit, failure) = match target.kind {
            ActivityKind::Delivery if !target.is_shipment() => {
                let load = state.activity_load(StateKey::PastMaxLoad, prev_idx) - target.load_change;
                (capacity.can_fit(&load), ConstraintStatus::NotFulfilledBreak)
            }
            ActivityKind::Pickup | ActivityKind::Service if !target.is_shipment() => {
                let load = state.activity_load(StateKey::FutureMaxLoad, prev_idx) + target.load_change;
                (capacity.can_fit(&load), ConstraintStatus::NotFulfilled)
            }
            ActivityKind::Pickup | ActivityKind::Service => {
                let load = state.activity_load(StateKey::CurrentLoad, prev_idx) + target.load_change;
                (capacity.can_fit(&load), ConstraintStatus::NotFulfilled)
            }
            ActivityKind::Delivery => {
                let start_idx = ctx.related.map_or(prev_idx, |related| related.index.min(prev_idx));
                let max_on_board = (start_idx..=prev_idx)
                    .map(|idx| state.activity_load(StateKey::CurrentLoad, idx))
                    .fold(Load::default(), |acc, load| acc.max_load(load));

                (capacity.can_fit(&(max_on_board - target.load_change)), ConstraintStatus::NotFulfilledBreak)
            }
            ActivityKind::Start | ActivityKind::End | ActivityKind::Break => (true, ConstraintStatus::Fulfilled),
        };

        if is_fit { ConstraintStatus::Fulfilled } else { failure }
    }
}
