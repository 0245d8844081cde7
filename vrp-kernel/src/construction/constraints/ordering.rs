#[cfg(test)]
#[path = "../../../tests/unit/construction/constraints/ordering_test.rs"]
mod ordering_test;

use crate::construction::constraints::*;
use crate::construction::heuristics::{ActivityContext, JobInsertionContext};
use crate::models::solution::{Activity, ActivityKind};

/// Keeps deliveries loaded at the depot before any pickup or service in the route.
#[derive(Default)]
pub struct ServiceDeliveriesFirstConstraint {}

impl Constraint for ServiceDeliveriesFirstConstraint {
    fn name(&self) -> &str {
        "deliveries_first"
    }

    fn as_hard_activity(&self) -> Option<&dyn HardActivityConstraint> {
        Some(self)
    }
}

impl HardActivityConstraint for ServiceDeliveriesFirstConstraint {
    fn evaluate_activity(&self, _: &JobInsertionContext, activity_ctx: &ActivityContext) -> ConstraintStatus {
        let (prev, target, next) = (activity_ctx.prev, activity_ctx.target, activity_ctx.next);

        if target.is_depot_pickup() && next.is_depot_delivery() {
            ConstraintStatus::NotFulfilled
        } else if target.is_depot_delivery() && prev.is_depot_pickup() {
            ConstraintStatus::NotFulfilledBreak
        } else {
            ConstraintStatus::Fulfilled
        }
    }
}

/// Keeps all shipment pickups before any shipment delivery in the route.
#[derive(Default)]
pub struct ShipmentPickupsFirstConstraint {}

fn is_shipment_activity(activity: &Activity, kind: ActivityKind) -> bool {
    activity.kind == kind && activity.is_shipment()
}

impl Constraint for ShipmentPickupsFirstConstraint {
    fn name(&self) -> &str {
        "pickups_first"
    }

    fn as_hard_activity(&self) -> Option<&dyn HardActivityConstraint> {
        Some(self)
    }
}

impl HardActivityConstraint for ShipmentPickupsFirstConstraint {
    fn evaluate_activity(&self, _: &JobInsertionContext, activity_ctx: &ActivityContext) -> ConstraintStatus {
        let (prev, target, next) = (activity_ctx.prev, activity_ctx.target, activity_ctx.next);

        if is_shipment_activity(target, ActivityKind::Delivery) && is_shipment_activity(next, ActivityKind::Pickup) {
            ConstraintStatus::NotFulfilled
        } else if is_shipment_activity(target, ActivityKind::Pickup)
            && is_shipment_activity(prev, ActivityKind::Delivery)
        {
            ConstraintStatus::NotFulfilledBreak
        } else {
            ConstraintStatus::Fulfilled
        }
    }
}
