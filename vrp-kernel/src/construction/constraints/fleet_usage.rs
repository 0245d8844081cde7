#[cfg(test)]
#[path = "../../../tests/unit/construction/constraints/fleet_usage_test.rs"]
mod fleet_usage_test;

use crate::construction::constraints::*;
use crate::construction::heuristics::JobInsertionContext;
use crate::models::common::Cost;
use crate::models::problem::Actor;

/// Forbids moving a non empty route to another vehicle.
#[derive(Default)]
pub struct VehicleSwitchConstraint {}

impl Constraint for VehicleSwitchConstraint {
    fn name(&self) -> &str {
        "vehicle_switch"
    }

    fn as_hard_route(&self) -> Option<&dyn HardRouteConstraint> {
        Some(self)
    }
}

impl HardRouteConstraint for VehicleSwitchConstraint {
    fn evaluate_job(&self, ctx: &JobInsertionContext) -> bool {
        !ctx.route_ctx.route().tour.has_jobs() || !ctx.is_vehicle_switch()
    }
}

/// Adds fixed cost of a vehicle when it starts to be used or when route is moved to another vehicle.
#[derive(Default)]
pub struct FixedCostConstraint {}

fn fixed_cost(actor: &Actor) -> Cost {
    actor.vehicle.costs.fixed + actor.driver.costs.fixed
}

impl Constraint for FixedCostConstraint {
    fn name(&self) -> &str {
        "fixed_cost"
    }

    fn as_soft_route(&self) -> Option<&dyn SoftRouteConstraint> {
        Some(self)
    }
}

impl SoftRouteConstraint for FixedCostConstraint {
    fn estimate_job(&self, ctx: &JobInsertionContext) -> Cost {
        let route = ctx.route_ctx.route();

        if !route.tour.has_jobs() {
            fixed_cost(ctx.new_actor)
        } else if ctx.is_vehicle_switch() {
            fixed_cost(ctx.new_actor) - fixed_cost(&route.actor)
        } else {
            0.
        }
    }
}
