#[cfg(test)]
#[path = "../../../tests/unit/construction/states/time_in_vehicle_test.rs"]
mod time_in_vehicle_test;

use crate::construction::heuristics::RouteContext;
use crate::construction::states::{StateKey, StateUpdater, StateValue};
use crate::models::solution::{ActivityKind, Tour};
use crate::utils::Float;

/// Calculates, for every activity, how much later the following activities can be served
/// without violating max time in vehicle of shipments which are on board after the activity.
#[derive(Default)]
pub struct TimeInVehicleUpdater {}

fn calculate_slacks(tour: &Tour) -> Vec<Float> {
    let mut slacks = vec![Float::MAX; tour.total()];

    tour.jobs().iter().filter(|job| job.max_time_in_vehicle.is_some()).for_each(|job| {
        let indices = tour.job_activity_indices(job);
        let (Some(&pickup_idx), Some(&delivery_idx)) = (indices.first(), indices.last()) else { return };
        let (Some(pickup), Some(delivery)) = (tour.get(pickup_idx), tour.get(delivery_idx)) else { return };

        if pickup.kind != ActivityKind::Pickup || delivery.kind != ActivityKind::Delivery {
            return;
        }

        let max_time = job.max_time_in_vehicle.unwrap_or(Float::MAX);
        let slack = max_time - (delivery.schedule.start - pickup.schedule.departure);

        slacks[pickup_idx..delivery_idx].iter_mut().for_each(|value| *value = value.min(slack));
    });

    slacks
}

impl StateUpdater for TimeInVehicleUpdater {
    fn update_route(&self, route_ctx: &mut RouteContext) {
        let slacks = calculate_slacks(&route_ctx.route().tour);

        route_ctx.state_mut().set_activity_states(
            StateKey::TimeInVehicleSlack,
            None,
            slacks.into_iter().map(StateValue::Scalar).collect(),
        );
    }
}
