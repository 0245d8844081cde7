#[cfg(test)]
#[path = "../../../tests/unit/construction/states/distance_test.rs"]
mod distance_test;

use crate::construction::heuristics::RouteContext;
use crate::construction::states::{StateKey, StateUpdater, StateValue};
use crate::models::common::Distance;
use crate::models::problem::{Actor, TransportCost};
use crate::models::solution::{ActivityKind, Tour};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Returns distance travelled till every activity of the tour by given actor.
/// The leg to the end of an open route is not counted.
pub fn traveled_distances(tour: &Tour, transport: &dyn TransportCost, actor: &Actor) -> Vec<Distance> {
    std::iter::once(0.)
        .chain(tour.legs().scan(0., |total, leg| {
            let (prev, next) = (&leg[0], &leg[1]);

            if next.kind != ActivityKind::End || actor.vehicle.returns_to_depot {
                *total += transport.distance(actor, &prev.place.location, &next.place.location, prev.schedule.departure);
            }

            Some(*total)
        }))
        .collect()
}

/// Returns total distance of the tour for given actor.
pub fn route_distance(tour: &Tour, transport: &dyn TransportCost, actor: &Actor) -> Distance {
    traveled_distances(tour, transport, actor).last().copied().unwrap_or(0.)
}

/// Calculates travelled and total distance per candidate vehicle.
pub struct DistanceUpdater {
    transport: Arc<dyn TransportCost>,
    actors: Vec<Arc<Actor>>,
}

impl DistanceUpdater {
    /// Creates a new instance of `DistanceUpdater`.
    pub fn new(transport: Arc<dyn TransportCost>, actors: Vec<Arc<Actor>>) -> Self {
        let mut seen = FxHashSet::default();
        let actors = actors.into_iter().filter(|actor| seen.insert(actor.vehicle.index)).collect();

        Self { transport, actors }
    }
}

impl StateUpdater for DistanceUpdater {
    fn update_route(&self, route_ctx: &mut RouteContext) {
        let route_actor = route_ctx.route().actor.clone();
        let states = std::iter::once(&route_actor)
            .chain(self.actors.iter().filter(|actor| actor.vehicle.index != route_actor.vehicle.index))
            .map(|actor| {
                (actor.vehicle.index, traveled_distances(&route_ctx.route().tour, self.transport.as_ref(), actor))
            })
            .collect::<Vec<_>>();

        let state = route_ctx.state_mut();
        states.into_iter().for_each(|(vehicle_idx, distances)| {
            let total = distances.last().copied().unwrap_or(0.);

            state.set_route_state(StateKey::TotalDistance, Some(vehicle_idx), StateValue::Scalar(total));
            state.set_activity_states(
                StateKey::TraveledDistance,
                Some(vehicle_idx),
                distances.into_iter().map(StateValue::Scalar).collect(),
            );
        });
    }
}
