#[cfg(test)]
#[path = "../../../tests/unit/construction/states/time_windows_test.rs"]
mod time_windows_test;

use crate::construction::heuristics::RouteContext;
use crate::construction::states::{StateKey, StateUpdater, StateValue};
use crate::models::common::{Location, TimeWindow, Timestamp};
use crate::models::problem::{Actor, ActivityCost, TransportCost};
use crate::models::solution::{ActivityKind, Tour};
use crate::utils::{Float, compare_floats};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Calculates practical time windows: latest operation start at every activity which keeps
/// the rest of the route feasible. Calculated separately for every candidate vehicle as they
/// have different operating times and speed.
pub struct PracticalTimeWindowUpdater {
    transport: Arc<dyn TransportCost>,
    activity: Arc<dyn ActivityCost>,
    actors: Vec<Arc<Actor>>,
}

impl PracticalTimeWindowUpdater {
    /// Creates a new instance of `PracticalTimeWindowUpdater` for given candidate actors.
    pub fn new(transport: Arc<dyn TransportCost>, activity: Arc<dyn ActivityCost>, actors: Vec<Arc<Actor>>) -> Self {
        let mut seen = FxHashSet::default();
        let actors = actors.into_iter().filter(|actor| seen.insert(actor.vehicle.index)).collect();

        Self { transport, activity, actors }
    }

    fn calculate(&self, tour: &Tour, actor: &Actor) -> Vec<Timestamp> {
        let vehicle = &actor.vehicle;
        let total = tour.total();
        let mut values = vec![Float::MAX; total];

        // NOTE open route has no requirement on arrival at the end
        let (mut latest, mut next): (Timestamp, Option<(Location, Float)>) = if vehicle.returns_to_depot {
            (vehicle.time.end, Some((vehicle.end, 0.)))
        } else {
            (Float::MAX, None)
        };

        values[total - 1] = latest;

        for idx in (0..total - 1).rev() {
            let Some(activity) = tour.get(idx) else { continue };
            let location = activity.place.location;

            let duration =
                if activity.kind == ActivityKind::Start { 0. } else { self.activity.duration(actor, activity, latest) };
            let travel = next.map_or(0., |(next_location, next_setup)| {
                let next_setup = if next_location != location { next_setup } else { 0. };
                self.transport.backward_duration(actor, &location, &next_location, latest) + next_setup
            });

            let potential = if latest == Float::MAX { Float::MAX } else { latest - travel - duration };

            latest = if activity.kind == ActivityKind::Start {
                vehicle.time.end.min(potential)
            } else {
                latest_operation_start(activity.time_windows(), potential)
            };
            values[idx] = latest;

            next = Some((location, activity.place.setup * vehicle.setup_coefficient));
        }

        values
    }
}

/// Returns the latest operation start not later than `potential` which is allowed by one of time windows.
fn latest_operation_start(windows: &[TimeWindow], potential: Timestamp) -> Timestamp {
    let latest = |time: &TimeWindow| time.end.min(potential);

    windows
        .iter()
        .filter(|time| time.start <= latest(*time))
        .map(latest)
        .max_by(|a, b| compare_floats(*a, *b))
        .unwrap_or_else(|| windows.first().map_or(potential, latest))
}

impl StateUpdater for PracticalTimeWindowUpdater {
    fn update_route(&self, route_ctx: &mut RouteContext) {
        let route_actor = route_ctx.route().actor.clone();
        let actors = std::iter::once(&route_actor)
            .chain(self.actors.iter().filter(|actor| actor.vehicle.index != route_actor.vehicle.index));

        let states = actors
            .map(|actor| (actor.vehicle.index, self.calculate(&route_ctx.route().tour, actor)))
            .collect::<Vec<_>>();

        let state = route_ctx.state_mut();
        states.into_iter().for_each(|(vehicle_idx, values)| {
            state.set_activity_states(
                StateKey::LatestStart,
                Some(vehicle_idx),
                values.into_iter().map(StateValue::Scalar).collect(),
            );
        });
    }
}
