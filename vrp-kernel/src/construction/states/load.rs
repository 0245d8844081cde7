#[cfg(test)]
#[path = "../../../tests/unit/construction/states/load_test.rs"]
mod load_test;

use crate::construction::heuristics::RouteContext;
use crate::construction::states::{StateKey, StateUpdater, StateValue};
use crate::models::common::Load;
use crate::models::solution::Tour;

/// Calculates load at route start and end, load after every activity and its rolling extremes.
#[derive(Default)]
pub struct LoadUpdater {}

/// Keeps load profile of a tour.
pub struct LoadProfile {
    /// Load at route start.
    pub beginning: Load,
    /// Load at route end.
    pub end: Load,
    /// Load after every activity.
    pub current: Vec<Load>,
    /// Max load from route start till activity, inclusive.
    pub past_max: Vec<Load>,
    /// Max load from activity till route end, inclusive.
    pub future_max: Vec<Load>,
}

impl LoadProfile {
    /// Calculates load profile of the tour.
    pub fn new(tour: &Tour) -> Self {
        let beginning = tour
            .all_activities()
            .filter(|activity| activity.is_depot_delivery())
            .map(|activity| -activity.load_change)
            .sum::<Load>();
        let end = tour
            .all_activities()
            .filter(|activity| activity.is_depot_pickup())
            .map(|activity| activity.load_change)
            .sum::<Load>();

        let current = tour
            .all_activities()
            .scan(beginning, |load, activity| {
                *load = *load + activity.load_change;
                Some(*load)
            })
            .collect::<Vec<_>>();

        let past_max = current
            .iter()
            .scan(Load::default(), |max, load| {
                *max = max.max_load(*load);
                Some(*max)
            })
            .collect::<Vec<_>>();

        let mut future_max = current
            .iter()
            .rev()
            .scan(Load::default(), |max, load| {
                *max = max.max_load(*load);
                Some(*max)
            })
            .collect::<Vec<_>>();
        future_max.reverse();

        Self { beginning, end, current, past_max, future_max }
    }
}

impl StateUpdater for LoadUpdater {
    fn update_route(&self, route_ctx: &mut RouteContext) {
        let profile = LoadProfile::new(&route_ctx.route().tour);
        let max_load = profile.future_max.first().copied().unwrap_or_default();

        let state = route_ctx.state_mut();
        let to_values = |loads: Vec<Load>| loads.into_iter().map(StateValue::Load).collect();

        state.set_route_state(StateKey::LoadAtBeginning, None, StateValue::Load(profile.beginning));
        state.set_route_state(StateKey::LoadAtEnd, None, StateValue::Load(profile.end));
        state.set_route_state(StateKey::MaxLoad, None, StateValue::Load(max_load));

        state.set_activity_states(StateKey::CurrentLoad, None, to_values(profile.current));
        state.set_activity_states(StateKey::PastMaxLoad, None, to_values(profile.past_max));
        state.set_activity_states(StateKey::FutureMaxLoad, None, to_values(profile.future_max));
    }
}
