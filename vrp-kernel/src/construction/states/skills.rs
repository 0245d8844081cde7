use crate::construction::heuristics::RouteContext;
use crate::construction::states::{StateKey, StateUpdater, StateValue};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Accumulates skills required by jobs of the route: skill to amount of jobs which require it.
#[derive(Default)]
pub struct SkillsUpdater {}

impl StateUpdater for SkillsUpdater {
    fn update_route(&self, route_ctx: &mut RouteContext) {
        let frequency = route_ctx.route().tour.jobs().iter().flat_map(|job| job.skills.iter()).fold(
            FxHashMap::<String, usize>::default(),
            |mut acc, skill| {
                *acc.entry(skill.clone()).or_insert(0) += 1;
                acc
            },
        );

        route_ctx.state_mut().set_route_state(StateKey::Skills, None, StateValue::Frequency(Arc::new(frequency)));
    }
}
