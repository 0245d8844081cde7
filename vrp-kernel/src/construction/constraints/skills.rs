#[cfg(test)]
#[path = "../../../tests/unit/construction/constraints/skills_test.rs"]
mod skills_test;

use crate::construction::constraints::*;
use crate::construction::heuristics::JobInsertionContext;
use crate::construction::states::StateKey;

/// Checks that candidate vehicle has all skills required by the job and by jobs already in the route.
#[derive(Default)]
pub struct SkillsConstraint {}

impl Constraint for SkillsConstraint {
    fn name(&self) -> &str {
        "skills"
    }

    fn as_hard_route(&self) -> Option<&dyn HardRouteConstraint> {
        Some(self)
    }
}

impl HardRouteConstraint for SkillsConstraint {
    fn evaluate_job(&self, ctx: &JobInsertionContext) -> bool {
        let vehicle_skills = &ctx.new_actor.vehicle.skills;

        let has_route_skills = ctx
            .route_ctx
            .state()
            .route_frequency(StateKey::Skills)
            .is_none_or(|skills| skills.keys().all(|skill| vehicle_skills.contains(skill)));

        has_route_skills && ctx.job.skills.iter().all(|skill| vehicle_skills.contains(skill))
    }
}
