#[cfg(test)]
#[path = "../../../tests/unit/construction/constraints/pipeline_test.rs"]
mod pipeline_test;

use crate::construction::constraints::*;
use crate::construction::heuristics::InsertionCostEvaluator;
use crate::construction::states::*;
use crate::models::Problem;
use crate::utils::{Environment, GenericResult};
use std::sync::Arc;

/// Creates state updaters and constraints needed to evaluate insertions for given problem.
/// Limit constraints are added only when some vehicle or job defines the limit.
pub fn create_default_pipeline(problem: &Problem, environment: &Environment) -> GenericResult<(StateManager, ConstraintManager)> {
    let transport = problem.transport.clone();
    let activity = problem.activity.clone();
    let actors = problem.fleet.actors.clone();

    let states = StateManager::new(vec![
        Arc::new(ScheduleUpdater::new(transport.clone(), activity.clone())),
        Arc::new(PracticalTimeWindowUpdater::new(transport.clone(), activity.clone(), actors.clone())),
        Arc::new(LoadUpdater::default()),
        Arc::new(DistanceUpdater::new(transport.clone(), actors)),
        Arc::new(SkillsUpdater::default()),
        Arc::new(TimeInVehicleUpdater::default()),
    ]);

    let mut constraints = ConstraintManager::new(environment.logger.clone());
    constraints
        .add_constraint(Arc::new(CapacityConstraint::default()), Priority::Critical)
        .add_constraint(Arc::new(SkillsConstraint::default()), Priority::Critical)
        .add_constraint(Arc::new(TimeWindowConstraint::new(transport.clone(), activity.clone())), Priority::High)
        .add_constraint(Arc::new(FixedCostConstraint::default()), Priority::Low)
        .add_constraint(Arc::new(InsertionCostEvaluator::new(transport.clone(), activity.clone())), Priority::Low);

    let vehicles = &problem.fleet.vehicles;

    if vehicles.iter().any(|vehicle| vehicle.max_distance.is_some()) {
        constraints.add_constraint(Arc::new(MaxDistanceConstraint::new(transport.clone(), vehicles)?), Priority::High);
    }

    if vehicles.iter().any(|vehicle| vehicle.max_duration.is_some()) {
        let constraint = MaxDurationConstraint::new(transport.clone(), activity.clone());
        constraints.add_constraint(Arc::new(constraint), Priority::High);
    }

    if problem.jobs.iter().any(|job| job.max_time_in_vehicle.is_some()) {
        constraints.add_constraint(Arc::new(MaxTimeInVehicleConstraint::new(transport, activity)), Priority::High);
    }

    Ok((states, constraints))
}
