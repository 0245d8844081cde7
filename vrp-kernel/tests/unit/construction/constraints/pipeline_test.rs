use super::*;
use crate::construction::heuristics::RouteContext;
use crate::helpers::construction::with_activity_ctx;
use crate::helpers::models::problem::*;
use crate::helpers::utils::create_test_environment;
use crate::models::problem::{Costs, JobBuilder, ProblemBuilder, VehicleBuilder};

fn create_problem(vehicle: VehicleBuilder) -> Problem {
    ProblemBuilder::default().add_job(JobBuilder::service("job0", test_place(20.))).add_vehicle(vehicle).build().unwrap()
}

fn create_empty_route(problem: &Problem, states: &StateManager) -> RouteContext {
    let mut route_ctx = RouteContext::new(problem.fleet.actors[0].clone());
    states.update_route(&mut route_ctx);

    route_ctx
}

parameterized_test! {can_add_max_distance_only_when_defined, (max_distance, expected), {
    let vehicle = test_vehicle_builder(0);
    let vehicle = match max_distance {
        Some(distance) => vehicle.max_distance(distance),
        None => vehicle,
    };
    let problem = create_problem(vehicle);
    let (states, constraints) = create_default_pipeline(&problem, &create_test_environment()).unwrap();
    let actor = problem.fleet.actors[0].clone();
    let route_ctx = create_empty_route(&problem, &states);

    let status = with_activity_ctx(&route_ctx, &problem.jobs[0], &actor, 0, |ctx, activity_ctx| {
        constraints.check_activity(ctx, activity_ctx)
    });

    assert_eq!(status, expected);
}}

can_add_max_distance_only_when_defined! {
    case01_no_limit: (None, ConstraintStatus::Fulfilled),
    case02_too_far: (Some(15.), ConstraintStatus::NotFulfilledBreak),
    case03_exact_limit: (Some(40.), ConstraintStatus::Fulfilled),
}

#[test]
fn can_estimate_costs_with_default_pipeline() {
    let problem = create_problem(test_vehicle_builder(0).costs(Costs { fixed: 100., ..Costs::default() }));
    let (states, constraints) = create_default_pipeline(&problem, &create_test_environment()).unwrap();
    let actor = problem.fleet.actors[0].clone();
    let route_ctx = create_empty_route(&problem, &states);

    let (route_cost, activity_cost, is_route_ok) =
        with_activity_ctx(&route_ctx, &problem.jobs[0], &actor, 0, |ctx, activity_ctx| {
            (constraints.cost_route(ctx), constraints.cost_activity(ctx, activity_ctx), constraints.check_route(ctx))
        });

    assert_eq!(route_cost, 100.);
    assert_eq!(activity_cost, 40.);
    assert!(is_route_ok);
}

#[test]
fn can_update_all_states_with_default_pipeline() {
    let problem = create_problem(test_vehicle_builder(0).max_duration(100.));
    let (states, _) = create_default_pipeline(&problem, &create_test_environment()).unwrap();
    let mut route_ctx = RouteContext::new(problem.fleet.actors[0].clone());
    route_ctx.route_mut().tour.insert_job_last(&problem.jobs[0]);

    states.update_route(&mut route_ctx);

    let state = route_ctx.state();
    assert_eq!(state.route_scalar(StateKey::TotalDuration, None), 40.);
    assert_eq!(state.route_scalar(StateKey::TotalDistance, Some(0)), 40.);
    assert_eq!(state.activity_scalar(StateKey::LatestStart, Some(0), 1), 980.);
    assert!(state.route_frequency(StateKey::Skills).is_some());
}
