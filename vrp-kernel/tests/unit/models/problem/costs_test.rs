use super::*;
use crate::helpers::models::problem::*;
use crate::models::problem::{Actor, Costs, Driver, JobPlace};
use crate::models::solution::Activity;
use std::sync::Arc;

fn actor_with_costs(costs: Costs) -> Actor {
    Actor::new(Arc::new(test_vehicle_builder(0).costs(costs).build(0).unwrap()), Arc::new(Driver::empty()))
}

#[test]
fn can_calculate_euclidean_costs() {
    let actor = actor_with_costs(Costs { per_distance: 2., per_driving_time: 1., ..Costs::empty() });
    let transport = EuclideanTransportCost::new(2.).unwrap();
    let (from, to) = (Location::with_coordinate(0, 0., 0.), Location::with_coordinate(1, 3., 4.));

    assert_eq!(transport.distance(&actor, &from, &to, 0.), 5.);
    assert_eq!(transport.duration(&actor, &from, &to, 0.), 2.5);
    assert_eq!(transport.backward_duration(&actor, &from, &to, 0.), 2.5);
    assert_eq!(transport.cost(&actor, &from, &to, 0.), 12.5);
}

#[test]
fn can_use_zero_distance_for_missing_coordinates() {
    let actor = actor_with_costs(Costs::default());
    let transport = EuclideanTransportCost::default();

    assert_eq!(transport.distance(&actor, &Location::new(0), &Location::with_coordinate(1, 3., 4.), 0.), 0.);
}

parameterized_test! {can_validate_euclidean_speed, (speed, is_valid), {
    assert_eq!(EuclideanTransportCost::new(speed).is_ok(), is_valid);
}}

can_validate_euclidean_speed! {
    case01: (1., true),
    case02: (0., false),
    case03: (-1., false),
    case04: (Float::INFINITY, false),
}

#[test]
fn can_use_matrix_costs() {
    let actor = actor_with_costs(Costs::default());
    let transport = MatrixTransportCost::new(vec![0., 1., 2., 0.], vec![0., 10., 20., 0.]).unwrap();

    assert_eq!(transport.size(), 2);
    assert_eq!(transport.duration(&actor, &Location::new(0), &Location::new(1), 0.), 1.);
    assert_eq!(transport.distance(&actor, &Location::new(1), &Location::new(0), 0.), 20.);
    assert_eq!(transport.distance(&actor, &Location::new(0), &Location::new(2), 0.), Float::MAX);
}

parameterized_test! {can_validate_matrix, (durations, distances, is_valid), {
    assert_eq!(MatrixTransportCost::new(durations, distances).is_ok(), is_valid);
}}

can_validate_matrix! {
    case01: (vec![0., 1., 1., 0.], vec![0., 1., 1., 0.], true),
    case02: (vec![0., 1., 1.], vec![0., 1., 1.], false),
    case03: (vec![0., 1., 1., 0.], vec![0.], false),
    case04: (vec![0., -1., 1., 0.], vec![0., 1., 1., 0.], false),
}

#[test]
fn can_calculate_activity_cost_with_waiting_and_service() {
    let actor = actor_with_costs(Costs { per_waiting_time: 2., per_service_time: 3., ..Costs::empty() });
    let job = build_job(
        crate::models::problem::JobBuilder::service("job", test_place_with_time(1., 5., TimeWindow::new(10., 20.))),
        0,
    );
    let activity = Activity::from_job(&job, test_location(0.)).remove(0);
    let activity_cost = SimpleActivityCost::default();

    assert_eq!(activity_cost.duration(&actor, &activity, 4.), 5.);
    assert_eq!(activity_cost.cost(&actor, &activity, 4.), 6. * 2. + 5. * 3.);
    assert_eq!(activity_cost.cost(&actor, &activity, 12.), 5. * 3.);
}

#[test]
fn can_calculate_waiting_cost_for_selected_time_window() {
    let actor = actor_with_costs(Costs { per_waiting_time: 2., per_service_time: 3., ..Costs::empty() });
    let times = vec![TimeWindow::new(0., 2.), TimeWindow::new(10., 20.)];
    let job = build_job(
        crate::models::problem::JobBuilder::service("job", JobPlace::new(Some(test_location(1.)), 5., times)),
        0,
    );
    let activity = Activity::from_job(&job, test_location(0.)).remove(0);
    let activity_cost = SimpleActivityCost::default();

    assert_eq!(activity_cost.waiting_cost(&actor, &activity, 1.), 0.);
    assert_eq!(activity_cost.waiting_cost(&actor, &activity, 4.), 6. * 2.);
    assert_eq!(activity_cost.cost(&actor, &activity, 4.), 6. * 2. + 5. * 3.);
}
