use super::*;
use crate::helpers::models::problem::*;
use crate::helpers::models::solution::*;

fn get_traveled(route_ctx: &RouteContext, vehicle_idx: usize) -> Vec<Distance> {
    (0..route_ctx.route().tour.total())
        .map(|idx| route_ctx.state().activity_scalar(StateKey::TraveledDistance, Some(vehicle_idx), idx))
        .collect()
}

parameterized_test! {can_calculate_traveled_distances, (is_open, expected_traveled, expected_total), {
    let actor = if is_open { test_open_actor() } else { test_actor() };
    let jobs = vec![test_service(0, 10.), test_service(1, 4.)];
    let route_ctx = create_route_ctx(actor.clone(), &jobs);

    let traveled = traveled_distances(&route_ctx.route().tour, test_transport().as_ref(), &actor);
    let total = route_distance(&route_ctx.route().tour, test_transport().as_ref(), &actor);

    assert_eq!(traveled, expected_traveled);
    assert_eq!(total, expected_total);
}}

can_calculate_traveled_distances! {
    case01_closed: (false, vec![0., 10., 16., 20.], 20.),
    case02_open: (true, vec![0., 10., 16., 16.], 16.),
}

#[test]
fn can_update_distance_per_candidate_vehicle() {
    let actor = test_actor();
    let open = build_actor(test_vehicle_builder(1).open(), 1);
    let mut route_ctx = create_route_ctx(actor.clone(), &[test_service(0, 10.), test_service(1, 4.)]);

    DistanceUpdater::new(test_transport(), vec![actor, open]).update_route(&mut route_ctx);

    assert_eq!(route_ctx.state().route_scalar(StateKey::TotalDistance, Some(0)), 20.);
    assert_eq!(route_ctx.state().route_scalar(StateKey::TotalDistance, Some(1)), 16.);
    assert_eq!(get_traveled(&route_ctx, 0), vec![0., 10., 16., 20.]);
    assert_eq!(get_traveled(&route_ctx, 1), vec![0., 10., 16., 16.]);
}
