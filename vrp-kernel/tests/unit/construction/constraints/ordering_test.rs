use super::*;
use crate::construction::heuristics::RouteContext;
use crate::helpers::models::problem::*;
use crate::helpers::models::solution::*;
use crate::models::problem::Job;

fn evaluate(
    constraint: &dyn HardActivityConstraint,
    route_ctx: &RouteContext,
    job: &Job,
    target_idx: usize,
    index: usize,
) -> ConstraintStatus {
    let actor = route_ctx.route().actor.clone();
    let tour = &route_ctx.route().tour;
    let target = Activity::from_job(job, test_location(0.)).remove(target_idx);
    let ctx = JobInsertionContext::new(route_ctx, job, &actor).with_insertion_index(index);
    let activity_ctx = ActivityContext {
        index,
        prev: tour.get(index).unwrap(),
        target: &target,
        next: tour.get(index + 1).unwrap(),
        prev_departure: 0.,
    };

    constraint.evaluate_activity(&ctx, &activity_ctx)
}

parameterized_test! {can_keep_deliveries_first, (job, index, expected), {
    let route_ctx = create_updated_route_ctx(test_actor_with_capacity(10), &[test_delivery(0, 1., 1), test_pickup(1, 2., 1)]);

    let status = evaluate(&ServiceDeliveriesFirstConstraint::default(), &route_ctx, &job, 0, index);

    assert_eq!(status, expected);
}}

can_keep_deliveries_first! {
    case01_pickup_before_delivery: (test_pickup(2, 3., 1), 0, ConstraintStatus::NotFulfilled),
    case02_service_before_delivery: (test_service(2, 3.), 0, ConstraintStatus::NotFulfilled),
    case03_delivery_after_pickup: (test_delivery(2, 3., 1), 2, ConstraintStatus::NotFulfilledBreak),
    case04_delivery_between: (test_delivery(2, 3., 1), 1, ConstraintStatus::Fulfilled),
    case05_pickup_between: (test_pickup(2, 3., 1), 1, ConstraintStatus::Fulfilled),
    case06_shipment_pickup_anywhere: (test_shipment(2, 3., 4., 1), 0, ConstraintStatus::Fulfilled),
}

parameterized_test! {can_keep_shipment_pickups_first, (target_idx, index, expected), {
    let route_ctx = create_updated_route_ctx(test_actor_with_capacity(10), &[test_shipment(0, 1., 2., 1)]);
    let job = test_shipment(1, 3., 4., 1);

    let status = evaluate(&ShipmentPickupsFirstConstraint::default(), &route_ctx, &job, target_idx, index);

    assert_eq!(status, expected);
}}

can_keep_shipment_pickups_first! {
    case01_pickup_after_delivery: (0, 2, ConstraintStatus::NotFulfilledBreak),
    case02_delivery_before_pickup: (1, 0, ConstraintStatus::NotFulfilled),
    case03_pickup_before_pickup: (0, 0, ConstraintStatus::Fulfilled),
    case04_delivery_between: (1, 1, ConstraintStatus::Fulfilled),
    case05_delivery_at_end: (1, 2, ConstraintStatus::Fulfilled),
}
