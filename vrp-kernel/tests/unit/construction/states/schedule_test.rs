use super::*;
use crate::helpers::models::problem::*;
use crate::helpers::models::solution::*;
use crate::models::common::TimeWindow;

fn create_jobs() -> Vec<crate::models::problem::Job> {
    vec![
        build_job(crate::models::problem::JobBuilder::service("job0", test_place_with_time(10., 5., TimeWindow::new(0., 1000.))), 0),
        build_job(crate::models::problem::JobBuilder::service("job1", test_place_with_time(20., 0., TimeWindow::new(40., 100.))), 1),
    ]
}

fn get_schedules(route: &Route) -> Vec<(Timestamp, Timestamp, Timestamp)> {
    route.tour.all_activities().map(|a| (a.schedule.arrival, a.schedule.start, a.schedule.departure)).collect()
}

#[test]
fn can_update_schedule_waiting_for_time_window() {
    let mut route_ctx = create_route_ctx(test_actor(), &create_jobs());

    ScheduleUpdater::new(test_transport(), test_activity()).update_route(&mut route_ctx);

    assert_eq!(get_schedules(route_ctx.route()), vec![(0., 0., 0.), (10., 10., 15.), (25., 40., 40.), (60., 60., 60.)]);
    assert_eq!(route_ctx.state().route_scalar(StateKey::TotalDuration, None), 60.);
}

#[test]
fn can_update_schedule_starting_on_arrival() {
    let mut route_ctx = create_route_ctx(test_actor(), &create_jobs());

    ScheduleUpdater::new(test_transport(), test_activity())
        .with_policy(ActivityStartPolicy::StartOnArrival)
        .update_route(&mut route_ctx);

    assert_eq!(get_schedules(route_ctx.route()), vec![(0., 0., 0.), (10., 10., 15.), (25., 25., 25.), (45., 45., 45.)]);
}

#[test]
fn can_keep_schedule_unchanged_when_updated_twice() {
    let mut route_ctx = create_route_ctx(test_actor(), &create_jobs());
    let updater = ScheduleUpdater::new(test_transport(), test_activity());

    updater.update_route(&mut route_ctx);
    let first = get_schedules(route_ctx.route());
    updater.update_route(&mut route_ctx);
    let second = get_schedules(route_ctx.route());

    assert_eq!(first, second);
}

#[test]
fn can_finish_open_route_at_last_job() {
    let mut route_ctx = create_route_ctx(test_open_actor(), &create_jobs());

    ScheduleUpdater::new(test_transport(), test_activity()).update_route(&mut route_ctx);

    assert_eq!(route_ctx.route().tour.end().schedule, Schedule::new(40., 40., 40.));
    assert_eq!(route_ctx.state().route_scalar(StateKey::TotalDuration, None), 40.);
}

#[test]
fn can_start_not_earlier_than_vehicle() {
    let actor = build_actor(test_vehicle_builder(0).time(TimeWindow::new(5., 1000.)), 0);
    let mut route_ctx = create_route_ctx(actor, &create_jobs()[..1]);

    ScheduleUpdater::new(test_transport(), test_activity()).update_route(&mut route_ctx);

    assert_eq!(get_schedules(route_ctx.route()), vec![(5., 5., 5.), (15., 15., 20.), (30., 30., 30.)]);
}

parameterized_test! {can_estimate_arrival_with_setup, (from_x, coefficient, expected), {
    let actor = build_actor(test_vehicle_builder(0).setup_coefficient(coefficient), 0);
    let job = build_job(crate::models::problem::JobBuilder::service("job", test_place(10.).with_setup(4.)), 0);
    let target = Activity::from_job(&job, test_location(0.)).remove(0);

    let arrival = estimate_arrival(test_transport().as_ref(), &actor, &test_location(from_x), 100., &target);

    assert_eq!(arrival, expected);
}}

can_estimate_arrival_with_setup! {
    case01_different_location: (0., 1., 114.),
    case02_same_location: (10., 1., 100.),
    case03_scaled_setup: (5., 0.5, 107.),
}

#[test]
fn can_select_earliest_open_time_window() {
    let times = vec![TimeWindow::new(30., 100.), TimeWindow::new(0., 5.), TimeWindow::new(200., 300.)];
    let place = crate::models::problem::JobPlace::new(Some(test_location(20.)), 0., times);
    let job = build_job(crate::models::problem::JobBuilder::service("job0", place), 0);
    let mut route_ctx = create_route_ctx(test_actor(), &[job]);

    ScheduleUpdater::new(test_transport(), test_activity()).update_route(&mut route_ctx);

    let activity = route_ctx.route().tour.get(1).unwrap();
    assert_eq!(activity.schedule, Schedule::new(20., 30., 30.));
    assert_eq!(activity.place.time, TimeWindow::new(30., 100.));
}
