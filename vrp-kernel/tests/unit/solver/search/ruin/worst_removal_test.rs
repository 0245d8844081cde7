use super::*;
use crate::helpers::models::problem::*;
use crate::helpers::solver::*;

fn to_ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

parameterized_test! {can_remove_jobs_with_largest_detour, (share, expected), {
    let mut routes = create_routes(vec![vec![test_service(0, 10.), test_service(1, 20.), test_service(2, 100.)]]);
    let ruin = WorstRemoval::new(test_transport(), create_fixed_share(share));

    let removed = ruin.ruin(&mut routes);

    assert_eq!(get_job_ids(&removed), to_ids(expected));
}}

can_remove_jobs_with_largest_detour! {
    case01_outlier_first: (1, &["job2"]),
    case02_recalculates_after_removal: (2, &["job2", "job1"]),
    case03_all: (5, &["job2", "job1", "job0"]),
}

#[test]
fn can_remove_outlier_among_clustered_jobs() {
    let clustered = (0..5).map(|idx| test_service_at(idx, 10. + idx as f64, 0.));
    let outlier = test_service_at(5, 12., 50.);
    let mut jobs = clustered.collect::<Vec<_>>();
    jobs.insert(2, outlier);
    let mut routes = create_routes(vec![jobs]);

    let removed = WorstRemoval::new(test_transport(), create_fixed_share(1)).ruin(&mut routes);

    assert_eq!(get_job_ids(&removed), to_ids(&["job5"]));
}

#[test]
fn can_count_only_leg_to_last_job_of_open_route() {
    let mut routes = create_open_routes(vec![vec![test_service(0, 30.), test_service(1, 35.)]]);

    let removed = WorstRemoval::new(test_transport(), create_fixed_share(1)).ruin(&mut routes);

    // job0: 30 + 5 - 35 = 0, job1: 5
    assert_eq!(get_job_ids(&removed), to_ids(&["job1"]));
}

#[test]
fn can_break_ties_by_route_order() {
    let mut routes = create_routes(vec![vec![test_service(0, 10.)], vec![test_service(1, 10.)]]);

    let removed = WorstRemoval::new(test_transport(), create_fixed_share(1)).ruin(&mut routes);

    assert_eq!(get_job_ids(&removed), to_ids(&["job0"]));
    assert_eq!(get_routes_job_ids(&routes), vec![Vec::<String>::new(), to_ids(&["job1"])]);
}

#[test]
fn can_sum_savings_of_shipment_activities() {
    // pickup detour is 50 + 55 - 5, delivery detour is 55 + 5 - 60
    let jobs = vec![test_service(1, 10.), test_shipment(0, 60., 5., 1)];
    let mut routes = create_routes(vec![jobs]);

    let removed = WorstRemoval::new(test_transport(), create_fixed_share(1)).ruin(&mut routes);

    assert_eq!(get_job_ids(&removed), to_ids(&["job0"]));
    assert_eq!(routes[0].route().tour.total(), 3);
}
