use super::*;
use crate::helpers::solver::*;
use crate::helpers::utils::random::FakeRandom;
use crate::models::problem::EuclideanJobDistance;

/// A: (0, 0), B: (5, 0), C: (10, 0), D: (0, 7), routes: [A, B], [C, D].
fn create_test_routes() -> Vec<RouteContext> {
    create_routes(vec![
        vec![test_service_at(0, 0., 0.), test_service_at(1, 5., 0.)],
        vec![test_service_at(2, 10., 0.), test_service_at(3, 0., 7.)],
    ])
}

fn create_ruin(routes: &[RouteContext], share: usize, ints: Vec<i32>, mode: RadialMode) -> RadialRemoval {
    RadialRemoval::new(create_neighborhoods(routes), create_fixed_share(share), Arc::new(FakeRandom::new(ints, vec![])))
        .unwrap()
        .with_mode(mode)
}

parameterized_test! {can_remove_jobs_around_seed, (mode, share, seed_idx, expected), {
    let mut routes = create_test_routes();
    let ruin = create_ruin(&routes, share, vec![seed_idx], mode);

    let removed = ruin.ruin(&mut routes);

    assert_eq!(get_job_ids(&removed), expected.iter().map(|id: &&str| id.to_string()).collect::<Vec<_>>());
}}

can_remove_jobs_around_seed! {
    case01_seed_mode: (RadialMode::Seed, 3, 0, vec!["job0", "job1", "job3"]),
    case02_expanding_mode: (RadialMode::Expanding, 3, 0, vec!["job0", "job1", "job2"]),
    case03_seed_only: (RadialMode::Seed, 1, 2, vec!["job2"]),
    case04_seed_mode_from_other_route: (RadialMode::Seed, 2, 3, vec!["job3", "job0"]),
}

#[test]
fn can_fill_quota_with_jobs_without_location() {
    let mut routes = create_routes(vec![
        vec![test_service_at(0, 0., 0.), test_service_at(1, 5., 0.)],
        vec![test_service_without_location(2)],
    ]);
    let ruin = create_ruin(&routes, 3, vec![1, 0], RadialMode::Seed);

    let removed = ruin.ruin(&mut routes);

    assert_eq!(get_job_ids(&removed), vec!["job1".to_string(), "job0".to_string(), "job2".to_string()]);
    assert!(get_assigned_jobs(&routes).is_empty());
}

#[test]
fn can_remove_random_jobs_when_no_job_has_location() {
    let mut routes = create_routes(vec![vec![test_service_without_location(0), test_service_without_location(1)]]);
    let ruin = create_ruin(&routes, 1, vec![1], RadialMode::Expanding);

    let removed = ruin.ruin(&mut routes);

    assert_eq!(get_job_ids(&removed), vec!["job1".to_string()]);
}

#[test]
fn can_return_nothing_for_zero_share() {
    let mut routes = create_test_routes();
    let ruin = create_ruin(&routes, 0, vec![], RadialMode::Seed);

    assert!(ruin.ruin(&mut routes).is_empty());
    assert_eq!(get_assigned_jobs(&routes).len(), 4);
}

#[test]
fn cannot_create_with_not_initialised_neighborhoods() {
    let routes = create_test_routes();
    let neighborhoods = JobNeighborhoods::new(get_assigned_jobs(&routes), Arc::new(EuclideanJobDistance::default()));

    let result = RadialRemoval::new(
        Arc::new(neighborhoods),
        create_fixed_share(1),
        Arc::new(FakeRandom::new(vec![], vec![])),
    );

    assert!(result.is_err());
}
