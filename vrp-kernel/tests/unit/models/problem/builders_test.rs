use super::*;
use crate::helpers::models::problem::*;

#[test]
fn can_build_problem_with_stable_indices() {
    let problem = ProblemBuilder::default()
        .add_job(JobBuilder::service("job1", test_place(1.)))
        .add_job(JobBuilder::delivery("job2", test_place(2.)).size(vec![1]))
        .add_job(JobBuilder::shipment("job3", test_place(3.), test_place(4.)).size(vec![2]))
        .add_vehicle(test_vehicle_builder(0).capacity(vec![10]))
        .add_vehicle(test_vehicle_builder(1).capacity(vec![5]))
        .build()
        .unwrap();

    assert_eq!(problem.jobs.iter().map(|job| (job.id.as_str(), job.index)).collect::<Vec<_>>(), vec![
        ("job1", 0),
        ("job2", 1),
        ("job3", 2)
    ]);
    assert_eq!(problem.fleet.vehicles.iter().map(|vehicle| vehicle.index).collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(problem.fleet.actors.len(), 2);
}

#[test]
fn can_collect_all_configuration_errors() {
    let result = ProblemBuilder::default()
        .add_job(JobBuilder::service("job1", test_place(1.)))
        .add_job(JobBuilder::service("job1", test_place(2.)))
        .add_job(JobBuilder::service("job2", test_place(2.)).size(vec![-1]))
        .add_vehicle(test_vehicle_builder(0))
        .build();

    let error = result.err().unwrap().to_string();

    assert!(error.contains("duplicate job id: 'job1'"));
    assert!(error.contains("job 'job2' has negative size"));
}

#[test]
fn can_reject_problem_without_vehicles() {
    let result = ProblemBuilder::default().add_job(JobBuilder::service("job1", test_place(1.))).build();

    assert!(result.is_err());
}

parameterized_test! {can_validate_job, (builder, is_valid), {
    assert_eq!(builder.build(0).is_ok(), is_valid);
}}

can_validate_job! {
    case01_valid: (JobBuilder::service("job", test_place(1.)).size(vec![1, 2]), true),
    case02_too_many_dimensions: (JobBuilder::service("job", test_place(1.)).size(vec![1; 9]), false),
    case03_negative_duration: (JobBuilder::service("job", JobPlace::new(None, -1., vec![])), false),
    case04_negative_setup: (JobBuilder::service("job", test_place(1.).with_setup(-1.)), false),
    case05_invalid_time: (JobBuilder::service("job", test_place_with_time(1., 0., TimeWindow::new(5., 1.))), false),
    case06_service_with_max_time: (JobBuilder::service("job", test_place(1.)).max_time_in_vehicle(10.), false),
    case07_shipment_with_max_time: (JobBuilder::shipment("job", test_place(1.), test_place(2.)).max_time_in_vehicle(10.), true),
}

parameterized_test! {can_validate_vehicle, (builder, is_valid), {
    assert_eq!(builder.build(0).is_ok(), is_valid);
}}

can_validate_vehicle! {
    case01_valid: (test_vehicle_builder(0).capacity(vec![10]).max_distance(100.), true),
    case02_negative_capacity: (test_vehicle_builder(0).capacity(vec![-10]), false),
    case03_invalid_time: (test_vehicle_builder(0).time(TimeWindow::new(10., 0.)), false),
    case04_negative_limit: (test_vehicle_builder(0).max_duration(-1.), false),
    case05_negative_setup: (test_vehicle_builder(0).setup_coefficient(-1.), false),
}

#[test]
fn can_build_open_vehicle_with_end() {
    let vehicle = test_vehicle_builder(0).end(test_location(5.)).open().build(0).unwrap();

    assert!(!vehicle.returns_to_depot);
    assert_eq!(vehicle.end.index, 5);
    assert_eq!(vehicle.start.index, 0);
}

#[test]
fn can_use_custom_costs_providers() {
    let transport = Arc::new(MatrixTransportCost::new(vec![0.; 4], vec![0.; 4]).unwrap());

    let problem = ProblemBuilder::default()
        .add_vehicle(test_vehicle_builder(0))
        .with_transport_cost(transport)
        .with_driver(Driver { costs: Costs { fixed: 5., ..Costs::empty() } })
        .build()
        .unwrap();

    assert_eq!(problem.fleet.actors[0].driver.costs.fixed, 5.);
    assert_eq!(problem.transport.distance(&problem.fleet.actors[0], &test_location(0.), &test_location(5.), 0.), Float::MAX);
}
