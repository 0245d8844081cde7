use super::*;

#[test]
fn can_create_location_from_signed_index() {
    assert_eq!(Location::try_new(3, None).map(|location| location.index), Ok(3));
    assert!(Location::try_new(-1, Some(Point::new(1., 1.))).is_err());
}

#[test]
fn can_compare_locations_by_index() {
    assert_eq!(Location::with_coordinate(1, 0., 0.), Location::new(1));
    assert_ne!(Location::with_coordinate(1, 0., 0.), Location::with_coordinate(2, 0., 0.));
}

parameterized_test! {can_check_time_window_intersection, (first, second, expected), {
    let first = TimeWindow::new(first.0, first.1);
    let second = TimeWindow::new(second.0, second.1);

    assert_eq!(first.intersects(&second), expected);
    assert_eq!(second.intersects(&first), expected);
}}

can_check_time_window_intersection! {
    case01: ((0., 10.), (5., 15.), true),
    case02: ((0., 10.), (10., 15.), true),
    case03: ((0., 10.), (11., 15.), false),
    case04: ((0., 10.), (2., 3.), true),
}

parameterized_test! {can_validate_time_window, (start, end, is_valid), {
    assert_eq!(TimeWindow::new(start, end).validate().is_ok(), is_valid);
}}

can_validate_time_window! {
    case01: (0., 10., true),
    case02: (10., 10., true),
    case03: (10., 0., false),
    case04: (Float::NAN, 0., false),
}

#[test]
fn can_calculate_schedule_waiting() {
    assert_eq!(Schedule::new(5., 10., 12.).waiting(), 5.);
    assert_eq!(Schedule::new(10., 10., 12.).waiting(), 0.);
}
