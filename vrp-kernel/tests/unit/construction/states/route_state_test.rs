use super::*;

#[test]
fn can_return_defaults_for_missing_states() {
    let state = RouteState::default();

    assert_eq!(state.route_scalar(StateKey::TotalDuration, None), 0.);
    assert_eq!(state.route_scalar(StateKey::TotalDistance, Some(1)), 0.);
    assert_eq!(state.activity_scalar(StateKey::LatestStart, Some(0), 5), Float::MAX);
    assert_eq!(state.activity_scalar(StateKey::TimeInVehicleSlack, None, 1), Float::MAX);
    assert_eq!(state.route_load(StateKey::MaxLoad), Load::default());
    assert_eq!(state.activity_load(StateKey::CurrentLoad, 3), Load::default());
    assert!(state.route_frequency(StateKey::Skills).is_none());
    assert!(!state.route_flag(StateKey::Custom(1), None));
    assert!(state.is_empty());
}

#[test]
fn can_separate_states_per_vehicle() {
    let mut state = RouteState::default();

    state.set_route_state(StateKey::TotalDistance, Some(0), StateValue::Scalar(10.));
    state.set_route_state(StateKey::TotalDistance, Some(1), StateValue::Scalar(20.));
    state.set_activity_states(StateKey::LatestStart, Some(1), vec![StateValue::Scalar(5.), StateValue::Scalar(7.)]);

    assert_eq!(state.route_scalar(StateKey::TotalDistance, Some(0)), 10.);
    assert_eq!(state.route_scalar(StateKey::TotalDistance, Some(1)), 20.);
    assert_eq!(state.route_scalar(StateKey::TotalDistance, None), 0.);
    assert_eq!(state.activity_scalar(StateKey::LatestStart, Some(1), 1), 7.);
    assert_eq!(state.activity_scalar(StateKey::LatestStart, Some(0), 1), Float::MAX);
}

#[test]
fn can_treat_value_of_another_type_as_missing() {
    let mut state = RouteState::default();

    state.set_route_state(StateKey::MaxLoad, None, StateValue::Scalar(1.));
    state.set_route_state(StateKey::TotalDuration, None, StateValue::Flag(true));

    assert_eq!(state.route_load(StateKey::MaxLoad), Load::default());
    assert_eq!(state.route_scalar(StateKey::TotalDuration, None), 0.);
}

#[test]
fn can_store_custom_state() {
    let mut state = RouteState::default();

    state.set_route_state(StateKey::Custom(7), None, StateValue::Custom(Arc::new(String::from("data"))));
    state.set_route_state(StateKey::Custom(8), None, StateValue::Flag(true));

    let value = match state.get_route_state(StateKey::Custom(7), None) {
        Some(StateValue::Custom(value)) => value.downcast_ref::<String>().cloned(),
        _ => None,
    };
    assert_eq!(value, Some("data".to_string()));
    assert!(state.route_flag(StateKey::Custom(8), None));

    state.clear();
    assert!(state.is_empty());
}
