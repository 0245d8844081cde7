#[cfg(test)]
#[path = "../../../tests/unit/construction/states/route_state_test.rs"]
mod route_state_test;

use crate::models::common::Load;
use crate::utils::Float;
use rustc_hash::FxHashMap;
use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Identifies a kind of cached state.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum StateKey {
    /// Latest operation start at activity, per vehicle. Default: `+∞`.
    LatestStart,
    /// Load at route start. Default: empty load.
    LoadAtBeginning,
    /// Load at route end. Default: empty load.
    LoadAtEnd,
    /// Max load carried on the route. Default: empty load.
    MaxLoad,
    /// Load after activity. Default: empty load.
    CurrentLoad,
    /// Max load from activity till route end. Default: empty load.
    FutureMaxLoad,
    /// Max load from route start till activity. Default: empty load.
    PastMaxLoad,
    /// Distance travelled till activity, per vehicle. Default: zero.
    TraveledDistance,
    /// Total route distance, per vehicle. Default: zero.
    TotalDistance,
    /// Total route duration. Default: zero.
    TotalDuration,
    /// Frequency of skills required by route jobs. Default: empty map.
    Skills,
    /// Min remaining time in vehicle of shipments carried after activity. Default: `+∞`.
    TimeInVehicleSlack,
    /// An extension state.
    Custom(u32),
}

impl StateKey {
    /// Returns the documented default for scalar states.
    pub fn default_scalar(&self) -> Float {
        match self {
            StateKey::LatestStart | StateKey::TimeInVehicleSlack => Float::MAX,
            _ => 0.,
        }
    }
}

/// A typed state value.
#[derive(Clone)]
pub enum StateValue {
    /// A scalar: duration, distance or timestamp.
    Scalar(Float),
    /// A load vector.
    Load(Load),
    /// A boolean flag.
    Flag(bool),
    /// A frequency map.
    Frequency(Arc<FxHashMap<String, usize>>),
    /// An extension value.
    Custom(Arc<dyn Any + Send + Sync>),
}

impl Debug for StateValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StateValue::Scalar(value) => write!(f, "Scalar({value})"),
            StateValue::Load(value) => write!(f, "Load({value})"),
            StateValue::Flag(value) => write!(f, "Flag({value})"),
            StateValue::Frequency(value) => write!(f, "Frequency({value:?})"),
            StateValue::Custom(_) => write!(f, "Custom"),
        }
    }
}

type EntryKey = (StateKey, Option<usize>);

/// Keeps route and activity states. Activity states are dense vectors indexed by activity
/// position in the tour, optionally separated per vehicle index.
///
/// Any structural change of the route makes states invalid: they have to be recalculated by
/// state updaters before they are read again. Readers never fail on missing state, they get
/// the default value of the state key.
#[derive(Clone, Default)]
pub struct RouteState {
    route_states: FxHashMap<EntryKey, StateValue>,
    activity_states: FxHashMap<EntryKey, Vec<StateValue>>,
}

impl RouteState {
    /// Gets route state.
    pub fn get_route_state(&self, key: StateKey, vehicle: Option<usize>) -> Option<&StateValue> {
        self.route_states.get(&(key, vehicle))
    }

    /// Sets route state.
    pub fn set_route_state(&mut self, key: StateKey, vehicle: Option<usize>, value: StateValue) {
        self.route_states.insert((key, vehicle), value);
    }

    /// Gets activity state.
    pub fn get_activity_state(&self, key: StateKey, vehicle: Option<usize>, activity_idx: usize) -> Option<&StateValue> {
        self.activity_states.get(&(key, vehicle)).and_then(|values| values.get(activity_idx))
    }

    /// Sets activity states for all activities at once.
    pub fn set_activity_states(&mut self, key: StateKey, vehicle: Option<usize>, values: Vec<StateValue>) {
        self.activity_states.insert((key, vehicle), values);
    }

    /// Returns scalar route state or its default.
    pub fn route_scalar(&self, key: StateKey, vehicle: Option<usize>) -> Float {
        match self.get_route_state(key, vehicle) {
            Some(StateValue::Scalar(value)) => *value,
            _ => key.default_scalar(),
        }
    }

    /// Returns scalar activity state or its default.
    pub fn activity_scalar(&self, key: StateKey, vehicle: Option<usize>, activity_idx: usize) -> Float {
        match self.get_activity_state(key, vehicle, activity_idx) {
            Some(StateValue::Scalar(value)) => *value,
            _ => key.default_scalar(),
        }
    }

    /// Returns route load state or empty load.
    pub fn route_load(&self, key: StateKey) -> Load {
        match self.get_route_state(key, None) {
            Some(StateValue::Load(value)) => *value,
            _ => Load::default(),
        }
    }

    /// Returns activity load state or empty load.
    pub fn activity_load(&self, key: StateKey, activity_idx: usize) -> Load {
        match self.get_activity_state(key, None, activity_idx) {
            Some(StateValue::Load(value)) => *value,
            _ => Load::default(),
        }
    }

    /// Returns route frequency state if present.
    pub fn route_frequency(&self, key: StateKey) -> Option<&FxHashMap<String, usize>> {
        match self.get_route_state(key, None) {
            Some(StateValue::Frequency(value)) => Some(value.as_ref()),
            _ => None,
        }
    }

    /// Returns route flag state or false.
    pub fn route_flag(&self, key: StateKey, vehicle: Option<usize>) -> bool {
        matches!(self.get_route_state(key, vehicle), Some(StateValue::Flag(true)))
    }

    /// Removes all states.
    pub fn clear(&mut self) {
        self.route_states.clear();
        self.activity_states.clear();
    }

    /// Returns true if there is no state.
    pub fn is_empty(&self) -> bool {
        self.route_states.is_empty() && self.activity_states.is_empty()
    }
}
