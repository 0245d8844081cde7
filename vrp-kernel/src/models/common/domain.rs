#[cfg(test)]
#[path = "../../../tests/unit/models/common/domain_test.rs"]
mod domain_test;

use crate::algorithms::geometry::Point;
use crate::models::common::{Duration, Timestamp};
use crate::utils::{Float, GenericResult, compare_floats};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Represents a location: an index into routing data with optional planar coordinate.
/// Two locations are equal when their indices are equal.
#[derive(Clone, Copy, Debug)]
pub struct Location {
    /// A stable location index.
    pub index: usize,
    /// An optional coordinate.
    pub coordinate: Option<Point>,
}

impl Location {
    /// Creates a new location without coordinate.
    pub fn new(index: usize) -> Self {
        Self { index, coordinate: None }
    }

    /// Creates a new location with coordinate.
    pub fn with_coordinate(index: usize, x: Float, y: Float) -> Self {
        Self { index, coordinate: Some(Point::new(x, y)) }
    }

    /// Creates a new location from a signed index, rejecting negative values.
    pub fn try_new(index: i64, coordinate: Option<Point>) -> GenericResult<Self> {
        if index < 0 {
            return Err(format!("location index cannot be negative: {index}").into());
        }

        Ok(Self { index: index as usize, coordinate })
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

/// Represents a time window.
#[derive(Clone, Copy, Debug)]
pub struct TimeWindow {
    /// Earliest operation start.
    pub start: Timestamp,
    /// Latest operation start.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new [`TimeWindow`].
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Returns unlimited time window.
    pub fn max() -> Self {
        Self { start: 0., end: Float::MAX }
    }

    /// Checks whether time window has intersection with another one.
    pub fn intersects(&self, other: &Self) -> bool {
        compare_floats(self.start, other.end) != Ordering::Greater
            && compare_floats(other.start, self.end) != Ordering::Greater
    }

    /// Checks whether time window is well formed.
    pub fn validate(&self) -> GenericResult<()> {
        if self.start.is_nan() || self.end.is_nan() || self.start > self.end {
            Err(format!("invalid time window: [{}, {}]", self.start, self.end).into())
        } else {
            Ok(())
        }
    }
}

impl PartialEq<TimeWindow> for TimeWindow {
    fn eq(&self, other: &TimeWindow) -> bool {
        compare_floats(self.start, other.start) == Ordering::Equal
            && compare_floats(self.end, other.end) == Ordering::Equal
    }
}

impl Eq for TimeWindow {}

/// Represents an activity schedule.
#[derive(Clone, Copy, Debug, Default)]
pub struct Schedule {
    /// Arrival time.
    pub arrival: Timestamp,
    /// Operation start time.
    pub start: Timestamp,
    /// Departure time (end of operation).
    pub departure: Timestamp,
}

impl Schedule {
    /// Creates a new instance of `Schedule`.
    pub fn new(arrival: Timestamp, start: Timestamp, departure: Timestamp) -> Self {
        Self { arrival, start, departure }
    }

    /// Returns time spent waiting for operation start.
    pub fn waiting(&self) -> Duration {
        (self.start - self.arrival).max(0.)
    }
}

impl PartialEq<Schedule> for Schedule {
    fn eq(&self, other: &Schedule) -> bool {
        compare_floats(self.arrival, other.arrival) == Ordering::Equal
            && compare_floats(self.start, other.start) == Ordering::Equal
            && compare_floats(self.departure, other.departure) == Ordering::Equal
    }
}

impl Eq for Schedule {}
