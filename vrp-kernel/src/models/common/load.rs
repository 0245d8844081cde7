#[cfg(test)]
#[path = "../../../tests/unit/models/common/load_test.rs"]
mod load_test;

use crate::utils::{Float, GenericResult};
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

/// Max amount of supported load dimensions.
pub const LOAD_DIMENSION_SIZE: usize = 8;

/// Specifies multi dimensional load type used for job sizes, activity load changes and
/// vehicle capacities. Unused dimensions are zero, so loads of different sizes compare
/// naturally.
#[derive(Clone, Copy, Debug, Default)]
pub struct Load {
    /// Load data.
    pub load: [i32; LOAD_DIMENSION_SIZE],
    /// Actual used size.
    pub size: usize,
}

impl Load {
    /// Creates a new instance of `Load`.
    pub fn new(data: Vec<i32>) -> Self {
        assert!(data.len() <= LOAD_DIMENSION_SIZE);

        let mut load = [0; LOAD_DIMENSION_SIZE];
        load.iter_mut().zip(data.iter()).for_each(|(a, b)| *a = *b);

        Self { load, size: data.len() }
    }

    /// Creates a new instance of `Load`, failing when there are too many dimensions.
    pub fn try_new(data: &[i32]) -> GenericResult<Self> {
        if data.len() > LOAD_DIMENSION_SIZE {
            return Err(format!("load has {} dimensions, max supported is {LOAD_DIMENSION_SIZE}", data.len()).into());
        }

        let mut load = [0; LOAD_DIMENSION_SIZE];
        load.iter_mut().zip(data.iter()).for_each(|(a, b)| *a = *b);

        Ok(Self { load, size: data.len() })
    }

    /// Returns true if it represents a non empty load.
    pub fn is_not_empty(&self) -> bool {
        self.load.iter().any(|v| *v != 0)
    }

    /// Returns true if any dimension is negative.
    pub fn has_negative(&self) -> bool {
        self.load.iter().any(|v| *v < 0)
    }

    /// Returns dimension-wise max load value.
    pub fn max_load(self, other: Self) -> Self {
        let mut result = self;
        result.load.iter_mut().zip(other.load.iter()).for_each(|(a, b)| *a = (*a).max(*b));
        result.size = self.size.max(other.size);

        result
    }

    /// Returns absolute value of each dimension.
    pub fn abs(self) -> Self {
        let mut result = self;
        result.load.iter_mut().for_each(|a| *a = a.abs());

        result
    }

    /// Returns true if `other` can be loaded into existing capacity.
    pub fn can_fit(&self, other: &Self) -> bool {
        self.load.iter().zip(other.load.iter()).all(|(a, b)| a >= b)
    }

    /// Returns max ratio of this load to given capacity across all dimensions.
    /// Fails when a non empty dimension has zero capacity.
    pub fn ratio(&self, capacity: &Self) -> GenericResult<Float> {
        self.load.iter().zip(capacity.load.iter()).try_fold(0., |acc: Float, (load, capacity)| match (*load, *capacity) {
            (0, _) => Ok(acc),
            (_, 0) => Err("cannot compute load ratio for zero capacity dimension".into()),
            (load, capacity) => Ok(acc.max(load as Float / capacity as Float)),
        })
    }

    /// Converts to vector representation.
    pub fn as_vec(&self) -> Vec<i32> {
        if self.size == 0 { vec![0] } else { self.load[..self.size].to_vec() }
    }
}

impl Add for Load {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut result = self;
        result.load.iter_mut().zip(rhs.load.iter()).for_each(|(a, b)| *a += *b);
        result.size = self.size.max(rhs.size);

        result
    }
}

impl Sub for Load {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Neg for Load {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let mut result = self;
        result.load.iter_mut().for_each(|a| *a = -*a);

        result
    }
}

impl Sum for Load {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Load::default(), |acc, item| acc + item)
    }
}

impl PartialEq for Load {
    fn eq(&self, other: &Self) -> bool {
        self.load == other.load
    }
}

impl Eq for Load {}

impl Display for Load {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.as_vec())
    }
}
