//! A collection of models to represent problem and solution in Vehicle Routing Problem domain.

pub mod common;
pub mod problem;
pub mod solution;

use crate::models::problem::{ActivityCost, Fleet, Job, TransportCost};
use std::sync::Arc;

/// Defines a VRP problem: jobs and fleet with their routing and activity costs.
pub struct Problem {
    /// Specifies used fleet.
    pub fleet: Arc<Fleet>,
    /// Specifies jobs ordered by their index.
    pub jobs: Arc<Vec<Job>>,
    /// Specifies routing costs.
    pub transport: Arc<dyn TransportCost>,
    /// Specifies activity costs.
    pub activity: Arc<dyn ActivityCost>,
}
