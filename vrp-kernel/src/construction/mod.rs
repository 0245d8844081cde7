//! Contains building blocks for job insertion: route state propagation, constraints and
//! insertion cost evaluation.

pub mod constraints;
pub mod heuristics;
pub mod states;
