//! Contains search operators.

pub mod ruin;
