//! Contains search building blocks used by a ruin and recreate metaheuristic.

pub mod search;
