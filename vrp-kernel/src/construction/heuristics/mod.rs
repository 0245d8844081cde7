//! Insertion contexts and insertion cost evaluation.

mod context;
pub use self::context::*;

mod evaluators;
pub use self::evaluators::*;
