use crate::models::problem::Actor;
use crate::models::solution::Tour;
use std::sync::Arc;

/// Represents a tour performed by an actor.
#[derive(Clone, Debug)]
pub struct Route {
    /// An actor associated within route.
    pub actor: Arc<Actor>,
    /// Specifies tour of the route.
    pub tour: Tour,
}

impl Route {
    /// Creates an empty route for given actor.
    pub fn new(actor: Arc<Actor>) -> Self {
        let tour = Tour::new(actor.as_ref());
        Self { actor, tour }
    }
}
