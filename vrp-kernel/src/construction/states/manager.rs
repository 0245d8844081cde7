use crate::construction::heuristics::RouteContext;
use std::sync::Arc;

/// Recalculates some part of route state.
pub trait StateUpdater: Send + Sync {
    /// Updates state of given route.
    fn update_route(&self, route_ctx: &mut RouteContext);
}

/// Runs state updaters in registration order.
#[derive(Clone, Default)]
pub struct StateManager {
    updaters: Vec<Arc<dyn StateUpdater>>,
}

impl StateManager {
    /// Creates a new instance of `StateManager`.
    pub fn new(updaters: Vec<Arc<dyn StateUpdater>>) -> Self {
        Self { updaters }
    }

    /// Adds state updater.
    pub fn add_updater(&mut self, updater: Arc<dyn StateUpdater>) -> &mut Self {
        self.updaters.push(updater);
        self
    }

    /// Recalculates state of the route from scratch.
    pub fn update_route(&self, route_ctx: &mut RouteContext) {
        route_ctx.state_mut().clear();
        self.updaters.iter().for_each(|updater| updater.update_route(route_ctx));
    }

    /// Recalculates state of all routes.
    pub fn update_routes(&self, routes: &mut [RouteContext]) {
        routes.iter_mut().for_each(|route_ctx| self.update_route(route_ctx));
    }
}
