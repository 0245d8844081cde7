#[cfg(test)]
#[path = "../../../../tests/unit/solver/search/ruin/worst_removal_test.rs"]
mod worst_removal_test;

use super::*;
use crate::models::common::Cost;
use crate::models::problem::TransportCost;
use crate::models::solution::{Activity, ActivityKind, Route};
use crate::utils::compare_floats;
use rustc_hash::FxHashMap;

/// A ruin strategy which repeatedly removes the job with the largest detour cost.
///
/// Detour cost of an activity is `cost(prev, activity) + cost(activity, next) - cost(prev, next)`,
/// summed over all activities of a job. After each removal, costs of the affected route are
/// recalculated as removal changes detours of adjacent jobs.
pub struct WorstRemoval {
    transport: Arc<dyn TransportCost>,
    share: Arc<dyn RuinShare>,
}

impl WorstRemoval {
    /// Creates a new instance of `WorstRemoval`.
    pub fn new(transport: Arc<dyn TransportCost>, share: Arc<dyn RuinShare>) -> Self {
        Self { transport, share }
    }

    fn get_route_savings(&self, route: &Route) -> Vec<(Job, Cost)> {
        let savings = route.tour.as_slice().windows(3).fold(FxHashMap::<Job, Cost>::default(), |mut acc, window| {
            if let [prev, target, next] = window
                && let Some(job) = target.job.as_ref()
            {
                *acc.entry(job.clone()).or_insert(0.) += self.get_cost_savings(route, prev, target, next);
            }

            acc
        });

        route
            .tour
            .jobs()
            .into_iter()
            .map(|job| {
                let cost = savings.get(&job).copied().unwrap_or(0.);
                (job, cost)
            })
            .collect()
    }

    fn get_cost_savings(&self, route: &Route, prev: &Activity, target: &Activity, next: &Activity) -> Cost {
        let prev_target = self.get_cost(route, prev, target);

        if next.kind == ActivityKind::End && !route.actor.vehicle.returns_to_depot {
            return prev_target;
        }

        prev_target + self.get_cost(route, target, next) - self.get_cost(route, prev, next)
    }

    fn get_cost(&self, route: &Route, from: &Activity, to: &Activity) -> Cost {
        self.transport.cost(&route.actor, &from.place.location, &to.place.location, from.schedule.departure)
    }
}

impl Ruin for WorstRemoval {
    fn ruin(&self, routes: &mut [RouteContext]) -> Vec<Job> {
        let mut tracker = RemovalTracker::new(self.share.get_share());

        // NOTE keeps route scan order which is used to break ties
        let mut candidates = routes
            .iter()
            .enumerate()
            .flat_map(|(route_idx, route_ctx)| {
                self.get_route_savings(route_ctx.route()).into_iter().map(move |(job, cost)| (route_idx, job, cost))
            })
            .collect::<Vec<_>>();

        while !tracker.is_limit() {
            let worst = candidates
                .iter()
                .enumerate()
                .reduce(|best, next| if compare_floats(next.1.2, best.1.2).is_gt() { next } else { best })
                .map(|(idx, (route_idx, _, _))| (idx, *route_idx));

            let Some((candidate_idx, route_idx)) = worst else { break };
            let (_, job, _) = candidates.remove(candidate_idx);

            if !tracker.try_remove(routes, &job) {
                continue;
            }

            let savings = self
                .get_route_savings(routes[route_idx].route())
                .into_iter()
                .collect::<FxHashMap<_, _>>();

            candidates.iter_mut().filter(|(idx, _, _)| *idx == route_idx).for_each(|(_, job, cost)| {
                *cost = savings.get(job).copied().unwrap_or(0.);
            });
        }

        tracker.into_removed()
    }
}
