#[cfg(test)]
#[path = "../../../../tests/unit/solver/search/ruin/farthest_removal_test.rs"]
mod farthest_removal_test;

use super::*;
use crate::models::common::{Distance, Duration};
use crate::models::problem::TransportCost;
use crate::models::solution::{ActivityKind, Route};
use crate::utils::compare_floats;

/// A ruin strategy which removes jobs farthest from their vehicle start location.
///
/// Routes which have jobs but no driving at all (every job is at the start location) are
/// emptied entirely first.
pub struct FarthestRemoval {
    transport: Arc<dyn TransportCost>,
    share: Arc<dyn RuinShare>,
}

impl FarthestRemoval {
    /// Creates a new instance of `FarthestRemoval`.
    pub fn new(transport: Arc<dyn TransportCost>, share: Arc<dyn RuinShare>) -> Self {
        Self { transport, share }
    }

    fn get_driving_duration(&self, route: &Route) -> Duration {
        let actor = route.actor.as_ref();

        route
            .tour
            .legs()
            .filter(|leg| !(leg[1].kind == ActivityKind::End && !actor.vehicle.returns_to_depot))
            .map(|leg| {
                let (from, to) = (&leg[0], &leg[1]);
                self.transport.duration(actor, &from.place.location, &to.place.location, from.schedule.departure)
            })
            .sum()
    }

    fn get_start_distance(&self, route: &Route, job: &Job) -> Distance {
        let actor = route.actor.as_ref();
        let start = &route.tour.start().place.location;

        route
            .tour
            .as_slice()
            .iter()
            .filter(|activity| activity.has_same_job(job))
            .map(|activity| self.transport.distance(actor, start, &activity.place.location, actor.vehicle.time.start))
            .max_by(|a, b| compare_floats(*a, *b))
            .unwrap_or(0.)
    }
}

impl Ruin for FarthestRemoval {
    fn ruin(&self, routes: &mut [RouteContext]) -> Vec<Job> {
        let mut tracker = RemovalTracker::new(self.share.get_share());
        if tracker.is_limit() {
            return tracker.into_removed();
        }

        let idle_routes = routes
            .iter()
            .enumerate()
            .filter(|(_, route_ctx)| route_ctx.route().tour.has_jobs())
            .filter(|(_, route_ctx)| self.get_driving_duration(route_ctx.route()) == 0.)
            .map(|(idx, _)| idx)
            .collect::<Vec<_>>();

        for route_idx in idle_routes {
            if tracker.is_limit() {
                break;
            }

            // NOTE once started, idle route is emptied entirely even if quota is exceeded
            let jobs = routes[route_idx].route().tour.jobs();
            jobs.iter().for_each(|job| {
                tracker.try_remove(routes, job);
            });
        }

        let mut candidates = routes
            .iter()
            .flat_map(|route_ctx| {
                let route = route_ctx.route();
                route.tour.jobs().into_iter().map(move |job| {
                    let distance = self.get_start_distance(route, &job);
                    (job, distance)
                })
            })
            .collect::<Vec<_>>();

        // NOTE stable sort keeps scan order for equal distances
        candidates.sort_by(|(_, a), (_, b)| compare_floats(*b, *a));

        for (job, _) in candidates {
            if tracker.is_limit() {
                break;
            }
            tracker.try_remove(routes, &job);
        }

        tracker.into_removed()
    }
}
