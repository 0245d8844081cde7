#[cfg(test)]
#[path = "../../../../tests/unit/solver/search/ruin/cluster_removal_test.rs"]
mod cluster_removal_test;

use super::*;
use crate::algorithms::dbscan::create_clusters;
use crate::models::common::Distance;
use crate::models::problem::JobNeighborhoods;
use rustc_hash::FxHashMap;

/// A ruin strategy which removes spatial clusters of jobs discovered with DBSCAN inside routes.
///
/// Starts from a random route, removes one randomly selected cluster of its jobs, then continues
/// with the route of the nearest neighbour of the removed cluster.
pub struct ClusterRemoval {
    neighborhoods: Arc<JobNeighborhoods>,
    share: Arc<dyn RuinShare>,
    random: Arc<dyn Random>,
    eps: Distance,
    min_points: usize,
}

impl ClusterRemoval {
    /// Creates a new instance of `ClusterRemoval`.
    /// `eps` is a max distance between neighbour jobs, inclusive, `min_points` is a min amount of neighbours
    /// of a core job.
    pub fn new(
        neighborhoods: Arc<JobNeighborhoods>,
        share: Arc<dyn RuinShare>,
        random: Arc<dyn Random>,
        eps: Distance,
        min_points: usize,
    ) -> GenericResult<Self> {
        if eps <= 0. || eps.is_nan() {
            return Err(format!("cluster removal eps should be positive, got: {eps}").into());
        }

        if !neighborhoods.is_initialised() {
            return Err("cluster removal requires initialised job neighborhoods".into());
        }

        Ok(Self { neighborhoods, share, random, eps, min_points })
    }

    /// Returns clusters of given jobs, only given jobs are considered as neighbours.
    fn create_route_clusters(&self, jobs: &[Job]) -> Vec<Vec<Job>> {
        let in_route = jobs.iter().map(|job| job.index).collect::<FxHashSet<_>>();
        let in_route = &in_route;

        let neighborhood_fn = |job: &Job, eps: Float| {
            self.neighborhoods
                .nearest_neighbors_with_distance(usize::MAX, job)
                .ok()
                .into_iter()
                .flatten()
                .take_while(move |(_, distance)| distance.is_some_and(|distance| distance <= eps))
                .map(|(other, _)| other)
                .filter(move |other| in_route.contains(&other.index))
        };

        create_clusters(jobs.iter(), self.eps, self.min_points, neighborhood_fn)
            .into_iter()
            .map(|cluster| cluster.into_iter().cloned().collect())
            .collect()
    }

    fn select_random_route(&self, routes: &[RouteContext], visited: &FxHashSet<usize>) -> Option<usize> {
        let candidates = routes
            .iter()
            .enumerate()
            .filter(|(idx, route_ctx)| !visited.contains(idx) && route_ctx.route().tour.has_jobs())
            .map(|(idx, _)| idx)
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            None
        } else {
            Some(candidates[self.random.uniform_int(0, candidates.len() as i32 - 1) as usize])
        }
    }
}

impl Ruin for ClusterRemoval {
    fn ruin(&self, routes: &mut [RouteContext]) -> Vec<Job> {
        let mut tracker = RemovalTracker::new(self.share.get_share());
        if tracker.is_limit() {
            return tracker.into_removed();
        }

        let job_routes = routes
            .iter()
            .enumerate()
            .flat_map(|(idx, route_ctx)| route_ctx.route().tour.jobs().into_iter().map(move |job| (job, idx)))
            .collect::<FxHashMap<_, _>>();

        let mut visited = FxHashSet::default();
        let mut next_route = self.select_random_route(routes, &visited);

        while let Some(route_idx) = next_route {
            if tracker.is_limit() {
                break;
            }

            visited.insert(route_idx);

            let jobs = routes[route_idx].route().tour.jobs();
            let clusters = self.create_route_clusters(jobs.as_slice());

            next_route = if clusters.is_empty() {
                None
            } else {
                let cluster = &clusters[self.random.uniform_int(0, clusters.len() as i32 - 1) as usize];

                for job in cluster {
                    if tracker.is_limit() {
                        break;
                    }
                    tracker.try_remove(routes, job);
                }

                cluster.iter().find_map(|job| {
                    self.neighborhoods.nearest_neighbors(usize::MAX, job).ok()?.find_map(|other| {
                        job_routes
                            .get(other)
                            .filter(|idx| !visited.contains(*idx) && !tracker.is_removed(other))
                            .copied()
                    })
                })
            };

            next_route = next_route.or_else(|| self.select_random_route(routes, &visited));
        }

        tracker.into_removed()
    }
}
