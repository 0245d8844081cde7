#[cfg(test)]
#[path = "../../../../tests/unit/solver/search/ruin/radial_removal_test.rs"]
mod radial_removal_test;

use super::random_removal::remove_random_jobs;
use super::*;
use crate::models::common::Distance;
use crate::models::problem::JobNeighborhoods;
use crate::utils::compare_floats;

/// Specifies how the next job to remove is selected by [`RadialRemoval`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RadialMode {
    /// The next nearest job to the seed job.
    #[default]
    Seed,
    /// The nearest job to any of already removed ones.
    Expanding,
}

/// A ruin strategy which removes jobs spatially close to a random seed job.
///
/// Jobs which have no location are still removable: when spatial selection cannot proceed, the
/// rest of the quota is filled with randomly selected jobs.
pub struct RadialRemoval {
    neighborhoods: Arc<JobNeighborhoods>,
    share: Arc<dyn RuinShare>,
    random: Arc<dyn Random>,
    mode: RadialMode,
}

impl RadialRemoval {
    /// Creates a new instance of `RadialRemoval`. Neighbourhood index must be initialised.
    pub fn new(
        neighborhoods: Arc<JobNeighborhoods>,
        share: Arc<dyn RuinShare>,
        random: Arc<dyn Random>,
    ) -> GenericResult<Self> {
        if !neighborhoods.is_initialised() {
            return Err("radial removal requires initialised job neighborhoods".into());
        }

        Ok(Self { neighborhoods, share, random, mode: RadialMode::default() })
    }

    /// Sets selection mode.
    pub fn with_mode(mut self, mode: RadialMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the nearest assigned and not yet removed neighbour of given job.
    fn nearest_assigned(
        &self,
        job: &Job,
        assigned: &FxHashSet<Job>,
        tracker: &RemovalTracker,
    ) -> Option<(Job, Distance)> {
        self.neighborhoods
            .nearest_neighbors_with_distance(usize::MAX, job)
            .ok()?
            .filter_map(|(other, distance)| distance.map(|distance| (other, distance)))
            .find(|(other, _)| assigned.contains(*other) && !tracker.is_removed(other))
            .map(|(other, distance)| (other.clone(), distance))
    }
}

impl Ruin for RadialRemoval {
    fn ruin(&self, routes: &mut [RouteContext]) -> Vec<Job> {
        let candidates = get_assigned_jobs(routes);
        let mut tracker = RemovalTracker::new(self.share.get_share());

        if candidates.is_empty() || tracker.is_limit() {
            return tracker.into_removed();
        }

        let assigned = candidates.iter().cloned().collect::<FxHashSet<_>>();
        let seeds = candidates.iter().filter(|job| job.locations().next().is_some()).collect::<Vec<_>>();

        if !seeds.is_empty() {
            let seed = seeds[self.random.uniform_int(0, seeds.len() as i32 - 1) as usize].clone();
            tracker.try_remove(routes, &seed);

            match self.mode {
                RadialMode::Seed => {
                    while !tracker.is_limit() {
                        let Some((job, _)) = self.nearest_assigned(&seed, &assigned, &tracker) else { break };
                        if !tracker.try_remove(routes, &job) {
                            break;
                        }
                    }
                }
                RadialMode::Expanding => {
                    let mut removed = vec![seed];
                    while !tracker.is_limit() {
                        // NOTE the first removed job wins on equal distance
                        let nearest = removed
                            .iter()
                            .filter_map(|job| self.nearest_assigned(job, &assigned, &tracker))
                            .reduce(|best, next| if compare_floats(next.1, best.1).is_lt() { next } else { best });

                        let Some((job, _)) = nearest else { break };
                        if !tracker.try_remove(routes, &job) {
                            break;
                        }
                        removed.push(job);
                    }
                }
            }
        }

        remove_random_jobs(routes, candidates, &mut tracker, self.random.as_ref());

        tracker.into_removed()
    }
}
