#[cfg(test)]
#[path = "../../../../tests/unit/solver/search/ruin/random_removal_test.rs"]
mod random_removal_test;

use super::*;

/// A ruin strategy which removes uniformly selected jobs.
pub struct RandomRemoval {
    share: Arc<dyn RuinShare>,
    random: Arc<dyn Random>,
}

impl RandomRemoval {
    /// Creates a new instance of `RandomRemoval`.
    pub fn new(share: Arc<dyn RuinShare>, random: Arc<dyn Random>) -> Self {
        Self { share, random }
    }
}

impl Ruin for RandomRemoval {
    fn ruin(&self, routes: &mut [RouteContext]) -> Vec<Job> {
        let candidates = get_assigned_jobs(routes);
        let mut tracker = RemovalTracker::new(self.share.get_share());

        remove_random_jobs(routes, candidates, &mut tracker, self.random.as_ref());

        tracker.into_removed()
    }
}

/// Removes jobs picked uniformly from candidates till quota is reached or no candidates left.
pub(crate) fn remove_random_jobs(
    routes: &mut [RouteContext],
    mut candidates: Vec<Job>,
    tracker: &mut RemovalTracker,
    random: &dyn Random,
) {
    candidates.retain(|job| !tracker.is_removed(job));

    while !tracker.is_limit() && !candidates.is_empty() {
        let idx = random.uniform_int(0, candidates.len() as i32 - 1) as usize;
        let job = candidates.remove(idx);

        tracker.try_remove(routes, &job);
    }
}
