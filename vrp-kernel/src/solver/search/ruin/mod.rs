//! The ruin module contains various strategies to destroy small, medium or large parts of an
//! existing solution.
//!
//! Every strategy removes activities from the routes in place and returns removed jobs, each job
//! exactly once. A route state is cleared when the route is modified, so state updaters have to be
//! run again before the next constraint check.

#[cfg(test)]
#[path = "../../../../tests/unit/solver/search/ruin/ruin_test.rs"]
mod ruin_test;

use crate::construction::heuristics::RouteContext;
use crate::models::problem::Job;
use crate::utils::{Float, GenericResult, Random};
use rustc_hash::FxHashSet;
use std::sync::Arc;

mod cluster_removal;
pub use self::cluster_removal::ClusterRemoval;

mod farthest_removal;
pub use self::farthest_removal::FarthestRemoval;

mod radial_removal;
pub use self::radial_removal::{RadialMode, RadialRemoval};

mod random_removal;
pub use self::random_removal::RandomRemoval;

mod worst_removal;
pub use self::worst_removal::WorstRemoval;

/// A trait which specifies logic to destroy parts of solution.
pub trait Ruin: Send + Sync {
    /// Removes some jobs from given routes and returns them.
    fn ruin(&self, routes: &mut [RouteContext]) -> Vec<Job>;
}

/// Decides how many jobs should be removed by a single ruin call.
pub trait RuinShare: Send + Sync {
    /// Returns amount of jobs to remove.
    fn get_share(&self) -> usize;
}

/// Removes the same amount of jobs every time.
pub struct FixedRuinShare {
    share: usize,
}

impl FixedRuinShare {
    /// Creates a new instance of `FixedRuinShare`.
    pub fn new(share: usize) -> Self {
        Self { share }
    }
}

impl RuinShare for FixedRuinShare {
    fn get_share(&self) -> usize {
        self.share
    }
}

/// Removes a fraction of total job count, rounded up.
pub struct FractionRuinShare {
    share: usize,
}

impl FractionRuinShare {
    /// Creates a new instance of `FractionRuinShare`. Fraction must be in `[0, 1]` range.
    pub fn new(fraction: Float, total: usize) -> GenericResult<Self> {
        if !(0. ..=1.).contains(&fraction) {
            return Err(format!("ruin fraction should be in [0, 1] range, got: {fraction}").into());
        }

        Ok(Self { share: (fraction * total as Float).ceil() as usize })
    }
}

impl RuinShare for FractionRuinShare {
    fn get_share(&self) -> usize {
        self.share
    }
}

/// Removes a random amount of jobs from the closed `[min, max]` range.
pub struct RandomRuinShare {
    min: usize,
    max: usize,
    random: Arc<dyn Random>,
}

impl RandomRuinShare {
    /// Creates a new instance of `RandomRuinShare`.
    pub fn new(min: usize, max: usize, random: Arc<dyn Random>) -> GenericResult<Self> {
        if min > max {
            return Err(format!("min ruin share is greater than max: {min} > {max}").into());
        }

        Ok(Self { min, max, random })
    }
}

impl RuinShare for RandomRuinShare {
    fn get_share(&self) -> usize {
        self.random.uniform_int(self.min as i32, self.max as i32) as usize
    }
}

/// Returns all assigned jobs in route order.
pub(crate) fn get_assigned_jobs(routes: &[RouteContext]) -> Vec<Job> {
    routes.iter().flat_map(|route_ctx| route_ctx.route().tour.jobs()).collect()
}

/// Removes the job with all its activities from the route which contains it.
pub(crate) fn remove_job(routes: &mut [RouteContext], job: &Job) -> bool {
    routes
        .iter_mut()
        .find(|route_ctx| route_ctx.route().tour.contains(job))
        .is_some_and(|route_ctx| route_ctx.route_mut().tour.remove_job(job))
}

/// Keeps track of removed jobs and remaining quota.
pub(crate) struct RemovalTracker {
    removed: Vec<Job>,
    index: FxHashSet<Job>,
    quota: usize,
}

impl RemovalTracker {
    pub fn new(quota: usize) -> Self {
        Self { removed: vec![], index: FxHashSet::default(), quota }
    }

    /// Removes job from routes if it is not removed yet.
    pub fn try_remove(&mut self, routes: &mut [RouteContext], job: &Job) -> bool {
        if self.index.contains(job) || !remove_job(routes, job) {
            return false;
        }

        self.index.insert(job.clone());
        self.removed.push(job.clone());

        true
    }

    pub fn is_removed(&self, job: &Job) -> bool {
        self.index.contains(job)
    }

    pub fn is_limit(&self) -> bool {
        self.removed.len() >= self.quota
    }

    pub fn into_removed(self) -> Vec<Job> {
        self.removed
    }
}
