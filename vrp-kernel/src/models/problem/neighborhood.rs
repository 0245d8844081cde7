#[cfg(test)]
#[path = "../../../tests/unit/models/problem/neighborhood_test.rs"]
mod neighborhood_test;

use crate::models::common::{Distance, Load, Location};
use crate::models::problem::{Actor, Job, TransportCost};
use crate::utils::{GenericResult, compare_floats};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Calculates distance between two jobs.
pub trait JobDistance: Send + Sync {
    /// Returns distance between jobs or `None` if it cannot be resolved.
    fn distance(&self, from: &Job, to: &Job) -> Option<Distance>;
}

/// Uses min straight line distance between coordinates of job places.
#[derive(Default)]
pub struct EuclideanJobDistance {}

impl JobDistance for EuclideanJobDistance {
    fn distance(&self, from: &Job, to: &Job) -> Option<Distance> {
        min_distance(from, to, |a, b| match (a.coordinate, b.coordinate) {
            (Some(a), Some(b)) => Some(a.distance_to_point(&b)),
            _ => None,
        })
    }
}

/// Uses min routing distance between job places for given actor.
pub struct TransportJobDistance {
    transport: Arc<dyn TransportCost>,
    actor: Arc<Actor>,
}

impl TransportJobDistance {
    /// Creates a new instance of `TransportJobDistance`.
    pub fn new(transport: Arc<dyn TransportCost>, actor: Arc<Actor>) -> Self {
        Self { transport, actor }
    }
}

impl JobDistance for TransportJobDistance {
    fn distance(&self, from: &Job, to: &Job) -> Option<Distance> {
        min_distance(from, to, |a, b| Some(self.transport.distance(&self.actor, a, b, 0.)))
    }
}

fn min_distance<F>(from: &Job, to: &Job, distance_fn: F) -> Option<Distance>
where
    F: Fn(&Location, &Location) -> Option<Distance>,
{
    from.locations()
        .flat_map(|a| to.locations().map(move |b| (a, b)))
        .filter_map(|(a, b)| distance_fn(&a, &b))
        .min_by(|a, b| compare_floats(*a, *b))
}

/// Keeps for every job other jobs ordered by distance. Ties are kept in original job order.
/// Jobs with unresolvable distance are placed after all others.
///
/// Once initialised, the index is read-only and can be shared between threads.
pub struct JobNeighborhoods {
    jobs: Vec<Job>,
    positions: FxHashMap<usize, usize>,
    distance: Arc<dyn JobDistance>,
    capacity: Option<Load>,
    index: Option<Vec<Vec<(usize, Option<Distance>)>>>,
}

impl JobNeighborhoods {
    /// Creates a new, not yet initialised, instance of `JobNeighborhoods`.
    pub fn new(jobs: Vec<Job>, distance: Arc<dyn JobDistance>) -> Self {
        let positions = jobs.iter().enumerate().map(|(position, job)| (job.index, position)).collect();
        Self { jobs, positions, distance, capacity: None, index: None }
    }

    /// Excludes neighbours whose combined size cannot fit together into given capacity.
    pub fn with_capacity_restriction(mut self, capacity: Load) -> Self {
        self.capacity = Some(capacity);
        self.index = None;
        self
    }

    /// Builds the index. Has to be called before any query.
    pub fn initialise(&mut self) {
        let jobs = &self.jobs;
        let distance = self.distance.as_ref();
        let capacity = self.capacity;

        let index = jobs
            .par_iter()
            .map(|job| {
                let mut neighbours = jobs
                    .iter()
                    .enumerate()
                    .filter(|(_, other)| *other != job)
                    .filter(|(_, other)| {
                        capacity.is_none_or(|capacity| capacity.can_fit(&(job.size.abs() + other.size.abs())))
                    })
                    .map(|(position, other)| (position, distance.distance(job, other)))
                    .collect::<Vec<_>>();

                // NOTE stable sort keeps original order for equal distances
                neighbours.sort_by(|(_, a), (_, b)| match (a, b) {
                    (Some(a), Some(b)) => compare_floats(*a, *b),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                });

                neighbours
            })
            .collect();

        self.index = Some(index);
    }

    /// Returns true if index was built.
    pub fn is_initialised(&self) -> bool {
        self.index.is_some()
    }

    /// Returns all indexed jobs.
    pub fn jobs(&self) -> &[Job] {
        self.jobs.as_slice()
    }

    /// Returns distance between two jobs using configured distance.
    pub fn distance(&self, from: &Job, to: &Job) -> Option<Distance> {
        self.distance.distance(from, to)
    }

    /// Returns up to `k` nearest neighbours of the job, job itself is excluded.
    pub fn nearest_neighbors<'a>(
        &'a self,
        k: usize,
        job: &Job,
    ) -> GenericResult<impl Iterator<Item = &'a Job> + use<'a>> {
        Ok(self.nearest_neighbors_with_distance(k, job)?.map(|(job, _)| job))
    }

    /// Returns up to `k` nearest neighbours of the job together with their distance.
    pub fn nearest_neighbors_with_distance<'a>(
        &'a self,
        k: usize,
        job: &Job,
    ) -> GenericResult<impl Iterator<Item = (&'a Job, Option<Distance>)> + use<'a>> {
        let index = self.index.as_ref().ok_or("job neighborhoods are not initialised")?;
        let position = self.positions.get(&job.index).ok_or_else(|| format!("unknown job: '{}'", job.id))?;

        Ok(index[*position].iter().take(k).map(move |(position, distance)| (&self.jobs[*position], *distance)))
    }
}
