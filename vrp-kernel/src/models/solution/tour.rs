#[cfg(test)]
#[path = "../../../tests/unit/models/solution/tour_test.rs"]
mod tour_test;

use crate::models::problem::{Actor, Job};
use crate::models::solution::Activity;
use rustc_hash::FxHashSet;
use std::slice::{Iter, IterMut, Windows};

/// A sequence of activities which always starts with a start activity and finishes with an end one.
#[derive(Clone, Debug)]
pub struct Tour {
    activities: Vec<Activity>,
    jobs: FxHashSet<Job>,
}

impl Tour {
    /// Creates an empty tour for given actor.
    pub fn new(actor: &Actor) -> Self {
        Self { activities: vec![Activity::new_start(actor), Activity::new_end(actor)], jobs: FxHashSet::default() }
    }

    /// Inserts activity at given position. Position is clamped so start and end stay in place.
    pub fn insert_at(&mut self, activity: Activity, index: usize) -> &mut Tour {
        let index = index.clamp(1, self.activities.len() - 1);

        if let Some(job) = activity.job.as_ref() {
            self.jobs.insert(job.clone());
        }

        self.activities.insert(index, activity);

        self
    }

    /// Inserts activity just before the end.
    pub fn insert_last(&mut self, activity: Activity) -> &mut Tour {
        self.insert_at(activity, self.activities.len() - 1)
    }

    /// Inserts all activities of the job before the end.
    pub fn insert_job_last(&mut self, job: &Job) -> &mut Tour {
        let fallback = self.activities[self.activities.len() - 2].place.location;
        Activity::from_job(job, fallback).into_iter().for_each(|activity| {
            self.insert_last(activity);
        });

        self
    }

    /// Removes all activities of the job. Returns true if the job was present.
    pub fn remove_job(&mut self, job: &Job) -> bool {
        if !self.jobs.remove(job) {
            return false;
        }

        self.activities.retain(|activity| !activity.has_same_job(job));

        true
    }

    /// Returns true if tour contains given job.
    pub fn contains(&self, job: &Job) -> bool {
        self.jobs.contains(job)
    }

    /// Returns indices of activities which belong to the job.
    pub fn job_activity_indices(&self, job: &Job) -> Vec<usize> {
        self.activities
            .iter()
            .enumerate()
            .filter(|(_, activity)| activity.has_same_job(job))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Returns unique jobs in order of their first activity.
    pub fn jobs(&self) -> Vec<Job> {
        let mut seen = FxHashSet::default();
        self.activities
            .iter()
            .filter_map(|activity| activity.job.as_ref())
            .filter(|job| seen.insert(job.index))
            .cloned()
            .collect()
    }

    /// Returns amount of jobs in the tour.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Returns true if tour has no jobs.
    pub fn has_jobs(&self) -> bool {
        !self.jobs.is_empty()
    }

    /// Returns activity by its index.
    pub fn get(&self, index: usize) -> Option<&Activity> {
        self.activities.get(index)
    }

    /// Returns mutable activity by its index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Activity> {
        self.activities.get_mut(index)
    }

    /// Returns start activity.
    pub fn start(&self) -> &Activity {
        &self.activities[0]
    }

    /// Returns end activity.
    pub fn end(&self) -> &Activity {
        &self.activities[self.activities.len() - 1]
    }

    /// Returns all activities including start and end.
    pub fn all_activities(&self) -> Iter<'_, Activity> {
        self.activities.iter()
    }

    /// Returns all activities as mutable.
    pub fn all_activities_mut(&mut self) -> IterMut<'_, Activity> {
        self.activities.iter_mut()
    }

    /// Returns activities as slice.
    pub fn as_slice(&self) -> &[Activity] {
        self.activities.as_slice()
    }

    /// Returns pairs of consecutive activities.
    pub fn legs(&self) -> Windows<'_, Activity> {
        self.activities.windows(2)
    }

    /// Returns total amount of activities including start and end.
    pub fn total(&self) -> usize {
        self.activities.len()
    }
}
