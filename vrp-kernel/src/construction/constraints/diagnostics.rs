#[cfg(test)]
#[path = "../../../tests/unit/construction/constraints/diagnostics_test.rs"]
mod diagnostics_test;

use crate::construction::constraints::ConstraintStatus;
use crate::construction::heuristics::JobInsertionContext;
use crate::utils::InfoLogger;
use rustc_hash::FxHashMap;
use std::sync::Mutex;

/// Describes a hard constraint rejection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RejectionReport {
    /// Name of the failed constraint.
    pub constraint: String,
    /// Activity level status, `None` for route level rejection.
    pub status: Option<ConstraintStatus>,
    /// Job id.
    pub job_id: String,
    /// Candidate vehicle id.
    pub vehicle_id: String,
    /// Insertion index.
    pub insertion_index: usize,
    /// Ids of jobs in the route in visit order.
    pub route_jobs: Vec<String>,
}

impl RejectionReport {
    /// Creates a new instance of `RejectionReport` from insertion context.
    pub fn new(constraint: &str, status: Option<ConstraintStatus>, ctx: &JobInsertionContext) -> Self {
        Self {
            constraint: constraint.to_string(),
            status,
            job_id: ctx.job.id.clone(),
            vehicle_id: ctx.new_actor.vehicle.id.clone(),
            insertion_index: ctx.insertion_index,
            route_jobs: ctx.route_ctx.route().tour.jobs().iter().map(|job| job.id.clone()).collect(),
        }
    }
}

/// Listens to hard constraint rejections.
pub trait RejectionListener: Send + Sync {
    /// Called on every rejection.
    fn on_rejection(&self, report: &RejectionReport);
}

/// Writes rejections to the logger.
pub struct LoggingRejectionListener {
    logger: InfoLogger,
}

impl LoggingRejectionListener {
    /// Creates a new instance of `LoggingRejectionListener`.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }
}

impl RejectionListener for LoggingRejectionListener {
    fn on_rejection(&self, report: &RejectionReport) {
        (self.logger)(&format!(
            "job '{}' rejected by '{}' for vehicle '{}' at index {}, route: [{}]",
            report.job_id,
            report.constraint,
            report.vehicle_id,
            report.insertion_index,
            report.route_jobs.join(",")
        ));
    }
}

/// Counts rejection reasons per job, used to explain why a job stays unassigned.
#[derive(Default)]
pub struct UnassignedReasonTracker {
    reasons: Mutex<FxHashMap<String, FxHashMap<String, usize>>>,
}

impl UnassignedReasonTracker {
    /// Returns reasons with their counts for given job, the most frequent first.
    /// Equal counts are ordered by constraint name.
    pub fn reasons(&self, job_id: &str) -> Vec<(String, usize)> {
        let reasons = self.reasons.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut result = reasons
            .get(job_id)
            .map(|counts| counts.iter().map(|(name, count)| (name.clone(), *count)).collect::<Vec<_>>())
            .unwrap_or_default();

        result.sort_by(|(a_name, a_count), (b_name, b_count)| b_count.cmp(a_count).then_with(|| a_name.cmp(b_name)));

        result
    }

    /// Returns the most frequent reason for given job.
    pub fn most_likely_reason(&self, job_id: &str) -> Option<String> {
        self.reasons(job_id).into_iter().next().map(|(name, _)| name)
    }

    /// Forgets reasons of all jobs.
    pub fn clear(&self) {
        self.reasons.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clear();
    }
}

impl RejectionListener for UnassignedReasonTracker {
    fn on_rejection(&self, report: &RejectionReport) {
        let mut reasons = self.reasons.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        *reasons.entry(report.job_id.clone()).or_default().entry(report.constraint.clone()).or_insert(0) += 1;
    }
}
