#[cfg(test)]
#[path = "../../../tests/unit/construction/constraints/manager_test.rs"]
mod manager_test;

use crate::construction::constraints::{RejectionListener, RejectionReport};
use crate::construction::heuristics::{ActivityContext, JobInsertionContext};
use crate::models::common::Cost;
use crate::utils::InfoLogger;
use std::sync::Arc;

/// Specifies result of hard activity constraint check.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintStatus {
    /// Insertion is possible.
    Fulfilled,
    /// Insertion is not possible at this position, but can be possible further in the route.
    NotFulfilled,
    /// Insertion is not possible at this and any further position in the route.
    NotFulfilledBreak,
}

impl ConstraintStatus {
    /// Returns true if status is fulfilled.
    pub fn is_fulfilled(&self) -> bool {
        *self == ConstraintStatus::Fulfilled
    }
}

/// Specifies evaluation tier of hard activity constraint.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Priority {
    /// Evaluated first.
    Critical,
    /// Evaluated after critical ones.
    High,
    /// Evaluated last, the first failure is returned immediately.
    Low,
}

/// A hard constraint evaluated once per job and route.
pub trait HardRouteConstraint {
    /// Returns true if job can be inserted into the route.
    fn evaluate_job(&self, ctx: &JobInsertionContext) -> bool;
}

/// A hard constraint evaluated for every candidate activity position.
pub trait HardActivityConstraint {
    /// Checks whether target activity can be placed between prev and next.
    fn evaluate_activity(&self, ctx: &JobInsertionContext, activity_ctx: &ActivityContext) -> ConstraintStatus;
}

/// A soft constraint evaluated once per job and route.
pub trait SoftRouteConstraint {
    /// Returns cost of inserting job into the route.
    fn estimate_job(&self, ctx: &JobInsertionContext) -> Cost;
}

/// A soft constraint evaluated for every candidate activity position.
pub trait SoftActivityConstraint {
    /// Returns cost of placing target activity between prev and next.
    fn estimate_activity(&self, ctx: &JobInsertionContext, activity_ctx: &ActivityContext) -> Cost;
}

/// A constraint which can play one or more roles. Every role is optional.
pub trait Constraint: Send + Sync {
    /// Returns constraint name used in diagnostics.
    fn name(&self) -> &str;

    /// Returns hard route role.
    fn as_hard_route(&self) -> Option<&dyn HardRouteConstraint> {
        None
    }

    /// Returns hard activity role.
    fn as_hard_activity(&self) -> Option<&dyn HardActivityConstraint> {
        None
    }

    /// Returns soft route role.
    fn as_soft_route(&self) -> Option<&dyn SoftRouteConstraint> {
        None
    }

    /// Returns soft activity role.
    fn as_soft_activity(&self) -> Option<&dyn SoftActivityConstraint> {
        None
    }
}

/// Aggregates constraints and evaluates them.
///
/// Hard activity constraints are split into three tiers evaluated in order: critical, high and
/// low. Within critical and high tiers, evaluation continues after the first failure as a
/// later constraint can still return [`ConstraintStatus::NotFulfilledBreak`], which lets the
/// caller stop scanning further positions. Within low tier, the first failure is returned.
pub struct ConstraintManager {
    hard_route: Vec<Arc<dyn Constraint>>,
    critical: Vec<Arc<dyn Constraint>>,
    high: Vec<Arc<dyn Constraint>>,
    low: Vec<Arc<dyn Constraint>>,
    soft_route: Vec<Arc<dyn Constraint>>,
    soft_activity: Vec<Arc<dyn Constraint>>,
    listeners: Vec<Arc<dyn RejectionListener>>,
    logger: InfoLogger,
}

impl ConstraintManager {
    /// Creates a new instance of `ConstraintManager`.
    pub fn new(logger: InfoLogger) -> Self {
        Self {
            hard_route: vec![],
            critical: vec![],
            high: vec![],
            low: vec![],
            soft_route: vec![],
            soft_activity: vec![],
            listeners: vec![],
            logger,
        }
    }

    /// Registers constraint into every collection of a role it implements. Priority is used
    /// only by hard activity role.
    pub fn add_constraint(&mut self, constraint: Arc<dyn Constraint>, priority: Priority) -> &mut Self {
        let mut is_known = false;

        if constraint.as_hard_route().is_some() {
            self.hard_route.push(constraint.clone());
            is_known = true;
        }

        if constraint.as_hard_activity().is_some() {
            match priority {
                Priority::Critical => self.critical.push(constraint.clone()),
                Priority::High => self.high.push(constraint.clone()),
                Priority::Low => self.low.push(constraint.clone()),
            }
            is_known = true;
        }

        if constraint.as_soft_route().is_some() {
            self.soft_route.push(constraint.clone());
            is_known = true;
        }

        if constraint.as_soft_activity().is_some() {
            self.soft_activity.push(constraint.clone());
            is_known = true;
        }

        if !is_known {
            (self.logger)(&format!("constraint '{}' has no known role, ignored", constraint.name()));
        }

        self
    }

    /// Adds a listener notified about every hard rejection.
    pub fn add_listener(&mut self, listener: Arc<dyn RejectionListener>) -> &mut Self {
        self.listeners.push(listener);
        self
    }

    /// Checks all hard route constraints, stops at the first failure.
    pub fn check_route(&self, ctx: &JobInsertionContext) -> bool {
        match self.find_route_violation(ctx) {
            Some(constraint) => {
                self.notify(|| RejectionReport::new(constraint.name(), None, ctx));
                false
            }
            None => true,
        }
    }

    /// Checks all hard activity constraints tier by tier.
    pub fn check_activity(&self, ctx: &JobInsertionContext, activity_ctx: &ActivityContext) -> ConstraintStatus {
        match self.find_activity_violation(ctx, activity_ctx) {
            Some((status, constraint)) => {
                self.notify(|| RejectionReport::new(constraint.name(), Some(status), ctx));
                status
            }
            None => ConstraintStatus::Fulfilled,
        }
    }

    /// Returns sum of all soft route costs.
    pub fn cost_route(&self, ctx: &JobInsertionContext) -> Cost {
        self.soft_route.iter().filter_map(|constraint| constraint.as_soft_route()).map(|c| c.estimate_job(ctx)).sum()
    }

    /// Returns sum of all soft activity costs.
    pub fn cost_activity(&self, ctx: &JobInsertionContext, activity_ctx: &ActivityContext) -> Cost {
        self.soft_activity
            .iter()
            .filter_map(|constraint| constraint.as_soft_activity())
            .map(|constraint| constraint.estimate_activity(ctx, activity_ctx))
            .sum()
    }

    /// Explains route level rejection, if any.
    pub fn explain_route(&self, ctx: &JobInsertionContext) -> Option<RejectionReport> {
        self.find_route_violation(ctx).map(|constraint| RejectionReport::new(constraint.name(), None, ctx))
    }

    /// Explains activity level rejection, if any.
    pub fn explain_activity(&self, ctx: &JobInsertionContext, activity_ctx: &ActivityContext) -> Option<RejectionReport> {
        self.find_activity_violation(ctx, activity_ctx)
            .map(|(status, constraint)| RejectionReport::new(constraint.name(), Some(status), ctx))
    }

    fn find_route_violation(&self, ctx: &JobInsertionContext) -> Option<&Arc<dyn Constraint>> {
        self.hard_route
            .iter()
            .find(|constraint| constraint.as_hard_route().is_some_and(|hard| !hard.evaluate_job(ctx)))
    }

    fn find_activity_violation(
        &self,
        ctx: &JobInsertionContext,
        activity_ctx: &ActivityContext,
    ) -> Option<(ConstraintStatus, &Arc<dyn Constraint>)> {
        let tiers = [(Priority::Critical, &self.critical), (Priority::High, &self.high), (Priority::Low, &self.low)];

        for (priority, constraints) in tiers {
            let mut not_fulfilled = None;

            for constraint in constraints.iter() {
                let Some(hard) = constraint.as_hard_activity() else { continue };

                match hard.evaluate_activity(ctx, activity_ctx) {
                    ConstraintStatus::Fulfilled => {}
                    ConstraintStatus::NotFulfilledBreak => {
                        return Some((ConstraintStatus::NotFulfilledBreak, constraint));
                    }
                    ConstraintStatus::NotFulfilled if priority == Priority::Low => {
                        return Some((ConstraintStatus::NotFulfilled, constraint));
                    }
                    ConstraintStatus::NotFulfilled => {
                        not_fulfilled = not_fulfilled.or(Some(constraint));
                    }
                }
            }

            if let Some(constraint) = not_fulfilled {
                return Some((ConstraintStatus::NotFulfilled, constraint));
            }
        }

        None
    }

    fn notify<F: Fn() -> RejectionReport>(&self, report_fn: F) {
        if self.listeners.is_empty() {
            return;
        }

        let report = report_fn();
        self.listeners.iter().for_each(|listener| listener.on_rejection(&report));
    }
}
