use crate::construction::heuristics::{ActivityContext, JobInsertionContext, RouteContext};
use crate::models::problem::{Actor, Job};
use crate::models::solution::Activity;
use std::sync::Arc;

/// Calls `func` with contexts of inserting the first activity of the job after the activity at `index`.
pub fn with_activity_ctx<F, R>(route_ctx: &RouteContext, job: &Job, actor: &Arc<Actor>, index: usize, func: F) -> R
where
    F: FnOnce(&JobInsertionContext, &ActivityContext) -> R,
{
    let ctx = JobInsertionContext::new(route_ctx, job, actor).with_insertion_index(index);
    let tour = &route_ctx.route().tour;
    let prev = tour.get(index).unwrap();
    let next = tour.get(index + 1).unwrap();
    let target = Activity::from_job(job, prev.place.location).remove(0);
    let prev_departure = if index == 0 { ctx.new_departure } else { prev.schedule.departure };

    let activity_ctx = ActivityContext { index, prev, target: &target, next, prev_departure };

    func(&ctx, &activity_ctx)
}
