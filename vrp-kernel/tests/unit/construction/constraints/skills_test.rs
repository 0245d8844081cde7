use super::*;
use crate::helpers::models::problem::*;
use crate::helpers::models::solution::*;
use crate::models::problem::JobBuilder;

fn create_skilled_service(index: usize, skills: &[&str]) -> crate::models::problem::Job {
    build_job(JobBuilder::service(&format!("job{index}"), test_place(index as f64)).skills(skills), index)
}

parameterized_test! {can_check_skills, (vehicle_skills, job_skills, route_skills, expected), {
    let (vehicle_skills, job_skills, route_skills): (&[&str], &[&str], &[&str]) = (vehicle_skills, job_skills, route_skills);
    let route_actor = build_actor(test_vehicle_builder(0).skills(&["a", "b", "c"]), 0);
    let new_actor = build_actor(test_vehicle_builder(1).skills(vehicle_skills), 1);
    let route_jobs = if route_skills.is_empty() { vec![] } else { vec![create_skilled_service(1, route_skills)] };
    let route_ctx = create_updated_route_ctx(route_actor, &route_jobs);
    let job = create_skilled_service(2, job_skills);

    let ctx = JobInsertionContext::new(&route_ctx, &job, &new_actor);
    let result = SkillsConstraint::default().evaluate_job(&ctx);

    assert_eq!(result, expected);
}}

can_check_skills! {
    case01_no_skills_required: (&[], &[], &[], true),
    case02_job_skills_subset: (&["a", "b"], &["a"], &[], true),
    case03_job_skill_missing: (&["a"], &["a", "b"], &[], false),
    case04_route_skill_missing: (&["a"], &["a"], &["c"], false),
    case05_route_and_job_skills_present: (&["a", "c"], &["a"], &["c"], true),
    case06_skills_required_but_vehicle_has_none: (&[], &["a"], &[], false),
}

#[test]
fn can_be_hard_route_constraint_only() {
    let constraint = SkillsConstraint::default();

    assert_eq!(constraint.name(), "skills");
    assert!(constraint.as_hard_route().is_some());
    assert!(constraint.as_hard_activity().is_none());
}
