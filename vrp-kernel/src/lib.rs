//! Kernel crate contains building blocks of a ruin and recreate metaheuristic to solve variations
//! of ***Vehicle Routing Problem***:
//!
//! - route and activity state propagation (schedules, practical time windows, loads, distances)
//! - hard and soft constraints aggregated by [`ConstraintManager`](construction::constraints::ConstraintManager)
//!   with three evaluation tiers of hard activity constraints
//! - marginal insertion cost evaluation
//! - job neighbourhood index
//! - ruin strategies: random, radial, cluster, worst and farthest removal
//!
//! A search driver, which uses these blocks, is not a part of this crate.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use vrp_kernel::construction::constraints::create_default_pipeline;
//! use vrp_kernel::construction::heuristics::RouteContext;
//! use vrp_kernel::models::common::Location;
//! use vrp_kernel::models::problem::{JobBuilder, JobPlace, ProblemBuilder, VehicleBuilder};
//! use vrp_kernel::utils::{Environment, GenericError};
//!
//! let job = JobBuilder::service("job1", JobPlace::new(Some(Location::with_coordinate(1, 10., 0.)), 5., vec![]));
//! let vehicle = VehicleBuilder::new("v1", Location::with_coordinate(0, 0., 0.));
//! let problem = ProblemBuilder::default().add_job(job).add_vehicle(vehicle).build()?;
//!
//! let (states, _constraints) = create_default_pipeline(&problem, &Environment::new_with_seed(0))?;
//!
//! let mut route_ctx = RouteContext::new(problem.fleet.actors[0].clone());
//! route_ctx.route_mut().tour.insert_job_last(&problem.jobs[0]);
//! states.update_route(&mut route_ctx);
//!
//! assert_eq!(route_ctx.route().tour.end().schedule.arrival, 25.);
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod construction;
pub mod models;
pub mod solver;
pub mod utils;
