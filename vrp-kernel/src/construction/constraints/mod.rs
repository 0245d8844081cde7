//! Hard and soft constraints used to evaluate job insertion, and a manager which aggregates them.

mod capacity;
pub use self::capacity::CapacityConstraint;

mod diagnostics;
pub use self::diagnostics::*;

mod fleet_usage;
pub use self::fleet_usage::{FixedCostConstraint, VehicleSwitchConstraint};

mod manager;
pub use self::manager::*;

mod ordering;
pub use self::ordering::{ServiceDeliveriesFirstConstraint, ShipmentPickupsFirstConstraint};

mod pipeline;
pub use self::pipeline::create_default_pipeline;

mod skills;
pub use self::skills::SkillsConstraint;

mod time_in_vehicle;
pub use self::time_in_vehicle::MaxTimeInVehicleConstraint;

mod time_window;
pub use self::time_window::TimeWindowConstraint;

mod travel_limits;
pub use self::travel_limits::{MaxDistanceConstraint, MaxDurationConstraint};
