//! Route and activity state propagation.

mod distance;
pub use self::distance::*;

mod load;
pub use self::load::*;

mod manager;
pub use self::manager::*;

mod route_state;
pub use self::route_state::*;

mod schedule;
pub use self::schedule::*;

mod skills;
pub use self::skills::*;

mod time_in_vehicle;
pub use self::time_in_vehicle::*;

mod time_windows;
pub use self::time_windows::*;
