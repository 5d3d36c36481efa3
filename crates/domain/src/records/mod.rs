//! Roster record models
//!
//! Flat pilot, drone and mission records. Every field arrives from the
//! tabular store as text; tag lists and statuses are parsed once here and
//! date fields stay raw until a check needs them.

pub mod dates;
pub mod drone;
pub mod mission;
pub mod pilot;
pub mod tags;

pub use dates::{is_sentinel, parse_date, SENTINEL};
pub use drone::{Drone, DroneStatus};
pub use mission::Mission;
pub use pilot::{Pilot, PilotStatus};
pub use tags::TagSet;
