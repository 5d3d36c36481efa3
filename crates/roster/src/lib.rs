//! Roster store and coordination operations
//!
//! The roster is the system of record for pilots, drones and missions. This
//! crate provides:
//! - [`Row`]: a normalized, string-valued tabular row
//! - [`RosterStore`]: the store seam, with [`MemoryRoster`] as the in-memory
//!   implementation
//! - [`Workbook`]: the JSON file holding the three sheets
//! - [`Coordinator`]: summaries, queries, conflict scans and assignment
//!   suggestions built on top of a store and the validator

pub mod convert;
pub mod coordinator;
pub mod error;
pub mod row;
pub mod store;
pub mod workbook;

pub use convert::FromRow;
pub use coordinator::{
    Coordinator, DroneFilter, DroneSummary, MissionFilter, PilotFilter, PilotSummary, Suggestion,
};
pub use error::{RosterError, Result};
pub use row::Row;
pub use store::{MemoryRoster, RosterStore};
pub use workbook::Workbook;
