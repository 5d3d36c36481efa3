//! Domain module for drone operations coordination
//!
//! This crate contains pure domain logic with no I/O dependencies:
//! - Pilot, drone and mission records with typed fields
//! - Tag sets and lenient date handling
//! - The assignment validation engine and its verdict

#![warn(missing_docs)]

pub mod error;
pub mod records;
pub mod validation;

pub use error::{DomainError, Result};
pub use records::{
    is_sentinel, parse_date, Drone, DroneStatus, Mission, Pilot, PilotStatus, TagSet, SENTINEL,
};
pub use validation::{validate, CheckKind, Finding, Severity, Verdict, VerdictSummary};
