//! Core functionality for the drone operations coordinator.
//!
//! This crate provides the ambient pieces shared by every other crate in the
//! workspace: configuration loading, logging initialization and the core
//! error type.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, LoggingConfig, RosterConfig};
pub use error::{CoreError, Result};
