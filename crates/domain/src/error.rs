//! Domain errors
//!
//! Pure domain errors with no infrastructure dependencies

use thiserror::Error;

/// Errors raised by strict parsing of user-supplied values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Status text that is not one of the fixed values
    #[error("Unknown {kind} status: {value}")]
    UnknownStatus {
        /// Record kind the status belongs to
        kind: &'static str,
        /// Offending input
        value: String,
    },
}

/// Domain result alias
pub type Result<T> = std::result::Result<T, DomainError>;
