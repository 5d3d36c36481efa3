//! Roster errors

use std::path::PathBuf;
use thiserror::Error;

/// Failures of roster loading, lookups and coordination
#[derive(Error, Debug)]
pub enum RosterError {
    /// No record with this id
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    /// Two rows in one sheet share an id
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// No available pilot or drone at the mission location
    #[error("No available pilot-drone pairs found in {location} for {project_id}")]
    NoCandidates { project_id: String, location: String },

    /// Commit refused; carries the verdict's conflicts
    #[error("Assignment has conflicts that must be resolved first: {}", conflicts.join("; "))]
    InvalidAssignment { conflicts: Vec<String> },

    /// Reading or writing the workbook file failed
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Workbook JSON is malformed
    #[error("Workbook format error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RosterError {
    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// Result alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
