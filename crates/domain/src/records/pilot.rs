//! Pilot roster records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, Result};
use crate::records::dates::{parse_date, SENTINEL};
use crate::records::tags::TagSet;

/// Pilot duty status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PilotStatus {
    /// Free to take a mission
    Available,
    /// Already flying a mission
    Assigned,
    /// Away until `available_from`
    OnLeave,
    /// Any value outside the fixed set, kept verbatim
    Other(String),
}

impl PilotStatus {
    /// Lenient conversion used for store values: exact match after trimming.
    pub fn from_field(value: &str) -> Self {
        match value.trim() {
            "Available" => Self::Available,
            "Assigned" => Self::Assigned,
            "On Leave" => Self::OnLeave,
            other => Self::Other(other.to_string()),
        }
    }

    /// Strict, case-insensitive conversion for operator input.
    pub fn parse_strict(value: &str) -> Result<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace(&['_', '-'][..], " ");
        match normalized.as_str() {
            "available" => Ok(Self::Available),
            "assigned" => Ok(Self::Assigned),
            "on leave" => Ok(Self::OnLeave),
            _ => Err(DomainError::UnknownStatus {
                kind: "pilot",
                value: value.to_string(),
            }),
        }
    }

    /// Display label as stored in the roster
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "Available",
            Self::Assigned => "Assigned",
            Self::OnLeave => "On Leave",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for PilotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PilotStatus {
    fn from(value: String) -> Self {
        Self::from_field(&value)
    }
}

impl From<PilotStatus> for String {
    fn from(status: PilotStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A pilot on the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pilot {
    /// Unique pilot identifier (e.g. `P001`)
    pub pilot_id: String,

    /// Display name
    pub name: String,

    /// Flying skills (e.g. `Mapping, Survey`)
    pub skills: TagSet,

    /// Regulatory certifications (e.g. `DGCA, Night Ops`)
    pub certifications: TagSet,

    /// Current base location
    pub location: String,

    /// Duty status
    pub status: PilotStatus,

    /// Mission the pilot is flying, or a sentinel
    pub current_assignment: String,

    /// Date the pilot is free again, or a sentinel
    pub available_from: String,
}

impl Pilot {
    /// Create an available pilot with no tags and no assignment
    pub fn new(pilot_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            pilot_id: pilot_id.into(),
            name: name.into(),
            skills: TagSet::default(),
            certifications: TagSet::default(),
            location: String::new(),
            status: PilotStatus::Available,
            current_assignment: SENTINEL.to_string(),
            available_from: SENTINEL.to_string(),
        }
    }

    /// Set skills from a delimited field
    pub fn with_skills(mut self, skills: &str) -> Self {
        self.skills = TagSet::parse(skills);
        self
    }

    /// Set certifications from a delimited field
    pub fn with_certifications(mut self, certifications: &str) -> Self {
        self.certifications = TagSet::parse(certifications);
        self
    }

    /// Set base location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set duty status
    pub fn with_status(mut self, status: PilotStatus) -> Self {
        self.status = status;
        self
    }

    /// Set current assignment and the date the pilot frees up
    pub fn with_assignment(
        mut self,
        assignment: impl Into<String>,
        available_from: impl Into<String>,
    ) -> Self {
        self.current_assignment = assignment.into();
        self.available_from = available_from.into();
        self
    }

    /// Parsed `available_from`, if it holds a real date
    pub fn available_date(&self) -> Option<NaiveDate> {
        parse_date(&self.available_from)
    }

    /// Check if pilot can take a mission right now
    pub fn is_available(&self) -> bool {
        self.status == PilotStatus::Available
    }
}
