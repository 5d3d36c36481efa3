//! Drone fleet records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, Result};
use crate::records::dates::{parse_date, SENTINEL};
use crate::records::tags::TagSet;

/// Drone operational status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DroneStatus {
    /// Ready to fly
    Available,
    /// Committed to a mission
    Assigned,
    /// Grounded for maintenance
    Maintenance,
    /// Any value outside the fixed set, kept verbatim
    Other(String),
}

impl DroneStatus {
    /// Lenient conversion used for store values: exact match after trimming.
    pub fn from_field(value: &str) -> Self {
        match value.trim() {
            "Available" => Self::Available,
            "Assigned" => Self::Assigned,
            "Maintenance" => Self::Maintenance,
            other => Self::Other(other.to_string()),
        }
    }

    /// Strict, case-insensitive conversion for operator input.
    pub fn parse_strict(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "assigned" => Ok(Self::Assigned),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(DomainError::UnknownStatus {
                kind: "drone",
                value: value.to_string(),
            }),
        }
    }

    /// Display label as stored in the roster
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "Available",
            Self::Assigned => "Assigned",
            Self::Maintenance => "Maintenance",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for DroneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DroneStatus {
    fn from(value: String) -> Self {
        Self::from_field(&value)
    }
}

impl From<DroneStatus> for String {
    fn from(status: DroneStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A drone in the fleet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drone {
    /// Unique drone identifier (e.g. `D001`)
    pub drone_id: String,

    /// Airframe model
    pub model: String,

    /// Payload capabilities (e.g. `LiDAR, RGB`)
    pub capabilities: TagSet,

    /// Current base location
    pub location: String,

    /// Operational status
    pub status: DroneStatus,

    /// Mission the drone is committed to, or a sentinel
    pub current_assignment: String,

    /// Next scheduled maintenance date
    pub maintenance_due: String,
}

impl Drone {
    /// Create an available drone with no capabilities and no assignment
    pub fn new(drone_id: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            drone_id: drone_id.into(),
            model: model.into(),
            capabilities: TagSet::default(),
            location: String::new(),
            status: DroneStatus::Available,
            current_assignment: SENTINEL.to_string(),
            maintenance_due: SENTINEL.to_string(),
        }
    }

    /// Set capabilities from a delimited field
    pub fn with_capabilities(mut self, capabilities: &str) -> Self {
        self.capabilities = TagSet::parse(capabilities);
        self
    }

    /// Set base location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set operational status
    pub fn with_status(mut self, status: DroneStatus) -> Self {
        self.status = status;
        self
    }

    /// Set current assignment
    pub fn with_assignment(mut self, assignment: impl Into<String>) -> Self {
        self.current_assignment = assignment.into();
        self
    }

    /// Parsed maintenance date, if it holds a real date
    pub fn maintenance_date(&self) -> Option<NaiveDate> {
        parse_date(&self.maintenance_due)
    }

    /// Check if drone can fly a mission right now
    pub fn is_available(&self) -> bool {
        self.status == DroneStatus::Available
    }
}
