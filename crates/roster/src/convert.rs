//! Row to record conversion
//!
//! Absent columns never fail a conversion: they fall back to the same
//! defaults the roster sheets use, so a short sheet still validates.

use droneops_domain::{Drone, DroneStatus, Mission, Pilot, PilotStatus, TagSet, SENTINEL};

use crate::row::Row;

/// Default for a missing `current_assignment` column
pub const UNKNOWN_ASSIGNMENT: &str = "Unknown";

/// Records that can be read from a roster row
pub trait FromRow: Sized {
    /// Sheet kind, used in errors and logs
    const KIND: &'static str;

    /// Column holding the unique identifier
    const ID_COLUMN: &'static str;

    fn from_row(row: &Row) -> Self;
}

impl FromRow for Pilot {
    const KIND: &'static str = "Pilot";
    const ID_COLUMN: &'static str = "pilot_id";

    fn from_row(row: &Row) -> Self {
        Pilot {
            pilot_id: row.get_or("pilot_id", "").trim().to_string(),
            name: row.get_or("name", "").to_string(),
            skills: TagSet::parse(row.get_or("skills", "")),
            certifications: TagSet::parse(row.get_or("certifications", "")),
            location: row.get_or("location", "").to_string(),
            status: PilotStatus::from_field(row.get_or("status", "")),
            current_assignment: row
                .get_or("current_assignment", UNKNOWN_ASSIGNMENT)
                .to_string(),
            available_from: row.get_or("available_from", SENTINEL).to_string(),
        }
    }
}

impl FromRow for Drone {
    const KIND: &'static str = "Drone";
    const ID_COLUMN: &'static str = "drone_id";

    fn from_row(row: &Row) -> Self {
        Drone {
            drone_id: row.get_or("drone_id", "").trim().to_string(),
            model: row.get_or("model", "").to_string(),
            capabilities: TagSet::parse(row.get_or("capabilities", "")),
            location: row.get_or("location", "").to_string(),
            status: DroneStatus::from_field(row.get_or("status", "")),
            current_assignment: row
                .get_or("current_assignment", UNKNOWN_ASSIGNMENT)
                .to_string(),
            maintenance_due: row.get_or("maintenance_due", SENTINEL).to_string(),
        }
    }
}

impl FromRow for Mission {
    const KIND: &'static str = "Mission";
    const ID_COLUMN: &'static str = "project_id";

    fn from_row(row: &Row) -> Self {
        Mission {
            project_id: row.get_or("project_id", "").trim().to_string(),
            client: row.get_or("client", "").to_string(),
            location: row.get_or("location", "").to_string(),
            required_skills: TagSet::parse(row.get_or("required_skills", "")),
            required_certs: TagSet::parse(row.get_or("required_certs", "")),
            start_date: row.get_or("start_date", "").to_string(),
            end_date: row.get_or("end_date", "").to_string(),
            priority: row.get_or("priority", "").to_string(),
        }
    }
}
