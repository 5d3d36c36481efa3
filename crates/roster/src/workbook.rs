//! JSON workbook files
//!
//! A workbook holds the three roster sheets, each an array of row objects:
//!
//! ```json
//! {
//!   "pilot_roster": [{ "pilot_id": "P001", "name": "Arjun", "status": "Available" }],
//!   "drone_fleet":  [{ "drone_id": "D001", "model": "DJI M300" }],
//!   "missions":     [{ "project_id": "PRJ001", "location": "Bangalore" }]
//! }
//! ```
//!
//! Saving rewrites the whole file; there is no journaling.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, RosterError};
use crate::row::Row;
use crate::store::MemoryRoster;

/// The three roster sheets as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    /// Pilot rows
    #[serde(default)]
    pub pilot_roster: Vec<Row>,
    /// Drone rows
    #[serde(default)]
    pub drone_fleet: Vec<Row>,
    /// Mission rows
    #[serde(default)]
    pub missions: Vec<Row>,
}

impl Workbook {
    /// Parse a workbook from JSON text. Missing sheets are empty.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a workbook file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let workbook = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            pilots = workbook.pilot_roster.len(),
            drones = workbook.drone_fleet.len(),
            missions = workbook.missions.len(),
            "Workbook loaded"
        );
        Ok(workbook)
    }

    /// Rewrite the file with pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Workbook saved");
        Ok(())
    }

    /// Build an in-memory store from the sheets.
    pub fn into_store(self) -> Result<MemoryRoster> {
        MemoryRoster::new(self.pilot_roster, self.drone_fleet, self.missions)
    }
}

impl From<&MemoryRoster> for Workbook {
    fn from(roster: &MemoryRoster) -> Self {
        Self {
            pilot_roster: roster.pilot_rows().to_vec(),
            drone_fleet: roster.drone_rows().to_vec(),
            missions: roster.mission_rows().to_vec(),
        }
    }
}
