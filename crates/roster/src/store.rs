//! Roster store seam and the in-memory implementation

use std::collections::HashSet;

use droneops_domain::{Drone, DroneStatus, Mission, Pilot, PilotStatus};
use tracing::{debug, info, warn};

use crate::convert::FromRow;
use crate::error::{Result, RosterError};
use crate::row::Row;

/// Read/write access to the pilot, drone and mission sheets.
///
/// Implementations own the rows; callers only ever see typed copies.
pub trait RosterStore {
    /// All pilots in sheet order
    fn pilots(&self) -> Vec<Pilot>;

    /// All drones in sheet order
    fn drones(&self) -> Vec<Drone>;

    /// All missions in sheet order
    fn missions(&self) -> Vec<Mission>;

    /// First pilot whose id matches after trimming
    fn pilot(&self, pilot_id: &str) -> Option<Pilot> {
        let pilot_id = pilot_id.trim();
        self.pilots().into_iter().find(|p| p.pilot_id == pilot_id)
    }

    /// First drone whose id matches after trimming
    fn drone(&self, drone_id: &str) -> Option<Drone> {
        let drone_id = drone_id.trim();
        self.drones().into_iter().find(|d| d.drone_id == drone_id)
    }

    /// First mission whose id matches after trimming
    fn mission(&self, project_id: &str) -> Option<Mission> {
        let project_id = project_id.trim();
        self.missions()
            .into_iter()
            .find(|m| m.project_id == project_id)
    }

    /// Overwrite a pilot's status.
    fn update_pilot_status(&mut self, pilot_id: &str, status: &PilotStatus) -> Result<()>;

    /// Set the pilot's current assignment. `available_from` is only written
    /// when it is a real value, not a sentinel.
    fn update_pilot_assignment(
        &mut self,
        pilot_id: &str,
        assignment: &str,
        available_from: &str,
    ) -> Result<()>;

    /// Overwrite a drone's status.
    fn update_drone_status(&mut self, drone_id: &str, status: &DroneStatus) -> Result<()>;

    /// Overwrite a drone's current assignment.
    fn update_drone_assignment(&mut self, drone_id: &str, assignment: &str) -> Result<()>;
}

/// Sheets held in memory as rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRoster {
    pilots: Vec<Row>,
    drones: Vec<Row>,
    missions: Vec<Row>,
}

fn ensure_unique<T: FromRow>(rows: &[Row]) -> Result<()> {
    let mut seen = HashSet::new();
    for row in rows {
        let id = row.get_or(T::ID_COLUMN, "").trim();
        if id.is_empty() {
            // Unaddressable by id, but still listed and validated.
            warn!(kind = T::KIND, column = T::ID_COLUMN, "Row without identifier");
            continue;
        }
        if !seen.insert(id) {
            return Err(RosterError::DuplicateId {
                kind: T::KIND,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn find_row<'a, T: FromRow>(rows: &'a mut [Row], id: &str) -> Result<&'a mut Row> {
    let id = id.trim();
    rows.iter_mut()
        .find(|row| row.get_or(T::ID_COLUMN, "").trim() == id)
        .ok_or_else(|| RosterError::not_found(T::KIND, id))
}

impl MemoryRoster {
    /// Build a roster from sheets. Blank rows are dropped; non-empty
    /// identifiers must be unique within each sheet.
    pub fn new(pilots: Vec<Row>, drones: Vec<Row>, missions: Vec<Row>) -> Result<Self> {
        let keep = |rows: Vec<Row>| -> Vec<Row> {
            rows.into_iter().filter(|r| !r.is_blank()).collect()
        };
        let roster = Self {
            pilots: keep(pilots),
            drones: keep(drones),
            missions: keep(missions),
        };

        ensure_unique::<Pilot>(&roster.pilots)?;
        ensure_unique::<Drone>(&roster.drones)?;
        ensure_unique::<Mission>(&roster.missions)?;

        debug!(
            pilots = roster.pilots.len(),
            drones = roster.drones.len(),
            missions = roster.missions.len(),
            "Roster loaded"
        );
        Ok(roster)
    }

    /// Raw pilot sheet
    pub fn pilot_rows(&self) -> &[Row] {
        &self.pilots
    }

    pub fn drone_rows(&self) -> &[Row] {
        &self.drones
    }

    pub fn mission_rows(&self) -> &[Row] {
        &self.missions
    }
}

impl RosterStore for MemoryRoster {
    fn pilots(&self) -> Vec<Pilot> {
        self.pilots.iter().map(Pilot::from_row).collect()
    }

    fn drones(&self) -> Vec<Drone> {
        self.drones.iter().map(Drone::from_row).collect()
    }

    fn missions(&self) -> Vec<Mission> {
        self.missions.iter().map(Mission::from_row).collect()
    }

    fn update_pilot_status(&mut self, pilot_id: &str, status: &PilotStatus) -> Result<()> {
        let row = find_row::<Pilot>(&mut self.pilots, pilot_id)?;
        row.set("status", status.as_str());
        info!(pilot_id, status = %status, "Pilot status updated");
        Ok(())
    }

    fn update_pilot_assignment(
        &mut self,
        pilot_id: &str,
        assignment: &str,
        available_from: &str,
    ) -> Result<()> {
        let row = find_row::<Pilot>(&mut self.pilots, pilot_id)?;
        row.set("current_assignment", assignment);
        if !droneops_domain::is_sentinel(available_from) {
            row.set("available_from", available_from);
        }
        info!(pilot_id, assignment, available_from, "Pilot assignment updated");
        Ok(())
    }

    fn update_drone_status(&mut self, drone_id: &str, status: &DroneStatus) -> Result<()> {
        let row = find_row::<Drone>(&mut self.drones, drone_id)?;
        row.set("status", status.as_str());
        info!(drone_id, status = %status, "Drone status updated");
        Ok(())
    }

    fn update_drone_assignment(&mut self, drone_id: &str, assignment: &str) -> Result<()> {
        let row = find_row::<Drone>(&mut self.drones, drone_id)?;
        row.set("current_assignment", assignment);
        info!(drone_id, assignment, "Drone assignment updated");
        Ok(())
    }
}
