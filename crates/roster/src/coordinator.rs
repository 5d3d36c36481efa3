//! Coordination operations over a roster store
//!
//! The coordinator owns an explicitly constructed store and combines it with
//! the validator: fleet summaries, filtered listings, the fleet-wide conflict
//! scan, assignment checks and suggestions, and committing an assignment
//! back to the store.

use droneops_domain::{
    is_sentinel, validate, Drone, DroneStatus, Mission, Pilot, PilotStatus, Verdict, SENTINEL,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Result, RosterError};
use crate::store::RosterStore;

/// Pilot head-count by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PilotSummary {
    /// All pilots, including unrecognized statuses
    pub total: usize,
    /// Status Available
    pub available: usize,
    /// Status Assigned
    pub assigned: usize,
    /// Status On Leave
    pub on_leave: usize,
}

/// Drone count by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DroneSummary {
    /// All drones, including unrecognized statuses
    pub total: usize,
    /// Status Available
    pub available: usize,
    /// Status Assigned
    pub assigned: usize,
    /// Status Maintenance
    pub maintenance: usize,
}

/// Pilot listing criteria; unset fields match everything
#[derive(Debug, Clone, Default)]
pub struct PilotFilter {
    /// Only pilots with status Available
    pub available_only: bool,
    /// Case-insensitive substring of the pilot's location
    pub location: Option<String>,
}

/// Drone listing criteria; unset fields match everything
#[derive(Debug, Clone, Default)]
pub struct DroneFilter {
    /// Only drones with status Available
    pub available_only: bool,
    /// Case-insensitive substring of the capabilities field
    pub capability: Option<String>,
    /// Case-insensitive substring of the drone's location
    pub location: Option<String>,
}

/// Mission listing criteria
#[derive(Debug, Clone, Default)]
pub struct MissionFilter {
    /// Only missions whose priority mentions urgent
    pub urgent_only: bool,
}

/// A proposed pilot/drone pair for a mission, with its verdict
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub mission: Mission,
    pub pilot: Pilot,
    pub drone: Drone,
    pub verdict: Verdict,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Coordination operations over an injected roster store
pub struct Coordinator<S> {
    store: S,
}

impl<S: RosterStore> Coordinator<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to save it.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Count pilots by status.
    pub fn pilot_summary(&self) -> PilotSummary {
        let mut summary = PilotSummary::default();
        for pilot in self.store.pilots() {
            summary.total += 1;
            match pilot.status {
                PilotStatus::Available => summary.available += 1,
                PilotStatus::Assigned => summary.assigned += 1,
                PilotStatus::OnLeave => summary.on_leave += 1,
                PilotStatus::Other(_) => {}
            }
        }
        summary
    }

    /// Count drones by status.
    pub fn drone_summary(&self) -> DroneSummary {
        let mut summary = DroneSummary::default();
        for drone in self.store.drones() {
            summary.total += 1;
            match drone.status {
                DroneStatus::Available => summary.available += 1,
                DroneStatus::Assigned => summary.assigned += 1,
                DroneStatus::Maintenance => summary.maintenance += 1,
                DroneStatus::Other(_) => {}
            }
        }
        summary
    }

    /// Pilots matching `filter`, in roster order.
    pub fn find_pilots(&self, filter: &PilotFilter) -> Vec<Pilot> {
        self.store
            .pilots()
            .into_iter()
            .filter(|p| !filter.available_only || p.is_available())
            .filter(|p| {
                filter
                    .location
                    .as_deref()
                    .map_or(true, |loc| contains_ignore_case(&p.location, loc))
            })
            .collect()
    }

    /// Drones matching `filter`, in fleet order.
    pub fn find_drones(&self, filter: &DroneFilter) -> Vec<Drone> {
        self.store
            .drones()
            .into_iter()
            .filter(|d| !filter.available_only || d.is_available())
            .filter(|d| {
                filter.capability.as_deref().map_or(true, |cap| {
                    contains_ignore_case(&d.capabilities.to_string(), cap)
                })
            })
            .filter(|d| {
                filter
                    .location
                    .as_deref()
                    .map_or(true, |loc| contains_ignore_case(&d.location, loc))
            })
            .collect()
    }

    /// Missions matching `filter`, in sheet order.
    pub fn find_missions(&self, filter: &MissionFilter) -> Vec<Mission> {
        self.store
            .missions()
            .into_iter()
            .filter(|m| !filter.urgent_only || m.is_urgent())
            .collect()
    }

    /// Fleet-wide status issues: assigned pilots, then grounded or committed
    /// drones.
    pub fn fleet_conflicts(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for pilot in self.store.pilots() {
            if pilot.status == PilotStatus::Assigned {
                issues.push(format!(
                    "Pilot {} is assigned to {}",
                    pilot.name, pilot.current_assignment
                ));
            }
        }

        for drone in self.store.drones() {
            match drone.status {
                DroneStatus::Maintenance => {
                    issues.push(format!("Drone {} is in maintenance", drone.drone_id))
                }
                DroneStatus::Assigned => issues.push(format!(
                    "Drone {} is assigned to {}",
                    drone.drone_id, drone.current_assignment
                )),
                _ => {}
            }
        }

        debug!(count = issues.len(), "Fleet conflict scan complete");
        issues
    }

    fn resolve(
        &self,
        pilot_id: &str,
        drone_id: &str,
        project_id: &str,
    ) -> Result<(Pilot, Drone, Mission)> {
        let pilot = self
            .store
            .pilot(pilot_id)
            .ok_or_else(|| RosterError::not_found("Pilot", pilot_id))?;
        let drone = self
            .store
            .drone(drone_id)
            .ok_or_else(|| RosterError::not_found("Drone", drone_id))?;
        let mission = self
            .store
            .mission(project_id)
            .ok_or_else(|| RosterError::not_found("Project", project_id))?;
        Ok((pilot, drone, mission))
    }

    /// Validate a specific pilot/drone/mission triple.
    pub fn check_assignment(
        &self,
        pilot_id: &str,
        drone_id: &str,
        project_id: &str,
    ) -> Result<Verdict> {
        let (pilot, drone, mission) = self.resolve(pilot_id, drone_id, project_id)?;
        let verdict = validate(&pilot, &drone, &mission);
        debug!(
            pilot_id,
            drone_id,
            project_id,
            valid = verdict.is_valid(),
            warnings = verdict.warnings().len(),
            "Assignment checked"
        );
        Ok(verdict)
    }

    /// Propose the first available pilot and drone based at the mission
    /// location, and validate the pair.
    pub fn suggest_assignment(&self, project_id: &str) -> Result<Suggestion> {
        let mission = self
            .store
            .mission(project_id)
            .ok_or_else(|| RosterError::not_found("Project", project_id))?;

        let pilot = self
            .store
            .pilots()
            .into_iter()
            .find(|p| p.is_available() && p.location == mission.location);
        let drone = self
            .store
            .drones()
            .into_iter()
            .find(|d| d.is_available() && d.location == mission.location);

        let (pilot, drone) = match (pilot, drone) {
            (Some(pilot), Some(drone)) => (pilot, drone),
            _ => {
                return Err(RosterError::NoCandidates {
                    project_id: mission.project_id,
                    location: mission.location,
                })
            }
        };

        let verdict = validate(&pilot, &drone, &mission);
        if verdict.is_valid() {
            info!(
                project_id = %mission.project_id,
                pilot_id = %pilot.pilot_id,
                drone_id = %drone.drone_id,
                "Assignment suggested"
            );
        } else {
            warn!(
                project_id = %mission.project_id,
                pilot_id = %pilot.pilot_id,
                drone_id = %drone.drone_id,
                conflicts = verdict.conflicts().len(),
                "Suggested assignment has conflicts"
            );
        }

        Ok(Suggestion {
            mission,
            pilot,
            drone,
            verdict,
        })
    }

    /// Set a pilot's status in the store.
    pub fn update_pilot_status(&mut self, pilot_id: &str, status: &PilotStatus) -> Result<()> {
        self.store.update_pilot_status(pilot_id, status)
    }

    /// Set a pilot's assignment; sentinel dates leave `available_from` as is.
    pub fn update_pilot_assignment(
        &mut self,
        pilot_id: &str,
        assignment: &str,
        available_from: &str,
    ) -> Result<()> {
        self.store
            .update_pilot_assignment(pilot_id, assignment, available_from)
    }

    /// Set a drone's status in the store.
    pub fn update_drone_status(&mut self, drone_id: &str, status: &DroneStatus) -> Result<()> {
        self.store.update_drone_status(drone_id, status)
    }

    /// Set a drone's current assignment in the store.
    pub fn update_drone_assignment(&mut self, drone_id: &str, assignment: &str) -> Result<()> {
        self.store.update_drone_assignment(drone_id, assignment)
    }

    /// Record the assignment in the store if it validates. The pilot frees
    /// up on the mission's end date.
    pub fn commit_assignment(
        &mut self,
        pilot_id: &str,
        drone_id: &str,
        project_id: &str,
    ) -> Result<Verdict> {
        let (pilot, drone, mission) = self.resolve(pilot_id, drone_id, project_id)?;
        let verdict = validate(&pilot, &drone, &mission);
        if !verdict.is_valid() {
            return Err(RosterError::InvalidAssignment {
                conflicts: verdict.conflicts().into_iter().map(str::to_string).collect(),
            });
        }

        let available_from = if is_sentinel(&mission.end_date) {
            SENTINEL
        } else {
            mission.end_date.as_str()
        };

        self.store
            .update_pilot_status(&pilot.pilot_id, &PilotStatus::Assigned)?;
        self.store
            .update_pilot_assignment(&pilot.pilot_id, &mission.project_id, available_from)?;
        self.store
            .update_drone_status(&drone.drone_id, &DroneStatus::Assigned)?;
        self.store
            .update_drone_assignment(&drone.drone_id, &mission.project_id)?;

        info!(
            project_id = %mission.project_id,
            pilot_id = %pilot.pilot_id,
            drone_id = %drone.drone_id,
            "Assignment committed"
        );
        Ok(verdict)
    }
}
