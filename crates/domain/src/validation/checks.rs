//! Individual assignment rules
//!
//! Each rule reads its inputs and returns the findings it raises; none of
//! them depend on one another.

use crate::records::{Drone, DroneStatus, Mission, Pilot, PilotStatus};
use crate::validation::capability::required_capability;
use crate::validation::verdict::{CheckKind, Finding};

/// Pilot status, plus whether `available_from` lands after the mission starts.
pub fn pilot_availability(pilot: &Pilot, mission: &Mission) -> Vec<Finding> {
    let mut findings = Vec::new();

    match pilot.status {
        PilotStatus::OnLeave => findings.push(Finding::conflict(
            CheckKind::PilotAvailability,
            format!(
                "Pilot {} is on leave until {}",
                pilot.name, pilot.available_from
            ),
        )),
        PilotStatus::Assigned => findings.push(Finding::conflict(
            CheckKind::PilotAvailability,
            format!(
                "Pilot {} is already assigned to {} (available from: {})",
                pilot.name, pilot.current_assignment, pilot.available_from
            ),
        )),
        PilotStatus::Available | PilotStatus::Other(_) => {}
    }

    // Skipped when either date is missing or malformed.
    if let (Some(available), Some(start)) = (pilot.available_date(), mission.start()) {
        if available > start {
            findings.push(Finding::conflict(
                CheckKind::PilotAvailability,
                format!(
                    "Pilot {} won't be available until {}, but mission starts on {}",
                    pilot.name, pilot.available_from, mission.start_date
                ),
            ));
        }
    }

    findings
}

/// Required skills the pilot lacks.
pub fn skill_match(pilot: &Pilot, mission: &Mission) -> Option<Finding> {
    let missing: Vec<&str> = mission.required_skills.difference(&pilot.skills).collect();
    if missing.is_empty() {
        return None;
    }
    Some(Finding::warning(
        CheckKind::SkillMatch,
        format!("Pilot is missing required skills: {}", missing.join(", ")),
    ))
}

/// Required certifications the pilot lacks. Certifications are regulatory,
/// so unlike skills this is a conflict.
pub fn certification_match(pilot: &Pilot, mission: &Mission) -> Option<Finding> {
    let missing: Vec<&str> = mission
        .required_certs
        .difference(&pilot.certifications)
        .collect();
    if missing.is_empty() {
        return None;
    }
    Some(Finding::conflict(
        CheckKind::CertificationMatch,
        format!(
            "CRITICAL: Pilot lacks required certifications: {}",
            missing.join(", ")
        ),
    ))
}

/// Pilot based somewhere other than the mission site.
pub fn pilot_location(pilot: &Pilot, mission: &Mission) -> Option<Finding> {
    if pilot.location.trim() == mission.location.trim() {
        return None;
    }
    Some(Finding::warning(
        CheckKind::PilotLocation,
        format!(
            "Location mismatch: Pilot is in {}, but mission is in {}. Travel arrangements needed.",
            pilot.location, mission.location
        ),
    ))
}

/// Drone grounded for maintenance or committed elsewhere.
pub fn drone_availability(drone: &Drone) -> Option<Finding> {
    match drone.status {
        DroneStatus::Maintenance => Some(Finding::conflict(
            CheckKind::DroneAvailability,
            format!(
                "CRITICAL: Drone {} ({}) is currently in maintenance",
                drone.drone_id, drone.model
            ),
        )),
        DroneStatus::Assigned => Some(Finding::conflict(
            CheckKind::DroneAvailability,
            format!(
                "Drone {} is already assigned to {}",
                drone.drone_id, drone.current_assignment
            ),
        )),
        DroneStatus::Available | DroneStatus::Other(_) => None,
    }
}

/// Capabilities implied by the required skills that the drone does not carry.
pub fn drone_capability(drone: &Drone, mission: &Mission) -> Option<Finding> {
    let mut missing: Vec<&str> = Vec::new();
    for capability in mission.required_skills.iter().filter_map(required_capability) {
        if !drone.capabilities.contains(capability) && !missing.contains(&capability) {
            missing.push(capability);
        }
    }
    if missing.is_empty() {
        return None;
    }
    Some(Finding::warning(
        CheckKind::DroneCapability,
        format!(
            "Drone may lack required capabilities: {}",
            missing.join(", ")
        ),
    ))
}

/// Drone based somewhere other than the mission site.
pub fn drone_location(drone: &Drone, mission: &Mission) -> Option<Finding> {
    if drone.location.trim() == mission.location.trim() {
        return None;
    }
    Some(Finding::warning(
        CheckKind::DroneLocation,
        format!(
            "Drone is in {}, but mission is in {}. Logistics required.",
            drone.location, mission.location
        ),
    ))
}
