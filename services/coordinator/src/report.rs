//! Plain-text rendering of roster records and verdicts

use std::fmt::Write;

use droneops_domain::{Drone, Mission, Pilot, Verdict};
use droneops_roster::{DroneSummary, PilotSummary, Suggestion};

pub fn pilot(pilot: &Pilot) -> String {
    format!(
        "{} (ID: {})\n\
         - Skills: {}\n\
         - Certifications: {}\n\
         - Location: {}\n\
         - Status: {}\n\
         - Current Assignment: {}\n\
         - Available From: {}\n",
        pilot.name,
        pilot.pilot_id,
        pilot.skills,
        pilot.certifications,
        pilot.location,
        pilot.status,
        pilot.current_assignment,
        pilot.available_from
    )
}

pub fn drone(drone: &Drone) -> String {
    format!(
        "{} (ID: {})\n\
         - Capabilities: {}\n\
         - Location: {}\n\
         - Status: {}\n\
         - Current Assignment: {}\n\
         - Maintenance Due: {}\n",
        drone.model,
        drone.drone_id,
        drone.capabilities,
        drone.location,
        drone.status,
        drone.current_assignment,
        drone.maintenance_due
    )
}

pub fn mission(mission: &Mission) -> String {
    format!(
        "{} - {}\n\
         - Location: {}\n\
         - Required Skills: {}\n\
         - Required Certifications: {}\n\
         - Duration: {} to {}\n\
         - Priority: {}\n",
        mission.project_id,
        mission.client,
        mission.location,
        mission.required_skills,
        mission.required_certs,
        mission.start_date,
        mission.end_date,
        mission.priority
    )
}

/// Render a listing with a count header, or `empty` when there is nothing.
pub fn listing<T>(noun: &str, items: &[T], render: impl Fn(&T) -> String, empty: &str) -> String {
    if items.is_empty() {
        return format!("{empty}\n");
    }
    let mut out = format!("Found {} {}(s):\n\n", items.len(), noun);
    for item in items {
        out.push_str(&render(item));
        out.push_str("---\n");
    }
    out
}

pub fn summary(pilots: &PilotSummary, drones: &DroneSummary) -> String {
    format!(
        "Pilots: {} total, {} available, {} assigned, {} on leave\n\
         Drones: {} total, {} available, {} assigned, {} in maintenance\n",
        pilots.total,
        pilots.available,
        pilots.assigned,
        pilots.on_leave,
        drones.total,
        drones.available,
        drones.assigned,
        drones.maintenance
    )
}

pub fn fleet_conflicts(issues: &[String]) -> String {
    if issues.is_empty() {
        return "No conflicts detected! All systems operational.\n".to_string();
    }
    let mut out = format!("Found {} conflict(s):\n\n", issues.len());
    for issue in issues {
        let _ = writeln!(out, "- {issue}");
    }
    out
}

pub fn verdict(verdict: &Verdict) -> String {
    let mut out = String::new();

    let conflicts = verdict.conflicts();
    if !conflicts.is_empty() {
        out.push_str("Conflicts:\n");
        for conflict in conflicts {
            let _ = writeln!(out, "- {conflict}");
        }
        out.push('\n');
    }

    let warnings = verdict.warnings();
    if !warnings.is_empty() {
        out.push_str("Warnings:\n");
        for warning in warnings {
            let _ = writeln!(out, "- {warning}");
        }
        out.push('\n');
    }

    if verdict.is_valid() {
        out.push_str("This assignment is VALID and ready to proceed!\n");
    } else {
        out.push_str("This assignment has conflicts that must be resolved first.\n");
    }
    out
}

pub fn suggestion(suggestion: &Suggestion) -> String {
    format!(
        "Assignment Suggestion for {}\n\n\
         Recommended Pilot:\n{}\n\
         Recommended Drone:\n{}\n\
         {}",
        suggestion.mission.project_id,
        pilot(&suggestion.pilot),
        drone(&suggestion.drone),
        verdict(&suggestion.verdict)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use droneops_domain::{validate, DroneStatus};

    fn fixtures() -> (Pilot, Drone, Mission) {
        let pilot = Pilot::new("P001", "Arjun")
            .with_skills("Mapping")
            .with_certifications("DGCA")
            .with_location("Bangalore");
        let drone = Drone::new("D001", "DJI M300")
            .with_capabilities("LiDAR")
            .with_location("Bangalore");
        let mission = Mission::new("PRJ001", "Acme Infra", "Bangalore")
            .with_required_skills("Mapping")
            .with_required_certs("DGCA")
            .with_dates("2025-05-01", "2025-05-10");
        (pilot, drone, mission)
    }

    #[test]
    fn test_pilot_card() {
        let (pilot, _, _) = fixtures();
        let text = super::pilot(&pilot);
        assert!(text.starts_with("Arjun (ID: P001)\n"));
        assert!(text.contains("- Certifications: DGCA\n"));
    }

    #[test]
    fn test_valid_verdict_text() {
        let (pilot, drone, mission) = fixtures();
        let text = super::verdict(&validate(&pilot, &drone, &mission));
        assert_eq!(text, "This assignment is VALID and ready to proceed!\n");
    }

    #[test]
    fn test_blocked_verdict_text() {
        let (pilot, drone, mission) = fixtures();
        let drone = drone
            .with_status(DroneStatus::Maintenance)
            .with_location("Pune");
        let text = super::verdict(&validate(&pilot, &drone, &mission));

        assert!(text.starts_with(
            "Conflicts:\n- CRITICAL: Drone D001 (DJI M300) is currently in maintenance\n"
        ));
        assert!(text.contains("Warnings:\n- Drone is in Pune"));
        assert!(text.ends_with("must be resolved first.\n"));
    }

    #[test]
    fn test_empty_listing() {
        let text = listing::<Pilot>("pilot", &[], super::pilot, "No pilots found matching your criteria.");
        assert_eq!(text, "No pilots found matching your criteria.\n");
    }

    #[test]
    fn test_fleet_conflicts_text() {
        assert_eq!(
            fleet_conflicts(&[]),
            "No conflicts detected! All systems operational.\n"
        );
        let text = fleet_conflicts(&["Drone D002 is in maintenance".to_string()]);
        assert_eq!(text, "Found 1 conflict(s):\n\n- Drone D002 is in maintenance\n");
    }
}
