//! Committing assignments and writing them back to the workbook

use droneops_core::Config;
use droneops_domain::{DroneStatus, PilotStatus};
use droneops_roster::{Coordinator, RosterError, RosterStore, Workbook};

use crate::test_utils::*;

#[test]
fn test_sample_config_points_at_sample_roster() {
    let config = Config::from_toml_str(include_str!("../../../config/droneops.toml")).unwrap();
    assert!(config.roster.workbook.ends_with("roster.json"));
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_commit_persists_across_reload() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path());

    let mut coordinator = Coordinator::new(Workbook::load(&path).unwrap().into_store().unwrap());
    let suggestion = coordinator.suggest_assignment("PRJ001").unwrap();
    coordinator
        .commit_assignment(
            &suggestion.pilot.pilot_id,
            &suggestion.drone.drone_id,
            &suggestion.mission.project_id,
        )
        .unwrap();
    Workbook::from(coordinator.store()).save(&path).unwrap();

    let reloaded = Coordinator::new(Workbook::load(&path).unwrap().into_store().unwrap());
    let pilot = reloaded.store().pilot("P001").unwrap();
    assert_eq!(pilot.status, PilotStatus::Assigned);
    assert_eq!(pilot.current_assignment, "PRJ001");
    assert_eq!(pilot.available_from, "2026-02-08");

    let drone = reloaded.store().drone("D001").unwrap();
    assert_eq!(drone.status, DroneStatus::Assigned);
    assert_eq!(drone.current_assignment, "PRJ001");

    // Untouched cells survive the rewrite.
    assert_eq!(drone.maintenance_due, "2026-03-01");
    assert_eq!(reloaded.store().missions().len(), 3);
}

#[test]
fn test_fleet_scan_tracks_status_changes() {
    let mut coordinator = sample_coordinator();
    assert_eq!(
        coordinator.fleet_conflicts(),
        vec![
            "Pilot Neha is assigned to PRJ001",
            "Drone D002 is in maintenance",
        ]
    );

    coordinator
        .update_drone_status("D002", &DroneStatus::Available)
        .unwrap();
    coordinator
        .update_pilot_status("P002", &PilotStatus::Available)
        .unwrap();
    assert!(coordinator.fleet_conflicts().is_empty());

    let summary = coordinator.pilot_summary();
    assert_eq!(summary.available, 3);
    assert_eq!(summary.on_leave, 1);
}

#[test]
fn test_rejected_commit_leaves_workbook_unchanged() {
    let mut coordinator = sample_coordinator();
    let before = Workbook::from(coordinator.store());

    let err = coordinator
        .commit_assignment("P004", "D004", "PRJ003")
        .unwrap_err();
    assert!(matches!(err, RosterError::InvalidAssignment { .. }));
    assert_eq!(Workbook::from(coordinator.store()), before);
}

#[test]
fn test_verdict_json_shape() {
    let coordinator = sample_coordinator();
    let verdict = coordinator
        .check_assignment("P004", "D004", "PRJ003")
        .unwrap();

    let value = serde_json::to_value(&verdict).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "conflicts": [
                "Pilot Sneha is on leave until 2026-02-20",
                "Pilot Sneha won't be available until 2026-02-20, but mission starts on 2026-02-10"
            ],
            "warnings": [],
            "is_valid": false,
            "has_warnings": false
        })
    );
}
