//! Assignment scenarios against the sample roster
//!
//! # Test Scenarios
//!
//! 1. **Clean match**: available pilot and drone at the mission site
//! 2. **Busy pilot, grounded drone**: every blocking rule fires at once
//! 3. **Pilot on leave**: leave and late availability both block, with
//!    otherwise matching records
//! 4. **Suggestions with warnings**: capability and skill gaps do not block
//! 5. **Unknown identifiers**: lookups fail with the record kind named

use droneops_domain::{CheckKind, Severity};
use droneops_roster::{MissionFilter, PilotFilter, RosterError, RosterStore};

use crate::test_utils::*;

#[test]
fn test_clean_match_is_valid() {
    let coordinator = sample_coordinator();
    let verdict = coordinator
        .check_assignment("P001", "D001", "PRJ001")
        .unwrap();

    assert!(verdict.is_valid());
    assert!(!verdict.has_warnings());
    assert!(verdict.findings().is_empty());
}

#[test]
fn test_busy_pilot_and_grounded_drone() {
    let coordinator = sample_coordinator();
    let verdict = coordinator
        .check_assignment("P002", "D002", "PRJ002")
        .unwrap();

    assert_eq!(
        verdict.conflicts(),
        vec![
            "Pilot Neha is already assigned to PRJ001 (available from: 2026-02-15)",
            "Pilot Neha won't be available until 2026-02-15, but mission starts on 2026-02-07",
            "CRITICAL: Drone D002 (DJI Mavic 3) is currently in maintenance",
        ]
    );
    assert!(verdict.warnings().is_empty());
    assert!(!verdict.is_valid());
}

#[test]
fn test_pilot_on_leave() {
    let coordinator = sample_coordinator();
    let verdict = coordinator
        .check_assignment("P004", "D004", "PRJ003")
        .unwrap();

    // Leave runs past the mission start, so the date rule fires as well.
    assert_eq!(
        verdict.conflicts(),
        vec![
            "Pilot Sneha is on leave until 2026-02-20",
            "Pilot Sneha won't be available until 2026-02-20, but mission starts on 2026-02-10",
        ]
    );
    assert!(!verdict.has_warnings());
}

#[test]
fn test_missing_certification_blocks() {
    let coordinator = sample_coordinator();
    // Rohit holds DGCA only; PRJ003 also needs Night Ops.
    let verdict = coordinator
        .check_assignment("P003", "D004", "PRJ003")
        .unwrap();

    let cert = verdict
        .findings()
        .iter()
        .find(|f| f.check == CheckKind::CertificationMatch)
        .unwrap();
    assert_eq!(cert.severity, Severity::Conflict);
    assert_eq!(
        cert.message,
        "CRITICAL: Pilot lacks required certifications: Night Ops"
    );
    assert!(verdict
        .warnings()
        .contains(&"Pilot is missing required skills: Thermal"));
}

#[test]
fn test_suggestion_with_capability_warning() {
    let coordinator = sample_coordinator();
    let suggestion = coordinator.suggest_assignment("PRJ002").unwrap();

    assert_eq!(suggestion.pilot.pilot_id, "P003");
    assert_eq!(suggestion.drone.drone_id, "D003");
    assert!(suggestion.verdict.is_valid());
    assert_eq!(
        suggestion.verdict.warnings(),
        vec!["Drone may lack required capabilities: RGB"]
    );
}

#[test]
fn test_suggestion_with_skill_and_capability_gaps() {
    let coordinator = sample_coordinator();
    let suggestion = coordinator.suggest_assignment("PRJ003").unwrap();

    assert_eq!(suggestion.pilot.pilot_id, "P001");
    assert_eq!(suggestion.drone.drone_id, "D001");
    assert_eq!(
        suggestion.verdict.warnings(),
        vec![
            "Pilot is missing required skills: Thermal",
            "Drone may lack required capabilities: Thermal",
        ]
    );
}

#[test]
fn test_unknown_identifiers() {
    let coordinator = sample_coordinator();

    let err = coordinator
        .check_assignment("P404", "D001", "PRJ001")
        .unwrap_err();
    assert_eq!(err.to_string(), "Pilot P404 not found");

    assert!(matches!(
        coordinator.check_assignment("P001", "D001", "PRJ404"),
        Err(RosterError::NotFound { kind: "Project", .. })
    ));
}

#[test]
fn test_queries_over_sample() {
    let coordinator = sample_coordinator();

    let available = coordinator.find_pilots(&PilotFilter {
        available_only: true,
        location: None,
    });
    let names: Vec<&str> = available.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Arjun", "Rohit"]);

    let urgent = coordinator.find_missions(&MissionFilter { urgent_only: true });
    assert_eq!(urgent.len(), 1);
    assert_eq!(urgent[0].project_id, "PRJ002");

    assert_eq!(
        coordinator.store().pilot("P004").unwrap().certifications.len(),
        2
    );
}
