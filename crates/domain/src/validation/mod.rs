//! Assignment validation engine
//!
//! Decides whether a pilot, a drone and a mission form a feasible
//! assignment. [`validate`] runs every rule in [`checks`] in a fixed order
//! and gathers their findings into a [`Verdict`]:
//!
//! | # | Check               | Severity |
//! |---|---------------------|----------|
//! | 1 | pilot availability  | conflict |
//! | 2 | skill match         | warning  |
//! | 3 | certification match | conflict |
//! | 4 | pilot location      | warning  |
//! | 5 | drone availability  | conflict |
//! | 6 | drone capability    | warning  |
//! | 7 | drone location      | warning  |
//!
//! Validation is pure: no I/O, no shared state, and malformed input only
//! ever skips the rule that needed it.

pub mod capability;
pub mod checks;
pub mod verdict;

pub use capability::required_capability;
pub use verdict::{CheckKind, Finding, Severity, Verdict, VerdictSummary};

use crate::records::{Drone, Mission, Pilot};

/// Validate a pilot/drone/mission triple.
pub fn validate(pilot: &Pilot, drone: &Drone, mission: &Mission) -> Verdict {
    let mut findings = checks::pilot_availability(pilot, mission);
    findings.extend(checks::skill_match(pilot, mission));
    findings.extend(checks::certification_match(pilot, mission));
    findings.extend(checks::pilot_location(pilot, mission));
    findings.extend(checks::drone_availability(drone));
    findings.extend(checks::drone_capability(drone, mission));
    findings.extend(checks::drone_location(drone, mission));
    Verdict::from_findings(findings)
}
