//! Verdict produced by one validation pass

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much a finding blocks the assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Hard blocker: the assignment must not proceed
    Conflict,
    /// Advisory: surface it, but the assignment may proceed
    Warning,
}

/// Which rule produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Pilot status and `available_from` against the mission start
    PilotAvailability,
    /// Pilot skills against required skills
    SkillMatch,
    /// Pilot certifications against required certifications
    CertificationMatch,
    /// Pilot location against mission location
    PilotLocation,
    /// Drone status
    DroneAvailability,
    /// Drone payload against the capabilities the required skills imply
    DroneCapability,
    /// Drone location against mission location
    DroneLocation,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PilotAvailability => "pilot availability",
            Self::SkillMatch => "skill match",
            Self::CertificationMatch => "certification match",
            Self::PilotLocation => "pilot location",
            Self::DroneAvailability => "drone availability",
            Self::DroneCapability => "drone capability",
            Self::DroneLocation => "drone location",
        };
        f.write_str(label)
    }
}

/// One message emitted by a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Rule that fired
    pub check: CheckKind,
    /// Blocking or advisory
    pub severity: Severity,
    /// Operator-facing text
    pub message: String,
}

impl Finding {
    pub(crate) fn conflict(check: CheckKind, message: String) -> Self {
        Self {
            check,
            severity: Severity::Conflict,
            message,
        }
    }

    pub(crate) fn warning(check: CheckKind, message: String) -> Self {
        Self {
            check,
            severity: Severity::Warning,
            message,
        }
    }
}

/// Outcome of validating a pilot/drone/mission triple.
///
/// Findings are kept in check order; [`Verdict::conflicts`] and
/// [`Verdict::warnings`] project them by severity, so `is_valid` and
/// `has_warnings` can never disagree with the lists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(into = "VerdictSummary")]
pub struct Verdict {
    findings: Vec<Finding>,
}

impl Verdict {
    /// Build a verdict from findings already in check order
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    /// Every finding in check order
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    fn messages(&self, severity: Severity) -> Vec<&str> {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .map(|f| f.message.as_str())
            .collect()
    }

    /// Hard conflict messages
    pub fn conflicts(&self) -> Vec<&str> {
        self.messages(Severity::Conflict)
    }

    /// Soft warning messages
    pub fn warnings(&self) -> Vec<&str> {
        self.messages(Severity::Warning)
    }

    /// True iff there are no conflicts
    pub fn is_valid(&self) -> bool {
        !self
            .findings
            .iter()
            .any(|f| f.severity == Severity::Conflict)
    }

    /// True iff there is at least one warning
    pub fn has_warnings(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.severity == Severity::Warning)
    }
}

/// Owned, flattened view of a [`Verdict`] in its wire shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictSummary {
    /// Hard conflict messages
    pub conflicts: Vec<String>,
    /// Soft warning messages
    pub warnings: Vec<String>,
    /// No conflicts
    pub is_valid: bool,
    /// At least one warning
    pub has_warnings: bool,
}

impl From<&Verdict> for VerdictSummary {
    fn from(verdict: &Verdict) -> Self {
        let owned = |messages: Vec<&str>| messages.into_iter().map(str::to_string).collect();
        Self {
            conflicts: owned(verdict.conflicts()),
            warnings: owned(verdict.warnings()),
            is_valid: verdict.is_valid(),
            has_warnings: verdict.has_warnings(),
        }
    }
}

impl From<Verdict> for VerdictSummary {
    fn from(verdict: Verdict) -> Self {
        Self::from(&verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_verdict_is_clean() {
        let verdict = Verdict::default();
        assert!(verdict.is_valid());
        assert!(!verdict.has_warnings());
        assert!(verdict.conflicts().is_empty());
    }

    #[test]
    fn test_projection_by_severity() {
        let verdict = Verdict::from_findings(vec![
            Finding::conflict(CheckKind::PilotAvailability, "a".to_string()),
            Finding::warning(CheckKind::SkillMatch, "b".to_string()),
            Finding::conflict(CheckKind::CertificationMatch, "c".to_string()),
        ]);

        assert_eq!(verdict.conflicts(), vec!["a", "c"]);
        assert_eq!(verdict.warnings(), vec!["b"]);
        assert!(!verdict.is_valid());
        assert!(verdict.has_warnings());
    }

    #[test]
    fn test_serializes_as_summary() {
        let verdict = Verdict::from_findings(vec![Finding::warning(
            CheckKind::DroneLocation,
            "far away".to_string(),
        )]);

        let value = serde_json::to_value(&verdict).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "conflicts": [],
                "warnings": ["far away"],
                "is_valid": true,
                "has_warnings": true
            })
        );
    }
}
