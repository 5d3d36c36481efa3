//! Skill to drone capability policy

/// Payload a drone needs for each mission skill. Skills not listed impose
/// no drone requirement.
const SKILL_CAPABILITIES: [(&str, &str); 4] = [
    ("Thermal", "Thermal"),
    ("Mapping", "LiDAR"),
    ("Survey", "RGB"),
    ("Inspection", "RGB"),
];

/// Capability a drone must carry for `skill`, if any
pub fn required_capability(skill: &str) -> Option<&'static str> {
    SKILL_CAPABILITIES
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, capability)| *capability)
}
