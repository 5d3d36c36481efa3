//! Comma-delimited tag sets (skills, certifications, capabilities)

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Unordered set of trimmed tags parsed from a comma-delimited field.
///
/// First-seen order is kept only so messages list tags the way the source
/// field did; equality and membership ignore order. Matching is exact and
/// case-sensitive.
///
/// An empty source string parses to a single empty tag, so a blank
/// requirement is reported as missing against a pilot that has tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TagSet {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl TagSet {
    /// Parse a delimited field such as `"Mapping, Survey"`.
    pub fn parse(field: &str) -> Self {
        let mut set = Self::default();
        for tag in field.split(',') {
            set.insert(tag);
        }
        set
    }

    fn insert(&mut self, tag: &str) {
        let tag = tag.trim();
        if self.members.insert(tag.to_string()) {
            self.ordered.push(tag.to_string());
        }
    }

    /// Membership by trimmed exact match
    pub fn contains(&self, tag: &str) -> bool {
        self.members.contains(tag.trim())
    }

    /// Tags in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Tags of `self` absent from `other`, in `self`'s order
    pub fn difference<'a>(&'a self, other: &'a TagSet) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().filter(move |tag| !other.contains(tag))
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// True when the set holds no tags at all
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl PartialEq for TagSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for TagSet {}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ordered.join(", "))
    }
}

impl From<&str> for TagSet {
    fn from(field: &str) -> Self {
        Self::parse(field)
    }
}

impl From<String> for TagSet {
    fn from(field: String) -> Self {
        Self::parse(&field)
    }
}

impl From<TagSet> for String {
    fn from(set: TagSet) -> Self {
        set.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_keeps_order() {
        let set = TagSet::parse(" Mapping ,Survey,  Thermal");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["Mapping", "Survey", "Thermal"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = TagSet::parse("RGB, RGB, LiDAR");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["RGB", "LiDAR"]);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let set = TagSet::parse("Thermal");
        assert!(set.contains("Thermal"));
        assert!(set.contains(" Thermal "));
        assert!(!set.contains("thermal"));
    }

    #[test]
    fn test_empty_field_is_single_blank_tag() {
        let set = TagSet::parse("");
        assert_eq!(set.len(), 1);
        assert!(set.contains(""));
        assert!(TagSet::default().is_empty());
    }

    #[test]
    fn test_difference_preserves_required_order() {
        let required = TagSet::parse("Night Ops, DGCA, BVLOS");
        let held = TagSet::parse("DGCA");
        assert_eq!(
            required.difference(&held).collect::<Vec<_>>(),
            vec!["Night Ops", "BVLOS"]
        );
    }

    #[test]
    fn test_equality_ignores_order() {
        assert_eq!(TagSet::parse("Mapping, Thermal"), TagSet::parse("Thermal,Mapping"));
    }

    #[test]
    fn test_serde_as_delimited_string() {
        let set = TagSet::parse("Mapping,Survey");
        assert_eq!(serde_json::to_string(&set).unwrap(), "\"Mapping, Survey\"");

        let back: TagSet = serde_json::from_str("\"Survey, Mapping\"").unwrap();
        assert_eq!(back, set);
    }
}
