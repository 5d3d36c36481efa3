//! Client mission records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::records::dates::parse_date;
use crate::records::tags::TagSet;

/// A client mission awaiting a pilot and a drone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Unique project identifier (e.g. `PRJ001`)
    pub project_id: String,

    /// Client name
    pub client: String,

    /// Where the mission is flown
    pub location: String,

    /// Skills the pilot must have
    pub required_skills: TagSet,

    /// Certifications the pilot must hold
    pub required_certs: TagSet,

    /// First day of the mission
    pub start_date: String,

    /// Last day of the mission
    pub end_date: String,

    /// Priority label (e.g. `Urgent`, `Normal`)
    pub priority: String,
}

impl Mission {
    /// Create a mission with no requirements
    pub fn new(
        project_id: impl Into<String>,
        client: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            client: client.into(),
            location: location.into(),
            required_skills: TagSet::default(),
            required_certs: TagSet::default(),
            start_date: String::new(),
            end_date: String::new(),
            priority: "Normal".to_string(),
        }
    }

    /// Set required skills from a delimited field
    pub fn with_required_skills(mut self, skills: &str) -> Self {
        self.required_skills = TagSet::parse(skills);
        self
    }

    /// Set required certifications from a delimited field
    pub fn with_required_certs(mut self, certs: &str) -> Self {
        self.required_certs = TagSet::parse(certs);
        self
    }

    /// Set the mission window
    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = start.into();
        self.end_date = end.into();
        self
    }

    /// Set priority label
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Parsed start date
    pub fn start(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }

    /// Parsed end date
    pub fn end(&self) -> Option<NaiveDate> {
        parse_date(&self.end_date)
    }

    /// Priority mentions `urgent` in any case
    pub fn is_urgent(&self) -> bool {
        self.priority.to_lowercase().contains("urgent")
    }
}
