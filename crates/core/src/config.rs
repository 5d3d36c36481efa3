//! Configuration management for the coordinator.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Environment variable overriding [`RosterConfig::workbook`].
pub const WORKBOOK_ENV: &str = "DRONEOPS_WORKBOOK";

/// Environment variable overriding [`LoggingConfig::level`].
pub const LOG_LEVEL_ENV: &str = "DRONEOPS_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Path of the JSON workbook holding the pilot, drone and mission sheets
    pub workbook: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from("roster.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            roster: RosterConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Apply `DRONEOPS_WORKBOOK` and `DRONEOPS_LOG` overrides from the process environment.
    pub fn apply_env(self) -> Self {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using an arbitrary variable lookup.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(workbook) = lookup(WORKBOOK_ENV).filter(|v| !v.trim().is_empty()) {
            self.roster.workbook = PathBuf::from(workbook);
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|v| !v.trim().is_empty()) {
            self.logging.level = level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default_config();
        assert_eq!(config.roster.workbook, PathBuf::from("roster.json"));
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml_str(
            r#"
            [roster]
            workbook = "/srv/ops/fleet.json"

            [logging]
            level = "debug"
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.roster.workbook, PathBuf::from("/srv/ops/fleet.json"));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::from_toml_str("[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(config.roster, RosterConfig::default());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(Config::from_toml_str("[roster]\nworkbook = 12\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[roster]\nworkbook = \"ops.json\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.roster.workbook, PathBuf::from("ops.json"));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(WORKBOOK_ENV, "override.json"), (LOG_LEVEL_ENV, "trace")]);

        let config = Config::default_config()
            .apply_env_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.roster.workbook, PathBuf::from("override.json"));
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_blank_env_values_ignored() {
        let config = Config::default_config().apply_env_from(|_| Some("  ".to_string()));
        assert_eq!(config, Config::default_config());
    }
}
