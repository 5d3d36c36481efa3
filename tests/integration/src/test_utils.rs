//! Test utilities for roster integration tests

use droneops_roster::{Coordinator, MemoryRoster, Workbook};
use std::path::{Path, PathBuf};

/// Sample workbook shipped with the repository
pub const SAMPLE_ROSTER: &str = include_str!("../../../config/roster.json");

/// Install a test-friendly subscriber so coordinator logs show up under
/// `--nocapture`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

pub fn sample_workbook() -> Workbook {
    Workbook::from_json(SAMPLE_ROSTER).unwrap()
}

pub fn sample_coordinator() -> Coordinator<MemoryRoster> {
    init_tracing();
    Coordinator::new(sample_workbook().into_store().unwrap())
}

/// Write the sample workbook into `dir` and return its path.
pub fn write_sample(dir: &Path) -> PathBuf {
    let path = dir.join("roster.json");
    sample_workbook().save(&path).unwrap();
    path
}
