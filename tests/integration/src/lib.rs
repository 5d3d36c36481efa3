//! Integration tests across the roster, workbook and validator
//!
//! This test suite validates:
//! - Loading the sample workbook and resolving records by id
//! - Assignment checks and suggestions against the sample roster
//! - Committing assignments and persisting them back to disk
//! - Fleet-wide conflict scans after status changes

pub mod test_utils;

#[cfg(test)]
mod assignment_scenarios;

#[cfg(test)]
mod persistence_tests;
