//! Core error types

use thiserror::Error;

/// Core error type for the coordinator
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
