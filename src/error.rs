//! Error types for panel configuration

use thiserror::Error;

/// Errors raised while loading a panel configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Section at index {0} has an empty name")]
    EmptySectionName(usize),

    #[error("Duplicate section '{0}'")]
    DuplicateSection(String),

    #[error("Invalid panel config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
