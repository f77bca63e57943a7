//! Error types for the Advitya landing core

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::LandingConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config parsed but holds a value the components cannot honour
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type alias for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;
