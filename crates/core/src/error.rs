//! Error types for slide planning configuration.
//!
//! The planning pipeline itself is total; only loading and validating a
//! [`PlannerConfig`](crate::PlannerConfig) can fail.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing a slide planner.
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration value is out of range or empty.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration document could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
