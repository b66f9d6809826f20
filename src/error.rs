//! Error types for keybench.

use thiserror::Error;

/// Errors that can occur while configuring or running the experiments.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Invalid experiment or structure configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while writing the result tables.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for keybench operations.
pub type Result<T> = std::result::Result<T, BenchError>;
