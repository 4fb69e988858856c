//! Custom error types for SaveMore
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for SaveMore operations
#[derive(Error, Debug)]
pub enum SaveMoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Missing icon assets
    #[error("Missing asset file(s): {}", missing.join(", "))]
    Asset { missing: Vec<String> },
}

// Implement From traits for common error types

impl From<std::io::Error> for SaveMoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SaveMoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
