//! Error types for the snapshot serializer
//!
//! Provides a unified error type for transitioner setup and state handling.

use thiserror::Error;

/// Result type alias using SerializerError
pub type Result<T> = std::result::Result<T, SerializerError>;

/// Unified error type for snapshot serializer operations
#[derive(Debug, Error)]
pub enum SerializerError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    /// A mandatory collaborator was missing when the transitioner was initialized
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // State Engine Errors
    // -------------------------------------------------------------------------
    #[error("State engine error: {0}")]
    Engine(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SerializerError {
    /// True for a missing or invalid collaborator
    pub fn is_config(&self) -> bool {
        matches!(self, SerializerError::Config(_))
    }

    /// True for filesystem failures
    pub fn is_io(&self) -> bool {
        matches!(self, SerializerError::Io(_))
    }
}
