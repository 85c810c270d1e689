//! Error types for the CLI application.

use crate::session::SessionError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Petition session error
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Storage error
    #[error("Store error: {0}")]
    Store(#[from] contestation_store::StoreError),

    /// Template error
    #[error("Template error: {0}")]
    Render(#[from] contestation_renderer::RenderError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested petition does not exist
    #[error("Petition not found: {0}")]
    NotFound(String),
}
