//! Error types for the service registry.

use thiserror::Error;

/// Errors that can occur while resolving providers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No enabled provider is registered for the service.
    #[error("no enabled {0} provider registered")]
    NotRegistered(&'static str),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
