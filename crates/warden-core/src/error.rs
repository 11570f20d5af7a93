//! Error types for the Warden core model.

use thiserror::Error;

/// Errors raised while building core values from untrusted input.
///
/// The provider contracts themselves never fail; these only come up at
/// the edges, when a host parses identifiers or validates nodes.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid player id: {0}")]
    InvalidPlayerId(#[from] uuid::Error),

    #[error("invalid permission node {node:?}: {reason}")]
    InvalidNode { node: String, reason: &'static str },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
