//! Permission node validation.
//!
//! Nodes are dot-structured keys such as `essentials.home.set`. The
//! contracts accept any string; backends that want to refuse malformed
//! keys use [`validate_node`] and report the refusal as `false`.

use crate::error::{CoreError, Result};

/// Longest node a backend is expected to store.
pub const MAX_NODE_LEN: usize = 256;

/// Check that a permission node is well formed.
///
/// A node is non-empty, at most [`MAX_NODE_LEN`] bytes, contains no
/// whitespace, and has no empty dot-separated segments.
pub fn validate_node(node: &str) -> Result<()> {
    let invalid = |reason| CoreError::InvalidNode {
        node: node.to_owned(),
        reason,
    };

    if node.is_empty() {
        return Err(invalid("empty"));
    }
    if node.len() > MAX_NODE_LEN {
        return Err(invalid("too long"));
    }
    if node.chars().any(char::is_whitespace) {
        return Err(invalid("contains whitespace"));
    }
    if node.split('.').any(str::is_empty) {
        return Err(invalid("empty segment"));
    }

    Ok(())
}
