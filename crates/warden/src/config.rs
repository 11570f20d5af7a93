//! Registry configuration.

use serde::Deserialize;

use crate::error::Result;

/// Which providers the host prefers when several are installed.
///
/// A preference naming a provider that is missing or disabled is ignored
/// and the highest-priority enabled provider is used instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// Name of the preferred permission provider.
    pub preferred_permission: Option<String>,
    /// Name of the preferred chat provider.
    pub preferred_chat: Option<String>,
}

impl ServicesConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
