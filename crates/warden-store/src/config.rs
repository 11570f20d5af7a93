//! Configuration for the in-memory backends.

use serde::Deserialize;

/// Configuration shared by [`MemoryPermission`](crate::MemoryPermission)
/// and [`MemoryChat`](crate::MemoryChat).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Name reported by the backend.
    pub name: String,
    /// Whether group operations are supported.
    pub group_support: bool,
    /// Reported by `has_super_perms_compat`.
    pub super_perms_compat: bool,
    /// Whether named worlds see values stored under the global scope.
    pub inherit_global: bool,
    /// Primary group for players without any group.
    pub default_group: Option<String>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            name: "memory".to_string(),
            group_support: true,
            super_perms_compat: false,
            inherit_global: true,
            default_group: Some("default".to_string()),
        }
    }
}

impl MemoryConfig {
    /// A configuration for a backend without group support.
    pub fn without_groups() -> Self {
        Self {
            group_support: false,
            default_group: None,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: MemoryConfig =
            serde_json::from_str(r#"{ "name": "lobby", "inherit_global": false }"#).unwrap();

        assert_eq!(config.name, "lobby");
        assert!(!config.inherit_global);
        assert!(config.group_support);
        assert_eq!(config.default_group.as_deref(), Some("default"));
    }

    #[test]
    fn test_without_groups() {
        let config = MemoryConfig::without_groups();
        assert!(!config.group_support);
        assert_eq!(config.default_group, None);
    }
}
