//! Proptest generators for property-based testing.

use proptest::prelude::*;

use warden_core::{InfoValue, OfflinePlayer, PlayerId, Uuid, WorldScope};

/// Generate a world name.
pub fn world_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}".prop_map(String::from)
}

/// Generate a scope, global or named.
pub fn world_scope() -> impl Strategy<Value = WorldScope> {
    prop_oneof![
        1 => Just(WorldScope::Global),
        4 => world_name().prop_map(WorldScope::Named),
    ]
}

/// Generate a random PlayerId.
pub fn player_id() -> impl Strategy<Value = PlayerId> {
    any::<u128>().prop_map(|bits| PlayerId::from_uuid(Uuid::from_u128(bits)))
}

/// Generate a durable identity, with or without a known name.
pub fn offline_player() -> impl Strategy<Value = OfflinePlayer> {
    (player_id(), proptest::option::of("[A-Za-z0-9_]{3,16}"))
        .prop_map(|(id, name)| OfflinePlayer { id, name })
}

/// Generate a well-formed permission node.
pub fn node() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9_-]{0,11}", 1..=4).prop_map(|segments| segments.join("."))
}

/// Generate a group name.
pub fn group_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}".prop_map(String::from)
}

/// Generate an informational value of any type.
pub fn info_value() -> impl Strategy<Value = InfoValue> {
    prop_oneof![
        any::<i32>().prop_map(InfoValue::Integer),
        any::<f64>().prop_map(InfoValue::Double),
        any::<bool>().prop_map(InfoValue::Boolean),
        ".{0,24}".prop_map(InfoValue::String),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::validate_node;

    proptest! {
        #[test]
        fn test_generated_nodes_are_valid(generated in node()) {
            prop_assert!(validate_node(&generated).is_ok());
        }

        #[test]
        fn test_named_scopes_have_names(scope in world_scope()) {
            prop_assert_eq!(scope.is_global(), scope.name().is_none());
        }
    }
}
