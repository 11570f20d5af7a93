//! World-scoped storage shared by the memory backends.

use std::collections::HashMap;
use std::hash::Hash;

use warden_core::WorldScope;

/// Values keyed by `(scope, subject)`.
pub(crate) struct Scoped<K, V> {
    entries: HashMap<(WorldScope, K), V>,
}

impl<K: Eq + Hash + Clone, V> Scoped<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The value stored exactly at this scope.
    pub(crate) fn get(&self, world: &WorldScope, key: &K) -> Option<&V> {
        self.entries.get(&(world.clone(), key.clone()))
    }

    pub(crate) fn get_mut(&mut self, world: &WorldScope, key: &K) -> Option<&mut V> {
        self.entries.get_mut(&(world.clone(), key.clone()))
    }

    /// The value stored exactly at this scope, created if absent.
    pub(crate) fn entry(&mut self, world: &WorldScope, key: &K) -> &mut V
    where
        V: Default,
    {
        self.entries
            .entry((world.clone(), key.clone()))
            .or_default()
    }

    /// The values visible from a scope, most specific first.
    ///
    /// A named world yields its own value, then the global one when
    /// `inherit_global` is set. The global scope yields only itself.
    pub(crate) fn layers(&self, world: &WorldScope, key: &K, inherit_global: bool) -> Vec<&V> {
        let mut layers = Vec::with_capacity(2);
        if let Some(value) = self.get(world, key) {
            layers.push(value);
        }
        if inherit_global && !world.is_global() {
            if let Some(value) = self.get(&WorldScope::Global, key) {
                layers.push(value);
            }
        }
        layers
    }

    /// Drop the value stored exactly at this scope if `unused` says so.
    ///
    /// Returns whether an entry was dropped.
    pub(crate) fn remove_if(
        &mut self,
        world: &WorldScope,
        key: &K,
        unused: impl FnOnce(&V) -> bool,
    ) -> bool {
        let slot = (world.clone(), key.clone());
        match self.entries.get(&slot) {
            Some(value) if unused(value) => self.entries.remove(&slot).is_some(),
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Eq + Hash + Clone, T: PartialEq + Clone> Scoped<K, Vec<T>> {
    /// Every item visible from a scope, most specific layer first, without
    /// duplicates.
    pub(crate) fn layers_flattened(
        &self,
        world: &WorldScope,
        key: &K,
        inherit_global: bool,
    ) -> Vec<T> {
        let mut items: Vec<T> = Vec::new();
        for layer in self.layers(world, key, inherit_global) {
            for item in layer {
                if !items.contains(item) {
                    items.push(item.clone());
                }
            }
        }
        items
    }
}
