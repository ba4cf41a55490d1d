//! The module registry: caller-owned catalog of discovered modules.
//!
//! The registry replaces the process-wide singleton the pattern usually
//! grows into. It is constructed explicitly (normally by
//! `DiscoveryService::discover`), then passed by reference into resolver and
//! orchestrator calls — discover once, query many times.
//!
//! Single-writer: concurrent discovery passes into the same registry are not
//! defended against; callers serialize them.

use std::collections::{HashMap, HashSet};

use super::module::ModuleDescriptor;

/// Insertion-ordered mapping from module name to descriptor, plus the set of
/// modules whose routes have already been handed to the external loader.
#[derive(Debug, Default, Clone)]
pub struct ModuleRegistry {
    modules: Vec<ModuleDescriptor>,
    index: HashMap<String, usize>,
    routes_loaded: HashSet<String>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, replacing any earlier entry with the same name.
    ///
    /// Last discovery wins and the replacement is total, not a merge. The
    /// replaced entry keeps its original discovery slot so that priority
    /// tie-breaking stays stable across re-discovery. Returns the replaced
    /// descriptor, if any.
    pub fn insert(&mut self, descriptor: ModuleDescriptor) -> Option<ModuleDescriptor> {
        match self.index.get(&descriptor.name) {
            Some(&slot) => {
                let previous = std::mem::replace(&mut self.modules[slot], descriptor);
                Some(previous)
            }
            None => {
                self.index
                    .insert(descriptor.name.clone(), self.modules.len());
                self.modules.push(descriptor);
                None
            }
        }
    }

    /// Direct lookup, no side effect.
    pub fn get(&self, name: &str) -> Option<&ModuleDescriptor> {
        self.index.get(name).map(|&slot| &self.modules[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Descriptors in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.modules.iter()
    }

    /// Module names in discovery order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Record that `name`'s routes were handed to the external loader.
    ///
    /// Returns `true` the first time, `false` on every subsequent call —
    /// route loading is idempotent within one process lifetime.
    pub fn mark_routes_loaded(&mut self, name: &str) -> bool {
        self.routes_loaded.insert(name.to_owned())
    }

    pub fn routes_loaded(&self, name: &str) -> bool {
        self.routes_loaded.contains(name)
    }
}
