//! Discovery Service - builds the module registry from a source.
//!
//! This is the single writer of a [`ModuleRegistry`]: it pulls descriptors
//! from a [`ModuleSource`], filters out disabled modules, and applies the
//! last-discovery-wins rule. Re-running discovery into the same registry is
//! the supported way to refresh it; callers serialize those passes.

use tracing::{debug, error, info, instrument};

use crate::{application::ports::ModuleSource, domain::ModuleRegistry};

/// Service that turns a module source into a queryable registry.
pub struct DiscoveryService {
    source: Box<dyn ModuleSource>,
}

impl DiscoveryService {
    /// Create a new discovery service with the given source adapter.
    pub fn new(source: Box<dyn ModuleSource>) -> Self {
        Self { source }
    }

    /// Discover modules into a fresh registry.
    ///
    /// A top-level source failure (modules root absent, unreadable) is
    /// logged at error level and yields an **empty** registry — the host
    /// process must keep running; module absence is a normal state.
    #[instrument(skip(self))]
    pub fn discover(&self) -> ModuleRegistry {
        let mut registry = ModuleRegistry::new();
        self.discover_into(&mut registry);
        registry
    }

    /// Discover modules into an existing registry (merge/overwrite pass).
    pub fn discover_into(&self, registry: &mut ModuleRegistry) {
        let descriptors = match self.source.discover() {
            Ok(descriptors) => descriptors,
            Err(e) => {
                error!(error = %e, "failed to discover modules");
                return;
            }
        };

        for descriptor in descriptors {
            if !descriptor.enabled {
                debug!(module = %descriptor.name, "module is disabled");
                continue;
            }

            info!(module = %descriptor.name, "module discovered");
            if let Some(previous) = registry.insert(descriptor) {
                debug!(module = %previous.name, "replaced earlier registry entry");
            }
        }

        info!(total = registry.len(), "module discovery complete");
    }
}
