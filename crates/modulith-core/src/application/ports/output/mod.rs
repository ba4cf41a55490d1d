//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `modulith-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::ModuleDescriptor;
use crate::error::ModulithResult;

/// Port for module discovery.
///
/// Implemented by:
/// - `modulith_adapters::module_source::FilesystemModuleSource` (production)
/// - `modulith_adapters::module_source::InMemoryModuleSource` (testing)
///
/// ## Design Notes
///
/// - A source reports every module it can see, in discovery order,
///   including disabled ones; the discovery service decides what enters
///   the registry.
/// - Per-module config failures are the source's business to recover from
///   (skip and warn) — `discover` fails only when the source itself is
///   unreachable, e.g. the modules root is missing.
pub trait ModuleSource: Send + Sync {
    /// Enumerate every module the source can see, in discovery order.
    fn discover(&self) -> ModulithResult<Vec<ModuleDescriptor>>;
}

/// Port for listing migration/seeder change files.
///
/// Implemented by:
/// - `modulith_adapters::change_lister::LocalChangeLister` (production)
/// - `modulith_adapters::change_lister::MemoryChangeLister` (testing)
pub trait ChangeLister: Send + Sync {
    /// Name-sorted file names directly under `dir`.
    ///
    /// Filenames are timestamp-prefixed by contract, so the lexicographic
    /// sort is the execution order. A missing directory yields an empty
    /// list, not an error.
    fn list_sorted(&self, dir: &Path) -> ModulithResult<Vec<String>>;
}
