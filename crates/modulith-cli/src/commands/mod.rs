//! Command handlers — one module per subcommand.

pub mod check;
pub mod completions;
pub mod list;
pub mod migrations;
pub mod order;
pub mod seeders;

mod changes;

use modulith_adapters::FilesystemModuleSource;
use modulith_core::{application::DiscoveryService, domain::ModuleRegistry};

use crate::{cli::GlobalArgs, config::AppConfig};

/// Discover the module registry for the resolved modules root.
///
/// A missing or unreadable root logs an error and yields an empty registry;
/// commands keep running against it (module absence is a normal state).
/// The root is absolutized so that reported migration/seeder paths are
/// absolute regardless of how the flag was spelled.
pub(crate) fn discover_registry(global: &GlobalArgs, config: &AppConfig) -> ModuleRegistry {
    let root = global.resolve_modules_root(config);
    let root = std::path::absolute(&root).unwrap_or(root);
    let source = FilesystemModuleSource::new(root);
    DiscoveryService::new(Box::new(source)).discover()
}
