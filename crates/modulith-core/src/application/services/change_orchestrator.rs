//! Change Orchestrator - orders migration and seeder files for execution.
//!
//! Ordering here is **priority-only**: schema-level changes are ordered by
//! each module's declared priority, not by the route-load dependency graph.
//! The two rules are intentionally distinct and must stay that way.
//!
//! The orchestrator computes and reports order; it never executes anything.
//! The returned sequences are consumed by an external runner that applies
//! them strictly sequentially, within a module and across modules.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::{
    application::ports::ChangeLister,
    domain::{ModuleDescriptor, ModuleRegistry},
};

/// Which change-file set an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Migrations,
    Seeders,
}

impl ChangeKind {
    /// The descriptor path this kind reads from.
    fn dir_of<'a>(self, module: &'a ModuleDescriptor) -> Option<&'a Path> {
        match self {
            Self::Migrations => module.migrations_path.as_deref(),
            Self::Seeders => module.seeders_path.as_deref(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Migrations => "migrations",
            Self::Seeders => "seeders",
        }
    }
}

/// One module's ordered change files, paired with its priority.
///
/// Recomputed fresh on every orchestration call; never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleChangeSet {
    pub module: String,
    pub priority: i32,
    /// Directory the files live in.
    pub path: PathBuf,
    /// Name-sorted file names (timestamp-prefixed by contract).
    pub files: Vec<String>,
}

impl ModuleChangeSet {
    /// Full paths of this set's files, in execution order.
    pub fn file_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|f| self.path.join(f))
    }
}

/// Service that orders migration/seeder files across the registry.
pub struct ChangeOrchestrator {
    lister: Box<dyn ChangeLister>,
}

impl ChangeOrchestrator {
    /// Create a new orchestrator with the given lister adapter.
    pub fn new(lister: Box<dyn ChangeLister>) -> Self {
        Self { lister }
    }

    /// Per-module migration sets, sorted ascending by priority.
    pub fn discover_migrations(&self, registry: &ModuleRegistry) -> Vec<ModuleChangeSet> {
        self.discover(registry, ChangeKind::Migrations)
    }

    /// Per-module seeder sets, sorted ascending by priority.
    pub fn discover_seeders(&self, registry: &ModuleRegistry) -> Vec<ModuleChangeSet> {
        self.discover(registry, ChangeKind::Seeders)
    }

    /// Discovery pass shared by both kinds.
    ///
    /// Modules without the relevant directory, or with an empty one, are
    /// omitted. A module whose directory cannot be listed is skipped with a
    /// warning — partial availability is expected during development.
    #[instrument(skip(self, registry), fields(modules = registry.len()))]
    pub fn discover(&self, registry: &ModuleRegistry, kind: ChangeKind) -> Vec<ModuleChangeSet> {
        let mut sets = Vec::new();

        for module in registry.iter().filter(|m| m.enabled) {
            let Some(dir) = kind.dir_of(module) else {
                continue;
            };

            match self.lister.list_sorted(dir) {
                Ok(files) if files.is_empty() => {}
                Ok(files) => sets.push(ModuleChangeSet {
                    module: module.name.clone(),
                    priority: module.priority,
                    path: dir.to_path_buf(),
                    files,
                }),
                Err(e) => {
                    warn!(
                        module = %module.name,
                        kind = kind.label(),
                        error = %e,
                        "skipping unreadable change directory"
                    );
                }
            }
        }

        // Stable sort: equal priorities keep discovery order, which keeps
        // the global sequence identical across repeated runs.
        sets.sort_by_key(|s| s.priority);
        debug!(kind = kind.label(), sets = sets.len(), "change sets ordered");
        sets
    }

    /// Every migration file across the registry as one flat ordered list:
    /// module priority order, then intra-module name order.
    pub fn all_migrations(&self, registry: &ModuleRegistry) -> Vec<PathBuf> {
        Self::flatten(self.discover_migrations(registry))
    }

    /// Seeder analogue of [`Self::all_migrations`].
    pub fn all_seeders(&self, registry: &ModuleRegistry) -> Vec<PathBuf> {
        Self::flatten(self.discover_seeders(registry))
    }

    /// One module's migration file paths, name-sorted.
    ///
    /// Tolerant by design: an unknown module or a missing directory yields
    /// an empty list rather than an error.
    pub fn module_migrations(&self, registry: &ModuleRegistry, name: &str) -> Vec<PathBuf> {
        self.module_files(registry, name, ChangeKind::Migrations)
    }

    /// One module's seeder file paths, name-sorted.
    pub fn module_seeders(&self, registry: &ModuleRegistry, name: &str) -> Vec<PathBuf> {
        self.module_files(registry, name, ChangeKind::Seeders)
    }

    fn module_files(&self, registry: &ModuleRegistry, name: &str, kind: ChangeKind) -> Vec<PathBuf> {
        let Some(module) = registry.get(name).filter(|m| m.enabled) else {
            debug!(module = name, "module not registered, no change files");
            return Vec::new();
        };
        let Some(dir) = kind.dir_of(module) else {
            return Vec::new();
        };

        match self.lister.list_sorted(dir) {
            Ok(files) => files.into_iter().map(|f| dir.join(f)).collect(),
            Err(e) => {
                warn!(module = name, error = %e, "change directory unreadable");
                Vec::new()
            }
        }
    }

    fn flatten(sets: Vec<ModuleChangeSet>) -> Vec<PathBuf> {
        sets.iter().flat_map(|s| s.file_paths()).collect()
    }
}
