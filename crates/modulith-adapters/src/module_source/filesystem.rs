//! Filesystem-based module discovery.
//!
//! Walks the immediate subdirectories of a modules root, parses each one's
//! `config/module.json`, and probes (non-fatally) for the routes entry
//! point and the migrations/seeders directories.
//!
//! # Directory layout expected
//!
//! ```text
//! modules/
//! ├── core/
//! │   ├── config/
//! │   │   └── module.json          ← manifest (required)
//! │   ├── routes/
//! │   │   └── core.ts              ← optional, recorded as an opaque handle
//! │   └── database/
//! │       ├── migrations/          ← optional, file-per-change
//! │       └── seeders/             ← optional, file-per-change
//! └── billing/
//!     └── config/
//!         └── module.json
//! ```
//!
//! A directory with no parseable config is skipped with a `WARN` log —
//! module absence is a normal state and must not block the others.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use modulith_core::{
    application::{ApplicationError, ports::ModuleSource},
    domain::{DEFAULT_PRIORITY, ModuleDescriptor, RouteConfig},
    error::{ModulithError, ModulithResult},
};

use crate::manifest::ModuleManifest;

/// Production module source reading `modules/<name>/config/module.json`.
pub struct FilesystemModuleSource {
    modules_root: PathBuf,
}

impl FilesystemModuleSource {
    /// Create a source pointed at `modules_root`.
    ///
    /// The directory does not need to exist yet; [`ModuleSource::discover`]
    /// will return an error if it is missing when called.
    pub fn new(modules_root: impl Into<PathBuf>) -> Self {
        Self {
            modules_root: modules_root.into(),
        }
    }

    /// Load a single module from one subdirectory.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::ConfigParse`] when `config/module.json` is
    /// missing, unreadable, or malformed.
    #[instrument(skip(self), fields(dir = %dir.display()))]
    fn load_module_from_dir(&self, dir: &Path) -> ModulithResult<ModuleDescriptor> {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let config_path = dir.join("config").join("module.json");
        let raw = fs::read_to_string(&config_path).map_err(|e| {
            ModulithError::from(ApplicationError::ConfigParse {
                module: name.clone(),
                reason: format!("failed to read '{}': {e}", config_path.display()),
            })
        })?;

        let manifest = ModuleManifest::from_json(&raw).map_err(|e| {
            ModulithError::from(ApplicationError::ConfigParse {
                module: name.clone(),
                reason: format!("failed to parse '{}': {e}", config_path.display()),
            })
        })?;

        // The registry key is the directory name; a declared name is
        // informational only.
        if let Some(declared) = manifest.name.as_deref() {
            if declared != name {
                debug!(declared, directory = %name, "manifest name differs from directory");
            }
        }

        let priority = manifest
            .migrations
            .as_ref()
            .and_then(|m| m.priority)
            .unwrap_or(DEFAULT_PRIORITY);

        let mut builder = ModuleDescriptor::builder(name.as_str())
            .enabled(manifest.enabled)
            .dependencies(manifest.dependencies.iter().cloned())
            .priority(priority)
            .root(dir);

        if let Some(display_name) = manifest.display_name.as_deref() {
            builder = builder.display_name(display_name);
        }
        if let Some(version) = manifest.version.as_deref() {
            builder = builder.version(version);
        }
        if let Some(description) = manifest.description.as_deref() {
            builder = builder.description(description);
        }
        if let Some(routes) = &manifest.routes {
            builder = builder.routes(RouteConfig {
                prefix: routes.prefix.clone(),
                middleware: routes.middleware.clone(),
            });
        }

        // Non-fatal probes: absence is recorded as "none", never an error.
        if let Some(routes_file) = probe_routes_file(dir, &name) {
            builder = builder.routes_file(routes_file);
        }
        if let Some(path) = probe_dir(dir, manifest.migrations_dir()) {
            builder = builder.migrations_path(path);
        }
        if let Some(path) = probe_dir(dir, manifest.seeders_dir()) {
            builder = builder.seeders_path(path);
        }

        Ok(builder.build()?)
    }
}

impl ModuleSource for FilesystemModuleSource {
    /// Enumerate every module directory under the root.
    ///
    /// Directory enumeration order is platform-defined, so entries are
    /// sorted by name for a stable discovery order.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::DiscoveryFailed`] when the modules root itself
    /// cannot be enumerated. Individual modules whose config is missing or
    /// malformed are **skipped with a `WARN` log** rather than failing the
    /// whole batch.
    #[instrument(skip(self), fields(root = %self.modules_root.display()))]
    fn discover(&self) -> ModulithResult<Vec<ModuleDescriptor>> {
        let mut modules = Vec::new();

        let walker = WalkDir::new(&self.modules_root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry_result in walker {
            let entry = entry_result.map_err(|e| {
                ModulithError::from(ApplicationError::DiscoveryFailed {
                    path: self.modules_root.clone(),
                    reason: e.to_string(),
                })
            })?;

            if !entry.file_type().is_dir() {
                continue; // Only process subdirectories.
            }

            match self.load_module_from_dir(entry.path()) {
                Ok(module) => {
                    debug!(module = %module.name, enabled = module.enabled, "loaded module config");
                    modules.push(module);
                }
                Err(e) => {
                    // One bad module must not block all others.
                    warn!(
                        dir   = %entry.path().display(),
                        error = %e,
                        "skipping module directory due to config error"
                    );
                }
            }
        }

        debug!(count = modules.len(), "finished module discovery");
        Ok(modules)
    }
}

/// Find the routes entry point: `routes/<name>.<ext>` for any extension.
///
/// The handle is opaque — nothing ever imports it, so the extension is not
/// interpreted. The first lexicographic match wins when several exist.
fn probe_routes_file(module_dir: &Path, name: &str) -> Option<PathBuf> {
    let routes_dir = module_dir.join("routes");

    let mut candidates: Vec<PathBuf> = WalkDir::new(&routes_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|p| p.file_stem() == Some(std::ffi::OsStr::new(name)))
        .collect();

    if candidates.is_empty() {
        None
    } else {
        Some(candidates.remove(0))
    }
}

/// Resolve `rel` against the module root; `Some` only when it is a directory.
fn probe_dir(module_dir: &Path, rel: &str) -> Option<PathBuf> {
    let path = module_dir.join(rel);
    path.is_dir().then_some(path)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // ── helpers ───────────────────────────────────────────────────────────

    /// Write one module directory with the given config and extra files.
    fn write_module(root: &Path, name: &str, config: &str, files: &[&str]) {
        let dir = root.join(name);
        fs::create_dir_all(dir.join("config")).unwrap();
        fs::write(dir.join("config").join("module.json"), config).unwrap();

        for rel in files {
            let full = dir.join(rel);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, "").unwrap();
        }
    }

    const ENABLED: &str = r#"{ "enabled": true }"#;

    // ── discover ──────────────────────────────────────────────────────────

    #[test]
    fn discover_returns_error_for_missing_root() {
        let source = FilesystemModuleSource::new("/absolutely/does/not/exist");
        assert!(matches!(
            source.discover(),
            Err(ModulithError::Application(
                ApplicationError::DiscoveryFailed { .. }
            ))
        ));
    }

    #[test]
    fn discover_skips_files_at_top_level() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "not a module").unwrap();
        write_module(temp.path(), "core", ENABLED, &[]);

        let modules = FilesystemModuleSource::new(temp.path()).discover().unwrap();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].name, "core");
    }

    #[test]
    fn discover_continues_when_one_module_is_invalid() {
        let temp = TempDir::new().unwrap();

        // Bad module — config present but malformed.
        write_module(temp.path(), "broken", "{ nope", &[]);
        // Bad module — no config at all.
        fs::create_dir_all(temp.path().join("bare")).unwrap();
        // Good module.
        write_module(temp.path(), "good", ENABLED, &[]);

        let modules = FilesystemModuleSource::new(temp.path()).discover().unwrap();
        assert_eq!(modules.len(), 1, "bad modules should be skipped");
        assert_eq!(modules[0].name, "good");
    }

    #[test]
    fn discovery_order_is_sorted_by_name() {
        let temp = TempDir::new().unwrap();
        write_module(temp.path(), "zeta", ENABLED, &[]);
        write_module(temp.path(), "alpha", ENABLED, &[]);
        write_module(temp.path(), "mid", ENABLED, &[]);

        let names: Vec<String> = FilesystemModuleSource::new(temp.path())
            .discover()
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn disabled_modules_are_still_reported() {
        // Filtering is the discovery service's job, not the source's.
        let temp = TempDir::new().unwrap();
        write_module(temp.path(), "legacy", r#"{ "enabled": false }"#, &[]);

        let modules = FilesystemModuleSource::new(temp.path()).discover().unwrap();
        assert_eq!(modules.len(), 1);
        assert!(!modules[0].enabled);
    }

    // ── descriptor fields ─────────────────────────────────────────────────

    #[test]
    fn manifest_fields_reach_the_descriptor() {
        let temp = TempDir::new().unwrap();
        write_module(
            temp.path(),
            "billing",
            r#"{
                "displayName": "Billing",
                "version": "2.0.0",
                "description": "Invoices",
                "enabled": true,
                "dependencies": ["core"],
                "routes": { "prefix": "/billing", "middleware": ["auth"] },
                "migrations": { "priority": 20 }
            }"#,
            &[],
        );

        let modules = FilesystemModuleSource::new(temp.path()).discover().unwrap();
        let billing = &modules[0];
        assert_eq!(billing.display_name, "Billing");
        assert_eq!(billing.version, "2.0.0");
        assert_eq!(billing.dependencies, vec!["core"]);
        assert_eq!(billing.priority, 20);
        assert_eq!(billing.routes.as_ref().unwrap().prefix, "/billing");
    }

    #[test]
    fn priority_defaults_when_absent() {
        let temp = TempDir::new().unwrap();
        write_module(temp.path(), "core", ENABLED, &[]);

        let modules = FilesystemModuleSource::new(temp.path()).discover().unwrap();
        assert_eq!(modules[0].priority, DEFAULT_PRIORITY);
    }

    // ── probes ────────────────────────────────────────────────────────────

    #[test]
    fn routes_file_is_probed_by_stem() {
        let temp = TempDir::new().unwrap();
        write_module(temp.path(), "core", ENABLED, &["routes/core.ts"]);
        write_module(temp.path(), "bare", ENABLED, &[]);

        let modules = FilesystemModuleSource::new(temp.path()).discover().unwrap();
        let core = modules.iter().find(|m| m.name == "core").unwrap();
        let bare = modules.iter().find(|m| m.name == "bare").unwrap();

        assert!(
            core.routes_file
                .as_ref()
                .is_some_and(|p| p.ends_with("routes/core.ts"))
        );
        assert!(bare.routes_file.is_none());
    }

    #[test]
    fn other_files_in_routes_dir_are_ignored() {
        let temp = TempDir::new().unwrap();
        write_module(temp.path(), "core", ENABLED, &["routes/helpers.ts"]);

        let modules = FilesystemModuleSource::new(temp.path()).discover().unwrap();
        assert!(modules[0].routes_file.is_none());
    }

    #[test]
    fn migration_and_seeder_dirs_are_probed() {
        let temp = TempDir::new().unwrap();
        write_module(
            temp.path(),
            "inventory",
            ENABLED,
            &[
                "database/migrations/2024_01_01_init.ts",
                "database/seeders/2024_01_01_demo.ts",
            ],
        );
        write_module(temp.path(), "bare", ENABLED, &[]);

        let modules = FilesystemModuleSource::new(temp.path()).discover().unwrap();
        let inventory = modules.iter().find(|m| m.name == "inventory").unwrap();
        let bare = modules.iter().find(|m| m.name == "bare").unwrap();

        assert!(
            inventory
                .migrations_path
                .as_ref()
                .is_some_and(|p| p.ends_with("database/migrations"))
        );
        assert!(inventory.seeders_path.is_some());
        assert!(bare.migrations_path.is_none());
        assert!(bare.seeders_path.is_none());
    }

    #[test]
    fn manifest_migration_path_overrides_default() {
        let temp = TempDir::new().unwrap();
        write_module(
            temp.path(),
            "custom",
            r#"{ "enabled": true, "migrations": { "path": "db/changes" } }"#,
            &["db/changes/0001_init.sql"],
        );

        let modules = FilesystemModuleSource::new(temp.path()).discover().unwrap();
        assert!(
            modules[0]
                .migrations_path
                .as_ref()
                .is_some_and(|p| p.ends_with("db/changes"))
        );
    }
}
