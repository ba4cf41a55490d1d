//! Module descriptors — the unit everything else operates on.
//!
//! A [`ModuleDescriptor`] is the in-memory image of one discovered module:
//! its declarative config plus the optional filesystem locations resolved at
//! discovery time. Descriptors are plain data; no descriptor method performs
//! I/O, and the routes entry point is an opaque path handle that an external
//! loader resolves.

use std::path::PathBuf;

use serde::Serialize;

use super::error::DomainError;

/// Priority used when a module's config does not declare one.
///
/// Lower values run earlier, so undeclared modules sort last.
pub const DEFAULT_PRIORITY: i32 = 999;

/// Route metadata declared in a module's config.
///
/// The core never registers routes itself — this is handed to the external
/// HTTP layer together with the opaque `routes_file` handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteConfig {
    /// URL prefix under which the module's routes mount (e.g. `/billing`).
    pub prefix: String,
    /// Named middleware applied to every route in the module.
    pub middleware: Vec<String>,
}

/// One discovered module: declarative config plus resolved locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleDescriptor {
    /// Unique identifier, derived from the module directory name.
    pub name: String,
    /// Human-facing name from the config (falls back to `name`).
    pub display_name: String,
    pub version: String,
    pub description: String,
    /// Disabled modules are excluded from every downstream computation.
    pub enabled: bool,
    /// Names of modules that must be loaded before this one.
    pub dependencies: Vec<String>,
    /// Coarse ordering signal for migrations/seeders; lower runs earlier.
    pub priority: i32,
    /// Module root directory.
    pub root: PathBuf,
    /// Route metadata, if the config declares a `routes` section.
    pub routes: Option<RouteConfig>,
    /// Opaque handle to the module's routes entry point, if one exists on
    /// disk. The resolver never imports it.
    pub routes_file: Option<PathBuf>,
    /// Migrations directory, present only when it exists on disk.
    pub migrations_path: Option<PathBuf>,
    /// Seeders directory, present only when it exists on disk.
    pub seeders_path: Option<PathBuf>,
}

impl ModuleDescriptor {
    /// Start building a descriptor for `name`.
    pub fn builder(name: impl Into<String>) -> ModuleDescriptorBuilder {
        ModuleDescriptorBuilder::new(name)
    }
}

/// Fluent builder for [`ModuleDescriptor`].
///
/// Only `name` is required; everything else defaults to an enabled module
/// with no dependencies at [`DEFAULT_PRIORITY`].
#[derive(Debug, Clone)]
pub struct ModuleDescriptorBuilder {
    name: String,
    display_name: Option<String>,
    version: String,
    description: String,
    enabled: bool,
    dependencies: Vec<String>,
    priority: i32,
    root: PathBuf,
    routes: Option<RouteConfig>,
    routes_file: Option<PathBuf>,
    migrations_path: Option<PathBuf>,
    seeders_path: Option<PathBuf>,
}

impl ModuleDescriptorBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            version: "0.0.0".into(),
            description: String::new(),
            enabled: true,
            dependencies: Vec::new(),
            priority: DEFAULT_PRIORITY,
            root: PathBuf::new(),
            routes: None,
            routes_file: None,
            migrations_path: None,
            seeders_path: None,
        }
    }

    pub fn display_name(mut self, value: impl Into<String>) -> Self {
        self.display_name = Some(value.into());
        self
    }

    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = value.into();
        self
    }

    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = value.into();
        self
    }

    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = value;
        self
    }

    /// Add one dependency. May be called repeatedly.
    pub fn dependency(mut self, name: impl Into<String>) -> Self {
        self.dependencies.push(name.into());
        self
    }

    pub fn dependencies<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn priority(mut self, value: i32) -> Self {
        self.priority = value;
        self
    }

    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = path.into();
        self
    }

    pub fn routes(mut self, config: RouteConfig) -> Self {
        self.routes = Some(config);
        self
    }

    pub fn routes_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.routes_file = Some(path.into());
        self
    }

    pub fn migrations_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.migrations_path = Some(path.into());
        self
    }

    pub fn seeders_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seeders_path = Some(path.into());
        self
    }

    /// Validate and build the descriptor.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidModuleName`] when the name is empty or contains
    /// path separators (module names come from directory names; anything
    /// else cannot round-trip through the filesystem contract).
    pub fn build(self) -> Result<ModuleDescriptor, DomainError> {
        validate_name(&self.name)?;

        Ok(ModuleDescriptor {
            display_name: self.display_name.unwrap_or_else(|| self.name.clone()),
            name: self.name,
            version: self.version,
            description: self.description,
            enabled: self.enabled,
            dependencies: self.dependencies,
            priority: self.priority,
            root: self.root,
            routes: self.routes,
            routes_file: self.routes_file,
            migrations_path: self.migrations_path,
            seeders_path: self.seeders_path,
        })
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidModuleName {
            name: name.into(),
            reason: "name must not be empty".into(),
        });
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(DomainError::InvalidModuleName {
            name: name.into(),
            reason: "name must be a plain directory name".into(),
        });
    }
    Ok(())
}
