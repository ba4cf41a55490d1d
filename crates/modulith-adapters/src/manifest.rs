//! Declarative module config (`module.json`) parsing.
//!
//! Each module directory carries `config/module.json`, a camelCase JSON
//! record describing the module. The manifest is parsed as plain structured
//! data; nothing in it is ever executed or imported.
//!
//! # `module.json` format
//!
//! ```json
//! {
//!   "name": "billing",
//!   "displayName": "Billing",
//!   "version": "1.2.0",
//!   "description": "Invoices and payment plans",
//!   "enabled": true,
//!   "dependencies": ["core"],
//!   "routes": {
//!     "prefix": "/billing",
//!     "middleware": ["auth"]
//!   },
//!   "migrations": {
//!     "path": "database/migrations",
//!     "priority": 20
//!   },
//!   "seeders": {
//!     "path": "database/seeders"
//!   }
//! }
//! ```
//!
//! Every field is optional except that a module missing `"enabled": true`
//! is treated as disabled — absence and `false` mean the same thing.

use serde::Deserialize;

/// Migrations directory used when the manifest omits `migrations.path`.
pub const DEFAULT_MIGRATIONS_DIR: &str = "database/migrations";

/// Seeders directory used when the manifest omits `seeders.path`.
pub const DEFAULT_SEEDERS_DIR: &str = "database/seeders";

/// Deserialised representation of a `module.json` file.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleManifest {
    /// Declared name. Informational only — the registry key is always the
    /// directory name, and a mismatch is logged at discovery time.
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    /// Modules must opt in; a missing flag means disabled.
    pub enabled: bool,
    pub dependencies: Vec<String>,
    pub routes: Option<RoutesSection>,
    pub migrations: Option<MigrationsSection>,
    pub seeders: Option<SeedersSection>,
}

/// `routes` section — metadata for the external HTTP layer.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoutesSection {
    /// URL prefix the module's routes mount under.
    pub prefix: String,
    /// Named middleware applied to every route.
    #[serde(default)]
    pub middleware: Vec<String>,
}

/// `migrations` section.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MigrationsSection {
    /// Directory relative to the module root.
    pub path: Option<String>,
    /// Lower runs earlier; [`modulith_core::domain::DEFAULT_PRIORITY`]
    /// when absent.
    pub priority: Option<i32>,
}

/// `seeders` section.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SeedersSection {
    /// Directory relative to the module root.
    pub path: Option<String>,
}

impl ModuleManifest {
    /// Parse a manifest from raw JSON.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Migrations directory relative to the module root.
    pub fn migrations_dir(&self) -> &str {
        self.migrations
            .as_ref()
            .and_then(|m| m.path.as_deref())
            .unwrap_or(DEFAULT_MIGRATIONS_DIR)
    }

    /// Seeders directory relative to the module root.
    pub fn seeders_dir(&self) -> &str {
        self.seeders
            .as_ref()
            .and_then(|s| s.path.as_deref())
            .unwrap_or(DEFAULT_SEEDERS_DIR)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_manifest_parses() {
        let manifest = ModuleManifest::from_json(
            r#"{
                "name": "billing",
                "displayName": "Billing",
                "version": "1.2.0",
                "description": "Invoices",
                "enabled": true,
                "dependencies": ["core"],
                "routes": { "prefix": "/billing", "middleware": ["auth"] },
                "migrations": { "path": "db/migrations", "priority": 20 },
                "seeders": { "path": "db/seeders" }
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.name.as_deref(), Some("billing"));
        assert_eq!(manifest.display_name.as_deref(), Some("Billing"));
        assert!(manifest.enabled);
        assert_eq!(manifest.dependencies, vec!["core"]);
        assert_eq!(manifest.routes.as_ref().unwrap().prefix, "/billing");
        assert_eq!(manifest.migrations.as_ref().unwrap().priority, Some(20));
        assert_eq!(manifest.migrations_dir(), "db/migrations");
        assert_eq!(manifest.seeders_dir(), "db/seeders");
    }

    #[test]
    fn minimal_manifest_is_disabled_by_default() {
        let manifest = ModuleManifest::from_json("{}").unwrap();
        assert!(!manifest.enabled);
        assert!(manifest.dependencies.is_empty());
        assert_eq!(manifest.migrations_dir(), DEFAULT_MIGRATIONS_DIR);
        assert_eq!(manifest.seeders_dir(), DEFAULT_SEEDERS_DIR);
    }

    #[test]
    fn camel_case_keys_are_required() {
        // snake_case displayName is simply not picked up.
        let manifest =
            ModuleManifest::from_json(r#"{ "display_name": "X", "enabled": true }"#);
        // Unknown fields are tolerated, not errors.
        let manifest = manifest.unwrap();
        assert!(manifest.display_name.is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ModuleManifest::from_json("{ not json").is_err());
    }

    #[test]
    fn sections_tolerate_partial_content() {
        let manifest = ModuleManifest::from_json(
            r#"{ "enabled": true, "migrations": { "priority": 5 } }"#,
        )
        .unwrap();
        assert_eq!(manifest.migrations.as_ref().unwrap().priority, Some(5));
        assert_eq!(manifest.migrations_dir(), DEFAULT_MIGRATIONS_DIR);
    }
}
