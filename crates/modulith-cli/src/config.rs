//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, or the default location if it exists)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Where and how modules are discovered.
    pub modules: ModulesConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesConfig {
    /// Modules root directory scanned by discovery.
    pub root: PathBuf,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("modules"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// With `--config FILE` the file must exist and parse.  Without it, the
    /// default location is read only when present — a missing default config
    /// is not an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(path) => path.clone(),
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read '{}': {e}", path.display()))?;
        let config = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("failed to parse '{}': {e}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.modulith.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "modulith", "modulith")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".modulith.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_modules_root() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.modules.root, PathBuf::from("modules"));
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/absolutely/does/not/exist.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[modules]\nroot = \"src/modules\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.modules.root, PathBuf::from("src/modules"));
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn config_path_is_absolute_or_relative() {
        // Just assert it doesn't panic and returns a non-empty path.
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
