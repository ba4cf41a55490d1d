//! Application layer errors.
//!
//! These errors represent failures in orchestration and discovery plumbing,
//! not business logic. Graph-level errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Top-level module enumeration failed (modules root absent/unreadable).
    #[error("module discovery failed at {path}: {reason}")]
    DiscoveryFailed { path: PathBuf, reason: String },

    /// One module's config could not be read or parsed.
    ///
    /// Discovery recovers from this per module (skip and warn); the variant
    /// exists so adapters can report the failure with context.
    #[error("module '{module}' has no valid config: {reason}")]
    ConfigParse { module: String, reason: String },

    /// A migrations/seeders directory could not be listed.
    #[error("failed to list change files in {path}: {reason}")]
    ListingFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DiscoveryFailed { path, .. } => vec![
                format!("Could not enumerate modules under: {}", path.display()),
                "Check that the modules root exists and is readable".into(),
                "Override the location with --modules-root <DIR>".into(),
            ],
            Self::ConfigParse { module, .. } => vec![
                format!("config/module.json for '{}' did not parse", module),
                "Validate the JSON and the camelCase field names".into(),
            ],
            Self::ListingFailed { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Check directory permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DiscoveryFailed { .. } => ErrorCategory::NotFound,
            Self::ConfigParse { .. } => ErrorCategory::Validation,
            Self::ListingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
