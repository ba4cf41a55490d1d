// ============================================================================
// domain/error.rs - GRAPH-LEVEL ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (resolution can be retried against a fresh registry)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: String },

    // ========================================================================
    // Resolution Errors (409-level equivalent)
    // ========================================================================
    #[error("circular dependency detected: {module_a} <-> {module_b}")]
    CycleDetected { module_a: String, module_b: String },

    #[error("dependencies {listed} required by '{module}' are not available", listed = .missing.join(", "))]
    MissingDependencies {
        module: String,
        /// Every unresolvable name declared by `module`, not just the first.
        missing: Vec<String>,
    },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("module '{name}' is not registered")]
    UnknownModule { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidModuleName { name, reason } => vec![
                format!("Module name '{}' is invalid: {}", name, reason),
                "Module names come from directory names under the modules root".into(),
            ],
            Self::CycleDetected { module_a, module_b } => vec![
                format!(
                    "'{}' and '{}' depend on each other, directly or transitively",
                    module_a, module_b
                ),
                "Break the cycle by removing one direction from a module.json".into(),
                "Try: modulith check <module> to inspect each side".into(),
            ],
            Self::MissingDependencies { module, missing } => {
                let mut suggestions = vec![format!(
                    "'{}' declares dependencies that are not registered:",
                    module
                )];
                for name in missing {
                    suggestions.push(format!("  • {}", name));
                }
                suggestions.push("A disabled module cannot satisfy a dependency".into());
                suggestions.push("Try: modulith list to see what was discovered".into());
                suggestions
            }
            Self::UnknownModule { name } => vec![
                format!("No module named '{}' was discovered", name),
                "Try: modulith list".into(),
                "Check the directory name and that config/module.json parses".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidModuleName { .. } => ErrorCategory::Validation,
            Self::CycleDetected { .. } | Self::MissingDependencies { .. } => {
                ErrorCategory::Resolution
            }
            Self::UnknownModule { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Resolution,
    NotFound,
    Internal,
}
