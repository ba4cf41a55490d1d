//! Application layer for Modulith.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (DiscoveryService, ChangeOrchestrator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All graph rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ChangeKind,
    ChangeOrchestrator,
    DiscoveryService,
    ModuleChangeSet, // DTO for one module's ordered change files
};

// Re-export port traits (for adapter implementation)
pub use ports::{ChangeLister, ModuleSource};

pub use error::ApplicationError;
