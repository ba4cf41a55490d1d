//! Infrastructure adapters for Modulith.
//!
//! This crate implements the ports defined in `modulith_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod change_lister;
pub mod manifest;
pub mod module_source;

// Re-export commonly used adapters
pub use change_lister::{LocalChangeLister, MemoryChangeLister};
pub use module_source::{FilesystemModuleSource, InMemoryModuleSource};
