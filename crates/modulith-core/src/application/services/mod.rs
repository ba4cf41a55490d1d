//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish high-level
//! use cases like "discover the module tree" or "order every migration".

pub mod change_orchestrator;
pub mod discovery_service;

pub use change_orchestrator::{ChangeKind, ChangeOrchestrator, ModuleChangeSet};
pub use discovery_service::DiscoveryService;
