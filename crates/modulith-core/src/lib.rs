//! Modulith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Modulith
//! module orchestration tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          modulith-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (DiscoveryService, ChangeOrchestrator)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: ModuleSource, ChangeLister)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    modulith-adapters (Infrastructure)   │
//! │  (FilesystemModuleSource, LocalLister)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ModuleDescriptor, Registry, Resolver)  │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use modulith_core::{
//!     application::{ChangeOrchestrator, DiscoveryService},
//!     domain::resolver,
//! };
//! # fn adapters() -> (Box<dyn modulith_core::application::ModuleSource>, Box<dyn modulith_core::application::ChangeLister>) { unimplemented!() }
//!
//! // 1. Discover once (with injected adapters)
//! let (source, lister) = adapters();
//! let registry = DiscoveryService::new(source).discover();
//!
//! // 2. Query many times
//! let load_order = resolver::load_order(&registry).unwrap();
//! let migrations = ChangeOrchestrator::new(lister).all_migrations(&registry);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ChangeKind, ChangeOrchestrator, DiscoveryService, ModuleChangeSet,
        ports::{ChangeLister, ModuleSource},
    };
    pub use crate::domain::{
        DEFAULT_PRIORITY, ModuleDescriptor, ModuleDescriptorBuilder, ModuleRegistry, RouteConfig,
        load_order, load_order_for,
    };
    pub use crate::error::{ModulithError, ModulithResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
