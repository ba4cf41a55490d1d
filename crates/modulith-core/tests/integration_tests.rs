//! Integration tests for modulith-core.
//!
//! Full workflow through the in-memory adapters: discover a module set,
//! resolve the load order, orchestrate migrations and seeders.

use modulith_adapters::{InMemoryModuleSource, MemoryChangeLister};
use modulith_core::{
    application::{ChangeOrchestrator, DiscoveryService},
    domain::{DomainError, ModuleDescriptor, resolver},
};
use std::path::PathBuf;

fn demo_source() -> InMemoryModuleSource {
    InMemoryModuleSource::with_modules(vec![
        ModuleDescriptor::builder("core")
            .priority(10)
            .migrations_path("/modules/core/database/migrations")
            .seeders_path("/modules/core/database/seeders")
            .build()
            .unwrap(),
        ModuleDescriptor::builder("billing")
            .priority(20)
            .dependency("core")
            .migrations_path("/modules/billing/database/migrations")
            .build()
            .unwrap(),
        ModuleDescriptor::builder("reports")
            .priority(5)
            .dependency("billing")
            .build()
            .unwrap(),
        ModuleDescriptor::builder("legacy")
            .priority(1)
            .enabled(false)
            .build()
            .unwrap(),
    ])
}

fn demo_lister() -> MemoryChangeLister {
    let lister = MemoryChangeLister::new();
    lister.set_files(
        "/modules/core/database/migrations",
        ["2024_01_02_users.ts", "2024_01_01_init.ts"],
    );
    lister.set_files(
        "/modules/core/database/seeders",
        ["2024_01_01_admin.ts"],
    );
    lister.set_files(
        "/modules/billing/database/migrations",
        ["2024_02_01_invoices.ts"],
    );
    lister
}

#[test]
fn full_discovery_and_resolution_workflow() {
    let registry = DiscoveryService::new(Box::new(demo_source())).discover();

    // legacy is disabled and never enters the registry.
    assert_eq!(registry.len(), 3);
    assert!(!registry.contains("legacy"));

    // Dependency constraints override the naive priority order: reports has
    // the lowest priority but transitively depends on everything else.
    let order = resolver::load_order(&registry).unwrap();
    assert_eq!(order, vec!["core", "billing", "reports"]);

    // Focused resolution returns just the closure.
    let focused = resolver::load_order_for(&registry, "billing").unwrap();
    assert_eq!(focused, vec!["core", "billing"]);
}

#[test]
fn migration_order_is_priority_only_and_flattened() {
    let registry = DiscoveryService::new(Box::new(demo_source())).discover();
    let orchestrator = ChangeOrchestrator::new(Box::new(demo_lister()));

    // Load order puts core before billing via the graph; migration order
    // does too, but only because of priorities (10 < 20), and reports is
    // absent because it ships no migrations.
    let sets = orchestrator.discover_migrations(&registry);
    let modules: Vec<_> = sets.iter().map(|s| s.module.as_str()).collect();
    assert_eq!(modules, vec!["core", "billing"]);

    let all = orchestrator.all_migrations(&registry);
    assert_eq!(
        all,
        vec![
            PathBuf::from("/modules/core/database/migrations/2024_01_01_init.ts"),
            PathBuf::from("/modules/core/database/migrations/2024_01_02_users.ts"),
            PathBuf::from("/modules/billing/database/migrations/2024_02_01_invoices.ts"),
        ]
    );

    // Re-running over an unchanged tree yields the identical list.
    assert_eq!(orchestrator.all_migrations(&registry), all);
}

#[test]
fn seeders_flow_through_their_own_path() {
    let registry = DiscoveryService::new(Box::new(demo_source())).discover();
    let orchestrator = ChangeOrchestrator::new(Box::new(demo_lister()));

    assert_eq!(
        orchestrator.all_seeders(&registry),
        vec![PathBuf::from(
            "/modules/core/database/seeders/2024_01_01_admin.ts"
        )]
    );
    assert!(orchestrator.module_seeders(&registry, "billing").is_empty());
}

#[test]
fn depending_on_a_disabled_module_fails_resolution() {
    let source = InMemoryModuleSource::with_modules(vec![
        ModuleDescriptor::builder("legacy")
            .enabled(false)
            .build()
            .unwrap(),
        ModuleDescriptor::builder("billing")
            .dependency("legacy")
            .build()
            .unwrap(),
    ]);
    let registry = DiscoveryService::new(Box::new(source)).discover();

    let err = resolver::load_order(&registry).unwrap_err();
    match err {
        DomainError::MissingDependencies { module, missing } => {
            assert_eq!(module, "billing");
            assert_eq!(missing, vec!["legacy"]);
        }
        other => panic!("expected MissingDependencies, got {other:?}"),
    }
}

#[test]
fn cycles_surface_from_discovered_modules() {
    let source = InMemoryModuleSource::with_modules(vec![
        ModuleDescriptor::builder("x").dependency("y").build().unwrap(),
        ModuleDescriptor::builder("y").dependency("x").build().unwrap(),
    ]);
    let registry = DiscoveryService::new(Box::new(source)).discover();

    let err = resolver::load_order_for(&registry, "x").unwrap_err();
    match err {
        DomainError::CycleDetected { module_a, module_b } => {
            let mut pair = [module_a, module_b];
            pair.sort();
            assert_eq!(pair, ["x".to_owned(), "y".to_owned()]);
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn rediscovery_into_same_registry_is_idempotent() {
    let service = DiscoveryService::new(Box::new(demo_source()));

    let mut registry = service.discover();
    let before = resolver::load_order(&registry).unwrap();

    service.discover_into(&mut registry);
    assert_eq!(registry.len(), 3);
    assert_eq!(resolver::load_order(&registry).unwrap(), before);
}
