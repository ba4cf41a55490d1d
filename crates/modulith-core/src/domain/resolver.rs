//! Dependency resolution: computes the route-load order.
//!
//! The load order is a topological order of the dependency graph, seeded by
//! ascending priority so that the priority sequence is honored wherever the
//! graph leaves freedom to choose. Cycles and unresolved dependencies are
//! reported as typed [`DomainError`]s, never as panics.
//!
//! The walk is depth-first with explicit visit-state tagging
//! (unvisited / in-progress / done) on an explicit stack, keeping cycle
//! detection and stack depth bounded by the module count rather than the
//! call stack.
//!
//! This ordering rule is deliberately different from the migration/seeder
//! ordering, which is priority-only — see the orchestrator service.

use std::collections::HashMap;

use tracing::{debug, instrument};

use super::{error::DomainError, module::ModuleDescriptor, registry::ModuleRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    InProgress,
    Done,
}

struct Frame<'a> {
    module: &'a ModuleDescriptor,
    next_dep: usize,
    missing: Vec<String>,
}

impl<'a> Frame<'a> {
    fn new(module: &'a ModuleDescriptor) -> Self {
        Self {
            module,
            next_dep: 0,
            missing: Vec::new(),
        }
    }
}

/// Compute the global load order for every enabled module in the registry.
///
/// Modules are seeded in ascending `priority` order (ties broken by
/// discovery order); each seed's dependency closure resolves depth-first,
/// dependencies strictly before dependents. Every enabled module appears
/// exactly once; disabled modules never appear.
///
/// # Errors
///
/// - [`DomainError::CycleDetected`] when a module is an ancestor of itself
///   in the depth-first walk, naming the two modules that close the cycle.
/// - [`DomainError::MissingDependencies`] when a module requires names that
///   are not registered as enabled modules; every missing name for that
///   module is collected before the error is raised.
#[instrument(skip(registry), fields(modules = registry.len()))]
pub fn load_order(registry: &ModuleRegistry) -> Result<Vec<String>, DomainError> {
    let mut seeds: Vec<&ModuleDescriptor> = registry.iter().filter(|m| m.enabled).collect();
    // Stable sort: equal priorities keep discovery order.
    seeds.sort_by_key(|m| m.priority);

    let mut states: HashMap<&str, VisitState> = HashMap::new();
    let mut order = Vec::with_capacity(seeds.len());

    for module in seeds {
        resolve_from(registry, module, &mut states, &mut order)?;
    }

    debug!(resolved = order.len(), "load order computed");
    Ok(order)
}

/// Compute the load order for a single module: its transitive dependency
/// closure followed by the module itself.
///
/// # Errors
///
/// [`DomainError::UnknownModule`] when `name` is not a registered enabled
/// module, plus every error [`load_order`] can produce for the closure.
#[instrument(skip(registry))]
pub fn load_order_for(registry: &ModuleRegistry, name: &str) -> Result<Vec<String>, DomainError> {
    let Some(module) = lookup_enabled(registry, name) else {
        return Err(DomainError::UnknownModule { name: name.into() });
    };

    let mut states = HashMap::new();
    let mut order = Vec::new();
    resolve_from(registry, module, &mut states, &mut order)?;
    Ok(order)
}

/// A registry entry counts for resolution only while enabled; a disabled
/// module satisfies nothing.
fn lookup_enabled<'a>(registry: &'a ModuleRegistry, name: &str) -> Option<&'a ModuleDescriptor> {
    registry.get(name).filter(|m| m.enabled)
}

fn resolve_from<'a>(
    registry: &'a ModuleRegistry,
    root: &'a ModuleDescriptor,
    states: &mut HashMap<&'a str, VisitState>,
    order: &mut Vec<String>,
) -> Result<(), DomainError> {
    if states.get(root.name.as_str()) == Some(&VisitState::Done) {
        return Ok(());
    }

    states.insert(root.name.as_str(), VisitState::InProgress);
    let mut stack = vec![Frame::new(root)];

    while !stack.is_empty() {
        let top = stack.len() - 1;
        let module = stack[top].module;
        let dep_index = stack[top].next_dep;

        // All dependencies handled: report anything unresolvable, otherwise
        // the module itself joins the order exactly once.
        if dep_index >= module.dependencies.len() {
            if let Some(mut frame) = stack.pop() {
                if !frame.missing.is_empty() {
                    return Err(DomainError::MissingDependencies {
                        module: module.name.clone(),
                        missing: std::mem::take(&mut frame.missing),
                    });
                }
            }
            states.insert(module.name.as_str(), VisitState::Done);
            debug!(module = %module.name, "module resolved");
            order.push(module.name.clone());
            continue;
        }

        stack[top].next_dep += 1;
        let dep = &module.dependencies[dep_index];

        let Some(dep_module) = lookup_enabled(registry, dep) else {
            // Keep walking; all missing names for this module are reported
            // together once its dependency list is exhausted.
            stack[top].missing.push(dep.clone());
            continue;
        };

        match states.get(dep.as_str()).copied() {
            Some(VisitState::Done) => {}
            Some(VisitState::InProgress) => {
                // The dependency is an ancestor in the current walk.
                return Err(DomainError::CycleDetected {
                    module_a: module.name.clone(),
                    module_b: dep.clone(),
                });
            }
            None => {
                states.insert(dep_module.name.as_str(), VisitState::InProgress);
                stack.push(Frame::new(dep_module));
            }
        }
    }

    Ok(())
}
