//! In-memory module source for testing.

use std::sync::{Arc, RwLock};

use modulith_core::{
    application::ports::ModuleSource,
    domain::ModuleDescriptor,
    error::ModulithResult,
};

/// In-memory module source for testing.
///
/// Reports its descriptors in insertion order, mirroring how the filesystem
/// source reports directories in name order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryModuleSource {
    inner: Arc<RwLock<Vec<ModuleDescriptor>>>,
}

impl InMemoryModuleSource {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source pre-populated with `modules`.
    pub fn with_modules(modules: Vec<ModuleDescriptor>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(modules)),
        }
    }

    /// Append a module (testing helper).
    pub fn push(&self, module: ModuleDescriptor) {
        if let Ok(mut inner) = self.inner.write() {
            inner.push(module);
        }
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.clear();
        }
    }
}

impl ModuleSource for InMemoryModuleSource {
    fn discover(&self) -> ModulithResult<Vec<ModuleDescriptor>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| modulith_core::error::ModulithError::Internal {
                message: "module source store poisoned".into(),
            })?;
        Ok(inner.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_modules_in_insertion_order() {
        let source = InMemoryModuleSource::new();
        source.push(ModuleDescriptor::builder("b").build().unwrap());
        source.push(ModuleDescriptor::builder("a").build().unwrap());

        let names: Vec<String> = source
            .discover()
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
