//! In-memory change-file lister for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use modulith_core::{application::ports::ChangeLister, error::ModulithResult};

/// In-memory change-file map for testing.
///
/// Paths with no entry behave like missing directories: empty list.
#[derive(Debug, Clone, Default)]
pub struct MemoryChangeLister {
    inner: Arc<RwLock<HashMap<PathBuf, Vec<String>>>>,
}

impl MemoryChangeLister {
    /// Create a new empty lister.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the files visible under `dir` (testing helper).
    ///
    /// Files are stored name-sorted, matching the port contract.
    pub fn set_files<I, S>(&self, dir: impl Into<PathBuf>, files: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut files: Vec<String> = files.into_iter().map(Into::into).collect();
        files.sort();

        if let Ok(mut inner) = self.inner.write() {
            inner.insert(dir.into(), files);
        }
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.clear();
        }
    }
}

impl ChangeLister for MemoryChangeLister {
    fn list_sorted(&self, dir: &Path) -> ModulithResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| modulith_core::error::ModulithError::Internal {
                message: "change lister map poisoned".into(),
            })?;
        Ok(inner.get(dir).cloned().unwrap_or_default())
    }
}
