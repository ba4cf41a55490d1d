//! Local filesystem change-file lister using std::fs.

use std::{io, path::Path};

use modulith_core::{
    application::{ApplicationError, ports::ChangeLister},
    error::ModulithResult,
};

/// Production change-file lister implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalChangeLister;

impl LocalChangeLister {
    /// Create a new local change-file lister.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalChangeLister {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeLister for LocalChangeLister {
    fn list_sorted(&self, dir: &Path) -> ModulithResult<Vec<String>> {
        let read_dir = match std::fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            // Missing directory means "no change files", by contract.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(map_io_error(dir, e)),
        };

        let mut files = Vec::new();
        for entry_result in read_dir {
            let entry = entry_result.map_err(|e| map_io_error(dir, e))?;
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if !file_type.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue; // Editor droppings and the like.
            }
            files.push(name);
        }

        // Lexicographic order is the execution order: filenames are
        // timestamp-prefixed by contract.
        files.sort();
        Ok(files)
    }
}

fn map_io_error(path: &Path, e: io::Error) -> modulith_core::error::ModulithError {
    ApplicationError::ListingFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_directory_yields_empty_list() {
        let lister = LocalChangeLister::new();
        let files = lister.list_sorted(Path::new("/does/not/exist")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn files_come_back_name_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2024_02_01_add_sku.ts"), "").unwrap();
        fs::write(temp.path().join("2024_01_01_init.ts"), "").unwrap();

        let files = LocalChangeLister::new().list_sorted(temp.path()).unwrap();
        assert_eq!(files, vec!["2024_01_01_init.ts", "2024_02_01_add_sku.ts"]);
    }

    #[test]
    fn subdirectories_and_hidden_files_are_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("0001_init.sql"), "").unwrap();
        fs::write(temp.path().join(".gitkeep"), "").unwrap();
        fs::create_dir(temp.path().join("archive")).unwrap();

        let files = LocalChangeLister::new().list_sorted(temp.path()).unwrap();
        assert_eq!(files, vec!["0001_init.sql"]);
    }
}
