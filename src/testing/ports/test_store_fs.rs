//! Test double for `StoreFilesystem`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::StoreFilesystem;

use super::test_files::TestFiles;

/// In-memory implementation of `StoreFilesystem` for unit tests.
///
/// Paths registered with [`MockStoreFs::deny_writes`] fail like a read-only file.
#[derive(Clone, Debug, Default)]
pub struct MockStoreFs {
    files: TestFiles,
    read_only: HashSet<PathBuf>,
}

impl MockStoreFs {
    pub fn new(files: TestFiles) -> Self {
        Self { files, read_only: HashSet::new() }
    }

    pub fn deny_writes(mut self, path: &str) -> Self {
        self.read_only.insert(PathBuf::from(path));
        self
    }
}

impl StoreFilesystem for MockStoreFs {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.files
            .files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::NotFound(path.display().to_string()))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.read_only.contains(path) {
            return Err(AppError::Permission(path.display().to_string()));
        }
        self.files.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.files.lock().unwrap().contains_key(path)
    }
}
