//! `StoreFilesystem` implementation backed by `std::fs`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::StoreFilesystem;

/// Local disk adapter. Paths are used as given (relative to the process CWD).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl StoreFilesystem for LocalFilesystem {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => AppError::NotFound(path.display().to_string()),
            _ => AppError::Read { path: path.display().to_string(), source },
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|source| match source.kind() {
            ErrorKind::PermissionDenied => AppError::Permission(path.display().to_string()),
            _ => AppError::Write { path: path.display().to_string(), source },
        })
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
