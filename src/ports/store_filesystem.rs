//! File I/O used by the tenant store and plugin catalog.
//!
//! This port owns no JSON or tenant semantics; those belong to the domain and
//! to the store service in `app::store`.

use std::path::Path;

use crate::domain::AppError;

/// Port for whole-file reads and writes.
///
/// Implementations map failures onto the store error taxonomy:
/// a missing file on read is `AppError::NotFound`, a denied write is
/// `AppError::Permission`, anything else carries the path in
/// `AppError::Read` / `AppError::Write`.
pub trait StoreFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Overwrite a file with UTF-8 content. Parent directories are not created.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &Path) -> bool;
}
