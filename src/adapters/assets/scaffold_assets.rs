use include_dir::{Dir, include_dir};

use crate::domain::AppError;

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");

/// Starter tenant store written by `init`.
pub const SCAFFOLD_TENANTS: &str = "tenants.json";

/// Starter plugin catalog written by `init`.
pub const SCAFFOLD_PLUGINS: &str = "plugins.json";

pub fn scaffold_file_content(name: &str) -> Result<&'static str, AppError> {
    SCAFFOLD_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::InternalError(format!("Missing scaffold file: {}", name)))
}
