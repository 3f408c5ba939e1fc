//! Write starter `tenants.json` / `plugins.json` files.

use std::path::PathBuf;

use crate::adapters::assets::{SCAFFOLD_PLUGINS, SCAFFOLD_TENANTS, scaffold_file_content};
use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::StoreFilesystem;

#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub created: Vec<PathBuf>,
}

/// Refuses to touch an existing store or catalog.
pub fn execute<F: StoreFilesystem>(ctx: &AppContext<F>) -> Result<InitOutcome, AppError> {
    let targets = [
        (ctx.paths().plugins.clone(), SCAFFOLD_PLUGINS),
        (ctx.paths().tenants.clone(), SCAFFOLD_TENANTS),
    ];

    if let Some((existing, _)) = targets.iter().find(|(path, _)| ctx.filesystem().file_exists(path))
    {
        return Err(AppError::FileExists(existing.display().to_string()));
    }

    let mut created = Vec::new();
    for (path, asset) in targets {
        ctx.filesystem().write_file(&path, scaffold_file_content(asset)?)?;
        tracing::debug!(path = %path.display(), "wrote scaffold file");
        created.push(path);
    }

    Ok(InitOutcome { created })
}
