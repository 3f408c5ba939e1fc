//! Plugin catalog listing.

use crate::app::AppContext;
use crate::app::store;
use crate::domain::AppError;
use crate::ports::StoreFilesystem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSummary {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
}

/// Catalog entries sorted by plugin ID.
pub fn execute<F: StoreFilesystem>(ctx: &AppContext<F>) -> Result<Vec<PluginSummary>, AppError> {
    let catalog = store::load_plugins(ctx.filesystem(), &ctx.paths().plugins)?;

    Ok(catalog
        .sorted()
        .into_iter()
        .map(|(id, descriptor)| PluginSummary {
            id: id.to_string(),
            label: catalog.label(id).to_string(),
            description: descriptor.description().filter(|d| !d.is_empty()).map(str::to_string),
        })
        .collect())
}
