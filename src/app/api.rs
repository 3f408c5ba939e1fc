//! API facade for the command-line front end.
//!
//! Each function builds a context over the local filesystem and runs one command.

use std::path::Path;

use crate::adapters::LocalFilesystem;
use crate::app::config::{PathOverrides, StorePaths, resolve_store_paths};
use crate::app::{
    AppContext,
    commands::{add, check, features, init, list, normalize, plugins, remove, tabs},
};
use crate::ports::StoreFilesystem;

pub use crate::app::commands::add::NewTenant;
pub use crate::app::commands::check::CheckOutcome;
pub use crate::app::commands::features::FeatureChange;
pub use crate::app::commands::init::InitOutcome;
pub use crate::app::commands::list::TenantSummary;
pub use crate::app::commands::normalize::NormalizeOutcome;
pub use crate::app::commands::plugins::PluginSummary;
pub use crate::domain::AppError;

fn create_context(paths: StorePaths) -> AppContext<LocalFilesystem> {
    AppContext::new(LocalFilesystem, paths)
}

/// Resolve store paths relative to the current directory.
pub fn resolve_paths(overrides: &PathOverrides) -> Result<StorePaths, AppError> {
    resolve_paths_at(&std::env::current_dir()?, overrides)
}

/// Resolve store paths relative to `root`.
pub fn resolve_paths_at(root: &Path, overrides: &PathOverrides) -> Result<StorePaths, AppError> {
    resolve_store_paths(&LocalFilesystem, root, overrides)
}

pub fn init(paths: StorePaths) -> Result<InitOutcome, AppError> {
    init::execute(&create_context(paths))
}

pub fn check(paths: StorePaths, all: bool) -> Result<CheckOutcome, AppError> {
    check::execute(&create_context(paths), all)
}

pub fn list_tenants(paths: StorePaths) -> Result<Vec<TenantSummary>, AppError> {
    list::execute(&create_context(paths))
}

pub fn list_plugins(paths: StorePaths) -> Result<Vec<PluginSummary>, AppError> {
    plugins::execute(&create_context(paths))
}

pub fn normalize(paths: StorePaths) -> Result<NormalizeOutcome, AppError> {
    normalize::execute(&create_context(paths))
}

pub fn add_tenant(paths: StorePaths, tenant: NewTenant) -> Result<String, AppError> {
    add::execute(&create_context(paths), tenant)
}

pub fn remove_tenant(paths: StorePaths, id: &str) -> Result<String, AppError> {
    remove::execute(&create_context(paths), id)
}

pub fn enable_features(
    paths: StorePaths,
    id: &str,
    plugin_ids: &[String],
) -> Result<FeatureChange, AppError> {
    features::enable(&create_context(paths), id, plugin_ids)
}

pub fn disable_features(
    paths: StorePaths,
    id: &str,
    plugin_ids: &[String],
) -> Result<FeatureChange, AppError> {
    features::disable(&create_context(paths), id, plugin_ids)
}

/// Replace a tenant's home tabs with the JSON array in `tabs_file`.
pub fn set_home_tabs(paths: StorePaths, id: &str, tabs_file: &Path) -> Result<usize, AppError> {
    let content = LocalFilesystem.read_file(tabs_file)?;
    tabs::execute(&create_context(paths), id, &content)
}

/// Example home tab list as JSON.
pub fn example_tabs() -> Result<String, AppError> {
    tabs::example()
}
