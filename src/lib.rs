//! tenant-manager: validate and maintain a multi-tenant `tenants.json` store
//! against its `plugins.json` catalog.
//!
//! The functions at the crate root work on the local filesystem. The same
//! operations are available over any [`ports::StoreFilesystem`] through
//! [`app::store`].

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::LocalFilesystem;

pub use domain::{
    AppError, HomeTab, HomeVariant, KeyRename, PluginCatalog, PluginDescriptor, TenantRecord,
    TenantStore, collect_tenant_errors, normalize_tenant_id, parse_home_tabs,
    validate_all_tenants, validate_company_initial, validate_logo_path, validate_package_name,
    validate_tenant,
};

/// Load `tenants.json`. Keys are normalized and each record's `id` rewritten to match.
pub fn load_tenants(path: impl AsRef<Path>) -> Result<TenantStore, AppError> {
    app::store::load_tenants(&LocalFilesystem, path.as_ref())
}

/// Load `plugins.json`.
pub fn load_plugins(path: impl AsRef<Path>) -> Result<PluginCatalog, AppError> {
    app::store::load_plugins(&LocalFilesystem, path.as_ref())
}

/// Normalize, validate and write the tenant store to `path`.
///
/// The file is left untouched when any tenant fails validation.
pub fn save_tenants(
    store: &TenantStore,
    plugins: &PluginCatalog,
    path: impl AsRef<Path>,
) -> Result<TenantStore, AppError> {
    app::store::save_tenants(&LocalFilesystem, store, plugins, path.as_ref())
}

/// Plugin IDs in catalog order.
pub fn get_plugin_ids(plugins: &PluginCatalog) -> Vec<String> {
    plugins.ids()
}
