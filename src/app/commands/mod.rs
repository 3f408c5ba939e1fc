pub mod add;
pub mod check;
pub mod features;
pub mod init;
pub mod list;
pub mod normalize;
pub mod plugins;
pub mod remove;
pub mod tabs;

use crate::app::AppContext;
use crate::app::store;
use crate::domain::{AppError, PluginCatalog, TenantStore, normalize_tenant_id};
use crate::ports::StoreFilesystem;

/// Load both files; either failing is fatal.
pub(crate) fn load_session<F: StoreFilesystem>(
    ctx: &AppContext<F>,
) -> Result<(TenantStore, PluginCatalog), AppError> {
    let plugins = store::load_plugins(ctx.filesystem(), &ctx.paths().plugins)?;
    let tenants = store::load_tenants(ctx.filesystem(), &ctx.paths().tenants)?;
    Ok((tenants, plugins))
}

/// Normalize a user-supplied tenant ID and require it to be present in the store.
pub(crate) fn existing_tenant_id(store: &TenantStore, id: &str) -> Result<String, AppError> {
    let slug = normalize_tenant_id(id);
    if !store.contains(&slug) {
        return Err(AppError::TenantNotFound(id.to_string()));
    }
    Ok(slug)
}

/// Persist the store through the validating save path.
pub(crate) fn persist<F: StoreFilesystem>(
    ctx: &AppContext<F>,
    tenants: &TenantStore,
    plugins: &PluginCatalog,
) -> Result<TenantStore, AppError> {
    store::save_tenants(ctx.filesystem(), tenants, plugins, &ctx.paths().tenants)
}
