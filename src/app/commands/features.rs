//! Enable or disable plugins on a tenant.

use crate::app::AppContext;
use crate::app::commands::{existing_tenant_id, load_session, persist};
use crate::domain::AppError;
use crate::ports::StoreFilesystem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureChange {
    pub tenant: String,
    /// Plugins whose state changed.
    pub changed: Vec<String>,
    /// Plugins already in the requested state.
    pub unchanged: Vec<String>,
}

pub fn enable<F: StoreFilesystem>(
    ctx: &AppContext<F>,
    id: &str,
    plugin_ids: &[String],
) -> Result<FeatureChange, AppError> {
    apply(ctx, id, plugin_ids, true)
}

pub fn disable<F: StoreFilesystem>(
    ctx: &AppContext<F>,
    id: &str,
    plugin_ids: &[String],
) -> Result<FeatureChange, AppError> {
    apply(ctx, id, plugin_ids, false)
}

fn apply<F: StoreFilesystem>(
    ctx: &AppContext<F>,
    id: &str,
    plugin_ids: &[String],
    enable: bool,
) -> Result<FeatureChange, AppError> {
    let (mut tenants, plugins) = load_session(ctx)?;
    let slug = existing_tenant_id(&tenants, id)?;
    let record = tenants.get_mut(&slug).ok_or_else(|| AppError::TenantNotFound(id.to_string()))?;

    let mut change = FeatureChange { tenant: slug.clone(), ..FeatureChange::default() };
    for plugin_id in plugin_ids {
        let toggled = if enable {
            record.enable_feature(plugin_id).map_err(|e| AppError::for_tenant(&slug, e))?
        } else {
            record.disable_feature(plugin_id)
        };
        if toggled {
            change.changed.push(plugin_id.clone());
        } else {
            change.unchanged.push(plugin_id.clone());
        }
    }

    if !change.changed.is_empty() {
        persist(ctx, &tenants, &plugins)?;
        tracing::info!(tenant = %slug, enable, plugins = ?change.changed, "updated features");
    }
    Ok(change)
}
