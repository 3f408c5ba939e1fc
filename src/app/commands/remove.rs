//! Delete a tenant from the store.

use crate::app::AppContext;
use crate::app::commands::{existing_tenant_id, load_session, persist};
use crate::domain::AppError;
use crate::ports::StoreFilesystem;

/// Remove the tenant and save. Returns the normalized ID that was removed.
///
/// Removing the last tenant fails: an empty store does not validate.
pub fn execute<F: StoreFilesystem>(ctx: &AppContext<F>, id: &str) -> Result<String, AppError> {
    let (mut tenants, plugins) = load_session(ctx)?;
    let slug = existing_tenant_id(&tenants, id)?;

    tenants.remove(&slug);
    persist(ctx, &tenants, &plugins)?;
    tracing::info!(tenant = %slug, "removed tenant");
    Ok(slug)
}
