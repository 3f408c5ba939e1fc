//! Summaries of the tenants in the store.

use crate::app::AppContext;
use crate::app::store;
use crate::domain::AppError;
use crate::ports::StoreFilesystem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantSummary {
    pub id: String,
    pub app_name: String,
    pub package_name: String,
    pub company_initial: String,
    /// Layout name as written in the store, `member` when unset.
    pub home_variant: String,
    pub features: usize,
}

pub fn execute<F: StoreFilesystem>(ctx: &AppContext<F>) -> Result<Vec<TenantSummary>, AppError> {
    let tenants = store::load_tenants(ctx.filesystem(), &ctx.paths().tenants)?;

    Ok(tenants
        .iter()
        .map(|(id, record)| TenantSummary {
            id: id.to_string(),
            app_name: record.app_name().unwrap_or_default().to_string(),
            package_name: record.package_name().unwrap_or_default().to_string(),
            company_initial: record.effective_company_initial(),
            home_variant: record.home_variant_name(),
            features: record.features().len(),
        })
        .collect())
}
