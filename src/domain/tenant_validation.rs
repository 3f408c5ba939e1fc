//! Record-level and store-level validation against the plugin catalog.

use serde_json::Value;

use super::AppError;
use super::plugin::PluginCatalog;
use super::store::TenantStore;
use super::tenant::{TenantRecord, optional_text};
use super::tenant_id::derive_company_initial;
use super::validation::{validate_company_initial, validate_logo_path, validate_package_name};

/// Validate one tenant record stored under `tenant_id`.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. `id` present
/// 2. `id` equals the store key
/// 3. `appName` non-blank
/// 4. `companyInitial` valid (derived from the key when unset)
/// 5. `packageName` present and valid
/// 6. `logoPath` valid
/// 7. `enabledFeatures` an array of strings, each known to the catalog
///
/// `homeVariant` and `homeTabs` are not checked.
pub fn validate_tenant(
    record: &TenantRecord,
    tenant_id: &str,
    plugins: &PluginCatalog,
) -> Result<(), AppError> {
    if record.id.is_empty() {
        return Err(AppError::field("id", "Tenant ID is required"));
    }

    if record.id != tenant_id {
        return Err(AppError::CrossReference(format!(
            "Tenant ID mismatch: key '{}' but id field is '{}'",
            tenant_id, record.id
        )));
    }

    let in_tenant = |err: AppError| AppError::for_tenant(tenant_id, err);

    let app_name = optional_text(&record.app_name, "appName").map_err(in_tenant)?;
    if app_name.is_none_or(|name| name.trim().is_empty()) {
        return Err(in_tenant(AppError::field("appName", "appName is required")));
    }

    match optional_text(&record.company_initial, "companyInitial").map_err(in_tenant)? {
        Some(initial) => validate_company_initial(initial).map_err(in_tenant)?,
        None => validate_company_initial(&derive_company_initial(tenant_id)).map_err(in_tenant)?,
    }

    let package_name = optional_text(&record.package_name, "packageName").map_err(in_tenant)?;
    let Some(package_name) = package_name else {
        return Err(in_tenant(AppError::field("packageName", "packageName is required")));
    };
    validate_package_name(package_name).map_err(in_tenant)?;

    let logo_path = optional_text(&record.logo_path, "logoPath").map_err(in_tenant)?;
    validate_logo_path(logo_path.unwrap_or_default()).map_err(in_tenant)?;

    let features = match &record.enabled_features {
        None => {
            return Err(in_tenant(AppError::field(
                "enabledFeatures",
                "enabledFeatures is required",
            )));
        }
        Some(Value::Array(features)) => features,
        Some(_) => {
            return Err(in_tenant(AppError::field(
                "enabledFeatures",
                "enabledFeatures must be an array",
            )));
        }
    };
    for feature in features {
        let Some(feature) = feature.as_str() else {
            return Err(in_tenant(AppError::field(
                "enabledFeatures",
                "enabledFeatures must contain only strings",
            )));
        };
        if !plugins.contains(feature) {
            return Err(in_tenant(AppError::CrossReference(format!(
                "enabledFeatures contains unknown plugin '{}'",
                feature
            ))));
        }
    }

    Ok(())
}

/// Validate every tenant in insertion order, reporting the first failure.
pub fn validate_all_tenants(store: &TenantStore, plugins: &PluginCatalog) -> Result<(), AppError> {
    if store.is_empty() {
        return Err(AppError::Validation("No tenants found".into()));
    }

    for (tenant_id, record) in store.iter() {
        validate_tenant(record, tenant_id, plugins)?;
    }

    Ok(())
}

/// First failure of every invalid tenant, in insertion order.
///
/// Diagnostic companion to [`validate_all_tenants`]; an empty store yields the
/// single "No tenants found" error.
pub fn collect_tenant_errors(store: &TenantStore, plugins: &PluginCatalog) -> Vec<AppError> {
    if store.is_empty() {
        return vec![AppError::Validation("No tenants found".into())];
    }

    store
        .iter()
        .filter_map(|(tenant_id, record)| validate_tenant(record, tenant_id, plugins).err())
        .collect()
}
