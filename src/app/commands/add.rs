//! Register a new tenant.

use serde_json::Value;

use crate::app::AppContext;
use crate::app::commands::persist;
use crate::app::store;
use crate::domain::{AppError, HomeVariant, TenantRecord, TenantStore, normalize_tenant_id};
use crate::ports::StoreFilesystem;

/// Field values for a new tenant, as collected by the caller.
#[derive(Debug, Clone, Default)]
pub struct NewTenant {
    pub id: String,
    pub app_name: String,
    pub package_name: String,
    pub company_initial: Option<String>,
    pub logo_path: Option<String>,
    pub home_variant: Option<HomeVariant>,
    pub features: Vec<String>,
}

impl NewTenant {
    fn into_record(self, slug: &str) -> Result<TenantRecord, AppError> {
        let mut record = TenantRecord::draft(slug);
        record.app_name = Some(Value::from(self.app_name));
        record.package_name = Some(Value::from(self.package_name));
        record.company_initial = self.company_initial.filter(|v| !v.is_empty()).map(Value::from);
        record.logo_path = self.logo_path.filter(|v| !v.is_empty()).map(Value::from);

        if let Some(variant) = self.home_variant {
            record.set_home_variant(variant);
            if !variant.uses_tabs() {
                record.home_tabs = None;
            }
        }
        for feature in &self.features {
            record.enable_feature(feature)?;
        }
        Ok(record)
    }
}

/// Add a tenant under its normalized ID and save the store.
///
/// A missing tenants file is treated as an empty store. Returns the ID used.
pub fn execute<F: StoreFilesystem>(ctx: &AppContext<F>, tenant: NewTenant) -> Result<String, AppError> {
    let plugins = store::load_plugins(ctx.filesystem(), &ctx.paths().plugins)?;
    let mut tenants = match store::load_tenants(ctx.filesystem(), &ctx.paths().tenants) {
        Ok(tenants) => tenants,
        Err(AppError::NotFound(path)) => {
            tracing::debug!(%path, "no tenant store yet, starting empty");
            TenantStore::new()
        }
        Err(err) => return Err(err),
    };

    let slug = normalize_tenant_id(&tenant.id);
    if slug.is_empty() {
        return Err(AppError::field("id", "Tenant ID is required"));
    }
    if tenants.contains(&slug) {
        return Err(AppError::TenantExists(slug));
    }

    tenants.insert(&slug, tenant.into_record(&slug)?);
    persist(ctx, &tenants, &plugins)?;
    tracing::info!(tenant = %slug, "added tenant");
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::test_support::context;
    use crate::testing::{PLUGINS_JSON, TestFiles, seeded_files};

    fn new_tenant(id: &str) -> NewTenant {
        NewTenant {
            id: id.to_string(),
            app_name: "Initech".to_string(),
            package_name: "com.initech.app".to_string(),
            ..NewTenant::default()
        }
    }

    #[test]
    fn add_normalizes_id_and_appends() {
        let files = seeded_files();
        let ctx = context(&files);

        let slug = execute(
            &ctx,
            NewTenant { features: vec!["booking".to_string()], ..new_tenant("Init Tech") },
        )
        .unwrap();
        assert_eq!(slug, "init-tech");

        let tenants = store::load_tenants(ctx.filesystem(), &ctx.paths().tenants).unwrap();
        assert_eq!(tenants.ids(), vec!["acme", "globex", "init-tech"]);
        let record = tenants.get("init-tech").unwrap();
        assert_eq!(record.features(), ["booking"]);
        assert_eq!(record.home_variant(), Some(HomeVariant::Member));
        assert_eq!(record.home_tabs, Some(Value::Array(Vec::new())));
    }

    #[test]
    fn add_creates_store_when_missing() {
        let files = TestFiles::new();
        files.add("plugins.json", PLUGINS_JSON);

        execute(&context(&files), new_tenant("initech")).unwrap();
        assert!(files.get("tenants.json").unwrap().contains("\"initech\": {"));
    }

    #[test]
    fn add_rejects_existing_tenant() {
        let err = execute(&context(&seeded_files()), new_tenant("ACME")).unwrap_err();
        assert!(matches!(err, AppError::TenantExists(ref id) if id == "acme"));
    }

    #[test]
    fn add_rejects_unknown_feature_without_writing() {
        let files = seeded_files();
        let before = files.get("tenants.json").unwrap();

        let err = execute(
            &context(&files),
            NewTenant { features: vec!["chat".to_string()], ..new_tenant("initech") },
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Tenant 'initech': enabledFeatures contains unknown plugin 'chat'"
        );
        assert_eq!(files.get("tenants.json").unwrap(), before);
    }

    #[test]
    fn add_drops_tabs_for_non_member_variant() {
        let files = seeded_files();
        let ctx = context(&files);
        execute(
            &ctx,
            NewTenant { home_variant: Some(HomeVariant::Simple), ..new_tenant("initech") },
        )
        .unwrap();

        let tenants = store::load_tenants(ctx.filesystem(), &ctx.paths().tenants).unwrap();
        assert_eq!(tenants.get("initech").unwrap().home_tabs, None);
    }

    #[test]
    fn add_rejects_blank_id() {
        let err = execute(&context(&seeded_files()), new_tenant("  ")).unwrap_err();
        assert_eq!(err.field_name(), Some("id"));
    }
}
