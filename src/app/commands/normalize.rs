//! Rewrite the tenant store in normalized, validated form.

use crate::app::AppContext;
use crate::app::commands::persist;
use crate::app::store;
use crate::domain::{AppError, KeyRename};
use crate::ports::StoreFilesystem;

#[derive(Debug, Clone)]
pub struct NormalizeOutcome {
    pub tenants: usize,
    pub renamed: Vec<KeyRename>,
}

pub fn execute<F: StoreFilesystem>(ctx: &AppContext<F>) -> Result<NormalizeOutcome, AppError> {
    let plugins = store::load_plugins(ctx.filesystem(), &ctx.paths().plugins)?;
    let (tenants, renamed) =
        store::load_tenants_with_renames(ctx.filesystem(), &ctx.paths().tenants)?;

    let saved = persist(ctx, &tenants, &plugins)?;
    Ok(NormalizeOutcome { tenants: saved.len(), renamed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::test_support::context;
    use crate::testing::{PLUGINS_JSON, TestFiles};

    #[test]
    fn normalize_rewrites_keys_and_drops_legacy_name() {
        let files = TestFiles::new();
        files.add("plugins.json", PLUGINS_JSON);
        files.add(
            "tenants.json",
            r#"{"Big_Co": {"id": "Big_Co", "name": "Big", "packageName": "com.big.app", "enabledFeatures": []}}"#,
        );

        let outcome = execute(&context(&files)).unwrap();
        assert_eq!(outcome.tenants, 1);
        assert_eq!(outcome.renamed[0].to, "big-co");

        let written = files.get("tenants.json").unwrap();
        assert!(written.contains("\"big-co\": {"));
        assert!(written.contains("\"appName\": \"Big\""));
        assert!(!written.contains("\"name\""));
    }

    #[test]
    fn normalize_leaves_invalid_store_untouched() {
        let files = TestFiles::new();
        let original = r#"{"Big Co": {"id": "x", "enabledFeatures": []}}"#;
        files.add("plugins.json", PLUGINS_JSON);
        files.add("tenants.json", original);

        let err = execute(&context(&files)).unwrap_err();
        assert_eq!(err.to_string(), "Tenant 'big-co': appName is required");
        assert_eq!(files.get("tenants.json").unwrap(), original);
    }
}
