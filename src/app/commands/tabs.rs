//! Replace a member tenant's home tabs from a JSON array.

use crate::app::AppContext;
use crate::app::commands::{existing_tenant_id, load_session, persist};
use crate::domain::{AppError, HomeTab, parse_home_tabs};
use crate::ports::StoreFilesystem;

/// Parse `content` as a tab list and store it on the tenant. Returns the tab count.
pub fn execute<F: StoreFilesystem>(
    ctx: &AppContext<F>,
    id: &str,
    content: &str,
) -> Result<usize, AppError> {
    let tabs = parse_home_tabs(content)?;
    let (mut tenants, plugins) = load_session(ctx)?;
    let slug = existing_tenant_id(&tenants, id)?;
    let record = tenants.get_mut(&slug).ok_or_else(|| AppError::TenantNotFound(id.to_string()))?;

    if !record.home_variant().is_some_and(|v| v.uses_tabs()) {
        return Err(AppError::for_tenant(
            slug,
            AppError::field(
                "homeTabs",
                format!(
                    "Home tabs only apply to the member variant (current: {})",
                    record.home_variant_name()
                ),
            ),
        ));
    }

    let count = tabs.len();
    record.set_home_tabs(&tabs)?;
    persist(ctx, &tenants, &plugins)?;
    Ok(count)
}

/// Example tab list as pretty JSON, a starting point for a tabs file.
pub fn example() -> Result<String, AppError> {
    serde_json::to_string_pretty(&HomeTab::examples())
        .map_err(|e| AppError::InternalError(format!("Failed to serialize tabs: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::test_support::context;
    use crate::app::store;
    use crate::testing::seeded_files;

    #[test]
    fn tabs_are_stored_on_member_tenant() {
        let files = seeded_files();
        let ctx = context(&files);

        let count = execute(&ctx, "acme", r#"[{"id": "home", "label": "Home", "order": 0}]"#)
            .unwrap();
        assert_eq!(count, 1);

        let tenants = store::load_tenants(ctx.filesystem(), &ctx.paths().tenants).unwrap();
        let tabs = tenants.get("acme").unwrap().home_tabs.clone().unwrap();
        assert_eq!(tabs[0]["label"], "Home");
    }

    #[test]
    fn tabs_rejected_for_dashboard_tenant() {
        let err = execute(&context(&seeded_files()), "globex", "[]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Tenant 'globex': Home tabs only apply to the member variant (current: dashboard)"
        );
    }

    #[test]
    fn malformed_tabs_fail_before_loading() {
        let err = execute(&context(&seeded_files()), "acme", r#"{"id": "x"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Tabs must be an array");
    }

    #[test]
    fn example_parses_back_as_tabs() {
        let tabs = parse_home_tabs(&example().unwrap()).unwrap();
        assert_eq!(tabs, HomeTab::examples());
    }
}
