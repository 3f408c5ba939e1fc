//! Tenant ID slugs.

/// Normalize a tenant ID to its lowercase, dash-separated slug.
///
/// - Lowercases the input
/// - Replaces spaces and underscores with dashes
/// - Collapses runs of dashes into one
/// - Strips leading and trailing dashes
///
/// Total and idempotent: `normalize_tenant_id(normalize_tenant_id(x)) == normalize_tenant_id(x)`.
pub fn normalize_tenant_id(id: &str) -> String {
    let mut slug = String::with_capacity(id.len());
    for c in id.to_lowercase().chars() {
        let c = if c == ' ' || c == '_' { '-' } else { c };
        if c == '-' && (slug.is_empty() || slug.ends_with('-')) {
            continue;
        }
        slug.push(c);
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Company initial derived from a tenant ID when the record leaves it unset.
pub fn derive_company_initial(tenant_id: &str) -> String {
    tenant_id.chars().filter(|c| *c != '-' && *c != '_').collect::<String>().to_uppercase()
}
