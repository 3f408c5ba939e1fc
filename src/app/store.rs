//! Loading and saving the tenant store and plugin catalog.

use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::{
    AppError, KeyRename, PluginCatalog, PluginDescriptor, TenantRecord, TenantStore,
    validate_all_tenants,
};
use crate::ports::StoreFilesystem;

/// Load the tenant store, normalizing every key and rewriting `id` to match.
pub fn load_tenants<F: StoreFilesystem>(fs: &F, path: &Path) -> Result<TenantStore, AppError> {
    load_tenants_with_renames(fs, path).map(|(store, _)| store)
}

/// Like [`load_tenants`], also reporting which keys normalization rewrote.
pub fn load_tenants_with_renames<F: StoreFilesystem>(
    fs: &F,
    path: &Path,
) -> Result<(TenantStore, Vec<KeyRename>), AppError> {
    let object = read_json_object(fs, path)?;
    let entries = object
        .into_iter()
        .map(|(key, value)| {
            let record = parse_tenant(path, &key, value)?;
            Ok((key, record))
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let (store, renames) = TenantStore::from_entries(entries);
    for rename in &renames {
        tracing::debug!(from = %rename.from, to = %rename.to, "normalized tenant key");
    }
    tracing::debug!(path = %path.display(), tenants = store.len(), "loaded tenant store");
    Ok((store, renames))
}

/// Load the plugin catalog. Plugin IDs are taken as-is.
pub fn load_plugins<F: StoreFilesystem>(fs: &F, path: &Path) -> Result<PluginCatalog, AppError> {
    let object = read_json_object(fs, path)?;
    let catalog: PluginCatalog =
        object.into_iter().map(|(key, value)| (key, PluginDescriptor(value))).collect();

    tracing::debug!(path = %path.display(), plugins = catalog.len(), "loaded plugin catalog");
    Ok(catalog)
}

/// Normalize, validate and write the tenant store.
///
/// Nothing is written unless every tenant validates. Returns the normalized
/// store that was persisted.
pub fn save_tenants<F: StoreFilesystem>(
    fs: &F,
    store: &TenantStore,
    plugins: &PluginCatalog,
    path: &Path,
) -> Result<TenantStore, AppError> {
    let normalized = store.normalized();

    if let Err(err) = validate_all_tenants(&normalized, plugins) {
        tracing::warn!(path = %path.display(), error = %err, "refusing to save invalid tenant store");
        return Err(err);
    }

    let content = render_tenants(&normalized)?;
    fs.write_file(path, &content)?;
    tracing::debug!(path = %path.display(), tenants = normalized.len(), "saved tenant store");
    Ok(normalized)
}

/// Serialized form of the store: 2-space indented JSON, non-ASCII kept literal.
pub fn render_tenants(store: &TenantStore) -> Result<String, AppError> {
    serde_json::to_string_pretty(store)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize tenants: {}", e)))
}

fn read_json_object<F: StoreFilesystem>(fs: &F, path: &Path) -> Result<Map<String, Value>, AppError> {
    let content = fs.read_file(path)?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|e| AppError::Format(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    match value {
        Value::Object(object) => Ok(object),
        _ => Err(AppError::Format(format!(
            "Invalid format: {} must contain a JSON object",
            path.display()
        ))),
    }
}

/// Any JSON object is a loadable record; field types are left to validation.
fn parse_tenant(path: &Path, key: &str, value: Value) -> Result<TenantRecord, AppError> {
    if !value.is_object() {
        return Err(AppError::Format(format!(
            "Invalid tenant '{}' in {}: expected a JSON object",
            key,
            path.display()
        )));
    }
    serde_json::from_value(value).map_err(|e| {
        AppError::Format(format!("Invalid tenant '{}' in {}: {}", key, path.display(), e))
    })
}
