use std::path::{Path, PathBuf};

/// Default tenant store file name.
pub const DEFAULT_TENANTS_FILE: &str = "tenants.json";

/// Default plugin catalog file name.
pub const DEFAULT_PLUGINS_FILE: &str = "plugins.json";

/// Default tool configuration file name.
pub const CONFIG_FILE: &str = "tenant-manager.toml";

/// `<root>/tenant-manager.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resolve a configured file path against the directory holding the config file.
pub fn resolve(base: Option<&Path>, path: &Path) -> PathBuf {
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}
