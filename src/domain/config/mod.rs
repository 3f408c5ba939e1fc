pub mod parse;
pub mod paths;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

pub use parse::parse_config_content;

/// Tool configuration (`tenant-manager.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManagerConfig {
    /// Store file locations.
    #[serde(default)]
    pub files: FilesConfig,
}

impl ManagerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.files.validate()
    }
}

/// Locations of the tenant store and plugin catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilesConfig {
    /// Tenant store file.
    #[serde(default = "default_tenants")]
    pub tenants: PathBuf,
    /// Plugin catalog file.
    #[serde(default = "default_plugins")]
    pub plugins: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self { tenants: default_tenants(), plugins: default_plugins() }
    }
}

impl FilesConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.tenants.as_os_str().is_empty() {
            return Err(AppError::config_error("files.tenants must not be empty"));
        }
        if self.plugins.as_os_str().is_empty() {
            return Err(AppError::config_error("files.plugins must not be empty"));
        }
        Ok(())
    }
}

fn default_tenants() -> PathBuf {
    PathBuf::from(paths::DEFAULT_TENANTS_FILE)
}

fn default_plugins() -> PathBuf {
    PathBuf::from(paths::DEFAULT_PLUGINS_FILE)
}
