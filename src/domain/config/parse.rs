//! Pure parse/validate for tool configuration (`tenant-manager.toml`).

use crate::domain::AppError;

use super::ManagerConfig;

/// Parse and validate tool configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ManagerConfig, AppError> {
    let config: ManagerConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
