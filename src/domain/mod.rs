pub mod config;
pub mod error;
pub mod plugin;
pub mod store;
pub mod tenant;
pub mod tenant_id;
pub mod tenant_validation;
pub mod validation;

pub use config::{FilesConfig, ManagerConfig};
pub use error::AppError;
pub use plugin::{PluginCatalog, PluginDescriptor};
pub use store::{KeyRename, TenantStore};
pub use tenant::{HomeTab, HomeVariant, TenantRecord, parse_home_tabs};
pub use tenant_id::{derive_company_initial, normalize_tenant_id};
pub use tenant_validation::{collect_tenant_errors, validate_all_tenants, validate_tenant};
pub use validation::{validate_company_initial, validate_logo_path, validate_package_name};
