//! Validate the tenant store against the plugin catalog without writing.

use crate::app::AppContext;
use crate::app::commands::load_session;
use crate::domain::{AppError, collect_tenant_errors, validate_all_tenants};
use crate::ports::StoreFilesystem;

#[derive(Debug)]
pub struct CheckOutcome {
    pub tenants: usize,
    pub plugins: usize,
    pub errors: Vec<AppError>,
}

impl CheckOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Load both files and validate.
///
/// Load failures are returned as `Err`. Validation failures land in
/// `errors`: the first one only, or one per invalid tenant when `all` is set.
pub fn execute<F: StoreFilesystem>(ctx: &AppContext<F>, all: bool) -> Result<CheckOutcome, AppError> {
    let (tenants, plugins) = load_session(ctx)?;

    let errors = if all {
        collect_tenant_errors(&tenants, &plugins)
    } else {
        validate_all_tenants(&tenants, &plugins).err().into_iter().collect()
    };

    Ok(CheckOutcome { tenants: tenants.len(), plugins: plugins.len(), errors })
}
