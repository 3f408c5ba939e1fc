use dialoguer::Confirm;

use crate::app::api;
use crate::app::config::StorePaths;
use crate::domain::{AppError, normalize_tenant_id};

pub(super) fn run_remove(paths: StorePaths, id: &str, yes: bool) -> Result<(), AppError> {
    if !yes && !confirm_removal(id)? {
        println!("Cancelled");
        return Ok(());
    }

    let slug = api::remove_tenant(paths, id)?;
    println!("✅ Removed tenant '{}'", slug);
    Ok(())
}

fn confirm_removal(id: &str) -> Result<bool, AppError> {
    let answer = Confirm::new()
        .with_prompt(format!("Remove tenant '{}'?", normalize_tenant_id(id)))
        .default(false)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to confirm removal: {}", err)))?;

    Ok(answer.unwrap_or(false))
}
