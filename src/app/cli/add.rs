use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::app::api::{self, NewTenant};
use crate::app::config::StorePaths;
use crate::domain::{AppError, HomeVariant, validate_package_name};

pub(super) struct AddArgs {
    pub id: String,
    pub app_name: Option<String>,
    pub package_name: Option<String>,
    pub company_initial: Option<String>,
    pub logo_path: Option<String>,
    pub home_variant: Option<HomeVariant>,
    pub features: Vec<String>,
}

pub(super) fn run_add(paths: StorePaths, args: AddArgs) -> Result<(), AppError> {
    let Some(tenant) = resolve_add_inputs(args)? else {
        return Ok(());
    };

    let slug = api::add_tenant(paths, tenant)?;
    println!("✅ Added tenant '{}'", slug);
    Ok(())
}

fn resolve_add_inputs(args: AddArgs) -> Result<Option<NewTenant>, AppError> {
    let app_name = match args.app_name {
        Some(value) => value,
        None => match prompt_text("App name", None)? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let package_name = match args.package_name {
        Some(value) => value,
        None => match prompt_text("Package name", Some(validate_package_name))? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    Ok(Some(NewTenant {
        id: args.id,
        app_name,
        package_name,
        company_initial: args.company_initial,
        logo_path: args.logo_path,
        home_variant: args.home_variant,
        features: args.features,
    }))
}

type FieldCheck = fn(&str) -> Result<(), AppError>;

fn prompt_text(label: &str, check: Option<FieldCheck>) -> Result<Option<String>, AppError> {
    let mut input = Input::<String>::new().with_prompt(label);
    if let Some(check) = check {
        input = input.validate_with(move |value: &String| -> Result<(), String> {
            check(value).map_err(|err| err.to_string())
        });
    }

    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!(
            "Failed to read {}: {}",
            label.to_lowercase(),
            err
        ))),
    }
}
