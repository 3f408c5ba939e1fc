//! Field-level format checks for tenant records.
//!
//! Every validator is pure and reports failure only through the returned
//! error. Messages restate the expected format and echo the offending input.

use super::AppError;

const COMPANY_INITIAL_MAX_LEN: usize = 20;
const PACKAGE_NAME_MAX_LEN: usize = 100;
const LOGO_URL_MAX_LEN: usize = 500;
const LOGO_PATH_MAX_LEN: usize = 200;
const LOGO_PATH_INVALID_CHARS: [char; 6] = ['<', '>', '|', '?', '*', '"'];

const COMPANY_INITIAL_FORMAT: &str = "Uppercase alphanumeric string (e.g., 'TKIFTP', 'MB', 'P2L')";
const PACKAGE_NAME_FORMAT: &str = "com.company.app (reverse domain notation)";
const LOGO_PATH_FORMAT: &str =
    "relative path (e.g., assets/logo.png) or URL (e.g., https://example.com/logo.png)";

/// Error for a field holding a JSON value other than a string.
pub fn not_a_string(field: &'static str) -> AppError {
    let message = match field {
        "companyInitial" => {
            format!("Company initial must be a string. Expected: {}", COMPANY_INITIAL_FORMAT)
        }
        "packageName" => {
            format!("Package name must be a string. Expected format: {}", PACKAGE_NAME_FORMAT)
        }
        "logoPath" => format!("Logo path must be a string. Expected: {}", LOGO_PATH_FORMAT),
        other => format!("{} must be a string", other),
    };
    AppError::field(field, message)
}

/// Validates a `companyInitial` value.
///
/// Checks:
/// - Non-empty after trimming
/// - At most 20 characters
/// - Alphanumeric characters and underscores only
/// - Starts with a letter
pub fn validate_company_initial(value: &str) -> Result<(), AppError> {
    let field = "companyInitial";
    if value.is_empty() {
        return Err(AppError::field(
            field,
            format!("Company initial is required. Expected: {}", COMPANY_INITIAL_FORMAT),
        ));
    }

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::field(
            field,
            format!("Company initial cannot be empty. Expected: {}", COMPANY_INITIAL_FORMAT),
        ));
    }

    let len = trimmed.chars().count();
    if len > COMPANY_INITIAL_MAX_LEN {
        return Err(AppError::field(
            field,
            format!(
                "Company initial is too long ({} characters). Maximum length is {} characters. Expected format: {}. Got: '{}'",
                len, COMPANY_INITIAL_MAX_LEN, COMPANY_INITIAL_FORMAT, trimmed
            ),
        ));
    }

    if !trimmed.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(AppError::field(
            field,
            format!(
                "Company initial contains invalid characters. Only uppercase letters, numbers, and underscores are allowed. Expected format: {}. Got: '{}'",
                COMPANY_INITIAL_FORMAT, trimmed
            ),
        ));
    }

    if !trimmed.chars().next().is_some_and(char::is_alphabetic) {
        return Err(AppError::field(
            field,
            format!(
                "Company initial must start with a letter. Expected format: Uppercase alphanumeric string starting with a letter (e.g., 'TKIFTP', 'MB', 'P2L'). Got: '{}'",
                trimmed
            ),
        ));
    }

    Ok(())
}

/// Validates a `packageName` in reverse domain notation.
///
/// Segments are checked left to right; the first offending segment is named
/// in the error.
pub fn validate_package_name(value: &str) -> Result<(), AppError> {
    let field = "packageName";
    if value.is_empty() {
        return Err(AppError::field(
            field,
            format!("Package name is required. Expected format: {}", PACKAGE_NAME_FORMAT),
        ));
    }

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::field(
            field,
            format!("Package name cannot be empty. Expected format: {}", PACKAGE_NAME_FORMAT),
        ));
    }

    let len = trimmed.chars().count();
    if len > PACKAGE_NAME_MAX_LEN {
        return Err(AppError::field(
            field,
            format!(
                "Package name is too long ({} characters). Maximum length is {} characters. Expected format: {}. Got: '{}'",
                len, PACKAGE_NAME_MAX_LEN, PACKAGE_NAME_FORMAT, trimmed
            ),
        ));
    }

    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() < 2 {
        return Err(AppError::field(
            field,
            format!(
                "Package name must contain at least 2 parts separated by dots. Expected format: {}. Got: '{}'",
                PACKAGE_NAME_FORMAT, trimmed
            ),
        ));
    }

    for part in parts {
        if part.is_empty() {
            return Err(AppError::field(
                field,
                format!(
                    "Package name contains empty part. Expected format: {}. Got: '{}'",
                    PACKAGE_NAME_FORMAT, trimmed
                ),
            ));
        }

        if !part.chars().next().is_some_and(char::is_alphabetic) {
            return Err(AppError::field(
                field,
                format!(
                    "Package name part '{}' must start with a letter. Expected format: {}. Got: '{}'",
                    part, PACKAGE_NAME_FORMAT, trimmed
                ),
            ));
        }

        if !part.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(AppError::field(
                field,
                format!(
                    "Package name part '{}' contains invalid characters. Only lowercase letters, numbers, and underscores are allowed. Expected format: {}. Got: '{}'",
                    part, PACKAGE_NAME_FORMAT, trimmed
                ),
            ));
        }

        if part.chars().any(char::is_uppercase) {
            return Err(AppError::field(
                field,
                format!(
                    "Package name part '{}' should be lowercase. Expected format: {}. Got: '{}'",
                    part, PACKAGE_NAME_FORMAT, trimmed
                ),
            ));
        }
    }

    Ok(())
}

/// Validates an optional `logoPath`. Empty (or whitespace-only) is accepted.
pub fn validate_logo_path(value: &str) -> Result<(), AppError> {
    let field = "logoPath";
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    let len = trimmed.chars().count();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        if len > LOGO_URL_MAX_LEN {
            return Err(AppError::field(
                field,
                format!(
                    "Logo URL is too long ({} characters). Maximum length is {} characters. Got: '{}'",
                    len, LOGO_URL_MAX_LEN, trimmed
                ),
            ));
        }
        return Ok(());
    }

    if let Some(invalid) = LOGO_PATH_INVALID_CHARS.iter().find(|c| trimmed.contains(**c)) {
        return Err(AppError::field(
            field,
            format!(
                "Logo path contains invalid character '{}'. Expected: {}. Got: '{}'",
                invalid, LOGO_PATH_FORMAT, trimmed
            ),
        ));
    }

    if is_absolute_path(trimmed) {
        return Err(AppError::field(
            field,
            format!(
                "Logo path should be a relative path, not an absolute path. Expected: {}. Got: '{}'",
                LOGO_PATH_FORMAT, trimmed
            ),
        ));
    }

    if len > LOGO_PATH_MAX_LEN {
        return Err(AppError::field(
            field,
            format!(
                "Logo path is too long ({} characters). Maximum length is {} characters. Got: '{}'",
                len, LOGO_PATH_MAX_LEN, trimmed
            ),
        ));
    }

    Ok(())
}

/// Unix root or a drive-letter style `X:` prefix.
fn is_absolute_path(path: &str) -> bool {
    path.starts_with('/') || path.chars().nth(1) == Some(':')
}
