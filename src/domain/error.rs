use std::io;

use thiserror::Error;

/// Library-wide error type for tenant store operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure that carries no path context.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Referenced file does not exist.
    #[error("File not found: {0}")]
    NotFound(String),

    /// File content is unparsable JSON or not the expected JSON shape.
    #[error("{0}")]
    Format(String),

    /// A single field failed its format contract.
    #[error("{message}")]
    FieldValidation { field: &'static str, message: String },

    /// A record refers to something that does not match (store key, plugin catalog).
    #[error("{0}")]
    CrossReference(String),

    /// Validation failure attributed to one tenant record.
    #[error("Tenant '{tenant}': {source}")]
    Tenant {
        tenant: String,
        #[source]
        source: Box<AppError>,
    },

    /// Store-level rule violation (e.g. an empty store).
    #[error("{0}")]
    Validation(String),

    /// Write denied by the filesystem.
    #[error("Permission denied: Cannot write to {0}")]
    Permission(String),

    /// Reading a file failed for a reason other than absence.
    #[error("Error reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Writing a file failed for a reason other than permissions.
    #[error("Error writing to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Refusing to overwrite an existing file.
    #[error("{0} already exists")]
    FileExists(String),

    /// Tenant lookup failed.
    #[error("Tenant '{0}' not found")]
    TenantNotFound(String),

    /// Tenant already present under the same normalized ID.
    #[error("Tenant '{0}' already exists")]
    TenantExists(String),

    /// Configuration issue.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Embedded asset missing or malformed.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn field<S: Into<String>>(field: &'static str, message: S) -> Self {
        AppError::FieldValidation { field, message: message.into() }
    }

    pub fn for_tenant<S: Into<String>>(tenant: S, source: AppError) -> Self {
        AppError::Tenant { tenant: tenant.into(), source: Box::new(source) }
    }

    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Config(message.into())
    }

    /// The innermost error, skipping tenant attribution.
    pub fn root(&self) -> &AppError {
        match self {
            AppError::Tenant { source, .. } => source.root(),
            other => other,
        }
    }

    /// Name of the offending field, when the failure is field-level.
    pub fn field_name(&self) -> Option<&'static str> {
        match self.root() {
            AppError::FieldValidation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers wanting a coarse classification.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Read { source, .. } | AppError::Write { source, .. } => source.kind(),
            AppError::Tenant { source, .. } => source.kind(),
            AppError::NotFound(_) | AppError::TenantNotFound(_) => io::ErrorKind::NotFound,
            AppError::Permission(_) => io::ErrorKind::PermissionDenied,
            AppError::FileExists(_) | AppError::TenantExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Format(_) | AppError::TomlParseError(_) => io::ErrorKind::InvalidData,
            AppError::FieldValidation { .. }
            | AppError::CrossReference(_)
            | AppError::Validation(_)
            | AppError::Config(_) => io::ErrorKind::InvalidInput,
            AppError::InternalError(_) => io::ErrorKind::Other,
        }
    }
}
