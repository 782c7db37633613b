//! Shared error type across fastzero crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// No record for the requested id.
    NotFound,
    /// Create rejected on a unique field.
    Duplicate,
    /// Update rejected on a unique field.
    Conflict,
    /// Request failed schema validation.
    Unprocessable,
    /// Invalid configuration.
    BadConfig,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// Label attached to rejection and failure logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Duplicate => "DUPLICATE",
            ClientCode::Conflict => "CONFLICT",
            ClientCode::Unprocessable => "UNPROCESSABLE",
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FastZeroError>;

/// Unified error type used by core and api.
///
/// The `Display` output of the user-facing variants is the exact `detail`
/// string returned to HTTP clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FastZeroError {
    #[error("User not found")]
    NotFound,
    #[error("Username already exists")]
    DuplicateUsername,
    #[error("Email already exists")]
    DuplicateEmail,
    #[error("Username or Email already exists")]
    UsernameOrEmailConflict,
    #[error("{0}")]
    Invalid(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl FastZeroError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            FastZeroError::NotFound => ClientCode::NotFound,
            FastZeroError::DuplicateUsername | FastZeroError::DuplicateEmail => {
                ClientCode::Duplicate
            }
            FastZeroError::UsernameOrEmailConflict => ClientCode::Conflict,
            FastZeroError::Invalid(_) => ClientCode::Unprocessable,
            FastZeroError::Config(_) | FastZeroError::UnsupportedVersion => ClientCode::BadConfig,
            FastZeroError::Internal(_) => ClientCode::Internal,
        }
    }
}
