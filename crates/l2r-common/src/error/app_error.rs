//! Application error types
//!
//! Unified error handling for everything outside the domain layer.

use l2r_core::{DomainError, ErrorKind};
use std::fmt;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Session persistence
    #[error("Session storage error: {0}")]
    Session(String),

    // Serialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// HTTP status code equivalent of this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Session(_) | Self::Serialization(_) | Self::Config(_) | Self::Internal(_) => 500,

            Self::Domain(e) => match e {
                DomainError::NotAuthenticated | DomainError::Unauthorized(_) => 401,
                DomainError::Server { status, .. } => *status,
                DomainError::Network(_) => 502,
                e if e.is_not_found() => 404,
                e if e.is_authorization() => 403,
                e if e.is_validation() => 400,
                e if e.is_conflict() => 409,
                _ => 500,
            },
        }
    }

    /// Get error code for logs and API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Session(_) => "SESSION_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Classify the error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => e.kind(),
            _ => ErrorKind::Internal,
        }
    }

    /// Message suitable for showing to an end user
    ///
    /// Validation and conflict messages are shown verbatim; transport and
    /// internal failures collapse to a generic message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Validation | ErrorKind::Conflict | ErrorKind::NotFound => self.to_string(),
            ErrorKind::PermissionDenied => self.to_string(),
            ErrorKind::Authorization => "You are not allowed to do that.".to_string(),
            ErrorKind::Network => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ErrorKind::Server | ErrorKind::Internal => {
                "Something went wrong. Please try again later.".to_string()
            }
        }
    }

    /// Create a not found error for a resource type
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::Domain(DomainError::NotFound(resource.to_string()))
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Domain(DomainError::ValidationError(msg.to_string()))
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
