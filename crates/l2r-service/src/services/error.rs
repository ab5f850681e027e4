//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use l2r_common::AppError;
use l2r_core::{Donation, DomainError, ErrorKind};
use std::fmt;
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or gateway failure
    Domain(DomainError),

    /// Application error (session storage, config, ...)
    App(AppError),

    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// The session user lacks a capability
    MissingCapability { capability: String },

    /// Form validation error
    Validation(String),

    /// The server rejected a mutation; carries the re-read donation when
    /// one could be fetched
    Conflict {
        message: String,
        refreshed: Option<Box<Donation>>,
    },

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::MissingCapability { capability } => {
                write!(f, "Missing required capability: {capability}")
            }
            Self::Validation(msg) => write!(f, "{msg}"),
            // Shown verbatim
            Self::Conflict { message, .. } => write!(f, "{message}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a missing capability error
    pub fn missing_capability(capability: impl Into<String>) -> Self {
        Self::MissingCapability {
            capability: capability.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a conflict error without a refreshed donation
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict {
            message: msg.into(),
            refreshed: None,
        }
    }

    /// Create a conflict error carrying the authoritative donation
    pub fn conflict_with(msg: impl Into<String>, refreshed: Option<Donation>) -> Self {
        Self::Conflict {
            message: msg.into(),
            refreshed: refreshed.map(Box::new),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => e.kind(),
            Self::App(e) => e.kind(),
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::MissingCapability { .. } => ErrorKind::Authorization,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Get the error code for logs and UI mapping
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::MissingCapability { .. } => "MISSING_CAPABILITY",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict { .. } => "CONFLICT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message suitable for showing to an end user
    ///
    /// Validation and conflict messages are shown verbatim; transport and
    /// internal failures collapse to a generic message.
    pub fn user_message(&self) -> String {
        if let Self::App(e) = self {
            return e.user_message();
        }
        match self.kind() {
            ErrorKind::Validation
            | ErrorKind::Conflict
            | ErrorKind::NotFound
            | ErrorKind::PermissionDenied => self.to_string(),
            ErrorKind::Authorization => "You are not allowed to do that.".to_string(),
            ErrorKind::Network => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ErrorKind::Server | ErrorKind::Internal => {
                "Something went wrong. Please try again later.".to_string()
            }
        }
    }

    /// Authoritative donation re-read after a conflict
    pub fn refreshed_donation(&self) -> Option<&Donation> {
        match self {
            Self::Conflict { refreshed, .. } => refreshed.as_deref(),
            _ => None,
        }
    }

    #[inline]
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }

    #[inline]
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        messages.sort();
        Self::Validation(messages.join("; "))
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::NotFound { resource, id } => AppError::not_found(format!("{resource} {id}")),
            ServiceError::MissingCapability { capability } => {
                AppError::Domain(DomainError::MissingCapability(capability))
            }
            ServiceError::Validation(msg) => AppError::validation(msg),
            ServiceError::Conflict { message, .. } => AppError::Domain(DomainError::Conflict(message)),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
