//! Domain errors - error types for the domain layer and its gateways

use thiserror::Error;

use crate::value_objects::{DeviceCapability, DonationId, DonationStatus, RequestId, UserId};

/// Coarse error taxonomy used to decide how a failure is surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad local input; blocked before any network call
    Validation,
    /// The server rejected a mutation whose preconditions no longer hold
    Conflict,
    /// A device permission was refused
    PermissionDenied,
    /// Missing role capability, missing session, 401 or 403
    Authorization,
    NotFound,
    Network,
    Server,
    Internal,
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Donation not found: {0}")]
    DonationNotFound(DonationId),

    #[error("Request not found: {0}")]
    RequestNotFound(RequestId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Not found: {0}")]
    NotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Quantity must be a positive number of servings, got {0}")]
    InvalidQuantity(i64),

    #[error("Invalid expiry date: {0}")]
    InvalidExpiryDate(String),

    #[error("Invalid coordinates: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Location is required")]
    MissingLocation,

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(i64),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Rejected by server: {0}")]
    Rejected(String),

    // =========================================================================
    // Lifecycle Rule Violations
    // =========================================================================
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: DonationStatus,
        to: DonationStatus,
    },

    #[error("A passing quality check is required before pickup")]
    QualityCheckRequired,

    #[error("Quality check not allowed while donation is {0}")]
    QualityCheckNotAllowed(DonationStatus),

    #[error("Quality check already passed for donation {0}")]
    QualityCheckAlreadyPassed(DonationId),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Missing capability: {0}")]
    MissingCapability(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("{0}")]
    Conflict(String),

    // =========================================================================
    // Device Errors
    // =========================================================================
    #[error("Permission denied: {0}")]
    PermissionDenied(DeviceCapability),

    #[error("Device unavailable: {0}")]
    DeviceUnavailable(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::DonationNotFound(_) => "UNKNOWN_DONATION",
            Self::RequestNotFound(_) => "UNKNOWN_REQUEST",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::NotFound(_) => "NOT_FOUND",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidQuantity(_) => "INVALID_QUANTITY",
            Self::InvalidExpiryDate(_) => "INVALID_EXPIRY_DATE",
            Self::InvalidCoordinates { .. } => "INVALID_COORDINATES",
            Self::MissingLocation => "MISSING_LOCATION",
            Self::InvalidRating(_) => "INVALID_RATING",
            Self::InvalidImage(_) => "INVALID_IMAGE",
            Self::UnknownStatus(_) => "UNKNOWN_STATUS",
            Self::Rejected(_) => "REJECTED",

            // Lifecycle
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::QualityCheckRequired => "QUALITY_CHECK_REQUIRED",
            Self::QualityCheckNotAllowed(_) => "QUALITY_CHECK_NOT_ALLOWED",
            Self::QualityCheckAlreadyPassed(_) => "QUALITY_CHECK_ALREADY_PASSED",

            // Authorization
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::MissingCapability(_) => "MISSING_CAPABILITY",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",

            // Conflict
            Self::Conflict(_) => "CONFLICT",

            // Device
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::DeviceUnavailable(_) => "DEVICE_UNAVAILABLE",

            // Infrastructure
            Self::Network(_) => "NETWORK_ERROR",
            Self::Server { .. } => "SERVER_ERROR",
            Self::Decode(_) => "MALFORMED_RESPONSE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        if self.is_validation() {
            ErrorKind::Validation
        } else if self.is_conflict() {
            ErrorKind::Conflict
        } else if self.is_not_found() {
            ErrorKind::NotFound
        } else if self.is_authorization() {
            ErrorKind::Authorization
        } else {
            match self {
                Self::PermissionDenied(_) | Self::DeviceUnavailable(_) => {
                    ErrorKind::PermissionDenied
                }
                Self::Network(_) => ErrorKind::Network,
                Self::Server { .. } | Self::Decode(_) => ErrorKind::Server,
                _ => ErrorKind::Internal,
            }
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DonationNotFound(_)
                | Self::RequestNotFound(_)
                | Self::UserNotFound(_)
                | Self::NotFound(_)
        )
    }

    /// Check if this is a validation error (raised before any network call,
    /// or a 400/422 from the server)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingField(_)
                | Self::InvalidQuantity(_)
                | Self::InvalidExpiryDate(_)
                | Self::InvalidCoordinates { .. }
                | Self::MissingLocation
                | Self::InvalidRating(_)
                | Self::InvalidImage(_)
                | Self::UnknownStatus(_)
                | Self::Rejected(_)
                | Self::InvalidTransition { .. }
                | Self::QualityCheckRequired
                | Self::QualityCheckNotAllowed(_)
                | Self::QualityCheckAlreadyPassed(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotAuthenticated
                | Self::MissingCapability(_)
                | Self::Unauthorized(_)
                | Self::Forbidden(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Check if the failure happened in transport or on the server
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Server { .. } | Self::Decode(_)
        )
    }
}
