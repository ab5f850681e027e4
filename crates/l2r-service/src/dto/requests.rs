//! Form DTOs
//!
//! Raw user input as entered in the app. All forms implement `Validate`;
//! services run it before any network call.

use serde::Deserialize;
use validator::Validate;

use l2r_core::{
    DonationId, ExpiryStatus, FeedbackType, PackagingStatus, SmellStatus, Urgency, UserType,
};

// ============================================================================
// Auth Forms
// ============================================================================

/// Sign-up form
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,

    pub user_type: UserType,

    #[validate(length(max = 32, message = "Phone number is too long"))]
    pub phone: Option<String>,
}

/// Sign-in form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Donation Forms
// ============================================================================

/// Post-a-donation form
///
/// Quantity and expiry are kept as typed text and parsed by the service.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DonationForm {
    #[validate(length(min = 1, max = 100, message = "Food type is required"))]
    pub food_type: String,

    #[validate(length(min = 1, message = "Quantity is required"))]
    pub quantity: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// RFC 3339 or `YYYY-MM-DD`
    #[validate(length(min = 1, message = "Expiry date is required"))]
    pub expiry_date: String,
}

/// Quality check form filled in by the volunteer at pickup
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QualityForm {
    pub expiry_status: ExpiryStatus,
    pub packaging_status: PackagingStatus,
    pub smell_status: SmellStatus,

    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

// ============================================================================
// Request Forms
// ============================================================================

/// Request-food form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RequestForm {
    #[validate(length(min = 1, max = 100, message = "Food type is required"))]
    pub food_type: String,

    #[validate(length(min = 1, message = "Quantity is required"))]
    pub quantity: String,

    #[serde(default)]
    pub urgency: Urgency,

    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

// ============================================================================
// Feedback Forms
// ============================================================================

/// Rate-a-participant form
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackForm {
    pub donation_id: DonationId,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i64,

    #[validate(length(max = 1000, message = "Comment must be at most 1000 characters"))]
    pub comment: Option<String>,

    pub feedback_type: FeedbackType,
}
