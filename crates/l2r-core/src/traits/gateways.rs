//! Gateway traits (ports) - the remote API as seen by the domain
//!
//! The backend owns mutation authority. These traits describe what the client
//! needs from it; `l2r-client` implements them over HTTP and tests implement
//! them in memory.

use async_trait::async_trait;

use crate::entities::{
    AdminStats, Donation, Feedback, FoodRequest, NewDonation, NewFeedback, NewFoodRequest,
    QualityCheck, User,
};
use crate::error::DomainError;
use crate::value_objects::{Coordinates, DonationId, DonationStatus, RequestId, UserId, UserType};

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, DomainError>;

// ============================================================================
// Auth Gateway
// ============================================================================

/// Login payload
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Registration payload
#[derive(Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
    pub phone: Option<String>,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("user_type", &self.user_type)
            .field("phone", &self.phone)
            .finish()
    }
}

/// Token and user returned by register/login
#[derive(Debug, Clone)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Create an account
    async fn register(&self, registration: &Registration) -> GatewayResult<AuthResponse>;

    /// Exchange credentials for a token
    async fn login(&self, credentials: &Credentials) -> GatewayResult<AuthResponse>;

    /// Fetch the user behind the current token
    async fn me(&self) -> GatewayResult<User>;
}

// ============================================================================
// Donation Gateway
// ============================================================================

#[async_trait]
pub trait DonationGateway: Send + Sync {
    /// Donations tied to the current user, optionally filtered by status
    async fn list_donations(&self, status: Option<DonationStatus>) -> GatewayResult<Vec<Donation>>;

    /// Available donations, ranked by distance when a position is given
    async fn list_available(&self, near: Option<Coordinates>) -> GatewayResult<Vec<Donation>>;

    /// Post a donation
    async fn create(&self, donation: &NewDonation) -> GatewayResult<Donation>;

    /// Ask the backend to move a donation to `status`
    async fn update_status(&self, id: &DonationId, status: DonationStatus) -> GatewayResult<()>;

    /// Re-read one donation
    ///
    /// The API has no single-donation endpoint, so the default looks the id up
    /// in the caller's donation listing.
    async fn find(&self, id: &DonationId) -> GatewayResult<Option<Donation>> {
        let donations = self.list_donations(None).await?;
        Ok(donations.into_iter().find(|d| &d.id == id))
    }
}

// ============================================================================
// Quality Check Gateway
// ============================================================================

#[async_trait]
pub trait QualityCheckGateway: Send + Sync {
    /// Persist a quality check
    async fn submit(&self, check: &QualityCheck) -> GatewayResult<()>;
}

// ============================================================================
// Request Gateway
// ============================================================================

#[async_trait]
pub trait RequestGateway: Send + Sync {
    /// Requests visible to the current user
    async fn list_requests(&self) -> GatewayResult<Vec<FoodRequest>>;

    /// Submit a food request
    async fn create(&self, request: &NewFoodRequest) -> GatewayResult<FoodRequest>;

    /// Pair a pending request with an available donation
    async fn match_donation(
        &self,
        request_id: &RequestId,
        donation_id: &DonationId,
    ) -> GatewayResult<()>;
}

// ============================================================================
// Feedback Gateway
// ============================================================================

#[async_trait]
pub trait FeedbackGateway: Send + Sync {
    /// Leave feedback for a donation
    async fn submit(&self, feedback: &NewFeedback) -> GatewayResult<Feedback>;

    /// Feedback received by a user
    async fn for_user(&self, user_id: &UserId) -> GatewayResult<Vec<Feedback>>;
}

// ============================================================================
// Admin Gateway
// ============================================================================

#[async_trait]
pub trait AdminGateway: Send + Sync {
    /// Platform statistics
    async fn stats(&self) -> GatewayResult<AdminStats>;

    /// Every registered user
    async fn users(&self) -> GatewayResult<Vec<User>>;
}
