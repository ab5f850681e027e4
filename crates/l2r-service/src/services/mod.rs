//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`], checks the session
//! user's capabilities, validates input locally and then talks to the
//! backend through the gateway traits.

pub mod activity;
pub mod admin;
pub mod auth;
pub mod context;
pub mod discovery;
pub mod donation;
pub mod error;
pub mod feedback;
pub mod ledger;
pub mod lifecycle;
pub mod permission;
pub mod request;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use activity::ActivityService;
pub use admin::AdminService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use discovery::DiscoveryService;
pub use donation::DonationService;
pub use error::{ServiceError, ServiceResult};
pub use feedback::FeedbackService;
pub use ledger::QualityLedger;
pub use lifecycle::LifecycleService;
pub use permission::PermissionService;
pub use request::RequestService;
