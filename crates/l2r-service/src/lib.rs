//! # l2r-service
//!
//! Application layer: the donation lifecycle manager, role-gated services
//! and validated form DTOs. Services borrow a [`ServiceContext`] that holds
//! the gateways, device providers and the session.

pub mod dto;
pub mod services;

pub use dto::{
    ActivityFeed, AvailableDonations, DonationForm, FeedbackForm, LoginForm, QualityForm,
    RegisterForm, RequestForm,
};
pub use services::{
    ActivityService, AdminService, AuthService, DiscoveryService, DonationService,
    FeedbackService, LifecycleService, PermissionService, QualityLedger, RequestService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
