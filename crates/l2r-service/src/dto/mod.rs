//! Data transfer objects
//!
//! This module provides:
//! - Form DTOs with validation for user input
//! - Result shapes returned by services
//! - Mappers from forms to domain payloads

pub mod mappers;
pub mod requests;
pub mod responses;

pub use mappers::{DonationDraft, RequestDraft};
pub use requests::{DonationForm, FeedbackForm, LoginForm, QualityForm, RegisterForm, RequestForm};
pub use responses::{ActivityFeed, AvailableDonations};
