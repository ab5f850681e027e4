//! Form to domain mappers
//!
//! Parsing that needs more than `validator` (typed text to value objects)
//! lives here. Everything that can fail does so before a device prompt or a
//! network call.

use chrono::{DateTime, Utc};
use l2r_core::{
    parse_timestamp, Credentials, DomainError, DonationId, Location, NewDonation, NewFeedback,
    NewFoodRequest, NewQualityCheck, Quantity, Rating, Registration, Urgency,
};

use super::requests::{DonationForm, FeedbackForm, LoginForm, QualityForm, RegisterForm, RequestForm};

// ============================================================================
// Auth
// ============================================================================

impl From<LoginForm> for Credentials {
    fn from(form: LoginForm) -> Self {
        Self {
            email: form.email.trim().to_string(),
            password: form.password,
        }
    }
}

impl From<RegisterForm> for Registration {
    fn from(form: RegisterForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            password: form.password,
            user_type: form.user_type,
            phone: form.phone.filter(|p| !p.trim().is_empty()),
        }
    }
}

// ============================================================================
// Donations
// ============================================================================

/// A donation form whose text fields have been parsed; only the location is
/// still missing
#[derive(Debug, Clone, PartialEq)]
pub struct DonationDraft {
    pub food_type: String,
    pub quantity: Quantity,
    pub description: Option<String>,
    pub expiry_date: DateTime<Utc>,
}

impl DonationDraft {
    /// Complete the draft with the donor's position
    pub fn at(self, location: Location) -> Result<NewDonation, DomainError> {
        Ok(
            NewDonation::new(self.food_type, self.quantity, self.expiry_date, location)?
                .with_description(self.description),
        )
    }
}

impl TryFrom<DonationForm> for DonationDraft {
    type Error = DomainError;

    fn try_from(form: DonationForm) -> Result<Self, Self::Error> {
        let food_type = form.food_type.trim().to_string();
        if food_type.is_empty() {
            return Err(DomainError::MissingField("foodType"));
        }
        Ok(Self {
            food_type,
            quantity: Quantity::parse(&form.quantity)?,
            description: form.description,
            expiry_date: parse_timestamp(&form.expiry_date)?,
        })
    }
}

impl QualityForm {
    /// Grades for `donation_id`
    pub fn for_donation(self, donation_id: DonationId) -> NewQualityCheck {
        NewQualityCheck {
            donation_id,
            expiry: self.expiry_status,
            packaging: self.packaging_status,
            smell: self.smell_status,
            notes: self.notes,
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

/// A parsed request form awaiting the receiver's position
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDraft {
    pub food_type: String,
    pub quantity: Quantity,
    pub urgency: Urgency,
    pub notes: Option<String>,
}

impl RequestDraft {
    pub fn at(self, location: Location) -> Result<NewFoodRequest, DomainError> {
        Ok(
            NewFoodRequest::new(self.food_type, self.quantity, self.urgency, location)?
                .with_notes(self.notes),
        )
    }
}

impl TryFrom<RequestForm> for RequestDraft {
    type Error = DomainError;

    fn try_from(form: RequestForm) -> Result<Self, Self::Error> {
        let food_type = form.food_type.trim().to_string();
        if food_type.is_empty() {
            return Err(DomainError::MissingField("foodType"));
        }
        Ok(Self {
            food_type,
            quantity: Quantity::parse(&form.quantity)?,
            urgency: form.urgency,
            notes: form.notes,
        })
    }
}

// ============================================================================
// Feedback
// ============================================================================

impl TryFrom<FeedbackForm> for NewFeedback {
    type Error = DomainError;

    fn try_from(form: FeedbackForm) -> Result<Self, Self::Error> {
        Ok(Self {
            donation_id: form.donation_id,
            rating: Rating::new(form.rating)?,
            comment: form
                .comment
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            feedback_type: form.feedback_type,
        })
    }
}
