//! Food request entity - a receiver's stated need for food

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{DonationId, Location, Quantity, RequestId, RequestStatus, Urgency, UserId};

/// Food request as known to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct FoodRequest {
    pub id: RequestId,
    pub receiver_id: UserId,
    pub receiver_name: String,
    pub food_type: String,
    pub quantity: Quantity,
    pub urgency: Urgency,
    pub location: Location,
    pub notes: Option<String>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub matched_donation_id: Option<DonationId>,
}

impl FoodRequest {
    /// Whether the request can still be matched with a donation
    #[inline]
    pub fn is_matchable(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

/// Payload for submitting a food request
#[derive(Debug, Clone, PartialEq)]
pub struct NewFoodRequest {
    pub food_type: String,
    pub quantity: Quantity,
    pub urgency: Urgency,
    pub location: Location,
    pub notes: Option<String>,
}

impl NewFoodRequest {
    pub fn new(
        food_type: impl Into<String>,
        quantity: Quantity,
        urgency: Urgency,
        location: Location,
    ) -> Result<Self, DomainError> {
        let food_type = food_type.into().trim().to_string();
        if food_type.is_empty() {
            return Err(DomainError::MissingField("foodType"));
        }
        Ok(Self {
            food_type,
            quantity,
            urgency,
            location,
            notes: None,
        })
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        self
    }
}

/// Order requests high → medium → low, keeping the incoming order within
/// each urgency (the backend lists newest first)
pub fn sort_by_urgency(requests: &mut [FoodRequest]) {
    requests.sort_by(|a, b| b.urgency.cmp(&a.urgency));
}
