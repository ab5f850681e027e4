//! Donation entity - a posted surplus-food offer

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{DonationId, DonationStatus, ImageData, Location, Quantity, UserId};

/// Donation as known to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    pub id: DonationId,
    pub donor_id: UserId,
    pub donor_name: String,
    pub food_type: String,
    pub quantity: Quantity,
    pub description: Option<String>,
    pub expiry_date: DateTime<Utc>,
    pub location: Location,
    /// Opaque image reference (data URI or URL) as stored by the backend
    pub image: Option<String>,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
    pub volunteer_id: Option<UserId>,
    pub volunteer_name: Option<String>,
    pub receiver_id: Option<UserId>,
    /// Server-computed distance in km; only present on geo-ranked listings
    pub distance_km: Option<f64>,
}

impl Donation {
    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == DonationStatus::Available
    }

    /// Check if the given volunteer holds the claim
    pub fn is_claimed_by(&self, volunteer_id: &UserId) -> bool {
        self.volunteer_id.as_ref() == Some(volunteer_id)
    }

    /// Check if the food is past its expiry date at `now`
    pub fn is_past_expiry(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date <= now
    }

    /// Copy of this donation after a server-confirmed status change
    pub fn with_status(&self, status: DonationStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Copy of this donation after a server-confirmed claim
    pub fn claimed_by(&self, volunteer_id: UserId, volunteer_name: impl Into<String>) -> Self {
        Self {
            status: DonationStatus::Claimed,
            volunteer_id: Some(volunteer_id),
            volunteer_name: Some(volunteer_name.into()),
            ..self.clone()
        }
    }
}

/// Payload for posting a donation
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonation {
    pub food_type: String,
    pub quantity: Quantity,
    pub description: Option<String>,
    pub expiry_date: DateTime<Utc>,
    pub location: Location,
    pub image: Option<ImageData>,
}

impl NewDonation {
    /// Create a donation payload, rejecting a blank food type
    pub fn new(
        food_type: impl Into<String>,
        quantity: Quantity,
        expiry_date: DateTime<Utc>,
        location: Location,
    ) -> Result<Self, DomainError> {
        let food_type = food_type.into().trim().to_string();
        if food_type.is_empty() {
            return Err(DomainError::MissingField("foodType"));
        }
        Ok(Self {
            food_type,
            quantity,
            description: None,
            expiry_date,
            location,
            image: None,
        })
    }

    /// Attach a description; blank descriptions are dropped
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        self
    }

    pub fn with_image(mut self, image: Option<ImageData>) -> Self {
        self.image = image;
        self
    }
}
