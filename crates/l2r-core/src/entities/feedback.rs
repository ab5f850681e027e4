//! Feedback entity - ratings exchanged after a donation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{DonationId, FeedbackId, Rating, UserId, UserType};

/// Direction of a feedback entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    DonorToVolunteer,
    ReceiverToVolunteer,
    ReceiverToDonor,
}

impl FeedbackType {
    /// Role that writes this kind of feedback
    pub fn author(self) -> UserType {
        match self {
            Self::DonorToVolunteer => UserType::Donor,
            Self::ReceiverToVolunteer | Self::ReceiverToDonor => UserType::Receiver,
        }
    }
}

/// Payload for leaving feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub donation_id: DonationId,
    pub rating: Rating,
    pub comment: Option<String>,
    pub feedback_type: FeedbackType,
}

/// Recorded feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub id: FeedbackId,
    pub donation_id: DonationId,
    pub from_user_id: UserId,
    /// None when the donation had no counterpart yet
    pub to_user_id: Option<UserId>,
    pub rating: Rating,
    pub comment: Option<String>,
    pub feedback_type: FeedbackType,
    pub created_at: DateTime<Utc>,
}
