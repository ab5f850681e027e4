//! Feedback mapper

use l2r_core::{
    DomainError, DonationId, Feedback, FeedbackId, FeedbackType, NewFeedback, Rating, UserId,
};

use super::decode_error;
use crate::models::{FeedbackCreateBody, FeedbackModel};

impl TryFrom<FeedbackModel> for Feedback {
    type Error = DomainError;

    fn try_from(model: FeedbackModel) -> Result<Self, Self::Error> {
        let feedback_type: FeedbackType =
            serde_json::from_value(serde_json::Value::String(model.feedback_type))
                .map_err(|e| decode_error("feedbackType", e))?;

        Ok(Feedback {
            id: FeedbackId::new(model.id),
            donation_id: DonationId::new(model.donation_id),
            from_user_id: UserId::new(model.from_user_id),
            to_user_id: model.to_user_id.map(UserId::new),
            rating: Rating::new(model.rating).map_err(|e| decode_error("rating", e))?,
            comment: model.comment,
            feedback_type,
            created_at: model.created_at,
        })
    }
}

impl<'a> FeedbackCreateBody<'a> {
    pub fn from_new(feedback: &'a NewFeedback) -> Self {
        Self {
            donation_id: feedback.donation_id.as_str(),
            rating: feedback.rating.get(),
            comment: feedback.comment.as_deref(),
            feedback_type: feedback.feedback_type,
        }
    }
}
