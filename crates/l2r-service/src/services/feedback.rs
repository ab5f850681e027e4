//! Feedback service
//!
//! Ratings left by donors and receivers once a donation has been handled.

use l2r_core::{Capabilities, DomainError, Feedback, NewFeedback, UserId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::FeedbackForm;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Feedback service
pub struct FeedbackService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedbackService<'a> {
    /// Create a new FeedbackService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Rate the other party of a donation
    ///
    /// The feedback type must match the author's role: donors rate
    /// volunteers, receivers rate volunteers or donors.
    #[instrument(skip(self, form), fields(donation_id = %form.donation_id, rating = form.rating))]
    pub async fn submit(&self, form: FeedbackForm) -> ServiceResult<Feedback> {
        let user = PermissionService::new(self.ctx).require(Capabilities::LEAVE_FEEDBACK)?;
        form.validate()?;

        let new = NewFeedback::try_from(form)?;
        if new.feedback_type.author() != user.user_type {
            return Err(DomainError::Forbidden(format!(
                "A {} cannot leave {:?} feedback",
                user.user_type, new.feedback_type
            ))
            .into());
        }

        let feedback = self.ctx.feedback_gateway().submit(&new).await?;
        info!(feedback_id = %feedback.id, "Feedback submitted");
        Ok(feedback)
    }

    /// Feedback received by `user_id`
    #[instrument(skip(self))]
    pub async fn for_user(&self, user_id: &UserId) -> ServiceResult<Vec<Feedback>> {
        PermissionService::new(self.ctx).current_user()?;
        Ok(self.ctx.feedback_gateway().for_user(user_id).await?)
    }
}
