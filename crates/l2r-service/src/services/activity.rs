//! Activity service
//!
//! Backs the per-role activity screen.

use l2r_core::UserType;
use tracing::{debug, instrument};

use crate::dto::ActivityFeed;

use super::admin::AdminService;
use super::context::ServiceContext;
use super::donation::DonationService;
use super::error::ServiceResult;
use super::permission::PermissionService;
use super::request::RequestService;

/// Activity service
pub struct ActivityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ActivityService<'a> {
    /// Create a new ActivityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the feed for the session user's role
    #[instrument(skip(self))]
    pub async fn load(&self) -> ServiceResult<ActivityFeed> {
        let user = PermissionService::new(self.ctx).current_user()?;
        debug!(kind = ActivityFeed::kind_for(user.user_type), "Loading activity");

        let feed = match user.user_type {
            UserType::Donor | UserType::Volunteer => {
                ActivityFeed::Donations(DonationService::new(self.ctx).my_donations(None).await?)
            }
            UserType::Receiver => {
                ActivityFeed::Requests(RequestService::new(self.ctx).list_requests().await?)
            }
            UserType::Admin => ActivityFeed::Stats(AdminService::new(self.ctx).stats().await?),
        };
        Ok(feed)
    }
}
