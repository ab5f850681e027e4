//! Donation service
//!
//! Posting donations and listing the caller's donations.

use l2r_core::{Capabilities, DomainError, Donation, DonationStatus, ImageData};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::dto::{DonationDraft, DonationForm};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Donation service
pub struct DonationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DonationService<'a> {
    /// Create a new DonationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a donation
    ///
    /// The form is validated and parsed before the device is asked for
    /// anything. Location is mandatory; the photo is optional and any camera
    /// failure simply leaves it out.
    #[instrument(skip(self, form), fields(food_type = %form.food_type))]
    pub async fn create_donation(&self, form: DonationForm) -> ServiceResult<Donation> {
        let donor = PermissionService::new(self.ctx).require(Capabilities::POST_DONATIONS)?;

        form.validate()?;
        let draft = DonationDraft::try_from(form)?;

        let location = self.ctx.location().current_location().await.map_err(|e| {
            warn!(error = %e, "Location unavailable, cannot post donation");
            DomainError::MissingLocation
        })?;

        let image = self.pick_image().await;
        let new = draft.at(location)?.with_image(image);

        let donation = self.ctx.donation_gateway().create(&new).await?;
        info!(donation_id = %donation.id, donor_id = %donor.id, "Donation posted");
        Ok(donation)
    }

    /// Donations tied to the session user (a donor's own posts), optionally
    /// filtered by status
    #[instrument(skip(self))]
    pub async fn my_donations(&self, status: Option<DonationStatus>) -> ServiceResult<Vec<Donation>> {
        PermissionService::new(self.ctx).require(Capabilities::VIEW_DONATIONS)?;
        let donations = self.ctx.donation_gateway().list_donations(status).await?;
        debug!(count = donations.len(), "Fetched donations");
        Ok(donations)
    }

    async fn pick_image(&self) -> Option<ImageData> {
        match self.ctx.images().pick_image().await {
            Ok(image) => image,
            Err(e) => {
                warn!(error = %e, "Image unavailable, posting without a photo");
                None
            }
        }
    }
}
