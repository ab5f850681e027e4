//! Discovery service
//!
//! Nearby available donations for volunteers and receivers.

use l2r_core::Capabilities;
use tracing::{debug, instrument, warn};

use crate::dto::AvailableDonations;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Discovery service
pub struct DiscoveryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DiscoveryService<'a> {
    /// Create a new DiscoveryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Available donations, nearest first when the device can tell where we are
    ///
    /// Without a position the unranked listing is returned. Distances come
    /// from the backend as-is.
    #[instrument(skip(self))]
    pub async fn available_donations(&self) -> ServiceResult<AvailableDonations> {
        PermissionService::new(self.ctx).require(Capabilities::BROWSE_DONATIONS)?;

        let near = match self.ctx.location().current_location().await {
            Ok(location) => Some(location.coordinates),
            Err(e) => {
                warn!(error = %e, "Location unavailable, listing donations unranked");
                None
            }
        };

        let donations = self.ctx.donation_gateway().list_available(near).await?;
        debug!(count = donations.len(), geo_ranked = near.is_some(), "Fetched available donations");
        Ok(AvailableDonations { donations, near })
    }
}
