//! Food request service
//!
//! Receivers post requests; volunteers and admins list them by urgency and
//! pair them with available donations.

use l2r_core::{
    sort_by_urgency, Capabilities, DomainError, Donation, DonationStatus, FoodRequest,
    RequestStatus, UserType,
};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::dto::{RequestDraft, RequestForm};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;

/// Food request service
pub struct RequestService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RequestService<'a> {
    /// Create a new RequestService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a food request at the receiver's current position
    #[instrument(skip(self, form), fields(food_type = %form.food_type, urgency = %form.urgency))]
    pub async fn create_request(&self, form: RequestForm) -> ServiceResult<FoodRequest> {
        PermissionService::new(self.ctx).require(Capabilities::REQUEST_FOOD)?;

        form.validate()?;
        let draft = RequestDraft::try_from(form)?;

        let location = self.ctx.location().current_location().await.map_err(|e| {
            warn!(error = %e, "Location unavailable, cannot submit request");
            DomainError::MissingLocation
        })?;

        let request = self.ctx.request_gateway().create(&draft.at(location)?).await?;
        info!(request_id = %request.id, "Food request submitted");
        Ok(request)
    }

    /// Requests visible to the session user
    ///
    /// Receivers get their own requests in server order; everyone else gets
    /// the listing stably ordered by urgency, highest first.
    #[instrument(skip(self))]
    pub async fn list_requests(&self) -> ServiceResult<Vec<FoodRequest>> {
        let user = PermissionService::new(self.ctx).require(Capabilities::VIEW_REQUESTS)?;

        let mut requests = self.ctx.request_gateway().list_requests().await?;
        if user.user_type != UserType::Receiver {
            sort_by_urgency(&mut requests);
        }
        debug!(count = requests.len(), "Fetched food requests");
        Ok(requests)
    }

    /// Pair a pending request with an available donation
    ///
    /// On success the request is `matched` and the donation `claimed` on
    /// behalf of the receiver. A donation taken in the meantime comes back as
    /// a conflict carrying its current state.
    #[instrument(skip(self, request, donation), fields(request_id = %request.id, donation_id = %donation.id))]
    pub async fn match_request(
        &self,
        request: &FoodRequest,
        donation: &Donation,
    ) -> ServiceResult<(FoodRequest, Donation)> {
        PermissionService::new(self.ctx).require(Capabilities::MATCH_REQUESTS)?;

        if !request.status.can_transition_to(RequestStatus::Matched) {
            return Err(ServiceError::validation(format!(
                "Only pending requests can be matched, this one is {}",
                request.status
            )));
        }
        donation.status.transition(DonationStatus::Claimed)?;

        if let Err(e) = self
            .ctx
            .request_gateway()
            .match_donation(&request.id, &donation.id)
            .await
        {
            return Err(self.ctx.conflict_or(e, &donation.id).await);
        }

        let matched = FoodRequest {
            status: RequestStatus::Matched,
            matched_donation_id: Some(donation.id.clone()),
            ..request.clone()
        };
        let claimed = Donation {
            status: DonationStatus::Claimed,
            receiver_id: Some(request.receiver_id.clone()),
            ..donation.clone()
        };
        info!("Request matched");
        Ok((matched, claimed))
    }
}
