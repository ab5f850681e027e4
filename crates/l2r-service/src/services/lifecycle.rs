//! Donation lifecycle service
//!
//! Drives a donation through `available → claimed → pickedup → delivered`
//! (or into `expired`/`cancelled`). Every move is checked locally against the
//! caller's snapshot first; the backend stays authoritative and a rejected
//! move comes back as a conflict carrying the re-read donation.
//!
//! Nothing is mutated optimistically: the returned donation reflects a move
//! the server has accepted.

use chrono::Utc;
use l2r_core::{Capabilities, DomainError, Donation, DonationId, DonationStatus, QualityCheck, User};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::QualityForm;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Lifecycle service
pub struct LifecycleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LifecycleService<'a> {
    /// Create a new LifecycleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Accept the pickup of an available donation as the session user
    ///
    /// # Errors
    /// - `InvalidTransition` if the snapshot is not `available` (no request sent)
    /// - `Conflict` if another volunteer got there first
    #[instrument(skip(self, donation), fields(donation_id = %donation.id))]
    pub async fn claim(&self, donation: &Donation) -> ServiceResult<Donation> {
        let user = PermissionService::new(self.ctx).require(Capabilities::CLAIM_PICKUPS)?;
        donation.status.transition(DonationStatus::Claimed)?;

        self.apply(donation, DonationStatus::Claimed).await?;

        info!(volunteer_id = %user.id, "Donation claimed");
        Ok(donation.claimed_by(user.id, user.name))
    }

    /// Inspect a claimed donation and record the verdict
    ///
    /// The check is posted to the backend and kept in the session's quality
    /// ledger. The donation status does not change; a passing check only
    /// unlocks [`mark_picked_up`](Self::mark_picked_up).
    #[instrument(skip(self, donation, form), fields(donation_id = %donation.id))]
    pub async fn record_quality_check(
        &self,
        donation: &Donation,
        form: QualityForm,
    ) -> ServiceResult<QualityCheck> {
        let user = PermissionService::new(self.ctx).require(Capabilities::QUALITY_CHECK)?;
        form.validate()?;

        if donation.status != DonationStatus::Claimed {
            return Err(DomainError::QualityCheckNotAllowed(donation.status).into());
        }
        ensure_claim_holder(donation, &user)?;

        let ledger = self.ctx.quality_ledger();
        if ledger.has_passed(&donation.id) {
            return Err(DomainError::QualityCheckAlreadyPassed(donation.id.clone()).into());
        }

        let check = QualityCheck::record(form.for_donation(donation.id.clone()), Utc::now());
        if let Err(e) = self.ctx.quality_gateway().submit(&check).await {
            return Err(self.ctx.conflict_or(e, &donation.id).await);
        }
        ledger.record(check.clone());

        info!(overall = %check.overall(), "Quality check recorded");
        Ok(check)
    }

    /// Move a donation to `target`
    ///
    /// `target` must be the next status on the happy path or `cancelled`
    /// while the donation is still available or claimed. `expired` is only
    /// ever set by the server. `pickedup` additionally needs a passing quality
    /// check recorded in this session.
    #[instrument(skip(self, donation), fields(donation_id = %donation.id, from = %donation.status))]
    pub async fn transition_to(
        &self,
        donation: &Donation,
        target: DonationStatus,
    ) -> ServiceResult<Donation> {
        if target == DonationStatus::Claimed {
            return self.claim(donation).await;
        }

        donation.status.transition(target)?;
        let user = self.authorize(donation, target)?;
        if target == DonationStatus::PickedUp && !self.ctx.quality_ledger().has_passed(&donation.id)
        {
            return Err(DomainError::QualityCheckRequired.into());
        }

        self.apply(donation, target).await?;

        if target.is_terminal() {
            self.ctx.quality_ledger().forget(&donation.id);
        }
        info!(user_id = %user.id, to = %target, "Donation status updated");
        Ok(donation.with_status(target))
    }

    /// `claimed → pickedup`
    pub async fn mark_picked_up(&self, donation: &Donation) -> ServiceResult<Donation> {
        self.transition_to(donation, DonationStatus::PickedUp).await
    }

    /// `pickedup → delivered`
    pub async fn mark_delivered(&self, donation: &Donation) -> ServiceResult<Donation> {
        self.transition_to(donation, DonationStatus::Delivered).await
    }

    /// Withdraw a donation before pickup
    pub async fn cancel(&self, donation: &Donation) -> ServiceResult<Donation> {
        self.transition_to(donation, DonationStatus::Cancelled).await
    }

    /// Latest quality check recorded for `id` in this session
    pub fn quality_check(&self, id: &DonationId) -> Option<QualityCheck> {
        self.ctx.quality_ledger().get(id)
    }

    fn authorize(&self, donation: &Donation, target: DonationStatus) -> ServiceResult<User> {
        let permissions = PermissionService::new(self.ctx);
        match target {
            DonationStatus::PickedUp => {
                let user = permissions.require(Capabilities::CLAIM_PICKUPS)?;
                ensure_claim_holder(donation, &user)?;
                Ok(user)
            }
            DonationStatus::Delivered => {
                let user = permissions.require(Capabilities::DELIVER)?;
                ensure_claim_holder(donation, &user)?;
                Ok(user)
            }
            DonationStatus::Expired => Err(DomainError::Forbidden(
                "Donations expire on the server, not by hand".to_string(),
            )
            .into()),
            DonationStatus::Cancelled => {
                let user = permissions
                    .require_any(Capabilities::POST_DONATIONS | Capabilities::CLAIM_PICKUPS)?;
                let allowed = if user.can(Capabilities::POST_DONATIONS) {
                    donation.donor_id == user.id
                } else {
                    donation.is_claimed_by(&user.id)
                };
                if !allowed {
                    return Err(DomainError::Forbidden(
                        "Only the donor or the claiming volunteer can cancel a donation"
                            .to_string(),
                    )
                    .into());
                }
                Ok(user)
            }
            DonationStatus::Available | DonationStatus::Claimed => permissions.current_user(),
        }
    }

    async fn apply(&self, donation: &Donation, target: DonationStatus) -> ServiceResult<()> {
        match self.ctx.donation_gateway().update_status(&donation.id, target).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(to = %target, "Status change failed");
                Err(self.ctx.conflict_or(e, &donation.id).await)
            }
        }
    }
}

/// A claimed donation may only be handled by the volunteer holding the claim
fn ensure_claim_holder(donation: &Donation, user: &User) -> Result<(), DomainError> {
    match &donation.volunteer_id {
        Some(holder) if holder != &user.id => Err(DomainError::Forbidden(
            "Donation is claimed by another volunteer".to_string(),
        )),
        _ => Ok(()),
    }
}
