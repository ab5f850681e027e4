//! Backend state
//!
//! One lock guards the whole store, so concurrent status updates on the
//! same donation are serialized and exactly one claim can win.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::Utc;
use l2r_core::{DonationStatus, FeedbackType, OverallQuality, RequestStatus, UserType};
use parking_lot::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use super::error::{ApiError, ApiResult};
use super::wire::{
    AuthBody, DonationBody, DonationRecord, FeedbackBody, FeedbackRecord, LocationBody,
    LoginBody, QualityCheckBody, QualityCheckRecord, RegisterBody, RequestBody, RequestRecord,
    StatsBody, UserRecord,
};

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Default)]
struct Store {
    users: Vec<UserRecord>,
    tokens: HashMap<String, String>,
    donations: Vec<DonationRecord>,
    requests: Vec<RequestRecord>,
    checks: Vec<QualityCheckRecord>,
    feedback: Vec<FeedbackRecord>,
}

impl Store {
    fn donation_mut(&mut self, id: &str) -> ApiResult<&mut DonationRecord> {
        self.donations
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| ApiError::not_found("Donation not found"))
    }

    fn latest_check_passed(&self, donation_id: &str) -> bool {
        self.checks
            .iter()
            .rev()
            .find(|c| c.donation_id == donation_id)
            .is_some_and(|c| c.overall_quality.is_pass())
    }
}

/// Shared state for the mock backend
#[derive(Debug, Clone, Default)]
pub struct BackendState {
    store: Arc<Mutex<Store>>,
}

impl BackendState {
    pub fn new() -> Self {
        Self::default()
    }

    // === Auth ===

    pub fn register(&self, body: RegisterBody) -> ApiResult<AuthBody> {
        let mut store = self.store.lock();
        if store.users.iter().any(|u| u.email == body.email) {
            return Err(ApiError::bad_request("Email already registered"));
        }

        let user = UserRecord {
            id: Uuid::new_v4().to_string(),
            name: body.name,
            email: body.email,
            user_type: body.user_type,
            phone: body.phone,
            created_at: Utc::now(),
            password: body.password,
        };
        store.users.push(user.clone());
        info!(user_id = %user.id, user_type = %user.user_type, "Registered");
        Ok(Self::issue_token(&mut store, user))
    }

    pub fn login(&self, body: LoginBody) -> ApiResult<AuthBody> {
        let mut store = self.store.lock();
        let user = store
            .users
            .iter()
            .find(|u| u.email == body.email && u.password == body.password)
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;
        Ok(Self::issue_token(&mut store, user))
    }

    fn issue_token(store: &mut Store, user: UserRecord) -> AuthBody {
        let token = Uuid::new_v4().simple().to_string();
        store.tokens.insert(token.clone(), user.id.clone());
        AuthBody { token, user }
    }

    pub fn user_for_token(&self, token: &str) -> Option<UserRecord> {
        let store = self.store.lock();
        let user_id = store.tokens.get(token)?;
        store.users.iter().find(|u| &u.id == user_id).cloned()
    }

    /// Invalidate every token, as a backend restart with a new secret would
    pub fn revoke_tokens(&self) {
        self.store.lock().tokens.clear();
    }

    // === Donations ===

    /// Donors see their own donations; everyone else sees all of them
    pub fn donations_for(
        &self,
        user: &UserRecord,
        status: Option<DonationStatus>,
    ) -> Vec<DonationRecord> {
        let store = self.store.lock();
        store
            .donations
            .iter()
            .filter(|d| user.user_type != UserType::Donor || d.donor_id == user.id)
            .filter(|d| status.map_or(true, |s| d.status == s))
            .cloned()
            .collect()
    }

    /// Available donations, nearest first when a position is given
    pub fn available(&self, near: Option<(f64, f64)>) -> Vec<DonationRecord> {
        let store = self.store.lock();
        let mut donations: Vec<DonationRecord> = store
            .donations
            .iter()
            .filter(|d| d.status == DonationStatus::Available)
            .cloned()
            .collect();

        if let Some((latitude, longitude)) = near {
            for d in &mut donations {
                let km = haversine_km(latitude, longitude, &d.location);
                d.distance = Some((km * 100.0).round() / 100.0);
            }
            donations.sort_by(|a, b| a.distance.unwrap_or(0.0).total_cmp(&b.distance.unwrap_or(0.0)));
        }
        donations
    }

    pub fn create_donation(&self, donor: &UserRecord, body: DonationBody) -> ApiResult<DonationRecord> {
        if donor.user_type != UserType::Donor {
            return Err(ApiError::forbidden("Only donors can post donations"));
        }
        if body.quantity == 0 {
            return Err(ApiError::bad_request("Quantity must be positive"));
        }

        let donation = DonationRecord {
            id: Uuid::new_v4().to_string(),
            donor_id: donor.id.clone(),
            donor_name: donor.name.clone(),
            food_type: body.food_type,
            quantity: body.quantity,
            description: body.description,
            expiry_date: body.expiry_date,
            location: body.location,
            image: body.image,
            status: DonationStatus::Available,
            created_at: Utc::now(),
            volunteer_id: None,
            volunteer_name: None,
            receiver_id: None,
            distance: None,
        };
        self.store.lock().donations.push(donation.clone());
        Ok(donation)
    }

    /// Move a donation along its lifecycle
    ///
    /// Illegal moves are answered with 409. Pickup additionally needs the
    /// latest quality check for the donation to have passed.
    pub fn update_status(
        &self,
        user: &UserRecord,
        donation_id: &str,
        target: DonationStatus,
    ) -> ApiResult<()> {
        let mut store = self.store.lock();
        let check_passed = store.latest_check_passed(donation_id);
        let donation = store.donation_mut(donation_id)?;
        let from = donation.status;

        if !from.can_transition_to(target) {
            let message = if target == DonationStatus::Claimed {
                "Donation already claimed".to_string()
            } else {
                format!("Cannot move donation from {from} to {target}")
            };
            warn!(donation_id, %from, %target, "Rejected status change");
            return Err(ApiError::conflict(message));
        }

        let holds_claim = donation.volunteer_id.as_deref() == Some(user.id.as_str());
        match target {
            DonationStatus::Claimed => {
                if user.user_type != UserType::Volunteer {
                    return Err(ApiError::forbidden("Only volunteers can claim donations"));
                }
                donation.volunteer_id = Some(user.id.clone());
                donation.volunteer_name = Some(user.name.clone());
            }
            DonationStatus::PickedUp | DonationStatus::Delivered => {
                if !holds_claim {
                    return Err(ApiError::forbidden("Donation is claimed by another volunteer"));
                }
                if target == DonationStatus::PickedUp && !check_passed {
                    return Err(ApiError::bad_request(
                        "A passing quality check is required before pickup",
                    ));
                }
            }
            DonationStatus::Expired | DonationStatus::Cancelled => {
                let owns = donation.donor_id == user.id;
                if !(owns || holds_claim || user.user_type == UserType::Admin) {
                    return Err(ApiError::forbidden("Not allowed to close this donation"));
                }
            }
            DonationStatus::Available => {}
        }

        donation.status = target;
        info!(donation_id, %from, %target, "Status changed");
        Ok(())
    }

    // === Quality checks ===

    /// Record an inspection; the donation's status is left alone
    pub fn record_quality_check(&self, user: &UserRecord, body: QualityCheckBody) -> ApiResult<()> {
        let mut store = self.store.lock();
        let donation = store.donation_mut(&body.donation_id)?;
        if donation.status != DonationStatus::Claimed {
            return Err(ApiError::bad_request(
                "Quality checks are only accepted for claimed donations",
            ));
        }
        if donation.volunteer_id.as_deref() != Some(user.id.as_str()) {
            return Err(ApiError::forbidden("Donation is claimed by another volunteer"));
        }

        let overall = OverallQuality::assess(body.expiry_status, body.packaging_status, body.smell_status);
        if overall != body.overall_quality {
            warn!(donation_id = %body.donation_id, "Client verdict differs from server assessment");
        }
        store.checks.push(QualityCheckRecord {
            donation_id: body.donation_id,
            checked_by: user.id.clone(),
            expiry_status: body.expiry_status,
            packaging_status: body.packaging_status,
            smell_status: body.smell_status,
            overall_quality: overall,
            notes: body.notes,
            checked_at: Utc::now(),
        });
        Ok(())
    }

    // === Requests ===

    /// Receivers see their own requests; everyone else sees all of them
    pub fn requests_for(&self, user: &UserRecord) -> Vec<RequestRecord> {
        let store = self.store.lock();
        store
            .requests
            .iter()
            .filter(|r| user.user_type != UserType::Receiver || r.receiver_id == user.id)
            .cloned()
            .collect()
    }

    pub fn create_request(&self, receiver: &UserRecord, body: RequestBody) -> ApiResult<RequestRecord> {
        if receiver.user_type != UserType::Receiver {
            return Err(ApiError::forbidden("Only receivers can request food"));
        }
        if body.quantity == 0 {
            return Err(ApiError::bad_request("Quantity must be positive"));
        }

        let request = RequestRecord {
            id: Uuid::new_v4().to_string(),
            receiver_id: receiver.id.clone(),
            receiver_name: receiver.name.clone(),
            food_type: body.food_type,
            quantity: body.quantity,
            urgency: body.urgency,
            location: body.location,
            notes: body.notes,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
            matched_donation_id: None,
        };
        self.store.lock().requests.push(request.clone());
        Ok(request)
    }

    /// Pair a pending request with an available donation
    pub fn match_request(&self, user: &UserRecord, request_id: &str, donation_id: &str) -> ApiResult<()> {
        if !matches!(user.user_type, UserType::Volunteer | UserType::Admin) {
            return Err(ApiError::forbidden("Only volunteers and admins can match requests"));
        }

        let mut store = self.store.lock();
        let request_index = store
            .requests
            .iter()
            .position(|r| r.id == request_id)
            .ok_or_else(|| ApiError::not_found("Request not found"))?;
        if store.requests[request_index].status != RequestStatus::Pending {
            return Err(ApiError::bad_request("Request is not pending"));
        }
        let receiver_id = store.requests[request_index].receiver_id.clone();

        let donation = store.donation_mut(donation_id)?;
        if donation.status != DonationStatus::Available {
            return Err(ApiError::bad_request("Donation not available"));
        }
        donation.status = DonationStatus::Claimed;
        donation.receiver_id = Some(receiver_id);

        let request = &mut store.requests[request_index];
        request.status = RequestStatus::Matched;
        request.matched_donation_id = Some(donation_id.to_string());
        info!(request_id, donation_id, "Request matched");
        Ok(())
    }

    // === Feedback ===

    pub fn submit_feedback(&self, author: &UserRecord, body: FeedbackBody) -> ApiResult<FeedbackRecord> {
        if !(1..=5).contains(&body.rating) {
            return Err(ApiError::bad_request("Rating must be between 1 and 5"));
        }
        let expected_author = body.feedback_type.author();
        if author.user_type != expected_author {
            return Err(ApiError::forbidden(format!(
                "Only a {expected_author} can leave this feedback"
            )));
        }

        let mut store = self.store.lock();
        let donation = store.donation_mut(&body.donation_id)?.clone();
        let to_user_id = match body.feedback_type {
            FeedbackType::DonorToVolunteer | FeedbackType::ReceiverToVolunteer => donation.volunteer_id,
            FeedbackType::ReceiverToDonor => Some(donation.donor_id),
        };

        let feedback = FeedbackRecord {
            id: Uuid::new_v4().to_string(),
            donation_id: body.donation_id,
            from_user_id: author.id.clone(),
            to_user_id,
            rating: body.rating,
            comment: body.comment,
            feedback_type: body.feedback_type,
            created_at: Utc::now(),
        };
        store.feedback.push(feedback.clone());
        Ok(feedback)
    }

    pub fn feedback_for(&self, user_id: &str) -> Vec<FeedbackRecord> {
        let store = self.store.lock();
        store
            .feedback
            .iter()
            .filter(|f| f.to_user_id.as_deref() == Some(user_id))
            .cloned()
            .collect()
    }

    // === Admin ===

    pub fn stats(&self) -> StatsBody {
        let store = self.store.lock();
        let mut donations_by_status = BTreeMap::new();
        for status in DonationStatus::ALL {
            let count = store.donations.iter().filter(|d| d.status == status).count();
            donations_by_status.insert(status.as_str().to_string(), count as u64);
        }

        StatsBody {
            total_donations: store.donations.len() as u64,
            total_requests: store.requests.len() as u64,
            total_users: store.users.len() as u64,
            active_volunteers: store
                .users
                .iter()
                .filter(|u| u.user_type == UserType::Volunteer)
                .count() as u64,
            donations_by_status,
        }
    }

    pub fn users(&self) -> Vec<UserRecord> {
        self.store.lock().users.clone()
    }

    // === Inspection (for assertions) ===

    pub fn donation(&self, id: &str) -> Option<DonationRecord> {
        self.store.lock().donations.iter().find(|d| d.id == id).cloned()
    }

    pub fn request(&self, id: &str) -> Option<RequestRecord> {
        self.store.lock().requests.iter().find(|r| r.id == id).cloned()
    }

    pub fn quality_checks(&self, donation_id: &str) -> Vec<QualityCheckRecord> {
        self.store
            .lock()
            .checks
            .iter()
            .filter(|c| c.donation_id == donation_id)
            .cloned()
            .collect()
    }

    /// Change a donation's status directly, as another actor would
    pub fn force_status(&self, id: &str, status: DonationStatus) -> ApiResult<()> {
        let mut store = self.store.lock();
        store.donation_mut(id)?.status = status;
        Ok(())
    }
}

fn haversine_km(latitude: f64, longitude: f64, to: &LocationBody) -> f64 {
    let (lat1, lat2) = (latitude.to_radians(), to.latitude.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (to.longitude - longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(latitude: f64, longitude: f64) -> LocationBody {
        LocationBody {
            latitude,
            longitude,
            address: None,
        }
    }

    #[test]
    fn test_haversine() {
        assert!(haversine_km(40.7128, -74.0060, &location(40.7128, -74.0060)).abs() < 1e-9);
        // One degree of latitude
        let km = haversine_km(40.0, -74.0, &location(41.0, -74.0));
        assert!((km - 111.19).abs() < 0.01, "{km}");
    }

    #[test]
    fn test_duplicate_email_is_rejected() {
        let state = BackendState::new();
        let body = || RegisterBody {
            name: "Dana".to_string(),
            email: "dana@example.org".to_string(),
            password: "secret-password".to_string(),
            user_type: UserType::Donor,
            phone: None,
        };
        let auth = state.register(body()).unwrap();
        assert_eq!(state.user_for_token(&auth.token).map(|u| u.id), Some(auth.user.id));
        assert!(matches!(state.register(body()), Err(ApiError::BadRequest(_))));
    }
}
