//! In-memory backend for service tests
//!
//! Implements every gateway trait over a mutex-guarded store and enforces the
//! same lifecycle rules as the real API, so services can be exercised without
//! a server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use l2r_common::{AuthToken, SessionContext, SessionHandle};
use l2r_core::{
    AdminGateway, AdminStats, AuthGateway, AuthResponse, Coordinates, Credentials, DomainError,
    Donation, DonationGateway, DonationId, DonationStatus, Feedback, FeedbackGateway, FeedbackId,
    FeedbackType, FixedLocation, FoodRequest, GatewayResult, Location, NewDonation, NewFeedback,
    NewFoodRequest, QualityCheck, QualityCheckGateway, Quantity, Registration, RequestGateway,
    RequestId, RequestStatus, Urgency, User, UserId, UserType,
};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct Store {
    users: Vec<(User, String)>,
    donations: Vec<Donation>,
    requests: Vec<FoodRequest>,
    checks: Vec<QualityCheck>,
    feedback: Vec<Feedback>,
    next_id: usize,
}

impl Store {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn donation_mut(&mut self, id: &DonationId) -> GatewayResult<&mut Donation> {
        self.donations
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or_else(|| DomainError::NotFound("Donation not found".to_string()))
    }
}

/// Shared in-memory backend
#[derive(Clone)]
pub(crate) struct FakeBackend {
    store: Arc<Mutex<Store>>,
    session: SessionHandle,
    calls: Arc<AtomicUsize>,
    failure: Arc<Mutex<Option<fn() -> DomainError>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(Store::default())),
            session: SessionHandle::new(),
            calls: Arc::new(AtomicUsize::new(0)),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Builder with every gateway pointing at this backend
    pub fn builder(&self) -> ServiceContextBuilder {
        let gateway = Arc::new(self.clone());
        ServiceContext::builder()
            .auth_gateway(gateway.clone())
            .donation_gateway(gateway.clone())
            .quality_gateway(gateway.clone())
            .request_gateway(gateway.clone())
            .feedback_gateway(gateway.clone())
            .admin_gateway(gateway)
            .session(self.session.clone())
    }

    /// Context located in Manhattan, with no camera
    pub fn context(&self) -> ServiceContext {
        self.builder()
            .location(Arc::new(FixedLocation(manhattan())))
            .build()
            .unwrap()
    }

    /// Number of gateway calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every gateway call fail with a network error
    pub fn set_offline(&self, offline: bool) {
        let failure: Option<fn() -> DomainError> = if offline {
            Some(|| DomainError::Network("connection refused".to_string()))
        } else {
            None
        };
        *self.failure.lock().unwrap() = failure;
    }

    /// Make every gateway call fail with `failure()`
    pub fn fail_with(&self, failure: fn() -> DomainError) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    /// Register a user directly and return it
    pub fn add_user(&self, user_type: UserType) -> User {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id(user_type.as_str());
        let user = User::new(
            UserId::new(&id),
            format!("Test {user_type}"),
            format!("{id}@example.org"),
            user_type,
        );
        store.users.push((user.clone(), "secret-password".to_string()));
        user
    }

    /// Install `user` as the signed-in session user
    pub fn sign_in(&self, user: &User) {
        self.session.install(SessionContext::new(
            AuthToken::new(format!("token-{}", user.id)),
            user.clone(),
        ));
    }

    /// Seed a donation in `status`, owned by a fresh donor
    pub fn seed_donation(&self, status: DonationStatus) -> Donation {
        let donor = self.add_user(UserType::Donor);
        let mut store = self.store.lock().unwrap();
        let id = store.next_id("donation");
        let now = Utc::now();
        let donation = Donation {
            id: DonationId::new(id),
            donor_id: donor.id,
            donor_name: donor.name,
            food_type: "Bread".to_string(),
            quantity: Quantity::new(12).unwrap(),
            description: None,
            expiry_date: now + Duration::days(2),
            location: manhattan(),
            image: None,
            status,
            created_at: now,
            volunteer_id: None,
            volunteer_name: None,
            receiver_id: None,
            distance_km: None,
        };
        store.donations.push(donation.clone());
        donation
    }

    /// Seed a pending request with `urgency`
    pub fn seed_request(&self, urgency: Urgency) -> FoodRequest {
        let receiver = self.add_user(UserType::Receiver);
        let mut store = self.store.lock().unwrap();
        let id = store.next_id("request");
        let request = FoodRequest {
            id: RequestId::new(id),
            receiver_id: receiver.id,
            receiver_name: receiver.name,
            food_type: "Rice".to_string(),
            quantity: Quantity::new(4).unwrap(),
            urgency,
            location: manhattan(),
            notes: None,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
            matched_donation_id: None,
        };
        store.requests.push(request.clone());
        request
    }

    /// Change a donation behind the client's back (another client won a race)
    pub fn force_status(&self, id: &DonationId, status: DonationStatus, volunteer: Option<&User>) {
        let mut store = self.store.lock().unwrap();
        let donation = store.donation_mut(id).unwrap();
        donation.status = status;
        if let Some(volunteer) = volunteer {
            donation.volunteer_id = Some(volunteer.id.clone());
            donation.volunteer_name = Some(volunteer.name.clone());
        }
    }

    pub fn donation(&self, id: &DonationId) -> Donation {
        let store = self.store.lock().unwrap();
        store.donations.iter().find(|d| &d.id == id).cloned().unwrap()
    }

    pub fn request(&self, id: &RequestId) -> FoodRequest {
        let store = self.store.lock().unwrap();
        store.requests.iter().find(|r| &r.id == id).cloned().unwrap()
    }

    pub fn quality_checks(&self) -> Vec<QualityCheck> {
        self.store.lock().unwrap().checks.clone()
    }

    fn enter(&self) -> GatewayResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = *self.failure.lock().unwrap() {
            return Err(failure());
        }
        Ok(())
    }

    fn caller(&self) -> GatewayResult<User> {
        self.session
            .user()
            .ok_or_else(|| DomainError::Unauthorized("Not authenticated".to_string()))
    }
}

/// Context for a freshly registered, signed-in user of `user_type`
pub(crate) fn context_for(backend: &FakeBackend, user_type: UserType) -> ServiceContext {
    let user = backend.add_user(user_type);
    backend.sign_in(&user);
    backend.context()
}

pub(crate) fn manhattan() -> Location {
    Location::new(Coordinates::new(40.7128, -74.0060).unwrap()).with_address("New York, NY")
}

#[async_trait]
impl AuthGateway for FakeBackend {
    async fn register(&self, registration: &Registration) -> GatewayResult<AuthResponse> {
        self.enter()?;
        let mut store = self.store.lock().unwrap();
        if store.users.iter().any(|(u, _)| u.email == registration.email) {
            return Err(DomainError::Rejected("Email already registered".to_string()));
        }
        let id = store.next_id(registration.user_type.as_str());
        let mut user = User::new(
            UserId::new(id),
            registration.name.clone(),
            registration.email.clone(),
            registration.user_type,
        );
        user.phone = registration.phone.clone();
        store.users.push((user.clone(), registration.password.clone()));
        Ok(AuthResponse {
            token: format!("token-{}", user.id),
            user,
        })
    }

    async fn login(&self, credentials: &Credentials) -> GatewayResult<AuthResponse> {
        self.enter()?;
        let store = self.store.lock().unwrap();
        store
            .users
            .iter()
            .find(|(u, password)| u.email == credentials.email && *password == credentials.password)
            .map(|(user, _)| AuthResponse {
                token: format!("token-{}", user.id),
                user: user.clone(),
            })
            .ok_or_else(|| DomainError::Unauthorized("Invalid email or password".to_string()))
    }

    async fn me(&self) -> GatewayResult<User> {
        self.enter()?;
        let caller = self.caller()?;
        let store = self.store.lock().unwrap();
        store
            .users
            .iter()
            .find(|(u, _)| u.id == caller.id)
            .map(|(u, _)| u.clone())
            .ok_or_else(|| DomainError::Unauthorized("Invalid token".to_string()))
    }
}

#[async_trait]
impl DonationGateway for FakeBackend {
    async fn list_donations(&self, status: Option<DonationStatus>) -> GatewayResult<Vec<Donation>> {
        self.enter()?;
        let caller = self.caller()?;
        let store = self.store.lock().unwrap();
        Ok(store
            .donations
            .iter()
            .filter(|d| caller.user_type != UserType::Donor || d.donor_id == caller.id)
            .filter(|d| status.map_or(true, |s| d.status == s))
            .cloned()
            .collect())
    }

    async fn list_available(&self, near: Option<Coordinates>) -> GatewayResult<Vec<Donation>> {
        self.enter()?;
        let store = self.store.lock().unwrap();
        let mut donations: Vec<Donation> = store
            .donations
            .iter()
            .filter(|d| d.is_available())
            .cloned()
            .collect();
        if let Some(near) = near {
            for d in &mut donations {
                let dlat = d.location.latitude() - near.latitude;
                let dlon = d.location.longitude() - near.longitude;
                let km = (dlat * dlat + dlon * dlon).sqrt() * 111.0;
                d.distance_km = Some((km * 100.0).round() / 100.0);
            }
            donations.sort_by(|a, b| a.distance_km.partial_cmp(&b.distance_km).unwrap());
        }
        Ok(donations)
    }

    async fn create(&self, new: &NewDonation) -> GatewayResult<Donation> {
        self.enter()?;
        let caller = self.caller()?;
        if caller.user_type != UserType::Donor {
            return Err(DomainError::Forbidden("Only donors can create donations".to_string()));
        }
        let mut store = self.store.lock().unwrap();
        let id = store.next_id("donation");
        let donation = Donation {
            id: DonationId::new(id),
            donor_id: caller.id,
            donor_name: caller.name,
            food_type: new.food_type.clone(),
            quantity: new.quantity,
            description: new.description.clone(),
            expiry_date: new.expiry_date,
            location: new.location.clone(),
            image: new.image.as_ref().map(|i| i.to_data_uri()),
            status: DonationStatus::Available,
            created_at: Utc::now(),
            volunteer_id: None,
            volunteer_name: None,
            receiver_id: None,
            distance_km: None,
        };
        store.donations.push(donation.clone());
        Ok(donation)
    }

    async fn update_status(&self, id: &DonationId, status: DonationStatus) -> GatewayResult<()> {
        self.enter()?;
        let caller = self.caller()?;
        let mut store = self.store.lock().unwrap();
        let passed = store
            .checks
            .iter()
            .any(|c| c.donation_id() == id && c.passed());
        let donation = store.donation_mut(id)?;

        if !donation.status.can_transition_to(status) {
            return Err(DomainError::Conflict(if status == DonationStatus::Claimed {
                "Donation already claimed".to_string()
            } else {
                format!("Cannot move donation from {} to {status}", donation.status)
            }));
        }
        if status == DonationStatus::PickedUp && !passed {
            return Err(DomainError::Rejected(
                "A passing quality check is required".to_string(),
            ));
        }

        donation.status = status;
        if status == DonationStatus::Claimed {
            donation.volunteer_id = Some(caller.id);
            donation.volunteer_name = Some(caller.name);
        }
        Ok(())
    }
}

#[async_trait]
impl QualityCheckGateway for FakeBackend {
    async fn submit(&self, check: &QualityCheck) -> GatewayResult<()> {
        self.enter()?;
        let mut store = self.store.lock().unwrap();
        if store.donation_mut(check.donation_id())?.status != DonationStatus::Claimed {
            return Err(DomainError::Rejected(
                "Quality checks are only accepted for claimed donations".to_string(),
            ));
        }
        store.checks.push(check.clone());
        Ok(())
    }
}

#[async_trait]
impl RequestGateway for FakeBackend {
    async fn list_requests(&self) -> GatewayResult<Vec<FoodRequest>> {
        self.enter()?;
        let caller = self.caller()?;
        let store = self.store.lock().unwrap();
        Ok(store
            .requests
            .iter()
            .filter(|r| caller.user_type != UserType::Receiver || r.receiver_id == caller.id)
            .cloned()
            .collect())
    }

    async fn create(&self, new: &NewFoodRequest) -> GatewayResult<FoodRequest> {
        self.enter()?;
        let caller = self.caller()?;
        let mut store = self.store.lock().unwrap();
        let id = store.next_id("request");
        let request = FoodRequest {
            id: RequestId::new(id),
            receiver_id: caller.id,
            receiver_name: caller.name,
            food_type: new.food_type.clone(),
            quantity: new.quantity,
            urgency: new.urgency,
            location: new.location.clone(),
            notes: new.notes.clone(),
            status: RequestStatus::Pending,
            created_at: Utc::now(),
            matched_donation_id: None,
        };
        store.requests.push(request.clone());
        Ok(request)
    }

    async fn match_donation(
        &self,
        request_id: &RequestId,
        donation_id: &DonationId,
    ) -> GatewayResult<()> {
        self.enter()?;
        let mut store = self.store.lock().unwrap();
        let receiver_id = store
            .requests
            .iter()
            .find(|r| &r.id == request_id)
            .map(|r| r.receiver_id.clone())
            .ok_or_else(|| DomainError::NotFound("Request or donation not found".to_string()))?;

        let donation = store.donation_mut(donation_id)?;
        if !donation.is_available() {
            return Err(DomainError::Rejected("Donation not available".to_string()));
        }
        donation.status = DonationStatus::Claimed;
        donation.receiver_id = Some(receiver_id);

        if let Some(request) = store.requests.iter_mut().find(|r| &r.id == request_id) {
            request.status = RequestStatus::Matched;
            request.matched_donation_id = Some(donation_id.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl FeedbackGateway for FakeBackend {
    async fn submit(&self, new: &NewFeedback) -> GatewayResult<Feedback> {
        self.enter()?;
        let caller = self.caller()?;
        let mut store = self.store.lock().unwrap();
        let donation = store.donation_mut(&new.donation_id)?.clone();
        let to_user_id = match new.feedback_type {
            FeedbackType::DonorToVolunteer | FeedbackType::ReceiverToVolunteer => {
                donation.volunteer_id
            }
            FeedbackType::ReceiverToDonor => Some(donation.donor_id),
        };
        let feedback = Feedback {
            id: FeedbackId::new(store.next_id("feedback")),
            donation_id: new.donation_id.clone(),
            from_user_id: caller.id,
            to_user_id,
            rating: new.rating,
            comment: new.comment.clone(),
            feedback_type: new.feedback_type,
            created_at: Utc::now(),
        };
        store.feedback.push(feedback.clone());
        Ok(feedback)
    }

    async fn for_user(&self, user_id: &UserId) -> GatewayResult<Vec<Feedback>> {
        self.enter()?;
        let store = self.store.lock().unwrap();
        Ok(store
            .feedback
            .iter()
            .filter(|f| f.to_user_id.as_ref() == Some(user_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AdminGateway for FakeBackend {
    async fn stats(&self) -> GatewayResult<AdminStats> {
        self.enter()?;
        let store = self.store.lock().unwrap();
        let mut stats = AdminStats {
            total_donations: store.donations.len() as u64,
            total_requests: store.requests.len() as u64,
            total_users: store.users.len() as u64,
            active_volunteers: store
                .users
                .iter()
                .filter(|(u, _)| u.user_type == UserType::Volunteer)
                .count() as u64,
            ..AdminStats::default()
        };
        for status in DonationStatus::ALL {
            let count = store.donations.iter().filter(|d| d.status == status).count();
            stats.donations_by_status.insert(status, count as u64);
        }
        Ok(stats)
    }

    async fn users(&self) -> GatewayResult<Vec<User>> {
        self.enter()?;
        let store = self.store.lock().unwrap();
        Ok(store.users.iter().map(|(u, _)| u.clone()).collect())
    }
}
