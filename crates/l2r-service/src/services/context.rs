//! Service context - dependency container for services
//!
//! Holds the gateways, device providers, session handle and store, and the
//! quality ledger shared by every service.

use std::sync::Arc;

use l2r_client::{ApiClient, HttpGateways};
use l2r_common::{MemorySessionStore, SessionHandle, SessionStore};
use l2r_core::{
    AdminGateway, AuthGateway, DeniedLocation, DomainError, DonationGateway, DonationId,
    FeedbackGateway, ImageSource, LocationProvider, NoImage, QualityCheckGateway, RequestGateway,
};
use tracing::warn;

use super::error::{ServiceError, ServiceResult};
use super::ledger::QualityLedger;

/// Service context containing all dependencies
///
/// Cloning is cheap; clones share the session and the quality ledger.
#[derive(Clone)]
pub struct ServiceContext {
    // Gateways
    auth_gateway: Arc<dyn AuthGateway>,
    donation_gateway: Arc<dyn DonationGateway>,
    quality_gateway: Arc<dyn QualityCheckGateway>,
    request_gateway: Arc<dyn RequestGateway>,
    feedback_gateway: Arc<dyn FeedbackGateway>,
    admin_gateway: Arc<dyn AdminGateway>,

    // Devices
    location: Arc<dyn LocationProvider>,
    images: Arc<dyn ImageSource>,

    // Session
    session: SessionHandle,
    session_store: Arc<dyn SessionStore>,

    quality_ledger: Arc<QualityLedger>,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Gateways ===

    pub fn auth_gateway(&self) -> &dyn AuthGateway {
        self.auth_gateway.as_ref()
    }

    pub fn donation_gateway(&self) -> &dyn DonationGateway {
        self.donation_gateway.as_ref()
    }

    pub fn quality_gateway(&self) -> &dyn QualityCheckGateway {
        self.quality_gateway.as_ref()
    }

    pub fn request_gateway(&self) -> &dyn RequestGateway {
        self.request_gateway.as_ref()
    }

    pub fn feedback_gateway(&self) -> &dyn FeedbackGateway {
        self.feedback_gateway.as_ref()
    }

    pub fn admin_gateway(&self) -> &dyn AdminGateway {
        self.admin_gateway.as_ref()
    }

    // === Devices ===

    pub fn location(&self) -> &dyn LocationProvider {
        self.location.as_ref()
    }

    pub fn images(&self) -> &dyn ImageSource {
        self.images.as_ref()
    }

    // === Session ===

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub fn session_store(&self) -> &dyn SessionStore {
        self.session_store.as_ref()
    }

    /// Quality checks recorded in this session
    pub fn quality_ledger(&self) -> &QualityLedger {
        &self.quality_ledger
    }

    // === Conflicts ===

    /// Map a gateway failure on donation `id` to a service error
    ///
    /// `Conflict` and `Rejected` mean the caller acted on a stale snapshot:
    /// they become a conflict carrying the donation as the server now sees
    /// it. Anything else passes through unchanged.
    pub(crate) async fn conflict_or(&self, err: DomainError, id: &DonationId) -> ServiceError {
        match err {
            DomainError::Conflict(message) | DomainError::Rejected(message) => {
                let refreshed = match self.donation_gateway().find(id).await {
                    Ok(found) => found,
                    Err(e) => {
                        warn!(error = %e, "Could not re-read donation after conflict");
                        None
                    }
                };
                warn!(
                    donation_id = %id,
                    server_status = ?refreshed.as_ref().map(|d| d.status),
                    reason = %message,
                    "Rejected by server"
                );
                ServiceError::conflict_with(message, refreshed)
            }
            other => other.into(),
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("gateways", &"...")
            .field("session", &self.session)
            .field("quality_ledger", &self.quality_ledger.len())
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    auth_gateway: Option<Arc<dyn AuthGateway>>,
    donation_gateway: Option<Arc<dyn DonationGateway>>,
    quality_gateway: Option<Arc<dyn QualityCheckGateway>>,
    request_gateway: Option<Arc<dyn RequestGateway>>,
    feedback_gateway: Option<Arc<dyn FeedbackGateway>>,
    admin_gateway: Option<Arc<dyn AdminGateway>>,
    location: Option<Arc<dyn LocationProvider>>,
    images: Option<Arc<dyn ImageSource>>,
    session: Option<SessionHandle>,
    session_store: Option<Arc<dyn SessionStore>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the HTTP gateways over `client`, sharing its session handle
    pub fn http(self, client: &ApiClient) -> Self {
        let gateways = HttpGateways::new(client);
        self.session(client.session().clone())
            .auth_gateway(gateways.auth)
            .donation_gateway(gateways.donations)
            .quality_gateway(gateways.quality_checks)
            .request_gateway(gateways.requests)
            .feedback_gateway(gateways.feedback)
            .admin_gateway(gateways.admin)
    }

    pub fn auth_gateway(mut self, gateway: Arc<dyn AuthGateway>) -> Self {
        self.auth_gateway = Some(gateway);
        self
    }

    pub fn donation_gateway(mut self, gateway: Arc<dyn DonationGateway>) -> Self {
        self.donation_gateway = Some(gateway);
        self
    }

    pub fn quality_gateway(mut self, gateway: Arc<dyn QualityCheckGateway>) -> Self {
        self.quality_gateway = Some(gateway);
        self
    }

    pub fn request_gateway(mut self, gateway: Arc<dyn RequestGateway>) -> Self {
        self.request_gateway = Some(gateway);
        self
    }

    pub fn feedback_gateway(mut self, gateway: Arc<dyn FeedbackGateway>) -> Self {
        self.feedback_gateway = Some(gateway);
        self
    }

    pub fn admin_gateway(mut self, gateway: Arc<dyn AdminGateway>) -> Self {
        self.admin_gateway = Some(gateway);
        self
    }

    /// Defaults to a provider that always reports permission denied
    pub fn location(mut self, provider: Arc<dyn LocationProvider>) -> Self {
        self.location = Some(provider);
        self
    }

    /// Defaults to a source that never yields an image
    pub fn images(mut self, source: Arc<dyn ImageSource>) -> Self {
        self.images = Some(source);
        self
    }

    /// Defaults to a fresh, signed-out handle
    pub fn session(mut self, session: SessionHandle) -> Self {
        self.session = Some(session);
        self
    }

    /// Defaults to an in-memory store
    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if a gateway is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T: ?Sized>(value: Option<Arc<T>>, name: &str) -> ServiceResult<Arc<T>> {
            value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
        }

        Ok(ServiceContext {
            auth_gateway: required(self.auth_gateway, "auth_gateway")?,
            donation_gateway: required(self.donation_gateway, "donation_gateway")?,
            quality_gateway: required(self.quality_gateway, "quality_gateway")?,
            request_gateway: required(self.request_gateway, "request_gateway")?,
            feedback_gateway: required(self.feedback_gateway, "feedback_gateway")?,
            admin_gateway: required(self.admin_gateway, "admin_gateway")?,
            location: self.location.unwrap_or_else(|| Arc::new(DeniedLocation)),
            images: self.images.unwrap_or_else(|| Arc::new(NoImage)),
            session: self.session.unwrap_or_default(),
            session_store: self
                .session_store
                .unwrap_or_else(|| Arc::new(MemorySessionStore::new())),
            quality_ledger: Arc::new(QualityLedger::new()),
        })
    }
}
