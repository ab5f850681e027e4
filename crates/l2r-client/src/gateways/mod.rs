//! Gateway implementations
//!
//! HTTP implementations of the gateway traits defined in l2r-core. Each
//! gateway owns a clone of the shared [`ApiClient`](crate::ApiClient).

mod admin;
mod auth;
mod donation;
mod feedback;
mod quality_check;
mod request;

use std::sync::Arc;

pub use admin::HttpAdminGateway;
pub use auth::HttpAuthGateway;
pub use donation::HttpDonationGateway;
pub use feedback::HttpFeedbackGateway;
pub use quality_check::HttpQualityCheckGateway;
pub use request::HttpRequestGateway;

use crate::http::ApiClient;

/// Every HTTP gateway over one client, ready to hand to the service layer
#[derive(Clone)]
pub struct HttpGateways {
    pub auth: Arc<HttpAuthGateway>,
    pub donations: Arc<HttpDonationGateway>,
    pub quality_checks: Arc<HttpQualityCheckGateway>,
    pub requests: Arc<HttpRequestGateway>,
    pub feedback: Arc<HttpFeedbackGateway>,
    pub admin: Arc<HttpAdminGateway>,
}

impl HttpGateways {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            auth: Arc::new(HttpAuthGateway::new(client.clone())),
            donations: Arc::new(HttpDonationGateway::new(client.clone())),
            quality_checks: Arc::new(HttpQualityCheckGateway::new(client.clone())),
            requests: Arc::new(HttpRequestGateway::new(client.clone())),
            feedback: Arc::new(HttpFeedbackGateway::new(client.clone())),
            admin: Arc::new(HttpAdminGateway::new(client.clone())),
        }
    }
}
