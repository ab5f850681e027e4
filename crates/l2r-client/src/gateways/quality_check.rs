//! HTTP implementation of QualityCheckGateway

use async_trait::async_trait;
use tracing::instrument;

use l2r_core::{GatewayResult, QualityCheck, QualityCheckGateway};

use crate::http::ApiClient;
use crate::models::QualityCheckBody;

#[derive(Debug, Clone)]
pub struct HttpQualityCheckGateway {
    client: ApiClient,
}

impl HttpQualityCheckGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QualityCheckGateway for HttpQualityCheckGateway {
    #[instrument(skip(self, check), fields(donation_id = %check.donation_id(), overall = %check.overall()))]
    async fn submit(&self, check: &QualityCheck) -> GatewayResult<()> {
        self.client
            .post_unit("/quality-check", &QualityCheckBody::from_check(check))
            .await
    }
}
