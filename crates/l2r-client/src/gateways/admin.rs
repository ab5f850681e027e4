//! HTTP implementation of AdminGateway

use async_trait::async_trait;
use tracing::instrument;

use l2r_core::{AdminGateway, AdminStats, GatewayResult, User};

use crate::http::ApiClient;
use crate::models::{AdminStatsModel, UserModel};

#[derive(Debug, Clone)]
pub struct HttpAdminGateway {
    client: ApiClient,
}

impl HttpAdminGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AdminGateway for HttpAdminGateway {
    #[instrument(skip(self))]
    async fn stats(&self) -> GatewayResult<AdminStats> {
        let model: AdminStatsModel = self.client.get("/admin/stats", &[]).await?;
        AdminStats::try_from(model)
    }

    #[instrument(skip(self))]
    async fn users(&self) -> GatewayResult<Vec<User>> {
        let models: Vec<UserModel> = self.client.get("/admin/users", &[]).await?;
        models.into_iter().map(User::try_from).collect()
    }
}
