//! HTTP implementation of RequestGateway

use async_trait::async_trait;
use tracing::instrument;

use l2r_core::{DonationId, FoodRequest, GatewayResult, NewFoodRequest, RequestGateway, RequestId};

use crate::http::ApiClient;
use crate::models::{FoodRequestCreateBody, FoodRequestModel};

#[derive(Debug, Clone)]
pub struct HttpRequestGateway {
    client: ApiClient,
}

impl HttpRequestGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RequestGateway for HttpRequestGateway {
    #[instrument(skip(self))]
    async fn list_requests(&self) -> GatewayResult<Vec<FoodRequest>> {
        let models: Vec<FoodRequestModel> = self.client.get("/requests", &[]).await?;
        models.into_iter().map(FoodRequest::try_from).collect()
    }

    #[instrument(skip(self, request), fields(food_type = %request.food_type, urgency = %request.urgency))]
    async fn create(&self, request: &NewFoodRequest) -> GatewayResult<FoodRequest> {
        let body = FoodRequestCreateBody::from_new(request);
        let model: FoodRequestModel = self.client.post("/requests", &body).await?;
        FoodRequest::try_from(model)
    }

    #[instrument(skip(self))]
    async fn match_donation(
        &self,
        request_id: &RequestId,
        donation_id: &DonationId,
    ) -> GatewayResult<()> {
        self.client
            .post_query(
                &format!("/requests/{request_id}/match"),
                &[("donation_id", donation_id.to_string())],
            )
            .await
    }
}
