//! HTTP implementation of FeedbackGateway

use async_trait::async_trait;
use tracing::instrument;

use l2r_core::{Feedback, FeedbackGateway, GatewayResult, NewFeedback, UserId};

use crate::http::ApiClient;
use crate::models::{FeedbackCreateBody, FeedbackModel};

#[derive(Debug, Clone)]
pub struct HttpFeedbackGateway {
    client: ApiClient,
}

impl HttpFeedbackGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedbackGateway for HttpFeedbackGateway {
    #[instrument(skip(self, feedback), fields(donation_id = %feedback.donation_id))]
    async fn submit(&self, feedback: &NewFeedback) -> GatewayResult<Feedback> {
        let body = FeedbackCreateBody::from_new(feedback);
        let model: FeedbackModel = self.client.post("/feedback", &body).await?;
        Feedback::try_from(model)
    }

    #[instrument(skip(self))]
    async fn for_user(&self, user_id: &UserId) -> GatewayResult<Vec<Feedback>> {
        let models: Vec<FeedbackModel> =
            self.client.get(&format!("/feedback/{user_id}"), &[]).await?;
        models.into_iter().map(Feedback::try_from).collect()
    }
}
