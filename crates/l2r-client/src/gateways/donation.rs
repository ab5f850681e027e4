//! HTTP implementation of DonationGateway

use async_trait::async_trait;
use tracing::instrument;

use l2r_core::{
    Coordinates, Donation, DonationGateway, DonationId, DonationStatus, GatewayResult, NewDonation,
};

use crate::http::ApiClient;
use crate::models::{DonationCreateBody, DonationModel};

#[derive(Debug, Clone)]
pub struct HttpDonationGateway {
    client: ApiClient,
}

impl HttpDonationGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn to_donations(models: Vec<DonationModel>) -> GatewayResult<Vec<Donation>> {
    models.into_iter().map(Donation::try_from).collect()
}

#[async_trait]
impl DonationGateway for HttpDonationGateway {
    #[instrument(skip(self))]
    async fn list_donations(&self, status: Option<DonationStatus>) -> GatewayResult<Vec<Donation>> {
        let query: Vec<(&str, String)> = status
            .map(|s| ("status", s.as_str().to_string()))
            .into_iter()
            .collect();
        let models: Vec<DonationModel> = self.client.get("/donations", &query).await?;
        to_donations(models)
    }

    #[instrument(skip(self))]
    async fn list_available(&self, near: Option<Coordinates>) -> GatewayResult<Vec<Donation>> {
        let query = match near {
            Some(c) => vec![
                ("latitude", c.latitude.to_string()),
                ("longitude", c.longitude.to_string()),
            ],
            None => Vec::new(),
        };
        let models: Vec<DonationModel> = self.client.get("/donations/available", &query).await?;
        to_donations(models)
    }

    #[instrument(skip(self, donation), fields(food_type = %donation.food_type))]
    async fn create(&self, donation: &NewDonation) -> GatewayResult<Donation> {
        let body = DonationCreateBody::from_new(donation);
        let model: DonationModel = self.client.post("/donations", &body).await?;
        Donation::try_from(model)
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: &DonationId, status: DonationStatus) -> GatewayResult<()> {
        self.client
            .patch_query(
                &format!("/donations/{id}/status"),
                &[("status", status.as_str().to_string())],
            )
            .await
    }
}
