//! HTTP implementation of AuthGateway

use async_trait::async_trait;
use tracing::instrument;

use l2r_core::{AuthGateway, AuthResponse, Credentials, GatewayResult, Registration, User};

use crate::http::ApiClient;
use crate::mappers::auth_response_from_wire;
use crate::models::{AuthResponseModel, LoginBody, RegisterBody, UserModel};

#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    client: ApiClient,
}

impl HttpAuthGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    #[instrument(skip(self, registration), fields(email = %registration.email))]
    async fn register(&self, registration: &Registration) -> GatewayResult<AuthResponse> {
        let body = RegisterBody::from_registration(registration);
        let model: AuthResponseModel = self.client.post("/register", &body).await?;
        auth_response_from_wire(model)
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    async fn login(&self, credentials: &Credentials) -> GatewayResult<AuthResponse> {
        let body = LoginBody::from_credentials(credentials);
        let model: AuthResponseModel = self.client.post("/login", &body).await?;
        auth_response_from_wire(model)
    }

    #[instrument(skip(self))]
    async fn me(&self) -> GatewayResult<User> {
        let model: UserModel = self.client.get("/me", &[]).await?;
        User::try_from(model)
    }
}
