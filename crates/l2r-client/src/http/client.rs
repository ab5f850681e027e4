//! Shared HTTP client
//!
//! One `reqwest::Client` (connection pool, timeouts) plus the API base URL
//! and the session handle that supplies the bearer token.

use std::sync::Arc;

use l2r_common::{ApiConfig, AppError, AppResult, SessionHandle};
use l2r_core::GatewayResult;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::error::{map_status, map_transport_error};

/// Cheaply cloneable REST client
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    session: SessionHandle,
}

impl ApiClient {
    /// Build a client for the configured backend
    pub fn new(config: &ApiConfig, session: SessionHandle) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(concat!("l2r-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AppError::internal)?;

        Ok(Self {
            http,
            base_url: Arc::from(config.base_url()),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session handle this client reads its token from
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token.as_str()),
            None => builder,
        }
    }

    /// `GET path?query` and decode the JSON body
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> GatewayResult<T> {
        self.send_json(self.request(Method::GET, path).query(query))
            .await
    }

    /// `POST path` with a JSON body and decode the JSON response
    pub async fn post<B, T>(&self, path: &str, body: &B) -> GatewayResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    /// `POST path` with a JSON body, ignoring the response body
    pub async fn post_unit<B>(&self, path: &str, body: &B) -> GatewayResult<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.send(self.request(Method::POST, path).json(body))
            .await
            .map(drop)
    }

    /// Bodiless `POST path?query`, ignoring the response body
    pub async fn post_query(&self, path: &str, query: &[(&str, String)]) -> GatewayResult<()> {
        self.send(self.request(Method::POST, path).query(query))
            .await
            .map(drop)
    }

    /// Bodiless `PATCH path?query`, ignoring the response body
    pub async fn patch_query(&self, path: &str, query: &[(&str, String)]) -> GatewayResult<()> {
        self.send(self.request(Method::PATCH, path).query(query))
            .await
            .map(drop)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> GatewayResult<T> {
        let response = self.send(builder).await?;
        response.json::<T>().await.map_err(map_transport_error)
    }

    async fn send(&self, builder: RequestBuilder) -> GatewayResult<reqwest::Response> {
        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "Request failed before a response was received");
            map_transport_error(e)
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "Response received");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = map_status(status, &body);
        if status.is_server_error() {
            warn!(status = status.as_u16(), error = %err, "Server error");
        }
        Err(err)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.session.is_authenticated())
            .finish()
    }
}
