//! # l2r-client
//!
//! HTTP layer implementing the gateway traits against the REST API with
//! `reqwest`.
//!
//! ## Overview
//!
//! - [`ApiClient`]: the shared HTTP client (base URL, timeouts, bearer token
//!   from the injected [`SessionHandle`](l2r_common::SessionHandle))
//! - Wire models with camelCase serde derives
//! - Wire → domain mappers
//! - Gateway implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use l2r_client::{ApiClient, HttpDonationGateway};
//! use l2r_common::{ClientConfig, SessionHandle};
//! use l2r_core::DonationGateway;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env()?;
//!     let client = ApiClient::new(&config.api, SessionHandle::new())?;
//!     let donations = HttpDonationGateway::new(client);
//!
//!     let available = donations.list_available(None).await?;
//!     Ok(())
//! }
//! ```

pub mod gateways;
pub mod http;
pub mod mappers;
pub mod models;

// Re-export commonly used types
pub use gateways::{
    HttpAdminGateway, HttpAuthGateway, HttpDonationGateway, HttpFeedbackGateway, HttpGateways,
    HttpQualityCheckGateway, HttpRequestGateway,
};
pub use http::ApiClient;
