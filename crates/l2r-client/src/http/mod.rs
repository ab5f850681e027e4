//! HTTP client plumbing

mod client;
mod error;

pub use client::ApiClient;
pub use error::{error_detail, map_status, map_transport_error};
