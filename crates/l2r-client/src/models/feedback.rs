//! Feedback wire models

use chrono::{DateTime, Utc};
use l2r_core::FeedbackType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackModel {
    pub id: String,
    pub donation_id: String,
    pub from_user_id: String,
    #[serde(default)]
    pub to_user_id: Option<String>,
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
    pub feedback_type: String,
    #[serde(deserialize_with = "super::datetime::deserialize")]
    pub created_at: DateTime<Utc>,
}

/// `POST /feedback` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackCreateBody<'a> {
    pub donation_id: &'a str,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<&'a str>,
    pub feedback_type: FeedbackType,
}
