//! Food request wire models

use chrono::{DateTime, Utc};
use l2r_core::Urgency;
use serde::{Deserialize, Serialize};

use super::LocationModel;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRequestModel {
    pub id: String,
    pub receiver_id: String,
    pub receiver_name: String,
    pub food_type: String,
    pub quantity: i64,
    pub urgency: String,
    pub location: LocationModel,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: String,
    #[serde(deserialize_with = "super::datetime::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub matched_donation_id: Option<String>,
}

/// `POST /requests` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRequestCreateBody<'a> {
    pub food_type: &'a str,
    pub quantity: u32,
    pub urgency: Urgency,
    pub location: LocationModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'a str>,
}
