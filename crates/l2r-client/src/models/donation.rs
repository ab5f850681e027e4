//! Donation and quality check wire models

use chrono::{DateTime, Utc};
use l2r_core::{ExpiryStatus, OverallQuality, PackagingStatus, SmellStatus};
use serde::{Deserialize, Serialize};

/// `{latitude, longitude, address}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationModel {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address: Option<String>,
}

/// Donation as returned by the donation endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationModel {
    pub id: String,
    pub donor_id: String,
    pub donor_name: String,
    pub food_type: String,
    pub quantity: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "super::datetime::deserialize")]
    pub expiry_date: DateTime<Utc>,
    pub location: LocationModel,
    #[serde(default)]
    pub image: Option<String>,
    pub status: String,
    #[serde(deserialize_with = "super::datetime::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub volunteer_id: Option<String>,
    #[serde(default)]
    pub volunteer_name: Option<String>,
    #[serde(default)]
    pub receiver_id: Option<String>,
    /// Kilometres from the caller; only on geo-ranked listings
    #[serde(default)]
    pub distance: Option<f64>,
}

/// `POST /donations` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationCreateBody<'a> {
    pub food_type: &'a str,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub expiry_date: DateTime<Utc>,
    pub location: LocationModel,
    /// `data:image/jpeg;base64,...`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// `POST /quality-check` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityCheckBody<'a> {
    pub donation_id: &'a str,
    pub expiry_status: ExpiryStatus,
    pub packaging_status: PackagingStatus,
    pub smell_status: SmellStatus,
    pub overall_quality: OverallQuality,
    pub notes: Option<&'a str>,
}
