//! Admin statistics wire model

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsModel {
    pub total_donations: u64,
    pub total_requests: u64,
    pub total_users: u64,
    pub active_volunteers: u64,
    #[serde(default)]
    pub donations_by_status: HashMap<String, u64>,
}
