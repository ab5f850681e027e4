//! Admin statistics mapper

use l2r_core::{AdminStats, DomainError};
use tracing::warn;

use super::donation_status_from_wire;
use crate::models::AdminStatsModel;

impl TryFrom<AdminStatsModel> for AdminStats {
    type Error = DomainError;

    fn try_from(model: AdminStatsModel) -> Result<Self, Self::Error> {
        let mut stats = AdminStats {
            total_donations: model.total_donations,
            total_requests: model.total_requests,
            total_users: model.total_users,
            active_volunteers: model.active_volunteers,
            ..AdminStats::default()
        };

        for (raw, count) in model.donations_by_status {
            match donation_status_from_wire(&raw) {
                Ok(status) => *stats.donations_by_status.entry(status).or_insert(0) += count,
                Err(_) => warn!(status = %raw, count, "Ignoring unknown donation status in stats"),
            }
        }

        Ok(stats)
    }
}
