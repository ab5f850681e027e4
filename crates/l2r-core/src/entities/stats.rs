//! Aggregate statistics shown to admins

use std::collections::BTreeMap;

use crate::value_objects::DonationStatus;

/// Platform-wide counters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminStats {
    pub total_donations: u64,
    pub total_requests: u64,
    pub total_users: u64,
    pub active_volunteers: u64,
    pub donations_by_status: BTreeMap<DonationStatus, u64>,
}

impl AdminStats {
    /// Count for one status (zero when the backend omitted it)
    pub fn count(&self, status: DonationStatus) -> u64 {
        self.donations_by_status.get(&status).copied().unwrap_or(0)
    }

    /// Sum of the per-status counts
    pub fn status_total(&self) -> u64 {
        self.donations_by_status.values().sum()
    }

    /// Per-status counts add up to the donation total
    pub fn is_consistent(&self) -> bool {
        self.status_total() == self.total_donations
    }
}
