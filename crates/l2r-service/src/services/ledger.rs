//! Quality ledger
//!
//! The client-side record of quality checks made during this session. The
//! lifecycle service consults it before asking the backend for `pickedup`.

use dashmap::DashMap;
use l2r_core::{DonationId, QualityCheck};

/// Latest quality check per donation
#[derive(Debug, Default)]
pub struct QualityLedger {
    checks: DashMap<DonationId, QualityCheck>,
}

impl QualityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `check`, replacing any earlier check for the same donation
    pub fn record(&self, check: QualityCheck) {
        self.checks.insert(check.donation_id().clone(), check);
    }

    /// Whether the latest check for `id` passed
    pub fn has_passed(&self, id: &DonationId) -> bool {
        self.checks.get(id).is_some_and(|check| check.passed())
    }

    pub fn get(&self, id: &DonationId) -> Option<QualityCheck> {
        self.checks.get(id).map(|entry| entry.value().clone())
    }

    /// Drop the entry once the donation no longer needs it
    pub fn forget(&self, id: &DonationId) -> Option<QualityCheck> {
        self.checks.remove(id).map(|(_, check)| check)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}
