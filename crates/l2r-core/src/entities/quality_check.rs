//! Quality check entity - a volunteer's inspection of claimed food

use chrono::{DateTime, Utc};

use crate::value_objects::{DonationId, ExpiryStatus, OverallQuality, PackagingStatus, SmellStatus};

/// Inspection grades entered by the volunteer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQualityCheck {
    pub donation_id: DonationId,
    pub expiry: ExpiryStatus,
    pub packaging: PackagingStatus,
    pub smell: SmellStatus,
    pub notes: Option<String>,
}

impl NewQualityCheck {
    /// Verdict these grades produce
    pub fn overall(&self) -> OverallQuality {
        OverallQuality::assess(self.expiry, self.packaging, self.smell)
    }
}

/// A recorded, immutable quality check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityCheck {
    donation_id: DonationId,
    expiry: ExpiryStatus,
    packaging: PackagingStatus,
    smell: SmellStatus,
    overall: OverallQuality,
    notes: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl QualityCheck {
    /// Record a check, deriving the overall verdict from the grades
    pub fn record(check: NewQualityCheck, recorded_at: DateTime<Utc>) -> Self {
        let overall = check.overall();
        Self {
            donation_id: check.donation_id,
            expiry: check.expiry,
            packaging: check.packaging,
            smell: check.smell,
            overall,
            notes: check.notes.filter(|n| !n.trim().is_empty()),
            recorded_at,
        }
    }

    pub fn donation_id(&self) -> &DonationId {
        &self.donation_id
    }

    pub fn expiry(&self) -> ExpiryStatus {
        self.expiry
    }

    pub fn packaging(&self) -> PackagingStatus {
        self.packaging
    }

    pub fn smell(&self) -> SmellStatus {
        self.smell
    }

    pub fn overall(&self) -> OverallQuality {
        self.overall
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    #[inline]
    pub fn passed(&self) -> bool {
        self.overall.is_pass()
    }
}
