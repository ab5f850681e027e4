//! Donation lifecycle status
//!
//! ```text
//! available ──► claimed ──► pickedup ──► delivered
//!     │            │
//!     └────────────┴──► expired | cancelled
//! ```
//!
//! Forward moves go one step at a time. `expired` and `cancelled` are absorbing
//! failure states that can only be entered before the food has been picked up.
//! `claimed → pickedup` is additionally gated on a passing quality check, which
//! is enforced by the lifecycle service since it needs the check record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Status of a donation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    /// Posted by a donor, visible to volunteers, not yet claimed
    Available,
    /// A volunteer accepted the pickup
    Claimed,
    /// Quality check passed and the volunteer collected the food
    PickedUp,
    /// Handed off to the receiver or distribution point
    Delivered,
    /// Expired before pickup (backend-driven)
    Expired,
    /// Withdrawn before pickup
    Cancelled,
}

impl DonationStatus {
    /// Every status, in lifecycle order
    pub const ALL: [DonationStatus; 6] = [
        Self::Available,
        Self::Claimed,
        Self::PickedUp,
        Self::Delivered,
        Self::Expired,
        Self::Cancelled,
    ];

    /// Wire representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Claimed => "claimed",
            Self::PickedUp => "pickedup",
            Self::Delivered => "delivered",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
        }
    }

    /// The next status on the happy path, if any
    pub fn successor(self) -> Option<Self> {
        match self {
            Self::Available => Some(Self::Claimed),
            Self::Claimed => Some(Self::PickedUp),
            Self::PickedUp => Some(Self::Delivered),
            Self::Delivered | Self::Expired | Self::Cancelled => None,
        }
    }

    /// No further transitions are possible
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Expired | Self::Cancelled)
    }

    /// Absorbing failure state
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Expired | Self::Cancelled)
    }

    /// Failure states can only be entered before pickup
    #[inline]
    fn may_fail(self) -> bool {
        matches!(self, Self::Available | Self::Claimed)
    }

    /// Whether `self → target` is a legal transition
    pub fn can_transition_to(self, target: Self) -> bool {
        if target.is_failure() {
            return self.may_fail();
        }
        self.successor() == Some(target)
    }

    /// Validate `self → target`, returning the new status
    pub fn transition(self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(DomainError::InvalidTransition {
                from: self,
                to: target,
            })
        }
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DonationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStatus(s.to_string()))
    }
}
