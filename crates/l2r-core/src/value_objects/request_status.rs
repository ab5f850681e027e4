//! Food request status
//!
//! Requests have no multi-party handoff: the backend matches them to a
//! donation and later marks them fulfilled. This vocabulary is deliberately
//! separate from [`DonationStatus`](super::DonationStatus).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Status of a food request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Matched,
    Fulfilled,
    Expired,
    Cancelled,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 5] = [
        Self::Pending,
        Self::Matched,
        Self::Fulfilled,
        Self::Expired,
        Self::Cancelled,
    ];

    /// Wire representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Matched => "matched",
            Self::Fulfilled => "fulfilled",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Fulfilled | Self::Expired | Self::Cancelled)
    }

    /// Whether the request is still waiting for food
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::Matched)
    }

    /// Whether the backend may move a request from `self` to `target`
    pub fn can_transition_to(self, target: Self) -> bool {
        match (self, target) {
            (Self::Pending, Self::Matched) | (Self::Matched, Self::Fulfilled) => true,
            (from, Self::Expired | Self::Cancelled) => from.is_open(),
            _ => false,
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStatus(s.to_string()))
    }
}
