//! Quality check grades
//!
//! A check passes only when every grade is the best one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How close the food is to its expiry date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Good,
    NearExpiry,
    Expired,
}

/// Condition of the packaging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackagingStatus {
    Good,
    Damaged,
}

/// Smell test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmellStatus {
    Fresh,
    Acceptable,
    Bad,
}

/// Derived verdict of a quality check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallQuality {
    Pass,
    Fail,
}

impl OverallQuality {
    /// `Pass` iff expiry is good, packaging is good and smell is fresh
    pub fn assess(expiry: ExpiryStatus, packaging: PackagingStatus, smell: SmellStatus) -> Self {
        match (expiry, packaging, smell) {
            (ExpiryStatus::Good, PackagingStatus::Good, SmellStatus::Fresh) => Self::Pass,
            _ => Self::Fail,
        }
    }

    #[inline]
    pub fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for OverallQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
