//! User type - the role a user registered with

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Capabilities;
use crate::error::DomainError;

/// Role chosen at registration; immutable afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Donor,
    Receiver,
    Volunteer,
    Admin,
}

impl UserType {
    pub const ALL: [UserType; 4] = [Self::Donor, Self::Receiver, Self::Volunteer, Self::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Receiver => "receiver",
            Self::Volunteer => "volunteer",
            Self::Admin => "admin",
        }
    }

    /// Capability set granted to this role
    pub fn capabilities(self) -> Capabilities {
        match self {
            Self::Donor => Capabilities::DONOR,
            Self::Receiver => Capabilities::RECEIVER,
            Self::Volunteer => Capabilities::VOLUNTEER,
            Self::Admin => Capabilities::ADMIN,
        }
    }

    /// Shorthand for `self.capabilities().has(capability)`
    #[inline]
    pub fn can(self, capability: Capabilities) -> bool {
        self.capabilities().has(capability)
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|user_type| user_type.as_str() == s)
            .ok_or_else(|| DomainError::ValidationError(format!("Unknown user type: {s}")))
    }
}
