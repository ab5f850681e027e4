//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Capabilities, UserId, UserType};

/// Registered user
///
/// Serializable so a session can be persisted between launches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    pub phone: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    /// Average feedback rating, when the backend reports it
    pub rating: Option<f64>,
    pub total_deliveries: Option<u32>,
}

impl User {
    pub fn new(id: UserId, name: String, email: String, user_type: UserType) -> Self {
        Self {
            id,
            name,
            email,
            user_type,
            phone: None,
            created_at: None,
            rating: None,
            total_deliveries: None,
        }
    }

    /// Capability set for this user's role
    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.user_type.capabilities()
    }

    /// Check if the user may perform an action
    #[inline]
    pub fn can(&self, capability: Capabilities) -> bool {
        self.user_type.can(capability)
    }
}
