//! Result shapes returned by the services

use l2r_core::{AdminStats, Coordinates, Donation, FoodRequest, UserType};

// ============================================================================
// Discovery
// ============================================================================

/// Available donations, and the position they were ranked against
#[derive(Debug, Clone, PartialEq)]
pub struct AvailableDonations {
    pub donations: Vec<Donation>,
    /// `None` when the location was unavailable and the listing is unranked
    pub near: Option<Coordinates>,
}

impl AvailableDonations {
    /// Whether the backend ordered the listing by distance
    #[inline]
    pub fn is_geo_ranked(&self) -> bool {
        self.near.is_some()
    }

    pub fn len(&self) -> usize {
        self.donations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.donations.is_empty()
    }
}

// ============================================================================
// Activity
// ============================================================================

/// Role-specific activity screen
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityFeed {
    /// Donors see what they posted; volunteers see the donations they can act on
    Donations(Vec<Donation>),
    /// Receivers see their own requests
    Requests(Vec<FoodRequest>),
    /// Admins see platform statistics
    Stats(AdminStats),
}

impl ActivityFeed {
    /// Which feed a role gets
    pub fn kind_for(user_type: UserType) -> &'static str {
        match user_type {
            UserType::Donor | UserType::Volunteer => "donations",
            UserType::Receiver => "requests",
            UserType::Admin => "stats",
        }
    }
}
