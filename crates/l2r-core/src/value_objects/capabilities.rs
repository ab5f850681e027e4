//! Capability bitflags keyed by user type
//!
//! Replaces scattered `userType == "..."` checks with one table.

use bitflags::bitflags;

bitflags! {
    /// Actions a user is allowed to take
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        /// Post surplus food
        const POST_DONATIONS      = 1 << 0;
        /// List donations tied to the current user
        const VIEW_DONATIONS      = 1 << 1;
        /// Browse available donations nearby
        const BROWSE_DONATIONS    = 1 << 2;
        /// Submit food requests
        const REQUEST_FOOD        = 1 << 3;
        /// List food requests
        const VIEW_REQUESTS       = 1 << 4;
        /// Accept a pickup
        const CLAIM_PICKUPS       = 1 << 5;
        /// Inspect claimed food
        const QUALITY_CHECK       = 1 << 6;
        /// Confirm delivery
        const DELIVER             = 1 << 7;
        /// Pair a request with a donation
        const MATCH_REQUESTS      = 1 << 8;
        /// Rate other participants
        const LEAVE_FEEDBACK      = 1 << 9;
        /// Read aggregate statistics
        const VIEW_STATS          = 1 << 10;
        /// List all users
        const MANAGE_USERS        = 1 << 11;

        const DONOR = Self::POST_DONATIONS.bits()
            | Self::VIEW_DONATIONS.bits()
            | Self::LEAVE_FEEDBACK.bits();

        const RECEIVER = Self::REQUEST_FOOD.bits()
            | Self::BROWSE_DONATIONS.bits()
            | Self::VIEW_REQUESTS.bits()
            | Self::LEAVE_FEEDBACK.bits();

        const VOLUNTEER = Self::BROWSE_DONATIONS.bits()
            | Self::VIEW_DONATIONS.bits()
            | Self::CLAIM_PICKUPS.bits()
            | Self::QUALITY_CHECK.bits()
            | Self::DELIVER.bits()
            | Self::VIEW_REQUESTS.bits()
            | Self::MATCH_REQUESTS.bits()
            | Self::LEAVE_FEEDBACK.bits();

        const ADMIN = Self::BROWSE_DONATIONS.bits()
            | Self::VIEW_REQUESTS.bits()
            | Self::MATCH_REQUESTS.bits()
            | Self::VIEW_STATS.bits()
            | Self::MANAGE_USERS.bits();
    }
}

impl Capabilities {
    /// Check if the set contains a required capability
    #[inline]
    pub fn has(&self, capability: Capabilities) -> bool {
        self.contains(capability)
    }

    /// Names of the individual capabilities that are set
    pub fn list(&self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}
