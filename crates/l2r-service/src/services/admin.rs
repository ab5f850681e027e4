//! Admin service

use l2r_core::{AdminStats, Capabilities, User};
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Platform statistics
    #[instrument(skip(self))]
    pub async fn stats(&self) -> ServiceResult<AdminStats> {
        PermissionService::new(self.ctx).require(Capabilities::VIEW_STATS)?;

        let stats = self.ctx.admin_gateway().stats().await?;
        if !stats.is_consistent() {
            warn!(
                total = stats.total_donations,
                by_status = stats.status_total(),
                "Per-status donation counts do not add up"
            );
        }
        Ok(stats)
    }

    /// Every registered user
    #[instrument(skip(self))]
    pub async fn users(&self) -> ServiceResult<Vec<User>> {
        PermissionService::new(self.ctx).require(Capabilities::MANAGE_USERS)?;
        let users = self.ctx.admin_gateway().users().await?;
        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }
}
