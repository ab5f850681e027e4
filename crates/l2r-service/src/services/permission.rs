//! Permission service
//!
//! Resolves the session user and checks role capabilities before any
//! request leaves the client.

use l2r_core::{Capabilities, User};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Permission service for access control
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The signed-in user
    ///
    /// # Errors
    /// `DomainError::NotAuthenticated` when there is no session
    pub fn current_user(&self) -> ServiceResult<User> {
        Ok(self.ctx.session().require_user()?)
    }

    /// Check if the signed-in user has `capability`
    pub fn check(&self, capability: Capabilities) -> bool {
        self.ctx
            .session()
            .user()
            .is_some_and(|user| user.can(capability))
    }

    /// Return the signed-in user if they have `capability`
    #[instrument(skip(self))]
    pub fn require(&self, capability: Capabilities) -> ServiceResult<User> {
        let user = self.current_user()?;
        if !user.can(capability) {
            debug!(
                user_id = %user.id,
                user_type = %user.user_type,
                "Capability check failed"
            );
            return Err(ServiceError::missing_capability(capability.list().join(", ")));
        }
        Ok(user)
    }

    /// Like [`require`](Self::require), accepting any one of `capabilities`
    #[instrument(skip(self))]
    pub fn require_any(&self, capabilities: Capabilities) -> ServiceResult<User> {
        let user = self.current_user()?;
        if !user.capabilities().intersects(capabilities) {
            return Err(ServiceError::missing_capability(capabilities.list().join(" | ")));
        }
        Ok(user)
    }
}
