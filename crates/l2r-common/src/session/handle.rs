//! Session handle - shared, injectable holder of the authenticated session

use std::fmt;
use std::sync::Arc;

use l2r_core::{DomainError, User, UserId};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Opaque bearer token issued by the backend
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken([redacted])")
    }
}

/// Token plus the user it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub token: AuthToken,
    pub user: User,
}

impl SessionContext {
    pub fn new(token: AuthToken, user: User) -> Self {
        Self { token, user }
    }
}

/// Cheaply cloneable handle to the current session
///
/// All clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Option<SessionContext>>>,
}

impl SessionHandle {
    /// Create a signed-out handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle that is already signed in
    pub fn with_session(session: SessionContext) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(session))),
        }
    }

    /// Replace the current session
    pub fn install(&self, session: SessionContext) {
        *self.inner.write() = Some(session);
    }

    /// Sign out locally
    pub fn clear(&self) {
        *self.inner.write() = None;
    }

    /// Refresh the cached user without touching the token
    pub fn update_user(&self, user: User) {
        if let Some(session) = self.inner.write().as_mut() {
            session.user = user;
        }
    }

    pub fn current(&self) -> Option<SessionContext> {
        self.inner.read().clone()
    }

    pub fn token(&self) -> Option<AuthToken> {
        self.inner.read().as_ref().map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.inner.read().as_ref().map(|s| s.user.clone())
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.inner.read().as_ref().map(|s| s.user.id.clone())
    }

    /// The signed-in user, or `NotAuthenticated`
    pub fn require_user(&self) -> Result<User, DomainError> {
        self.user().ok_or(DomainError::NotAuthenticated)
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_some()
    }
}
