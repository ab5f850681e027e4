//! Authentication service
//!
//! Handles registration, login, session restore, and logout. The token and
//! user live in the shared `SessionHandle`; the `SessionStore` keeps them
//! across launches.

use l2r_common::{AuthToken, SessionContext};
use l2r_core::{AuthResponse, Credentials, ErrorKind, Registration, User};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::dto::{LoginForm, RegisterForm};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an account and sign in
    #[instrument(skip(self, form), fields(email = %form.email, user_type = %form.user_type))]
    pub async fn register(&self, form: RegisterForm) -> ServiceResult<User> {
        form.validate()?;
        let response = self
            .ctx
            .auth_gateway()
            .register(&Registration::from(form))
            .await?;

        info!(user_id = %response.user.id, "User registered");
        Ok(self.establish(response).await)
    }

    /// Sign in with email and password
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub async fn login(&self, form: LoginForm) -> ServiceResult<User> {
        form.validate()?;
        let response = self
            .ctx
            .auth_gateway()
            .login(&Credentials::from(form))
            .await
            .map_err(|e| {
                warn!(error = %e, "Login failed");
                e
            })?;

        info!(user_id = %response.user.id, "User logged in");
        Ok(self.establish(response).await)
    }

    /// Reinstate a persisted session and confirm it with the backend
    ///
    /// A rejected token signs the user out. When the backend is unreachable
    /// or failing the cached user is kept so the app can start offline. Any
    /// other failure leaves the handle signed out but the saved session on
    /// disk for the next attempt.
    #[instrument(skip(self))]
    pub async fn restore(&self) -> ServiceResult<Option<User>> {
        let Some(saved) = self.ctx.session_store().load().await? else {
            debug!("No saved session");
            return Ok(None);
        };
        let cached = saved.user.clone();
        self.ctx.session().install(saved);

        match self.me().await {
            Ok(user) => {
                info!(user_id = %user.id, "Session restored");
                Ok(Some(user))
            }
            Err(e) if e.kind() == ErrorKind::Authorization => {
                warn!(error = %e, "Saved session rejected, signing out");
                self.logout().await?;
                Ok(None)
            }
            Err(e) if matches!(e.kind(), ErrorKind::Network | ErrorKind::Server) => {
                warn!(error = %e, "Backend unavailable, using cached user");
                Ok(Some(cached))
            }
            Err(e) => {
                warn!(error = %e, "Could not confirm saved session");
                self.ctx.session().clear();
                Err(e)
            }
        }
    }

    /// Fetch the current user from the backend and refresh the session copy
    #[instrument(skip(self))]
    pub async fn me(&self) -> ServiceResult<User> {
        self.ctx.session().require_user()?;
        let user = self.ctx.auth_gateway().me().await?;
        self.ctx.session().update_user(user.clone());

        if let Some(session) = self.ctx.session().current() {
            self.persist(&session).await;
        }
        Ok(user)
    }

    /// Sign out locally and forget the saved session
    #[instrument(skip(self))]
    pub async fn logout(&self) -> ServiceResult<()> {
        let user_id = self.ctx.session().user_id();
        self.ctx.session().clear();
        self.ctx.session_store().clear().await?;

        if let Some(user_id) = user_id {
            info!(user_id = %user_id, "User logged out");
        }
        Ok(())
    }

    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.ctx.session().is_authenticated()
    }

    async fn establish(&self, response: AuthResponse) -> User {
        let session = SessionContext::new(AuthToken::new(response.token), response.user);
        self.ctx.session().install(session.clone());
        self.persist(&session).await;
        session.user
    }

    // A store failure only costs the user a login on next launch
    async fn persist(&self, session: &SessionContext) {
        if let Err(e) = self.ctx.session_store().save(session).await {
            warn!(error = %e, "Failed to persist session");
        }
    }
}
