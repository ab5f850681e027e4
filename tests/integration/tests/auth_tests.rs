//! Authentication and session restore against the mock backend
//!
//! Run with: cargo test -p integration-tests --test auth_tests

use std::sync::Arc;

use integration_tests::{assert_detail, register_form, TestServer, PASSWORD};
use l2r_client::ApiClient;
use l2r_common::{ApiConfig, AuthToken, MemorySessionStore, SessionContext, SessionHandle, SessionStore};
use l2r_core::{DomainError, ErrorKind, UserType};
use l2r_service::{AuthService, LoginForm, ServiceContext, ServiceError};
use reqwest::StatusCode;

#[tokio::test]
async fn test_register_then_me() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (ctx, user) = server.signed_in(UserType::Receiver).await.unwrap();

    assert_eq!(user.user_type, UserType::Receiver);
    let me = AuthService::new(&ctx).me().await.unwrap();
    assert_eq!(me.id, user.id);
    assert_eq!(me.email, user.email);
}

#[tokio::test]
async fn test_login_after_logout() {
    let server = TestServer::start().await.unwrap();
    let ctx = server.context().unwrap();
    let auth = AuthService::new(&ctx);

    let form = register_form(UserType::Donor);
    let email = form.email.clone();
    let user = auth.register(form).await.unwrap();
    auth.logout().await.unwrap();
    assert!(!auth.is_authenticated());

    let err = auth
        .login(LoginForm {
            email: email.clone(),
            password: "not-the-password".to_string(),
        })
        .await
        .unwrap_err();
    assert!(
        matches!(err, ServiceError::Domain(DomainError::Unauthorized(ref m)) if m == "Invalid email or password")
    );

    let again = auth
        .login(LoginForm {
            email,
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap();
    assert_eq!(again.id, user.id);
    assert!(auth.is_authenticated());
}

#[tokio::test]
async fn test_duplicate_email_is_a_validation_error() {
    let server = TestServer::start().await.unwrap();
    let ctx = server.context().unwrap();
    let auth = AuthService::new(&ctx);

    let form = register_form(UserType::Volunteer);
    auth.register(form.clone()).await.unwrap();

    let err = auth.register(form).await.unwrap_err();
    assert!(err.is_validation());
    assert!(err.user_message().contains("Email already registered"));
}

#[tokio::test]
async fn test_session_survives_restart() {
    let server = TestServer::start().await.unwrap();
    let store = Arc::new(MemorySessionStore::new());

    let first = server.context_with_store(store.clone()).unwrap();
    let user = AuthService::new(&first)
        .register(register_form(UserType::Volunteer))
        .await
        .unwrap();

    let second = server.context_with_store(store.clone()).unwrap();
    assert!(!second.session().is_authenticated());
    let restored = AuthService::new(&second).restore().await.unwrap();
    assert_eq!(restored.map(|u| u.id), Some(user.id));
    assert!(second.session().is_authenticated());
}

#[tokio::test]
async fn test_revoked_token_signs_out_on_restore() {
    let server = TestServer::start().await.unwrap();
    let store = Arc::new(MemorySessionStore::new());

    let first = server.context_with_store(store.clone()).unwrap();
    AuthService::new(&first)
        .register(register_form(UserType::Donor))
        .await
        .unwrap();
    server.state.revoke_tokens();

    let second = server.context_with_store(store.clone()).unwrap();
    let restored = AuthService::new(&second).restore().await.unwrap();
    assert!(restored.is_none());
    assert!(!second.session().is_authenticated());
    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_restore_offline_keeps_cached_user() {
    // A port nothing listens on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = ApiClient::new(
        &ApiConfig::new(format!("http://127.0.0.1:{port}")),
        SessionHandle::new(),
    )
    .unwrap();

    let store = Arc::new(MemorySessionStore::new());
    let user = l2r_core::User::new(
        l2r_core::UserId::new("cached"),
        "Cached".to_string(),
        "cached@example.com".to_string(),
        UserType::Receiver,
    );
    store
        .save(&SessionContext::new(AuthToken::new("saved-token"), user.clone()))
        .await
        .unwrap();

    let ctx = ServiceContext::builder()
        .http(&client)
        .session_store(store)
        .build()
        .unwrap();
    let restored = AuthService::new(&ctx).restore().await.unwrap();
    assert_eq!(restored, Some(user));
    assert!(ctx.session().is_authenticated());

    let err = AuthService::new(&ctx).me().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(
        err.user_message(),
        "Could not reach the server. Check your connection and try again."
    );
}

#[tokio::test]
async fn test_backend_requires_bearer_token() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .client
        .get(format!("{}/api/me", server.base_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(
        assert_detail(response, StatusCode::UNAUTHORIZED).await.unwrap(),
        "Not authenticated"
    );

    let response = server.get_auth("/me", "bogus").await.unwrap();
    assert_eq!(
        assert_detail(response, StatusCode::UNAUTHORIZED).await.unwrap(),
        "Invalid token"
    );
}
