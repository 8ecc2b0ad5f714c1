use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::config::ClientConfig;
use crate::net::api::ApiError;
use crate::net::auth::AuthClient;
use crate::net::mock::MockTransport;
use crate::state::auth::AuthStore;

fn submit(transport: MockTransport, store: &AuthStore) -> LoginForm {
    let auth = AuthClient::new(ClientConfig::default(), store.clone(), transport);
    let mut form = LoginForm::default();
    form.begin_submit();
    let outcome = block_on(auth.login("admin@example.com", "password")).map(|_| ());
    form.finish_submit(outcome);
    form
}

// =============================================================
// Form transitions
// =============================================================

#[test]
fn begin_submit_clears_error_and_disables_button() {
    let mut form = LoginForm { error: Some("Invalid credentials".to_owned()), submitting: false };
    form.begin_submit();
    assert_eq!(form.error, None);
    assert!(form.submitting);
    assert_eq!(form.submit_label(), "Connexion...");
}

#[test]
fn finish_submit_success_clears_submitting_only() {
    let mut form = LoginForm::default();
    form.begin_submit();
    form.finish_submit(Ok(()));
    assert_eq!(form, LoginForm::default());
    assert_eq!(form.submit_label(), "Se connecter");
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn rejected_credentials_keep_their_text() {
    assert_eq!(login_error_message(&AuthError::InvalidCredentials), "Invalid credentials");
}

#[test]
fn transport_and_decode_failures_keep_their_text() {
    assert_eq!(
        login_error_message(&AuthError::Transport("request failed: offline".to_owned())),
        "network error: request failed: offline"
    );
    assert_eq!(login_error_message(&AuthError::Decode("eof".to_owned())), "malformed response: eof");
}

// =============================================================
// Submission scenarios
// =============================================================

#[test]
fn successful_submission_stores_tokens_without_alert() {
    let store = AuthStore::new();
    let transport = MockTransport::new().reply(
        200,
        json!({ "access_token": "token", "refresh_token": "refresh", "token_type": "bearer" }),
    );

    let form = submit(transport.clone(), &store);

    assert_eq!(form.error, None);
    assert!(!form.submitting);
    assert_eq!(store.get().tokens.map(|t| t.access_token).as_deref(), Some("token"));
    assert_eq!(transport.requests()[0].url, "http://localhost:8000/api/v1/auth/login");
}

#[test]
fn rejected_submission_shows_invalid_credentials_alert() {
    let store = AuthStore::new();
    let transport = MockTransport::new().reply(401, json!({ "message": "error" }));

    let form = submit(transport, &store);

    let alert = form.error.expect("alert text");
    assert!(alert.to_lowercase().contains("invalid credentials"));
    assert!(!form.submitting);
    assert!(store.get().tokens.is_none());
}

#[test]
fn unreachable_backend_shows_fetch_error_in_alert() {
    let store = AuthStore::new();
    let transport = MockTransport::new().fail(ApiError::Request("Failed to fetch".to_owned()));

    let form = submit(transport, &store);

    let alert = form.error.expect("alert text");
    assert!(alert.contains("Failed to fetch"));
    assert!(!form.submitting);
    assert!(store.get().tokens.is_none());
}
