use super::*;
use std::sync::Mutex;

fn pair(access: &str, refresh: &str) -> TokenPair {
    TokenPair { access_token: access.to_owned(), refresh_token: refresh.to_owned() }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_has_no_tokens() {
    let state = AuthState::default();
    assert!(state.tokens.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_empty_access_token_is_not_authenticated() {
    let state = AuthState { tokens: Some(pair("", "refresh")) };
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_with_access_token_is_authenticated() {
    let state = AuthState { tokens: Some(pair("token", "refresh")) };
    assert!(state.is_authenticated());
}

#[test]
fn token_pair_debug_redacts_secrets() {
    let rendered = format!("{:?}", pair("secret-access", "secret-refresh"));
    assert!(!rendered.contains("secret-access"));
    assert!(!rendered.contains("secret-refresh"));
}

// =============================================================
// AuthStore writes
// =============================================================

#[test]
fn new_store_starts_unauthenticated() {
    let store = AuthStore::new();
    assert_eq!(store.get(), AuthState::default());
    assert!(!store.is_authenticated());
}

#[test]
fn set_tokens_replaces_previous_pair() {
    let store = AuthStore::new();
    store.set_tokens(pair("a1", "r1"));
    store.set_tokens(pair("a2", "r2"));
    assert_eq!(store.get().tokens, Some(pair("a2", "r2")));
    assert!(store.is_authenticated());
}

#[test]
fn clear_is_idempotent() {
    let store = AuthStore::new();
    store.set_tokens(pair("a", "r"));
    store.clear();
    store.clear();
    assert!(store.get().tokens.is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn clones_share_state() {
    let store = AuthStore::new();
    let other = store.clone();
    other.set_tokens(pair("a", "r"));
    assert!(store.is_authenticated());
}

// =============================================================
// Observers
// =============================================================

#[test]
fn listeners_receive_new_state_on_every_write() {
    let store = AuthStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |state| sink.lock().unwrap().push(state.is_authenticated()));

    store.set_tokens(pair("a", "r"));
    store.clear();
    store.clear();

    assert_eq!(*seen.lock().unwrap(), vec![true, false, false]);
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let store = AuthStore::new();
    let calls = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&calls);
    let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

    store.set_tokens(pair("a", "r"));
    assert!(store.unsubscribe(id));
    store.clear();

    assert_eq!(*calls.lock().unwrap(), 1);
    assert!(!store.unsubscribe(id));
}

#[test]
fn listener_may_read_store_during_notification() {
    let store = AuthStore::new();
    let reader = store.clone();
    let observed = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&observed);
    store.subscribe(move |_| *sink.lock().unwrap() = Some(reader.get()));

    store.set_tokens(pair("a", "r"));

    assert_eq!(
        observed.lock().unwrap().clone(),
        Some(AuthState { tokens: Some(pair("a", "r")) })
    );
}

#[test]
fn listeners_run_in_subscription_order() {
    let store = AuthStore::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    for tag in ["first", "second"] {
        let sink = Arc::clone(&order);
        store.subscribe(move |_| sink.lock().unwrap().push(tag));
    }
    store.clear();
    assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
}
