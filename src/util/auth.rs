//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior, derived purely from
//! the current [`AuthState`]. There is no loading state and no backend
//! probe; the decision is re-evaluated whenever the mirrored signal changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::auth::AppAuthClient;
use crate::state::auth::{AuthState, AuthStore};

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/";

/// Outcome of guarding a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Render protected content iff authenticated, otherwise go to login.
pub fn guard_decision(state: &AuthState) -> GuardDecision {
    if state.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(LOGIN_ROUTE)
    }
}

/// Where the login page should send an already-authenticated user.
pub fn login_redirect(state: &AuthState) -> Option<&'static str> {
    state.is_authenticated().then_some(HOME_ROUTE)
}

/// Mirror store writes into a reactive signal for components to read.
pub fn mirror_auth_store(store: &AuthStore) -> RwSignal<AuthState> {
    let signal = RwSignal::new(store.get());
    store.subscribe(move |state| {
        let _ = signal.try_set(state.clone());
    });
    signal
}

/// The auth client provided by `App`.
pub fn use_auth() -> AppAuthClient {
    expect_context::<AppAuthClient>()
}

/// Reactive mirror of the auth store provided by `App`.
pub fn use_auth_state() -> RwSignal<AuthState> {
    expect_context::<RwSignal<AuthState>>()
}
