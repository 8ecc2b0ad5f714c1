//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthStore` is the single source of truth for the token pair. The auth
//! client writes it, the app mirrors it into a reactive signal through
//! `subscribe`, and route guards read the mirror.
//!
//! DESIGN
//! ======
//! The store is an explicitly constructed handle rather than a global so
//! each test (and each mounted app) owns a fresh instance. Listeners run
//! after the write with no lock held, so a listener may read the store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, PoisonError, RwLock};

/// Access/refresh credential pair issued by the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Snapshot of the authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub tokens: Option<TokenPair>,
}

impl AuthState {
    /// True iff a token pair is held and its access token is non-empty.
    pub fn is_authenticated(&self) -> bool {
        self.tokens
            .as_ref()
            .is_some_and(|pair| !pair.access_token.is_empty())
    }
}

/// Handle returned by [`AuthStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&AuthState) + Send + Sync>;

#[derive(Default)]
struct Inner {
    state: AuthState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

/// Observable token store. Clones share the same underlying state.
#[derive(Clone, Default)]
pub struct AuthStore {
    inner: Arc<RwLock<Inner>>,
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore").field("state", &self.get()).finish()
    }
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state snapshot.
    pub fn get(&self) -> AuthState {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .state
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .state
            .is_authenticated()
    }

    /// Replace the stored pair unconditionally and notify listeners.
    pub fn set_tokens(&self, tokens: TokenPair) {
        log::debug!("auth store: tokens set");
        self.write(Some(tokens));
    }

    /// Drop the stored pair and notify listeners. Idempotent.
    pub fn clear(&self) {
        log::debug!("auth store: cleared");
        self.write(None);
    }

    /// Register a listener invoked with the new state after every write.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = inner.listeners.len();
        inner.listeners.retain(|(existing, _)| *existing != id);
        inner.listeners.len() != before
    }

    fn write(&self, tokens: Option<TokenPair>) {
        let (state, listeners) = {
            let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
            inner.state.tokens = tokens;
            let listeners: Vec<Listener> = inner
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            (inner.state.clone(), listeners)
        };
        for listener in listeners {
            listener(&state);
        }
    }
}
