//! Auth client bridging UI actions to the backend and the token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages obtain an [`AuthClient`] from context (see `util::auth::use_auth`)
//! and call `login`/`logout`. Each network operation issues exactly one
//! request; nothing is cached, retried, or deduplicated.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned to the caller and leaves the store untouched.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::{
    ApiError, ApiRequest, CURRENT_USER_PATH, HttpTransport, LOGIN_PATH, REFRESH_PATH, Transport,
};
use super::types::{LoginRequest, RefreshRequest, TokenResponse, UserProfile};
use crate::config::ClientConfig;
use crate::state::auth::{AuthStore, TokenPair};

/// Errors surfaced by [`AuthClient`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Login rejected with a non-2xx status.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// Refresh rejected with a non-2xx status.
    #[error("Unable to refresh token")]
    RefreshFailed,
    /// An authenticated call was attempted without tokens.
    #[error("Not authenticated")]
    NotAuthenticated,
    /// An authenticated call was rejected.
    #[error("request rejected: status {0}")]
    Unauthorized(u16),
    #[error("network error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Parse(msg) => Self::Decode(msg),
            other => Self::Transport(other.to_string()),
        }
    }
}

/// Client used by the running app.
pub type AppAuthClient = AuthClient<HttpTransport>;

/// Login/refresh/logout operations over a shared [`AuthStore`].
#[derive(Clone, Debug)]
pub struct AuthClient<T> {
    config: ClientConfig,
    store: AuthStore,
    transport: T,
}

impl<T: Transport> AuthClient<T> {
    pub fn new(config: ClientConfig, store: AuthStore, transport: T) -> Self {
        Self { config, store, transport }
    }

    pub fn store(&self) -> &AuthStore {
        &self.store
    }

    pub fn tokens(&self) -> Option<TokenPair> {
        self.store.get().tokens
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// Exchange credentials for a token pair and store it.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] on a non-2xx status, otherwise
    /// transport or decode failures. The store is unchanged on error.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, AuthError> {
        let url = self.config.endpoint(LOGIN_PATH);
        log::debug!("auth: POST {url}");
        let request = ApiRequest::post_json(url, &LoginRequest { email, password })?;
        self.exchange(request, AuthError::InvalidCredentials).await
    }

    /// Exchange a refresh token for a new pair and store it.
    ///
    /// # Errors
    ///
    /// [`AuthError::RefreshFailed`] on a non-2xx status, otherwise transport
    /// or decode failures. The store is unchanged on error.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse, AuthError> {
        let url = self.config.endpoint(REFRESH_PATH);
        log::debug!("auth: POST {url}");
        let request = ApiRequest::post_json(url, &RefreshRequest { refresh_token })?;
        self.exchange(request, AuthError::RefreshFailed).await
    }

    /// Forget the current tokens. No network call.
    pub fn logout(&self) {
        self.store.clear();
    }

    /// Fetch the profile of the authenticated user.
    ///
    /// # Errors
    ///
    /// [`AuthError::NotAuthenticated`] without sending anything when no
    /// access token is held; [`AuthError::Unauthorized`] on a non-2xx status.
    pub async fn current_user(&self) -> Result<UserProfile, AuthError> {
        let Some(tokens) = self.tokens().filter(|t| !t.access_token.is_empty()) else {
            return Err(AuthError::NotAuthenticated);
        };
        let url = self.config.endpoint(CURRENT_USER_PATH);
        log::debug!("auth: GET {url}");
        let resp = self
            .transport
            .send(ApiRequest::get(url).with_bearer(&tokens.access_token))
            .await?;
        if !resp.ok() {
            return Err(AuthError::Unauthorized(resp.status));
        }
        Ok(resp.json::<UserProfile>()?)
    }

    async fn exchange(&self, request: ApiRequest, rejected: AuthError) -> Result<TokenResponse, AuthError> {
        let resp = self.transport.send(request).await?;
        if !resp.ok() {
            log::debug!("auth: rejected with status {}", resp.status);
            return Err(rejected);
        }
        let data = resp.json::<TokenResponse>()?;
        self.store.set_tokens(data.token_pair());
        Ok(data)
    }
}
