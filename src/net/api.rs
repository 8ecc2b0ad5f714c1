//! HTTP transport for communicating with the backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: the transport returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser. Tests substitute their own
//! [`Transport`].
//!
//! ERROR HANDLING
//! ==============
//! Transport failures are values, never panics. Non-2xx statuses are not
//! errors at this layer; callers decide what a status means.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REFRESH_PATH: &str = "/auth/refresh";
pub const CURRENT_USER_PATH: &str = "/auth/me";

/// Errors produced below the HTTP status level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("response parse failed: {0}")]
    Parse(String),
    #[error("not available outside the browser")]
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A single outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// JSON-encoded body; sent with `Content-Type: application/json`.
    pub body: Option<String>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), body: None, bearer: None }
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if the body cannot be serialized.
    pub fn post_json<B: Serialize>(url: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(Self { method: Method::Post, url: url.into(), body: Some(body), bearer: None })
    }

    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// True for any 2xx status.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] when the body is not the expected JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Something that can perform one HTTP request.
///
/// Futures are not required to be `Send`; everything runs on the browser's
/// single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Perform exactly one request. No retries.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when no HTTP response was obtained.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `Authorization` header value for a bearer token.
pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Browser transport backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let resp = match request.body {
                Some(body) => {
                    builder
                        .header("Content-Type", "application/json")
                        .body(body)
                        .map_err(|e| ApiError::Request(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Request(e.to_string()))?;

            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
