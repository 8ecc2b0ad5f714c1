//! Client configuration resolved from the build environment.
//!
//! The client runs in a browser, so values are captured at compile time
//! with `option_env!` (the `API_URL` and `LOG_LEVEL` variables).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub api_url: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ClientConfig {
    /// Build config from `API_URL` / `LOG_LEVEL` as set when compiling.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("API_URL"), option_env!("LOG_LEVEL"))
    }

    /// Blank or missing values fall back to the defaults.
    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        Self { api_url: parse_api_url(api_url), log_level: parse_log_level(log_level) }
    }

    /// Absolute URL for an API path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

fn parse_api_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_URL.to_owned(),
    }
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| log::Level::from_str(v.trim()).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
