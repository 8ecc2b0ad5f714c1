//! Networking modules for the backend auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs raw HTTP requests, `auth` turns them into login/refresh
//! operations over the token store, and `types` defines the wire schema.

pub mod api;
pub mod auth;
#[cfg(test)]
pub(crate) mod mock;
pub mod types;
