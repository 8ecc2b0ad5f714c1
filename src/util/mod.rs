//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep route decisions and context lookups out of page and
//! component bodies so they stay testable.

pub mod auth;
