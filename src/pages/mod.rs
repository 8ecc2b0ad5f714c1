//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared decisions
//! to `util` and guards to `components`.

pub mod dashboard;
pub mod login;
