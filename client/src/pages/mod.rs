//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates requests to
//! `hooks`.

pub mod dashboard;
pub mod login;
