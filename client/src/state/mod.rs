//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`query_cache`, `toasts`) so hooks and
//! components can depend on small focused models.

pub mod query_cache;
pub mod toasts;
