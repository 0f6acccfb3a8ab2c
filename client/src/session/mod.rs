//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` is the single source of truth for "who is logged in"; `storage`
//! persists it across reloads; `types` defines and validates the record.

pub mod storage;
pub mod store;
pub mod types;

pub use store::CredentialStore;
pub use types::{Session, UserProfile};
