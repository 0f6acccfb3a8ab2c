//! Networking modules for the remote REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` runs requests through the interceptor chain, `transport` moves
//! bytes (`gloo-net` in the browser, `reqwest` on the server), `http` holds
//! transport-neutral values, `api` names the endpoints, and `types` defines
//! the wire schema.

pub mod api;
pub mod client;
pub mod http;
pub mod transport;
pub mod types;
