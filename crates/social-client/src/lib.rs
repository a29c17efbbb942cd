//! HTTP client for the GameSocial backend.
//!
//! [`ApiClient`] wraps `reqwest` with the platform conventions: bearer-token
//! attachment, per-request timeout, dual response-envelope tolerance, and
//! session invalidation on authentication failure. The `api` module adds one
//! thin facade method per backend endpoint.

pub mod api;
pub mod http;

pub use http::ApiClient;
