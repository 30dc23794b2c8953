//! Client module - HTTP transports.
//!
//! [`HttpClient`] is the seam between the form controller and the wire:
//! [`NetworkHttpClient`] talks to a real backend over reqwest,
//! [`OneshotHttpClient`] drives an axum `Router` in-process.

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

// Re-export main types
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
