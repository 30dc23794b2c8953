//! customer-mock: in-memory customer REST backend
//!
//! Serves the customer endpoints the form controller consumes, backed by
//! a process-local store. Used by tests and for local development.

pub mod api;
pub mod config;
pub mod state;

pub use api::router;
pub use config::{Config, ConfigError};
pub use state::{AppState, CustomerStore};
