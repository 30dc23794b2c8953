//! Customer Client - form controller for the customer REST backend
//!
//! Binds the customer page's actions (create, retrieve, update, delete,
//! activate/deactivate, search, clear) to REST calls and renders the
//! responses into a typed view-model.

pub mod api;
pub mod client;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;

pub use api::CustomerApi;
pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use command::{Command, CommandOutcome};
pub use config::ClientConfig;
pub use controller::FormController;
pub use error::{ClientError, ClientResult, SERVER_ERROR_MESSAGE};
pub use form::{FormState, FormView, RenderUpdate, SearchResults};

// Re-export shared types for convenience
pub use shared::{Customer, CustomerId, CustomerPayload};
