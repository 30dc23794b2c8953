//! Shared types for the customer workspace
//!
//! Wire types exchanged between the form controller and the customer
//! REST backend, plus the backend error format.

pub mod error;
pub mod models;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiErrorBody, AppError, AppResult, ErrorCode};
pub use models::{Customer, CustomerId, CustomerPayload};
