//! Error system for the customer backend
//!
//! - [`ErrorCode`]: error kinds the backend reports, each with an HTTP status
//! - [`AppError`]: error with code and human-readable message
//! - [`ApiErrorBody`]: JSON body of every non-2xx response
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiErrorBody, AppError};
//!
//! let err = AppError::not_found("Customer with id '7' was not found.");
//! let body = ApiErrorBody::from(&err);
//! assert_eq!(body.status, 404);
//! assert_eq!(body.error, "Not Found");
//! ```

mod types;

pub use types::{ApiErrorBody, AppError, AppResult, ErrorCode};
