//! Data models
//!
//! Types shared by the form controller and the customer backend.

pub mod customer;

pub use customer::{Customer, CustomerId, CustomerPayload};
