//! Typed customer REST API
//!
//! One method per backend endpoint. Paths are built here and nowhere else.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use shared::{Customer, CustomerId, CustomerPayload};

use crate::client::HttpClient;
use crate::error::ClientResult;

/// Collection path
pub const CUSTOMERS_PATH: &str = "customers";

// Unreserved characters (RFC 3986) stay readable
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// `customers/{id}`
pub fn customer_path(id: &CustomerId) -> String {
    format!(
        "{}/{}",
        CUSTOMERS_PATH,
        utf8_percent_encode(id.as_str(), COMPONENT)
    )
}

/// `customers/{id}/activate`
pub fn activate_path(id: &CustomerId) -> String {
    format!("{}/activate", customer_path(id))
}

/// `customers/{id}/deactivate`
pub fn deactivate_path(id: &CustomerId) -> String {
    format!("{}/deactivate", customer_path(id))
}

/// `customers?name={name}`, or bare `customers` when the name is blank
pub fn search_path(name: &str) -> String {
    if name.is_empty() {
        CUSTOMERS_PATH.to_string()
    } else {
        format!(
            "{}?name={}",
            CUSTOMERS_PATH,
            utf8_percent_encode(name, COMPONENT)
        )
    }
}

/// Customer resource client
#[derive(Debug, Clone)]
pub struct CustomerApi<H> {
    http: H,
}

impl<H: HttpClient> CustomerApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    /// POST /customers
    pub async fn create(&self, payload: &CustomerPayload) -> ClientResult<Customer> {
        self.http.post(CUSTOMERS_PATH, payload).await
    }

    /// PUT /customers/{id}
    pub async fn update(&self, id: &CustomerId, payload: &CustomerPayload) -> ClientResult<Customer> {
        self.http.put(&customer_path(id), payload).await
    }

    /// GET /customers/{id}
    pub async fn get(&self, id: &CustomerId) -> ClientResult<Customer> {
        self.http.get(&customer_path(id)).await
    }

    /// DELETE /customers/{id}
    pub async fn delete(&self, id: &CustomerId) -> ClientResult<()> {
        self.http.delete(&customer_path(id)).await
    }

    /// DELETE /customers/{id}/deactivate
    pub async fn soft_delete(&self, id: &CustomerId) -> ClientResult<()> {
        self.http.delete(&deactivate_path(id)).await
    }

    /// PUT /customers/{id}/activate
    pub async fn activate(&self, id: &CustomerId) -> ClientResult<Customer> {
        self.http.put_empty(&activate_path(id)).await
    }

    /// PUT /customers/{id}/deactivate
    pub async fn deactivate(&self, id: &CustomerId) -> ClientResult<Customer> {
        self.http.put_empty(&deactivate_path(id)).await
    }

    /// GET /customers[?name=...]
    pub async fn search(&self, name: &str) -> ClientResult<Vec<Customer>> {
        self.http.get(&search_path(name)).await
    }
}
