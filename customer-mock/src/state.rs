use std::collections::BTreeMap;
use std::sync::Arc;

use shared::{Customer, CustomerId, CustomerPayload};
use tokio::sync::RwLock;
use tracing::info;

pub struct AppState {
    pub customers: CustomerStore,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            customers: CustomerStore::new(),
        })
    }
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Customer>,
    next_id: i64,
}

/// Mock customer store: id -> customer, ids assigned sequentially from 1
#[derive(Clone, Default)]
pub struct CustomerStore {
    inner: Arc<RwLock<Inner>>,
}

impl CustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, payload: CustomerPayload) -> Customer {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        let customer = payload.into_customer(CustomerId::from(id));
        info!(id, name = %customer.name, "Creating customer");
        inner.rows.insert(id, customer.clone());
        customer
    }

    pub async fn find(&self, id: i64) -> Option<Customer> {
        self.inner.read().await.rows.get(&id).cloned()
    }

    /// Replace every field but the id
    pub async fn update(&self, id: i64, payload: CustomerPayload) -> Option<Customer> {
        let mut inner = self.inner.write().await;
        let row = inner.rows.get_mut(&id)?;
        *row = payload.into_customer(CustomerId::from(id));
        info!(id, name = %row.name, "Saving customer");
        Some(row.clone())
    }

    pub async fn set_active(&self, id: i64, active: bool) -> Option<Customer> {
        let mut inner = self.inner.write().await;
        let row = inner.rows.get_mut(&id)?;
        row.active = active;
        info!(id, active, "Changing customer activation");
        Some(row.clone())
    }

    /// Returns whether a customer was removed
    pub async fn delete(&self, id: i64) -> bool {
        let removed = self.inner.write().await.rows.remove(&id);
        if let Some(customer) = &removed {
            info!(id, name = %customer.name, "Deleting customer");
        }
        removed.is_some()
    }

    /// All customers in id order
    pub async fn all(&self) -> Vec<Customer> {
        self.inner.read().await.rows.values().cloned().collect()
    }

    /// Customers whose name matches exactly, in id order
    pub async fn find_by_name(&self, name: &str) -> Vec<Customer> {
        self.inner
            .read()
            .await
            .rows
            .values()
            .filter(|c| c.name == name)
            .cloned()
            .collect()
    }
}
