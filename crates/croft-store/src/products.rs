//! Product lot records
//!
//! No uniqueness index here: a farmer may list the same crop any number
//! of times. Listing returns newest-first.

use async_lock::RwLock;
use croft_core::{CroftError, ProductId, ProductLot, Result};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
struct ProductTable {
    records: HashMap<ProductId, ProductLot>,
    // Insertion order; listing walks this backwards
    order: Vec<ProductId>,
}

/// Store of product lot records
#[derive(Debug, Default)]
pub struct ProductStore {
    inner: RwLock<ProductTable>,
}

impl ProductStore {
    /// Create an empty product store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new lot
    pub async fn insert(&self, lot: ProductLot) {
        let mut table = self.inner.write().await;
        table.order.push(lot.id);
        debug!(product = %lot.id, farmer = %lot.farmer, "product record created");
        table.records.insert(lot.id, lot);
    }

    /// Load a lot by id
    pub async fn get(&self, id: ProductId) -> Result<ProductLot> {
        self.inner
            .read()
            .await
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| CroftError::not_found(format!("product {id}")))
    }

    /// All lots, newest first
    pub async fn list(&self) -> Vec<ProductLot> {
        let table = self.inner.read().await;
        table
            .order
            .iter()
            .rev()
            .filter_map(|id| table.records.get(id).cloned())
            .collect()
    }
}
