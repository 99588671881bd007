//! Product lot catalog
//!
//! Create and list only; lots are immutable once listed and carry no
//! duplicate-listing guard.

use crate::validate;
use croft_core::effects::{BlobStoreEffects, ClockEffects};
use croft_core::{Identity, NewProductLot, ProductId, ProductLot, Result, Role};
use croft_store::ProductStore;
use std::sync::Arc;
use tracing::info;

/// The product lot catalog
pub struct ProductRegistry {
    products: Arc<ProductStore>,
    blobs: Arc<dyn BlobStoreEffects>,
    clock: Arc<dyn ClockEffects>,
}

impl ProductRegistry {
    /// Create a product registry
    pub fn new(
        products: Arc<ProductStore>,
        blobs: Arc<dyn BlobStoreEffects>,
        clock: Arc<dyn ClockEffects>,
    ) -> Self {
        Self {
            products,
            blobs,
            clock,
        }
    }

    /// List a new lot (farmer only)
    pub async fn create(
        &self,
        identity: &Identity,
        attrs: NewProductLot,
        images: Vec<Vec<u8>>,
    ) -> Result<ProductLot> {
        croft_guards::require_role(identity, Role::Farmer)?;
        validate::product(&attrs)?;

        let mut image_refs = Vec::with_capacity(images.len());
        for bytes in images {
            let reference = self.blobs.store(bytes).await.map_err(|e| {
                croft_core::CroftError::storage(format!("image upload failed: {e}"))
            })?;
            image_refs.push(reference);
        }

        let lot = ProductLot {
            id: ProductId::new(),
            farmer: identity.account,
            crop_name: attrs.crop_name,
            quantity: attrs.quantity,
            price: attrs.price,
            image_refs,
            created_at: self.clock.now().await,
        };
        let record = lot.clone();
        self.products.insert(lot).await;

        info!(product = %record.id, farmer = %record.farmer, "product listed");
        Ok(record)
    }

    /// All lots, newest first (public read)
    pub async fn list(&self) -> Vec<ProductLot> {
        self.products.list().await
    }
}
