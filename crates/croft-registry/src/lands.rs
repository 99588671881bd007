//! Land parcel catalog
//!
//! Creation validates, uploads images, then lets the store's
//! duplicate-listing index arbitrate. Deletion removes the record first
//! and only then releases blobs: the record is the source of truth and
//! blobs are reclaimed opportunistically, so a failed blob delete never
//! resurrects or blocks anything.

use crate::validate;
use croft_core::effects::{BlobStoreEffects, ClockEffects};
use croft_core::{Identity, LandId, LandParcel, NewLandParcel, Result, Role};
use croft_store::LandStore;
use std::sync::Arc;
use tracing::{info, warn};

/// The land parcel catalog
pub struct LandRegistry {
    lands: Arc<LandStore>,
    blobs: Arc<dyn BlobStoreEffects>,
    clock: Arc<dyn ClockEffects>,
}

impl LandRegistry {
    /// Create a land registry
    pub fn new(
        lands: Arc<LandStore>,
        blobs: Arc<dyn BlobStoreEffects>,
        clock: Arc<dyn ClockEffects>,
    ) -> Self {
        Self {
            lands,
            blobs,
            clock,
        }
    }

    /// List a new parcel (farmer only)
    pub async fn create(
        &self,
        identity: &Identity,
        attrs: NewLandParcel,
        images: Vec<Vec<u8>>,
    ) -> Result<LandParcel> {
        croft_guards::require_role(identity, Role::Farmer)?;
        validate::land(&attrs, images.len())?;

        let mut image_refs = Vec::with_capacity(images.len());
        for bytes in images {
            let reference = self.blobs.store(bytes).await.map_err(|e| {
                croft_core::CroftError::storage(format!("image upload failed: {e}"))
            })?;
            image_refs.push(reference);
        }

        let parcel = LandParcel {
            id: LandId::new(),
            owner: identity.account,
            size_value: attrs.size_value,
            location_text: attrs.location_text,
            duration_value: attrs.duration_value,
            profit_share_percent: attrs.profit_share_percent,
            image_refs,
            created_at: self.clock.now().await,
        };
        let record = parcel.clone();

        if let Err(err) = self.lands.insert(parcel).await {
            // The listing was refused; reclaim the blobs we just wrote.
            self.release_blobs(&record.image_refs).await;
            return Err(err);
        }

        info!(land = %record.id, owner = %record.owner, "land listed");
        Ok(record)
    }

    /// All parcels, all owners (public read)
    pub async fn list(&self) -> Vec<LandParcel> {
        self.lands.list().await
    }

    /// Delete a parcel (owner only), cascading to its blobs
    pub async fn delete(&self, identity: &Identity, id: LandId) -> Result<()> {
        let parcel = self.lands.get(id).await?;
        croft_guards::require_owner(identity, parcel.owner)?;

        let Some(removed) = self.lands.remove(id).await else {
            // A concurrent delete won the race.
            return Err(croft_core::CroftError::not_found(format!("land {id}")));
        };

        self.release_blobs(&removed.image_refs).await;
        info!(land = %id, "land deleted");
        Ok(())
    }

    async fn release_blobs(&self, refs: &[croft_core::BlobRef]) {
        for blob in refs {
            match self.blobs.delete(blob).await {
                Ok(_) => {}
                Err(e) => warn!(%blob, error = %e, "failed to release blob"),
            }
        }
    }
}
