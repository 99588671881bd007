//! Croft ledger - Layer 4: the consumer's claims
//!
//! A claim records a product booking or a land adoption, with a
//! denormalized snapshot of the target taken at claim time. The snapshot
//! is self-contained on purpose: a claim stays displayable even when a
//! racing deletion removes its target.
//!
//! Land adoptions are unique per `(consumer, parcel)`; product bookings
//! are not deduplicated, so booking twice yields two claims. That
//! asymmetry is inherited behavior, kept as-is pending a product
//! decision.

use croft_core::effects::ClockEffects;
use croft_core::{
    Claim, ClaimId, ClaimKind, ClaimSnapshot, Identity, LandId, ProductId, Result, Role,
};
use croft_store::{ClaimStore, LandStore, ProductStore};
use std::sync::Arc;
use tracing::{debug, info};

/// The claim ledger
pub struct ClaimLedger {
    claims: Arc<ClaimStore>,
    lands: Arc<LandStore>,
    products: Arc<ProductStore>,
    clock: Arc<dyn ClockEffects>,
}

impl ClaimLedger {
    /// Create a claim ledger reading targets from the two catalogs
    pub fn new(
        claims: Arc<ClaimStore>,
        lands: Arc<LandStore>,
        products: Arc<ProductStore>,
        clock: Arc<dyn ClockEffects>,
    ) -> Self {
        Self {
            claims,
            lands,
            products,
            clock,
        }
    }

    /// Book a product lot (consumer only)
    ///
    /// Appends unconditionally; two bookings of the same lot are two
    /// claims.
    pub async fn book_product(&self, identity: &Identity, product: ProductId) -> Result<Claim> {
        croft_guards::require_role(identity, Role::Consumer)?;
        let lot = self.products.get(product).await?;

        let claim = Claim {
            id: ClaimId::new(),
            consumer: identity.account,
            kind: ClaimKind::Product,
            target_id: lot.id.uuid(),
            snapshot: ClaimSnapshot {
                label: lot.crop_name,
                price: lot.price,
                quantity: lot.quantity,
                image: lot.image_refs.first().cloned(),
            },
            created_at: self.clock.now().await,
        };
        let record = claim.clone();
        self.claims.insert(claim).await;

        info!(claim = %record.id, consumer = %identity.account, product = %product, "product booked");
        Ok(record)
    }

    /// Adopt a land parcel (consumer only, once per parcel)
    pub async fn adopt_land(&self, identity: &Identity, land: LandId) -> Result<Claim> {
        croft_guards::require_role(identity, Role::Consumer)?;
        let parcel = self.lands.get(land).await?;

        let claim = Claim {
            id: ClaimId::new(),
            consumer: identity.account,
            kind: ClaimKind::Land,
            target_id: parcel.id.uuid(),
            snapshot: ClaimSnapshot {
                label: parcel.location_text,
                price: f64::from(parcel.profit_share_percent),
                quantity: parcel.size_value,
                image: parcel.image_refs.first().cloned(),
            },
            created_at: self.clock.now().await,
        };
        let record = claim.clone();
        self.claims.insert_unique_land(claim).await?;

        info!(claim = %record.id, consumer = %identity.account, land = %land, "land adopted");
        Ok(record)
    }

    /// Cancel a claim (consumer only); idempotent
    ///
    /// Cancelling an id that does not exist, or was already cancelled,
    /// succeeds as a no-op.
    pub async fn cancel(&self, identity: &Identity, claim: ClaimId) -> Result<()> {
        croft_guards::require_role(identity, Role::Consumer)?;
        let removed = self.claims.remove(identity.account, claim).await;
        if removed {
            info!(claim = %claim, consumer = %identity.account, "claim cancelled");
        } else {
            debug!(claim = %claim, consumer = %identity.account, "cancel was a no-op");
        }
        Ok(())
    }

    /// All claims held by the caller, in claim order
    pub async fn list(&self, identity: &Identity) -> Result<Vec<Claim>> {
        croft_guards::require_role(identity, Role::Consumer)?;
        Ok(self.claims.list(identity.account).await)
    }
}
