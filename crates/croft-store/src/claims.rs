//! Claim records, keyed `(consumer, claim)` with a land-target
//! uniqueness index
//!
//! Claims live in their own table rather than embedded in the account
//! record, so the land-adoption uniqueness check and the insert can run
//! under one write lock: two concurrent adoptions of the same parcel by
//! the same consumer cannot both pass the check. Product claims have no
//! uniqueness index on purpose.

use async_lock::RwLock;
use croft_core::{AccountId, Claim, ClaimId, ClaimKind, CroftError, Result};
use std::collections::{HashMap, HashSet};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct ClaimTable {
    // Per-consumer claims in append order
    by_consumer: HashMap<AccountId, Vec<Claim>>,
    // Secondary uniqueness index for land adoptions
    land_targets: HashSet<(AccountId, Uuid)>,
}

/// Store of active claims
#[derive(Debug, Default)]
pub struct ClaimStore {
    inner: RwLock<ClaimTable>,
}

impl ClaimStore {
    /// Create an empty claim store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product claim; duplicates are allowed
    pub async fn insert(&self, claim: Claim) {
        let mut table = self.inner.write().await;
        if claim.kind == ClaimKind::Land {
            table.land_targets.insert((claim.consumer, claim.target_id));
        }
        debug!(claim = %claim.id, consumer = %claim.consumer, "claim appended");
        table.by_consumer.entry(claim.consumer).or_default().push(claim);
    }

    /// Append a land claim, enforcing per-consumer target uniqueness.
    /// The check and the insert happen under one write lock.
    pub async fn insert_unique_land(&self, claim: Claim) -> Result<()> {
        debug_assert_eq!(claim.kind, ClaimKind::Land);
        let key = (claim.consumer, claim.target_id);
        let mut table = self.inner.write().await;
        if table.land_targets.contains(&key) {
            return Err(CroftError::AlreadyClaimed);
        }
        table.land_targets.insert(key);
        debug!(claim = %claim.id, consumer = %claim.consumer, "land claim appended");
        table.by_consumer.entry(claim.consumer).or_default().push(claim);
        Ok(())
    }

    /// Remove a claim by id; returns whether anything was removed.
    /// Removing an absent id is not an error.
    pub async fn remove(&self, consumer: AccountId, claim_id: ClaimId) -> bool {
        let mut table = self.inner.write().await;
        let Some(claims) = table.by_consumer.get_mut(&consumer) else {
            return false;
        };
        let Some(position) = claims.iter().position(|c| c.id == claim_id) else {
            return false;
        };
        let claim = claims.remove(position);
        if claim.kind == ClaimKind::Land {
            table.land_targets.remove(&(consumer, claim.target_id));
        }
        debug!(claim = %claim_id, consumer = %consumer, "claim removed");
        true
    }

    /// All claims held by a consumer, in append order
    pub async fn list(&self, consumer: AccountId) -> Vec<Claim> {
        self.inner
            .read()
            .await
            .by_consumer
            .get(&consumer)
            .cloned()
            .unwrap_or_default()
    }
}
