//! Land parcel records with the duplicate-listing index
//!
//! The duplicate-listing guard keys on `(owner, location_text,
//! size_value)`. Size is indexed by its bit pattern, so two listings
//! collide only when the stored floats are identical, mirroring an exact
//! equality lookup.

use async_lock::RwLock;
use croft_core::{AccountId, CroftError, LandId, LandParcel, Result};
use std::collections::{HashMap, HashSet};
use tracing::debug;

type ListingKey = (AccountId, String, u64);

fn listing_key(owner: AccountId, location: &str, size_value: f64) -> ListingKey {
    (owner, location.to_string(), size_value.to_bits())
}

#[derive(Debug, Default)]
struct LandTable {
    records: HashMap<LandId, LandParcel>,
    // Insertion order, for stable listing
    order: Vec<LandId>,
    listing_index: HashSet<ListingKey>,
}

/// Store of land parcel records
#[derive(Debug, Default)]
pub struct LandStore {
    inner: RwLock<LandTable>,
}

impl LandStore {
    /// Create an empty land store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new parcel; fails with `DuplicateListing` when the owner
    /// already listed the same `(location, size)`. Check and insert run
    /// under one write lock.
    pub async fn insert(&self, parcel: LandParcel) -> Result<()> {
        let key = listing_key(parcel.owner, &parcel.location_text, parcel.size_value);
        let mut table = self.inner.write().await;
        if table.listing_index.contains(&key) {
            return Err(CroftError::DuplicateListing);
        }
        table.listing_index.insert(key);
        table.order.push(parcel.id);
        debug!(land = %parcel.id, owner = %parcel.owner, "land record created");
        table.records.insert(parcel.id, parcel);
        Ok(())
    }

    /// Load a parcel by id
    pub async fn get(&self, id: LandId) -> Result<LandParcel> {
        self.inner
            .read()
            .await
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| CroftError::not_found(format!("land {id}")))
    }

    /// All parcels, all owners, in listing order
    pub async fn list(&self) -> Vec<LandParcel> {
        let table = self.inner.read().await;
        table
            .order
            .iter()
            .filter_map(|id| table.records.get(id).cloned())
            .collect()
    }

    /// Remove a parcel and its listing-index entry, returning the record
    /// if it existed
    pub async fn remove(&self, id: LandId) -> Option<LandParcel> {
        let mut table = self.inner.write().await;
        let parcel = table.records.remove(&id)?;
        let key = listing_key(parcel.owner, &parcel.location_text, parcel.size_value);
        table.listing_index.remove(&key);
        table.order.retain(|entry| *entry != id);
        debug!(land = %id, "land record removed");
        Some(parcel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use croft_core::{BlobRef, Timestamp};

    fn parcel(owner: AccountId, location: &str, size: f64) -> LandParcel {
        LandParcel {
            id: LandId::new(),
            owner,
            size_value: size,
            location_text: location.to_string(),
            duration_value: 12.0,
            profit_share_percent: 30,
            image_refs: vec![BlobRef::new("img-1")],
            created_at: Timestamp::from_unix_ms(0),
        }
    }

    #[tokio::test]
    async fn duplicate_listing_is_per_owner() {
        let store = LandStore::new();
        let ada = AccountId::new();
        let bea = AccountId::new();

        store.insert(parcel(ada, "Glen Road", 5.0)).await.unwrap();
        let err = store
            .insert(parcel(ada, "Glen Road", 5.0))
            .await
            .unwrap_err();
        assert_eq!(err, CroftError::DuplicateListing);

        // A different owner may list the identical location and size.
        store.insert(parcel(bea, "Glen Road", 5.0)).await.unwrap();
        // Same owner, different size, is a different listing.
        store.insert(parcel(ada, "Glen Road", 6.0)).await.unwrap();
    }

    #[tokio::test]
    async fn removal_frees_the_listing_key() {
        let store = LandStore::new();
        let owner = AccountId::new();
        let record = parcel(owner, "Fell Side", 3.5);
        let id = record.id;
        store.insert(record).await.unwrap();

        assert!(store.remove(id).await.is_some());
        assert!(store.remove(id).await.is_none());
        // The key is free again after removal.
        store.insert(parcel(owner, "Fell Side", 3.5)).await.unwrap();
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = LandStore::new();
        let owner = AccountId::new();
        let first = parcel(owner, "One", 1.0);
        let second = parcel(owner, "Two", 2.0);
        let (a, b) = (first.id, second.id);
        store.insert(first).await.unwrap();
        store.insert(second).await.unwrap();

        let ids: Vec<_> = store.list().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a, b]);
    }
}
