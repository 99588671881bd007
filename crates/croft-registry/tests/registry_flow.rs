//! Registry behavior across the catalog lifecycle

use assert_matches::assert_matches;
use croft_core::{AccountId, CroftError, Identity, Role};
use croft_registry::{LandRegistry, ProductRegistry};
use croft_store::{LandStore, ProductStore};
use croft_testkit::{listing, FailingDeleteBlobStore, FixedClock, MemoryBlobStore};
use std::sync::Arc;

fn farmer() -> Identity {
    Identity {
        account: AccountId::new(),
        role: Role::Farmer,
    }
}

fn consumer() -> Identity {
    Identity {
        account: AccountId::new(),
        role: Role::Consumer,
    }
}

struct World {
    lands: LandRegistry,
    products: ProductRegistry,
    blobs: Arc<MemoryBlobStore>,
    clock: Arc<FixedClock>,
}

fn world() -> World {
    let blobs = Arc::new(MemoryBlobStore::new());
    let clock = Arc::new(FixedClock::at(1_000));
    World {
        lands: LandRegistry::new(Arc::new(LandStore::new()), blobs.clone(), clock.clone()),
        products: ProductRegistry::new(Arc::new(ProductStore::new()), blobs.clone(), clock.clone()),
        blobs,
        clock,
    }
}

#[tokio::test]
async fn only_farmers_may_list() {
    let w = world();
    let err = w
        .lands
        .create(&consumer(), listing::land("Glen Road", 5.0), listing::images(1))
        .await
        .unwrap_err();
    assert_eq!(err, CroftError::Forbidden);

    let err = w
        .products
        .create(&consumer(), listing::product("kale"), listing::images(1))
        .await
        .unwrap_err();
    assert_eq!(err, CroftError::Forbidden);
}

#[tokio::test]
async fn duplicate_listing_guard_is_per_owner() {
    let w = world();
    let ada = farmer();
    let bea = farmer();

    w.lands
        .create(&ada, listing::land("Glen Road", 5.0), listing::images(1))
        .await
        .unwrap();

    let err = w
        .lands
        .create(&ada, listing::land("Glen Road", 5.0), listing::images(1))
        .await
        .unwrap_err();
    assert_eq!(err, CroftError::DuplicateListing);

    // A different farmer may list the identical (location, size).
    w.lands
        .create(&bea, listing::land("Glen Road", 5.0), listing::images(1))
        .await
        .unwrap();
}

#[tokio::test]
async fn rejected_listing_releases_its_uploads() {
    let w = world();
    let ada = farmer();

    w.lands
        .create(&ada, listing::land("Glen Road", 5.0), listing::images(2))
        .await
        .unwrap();
    assert_eq!(w.blobs.len().await, 2);

    let _ = w
        .lands
        .create(&ada, listing::land("Glen Road", 5.0), listing::images(2))
        .await
        .unwrap_err();
    // The duplicate's uploads were reclaimed.
    assert_eq!(w.blobs.len().await, 2);
}

#[tokio::test]
async fn delete_is_owner_only_and_cascades_to_blobs() {
    let w = world();
    let ada = farmer();
    let bea = farmer();

    let parcel = w
        .lands
        .create(&ada, listing::land("Fell Side", 3.5), listing::images(2))
        .await
        .unwrap();
    assert_eq!(w.blobs.len().await, 2);

    let err = w.lands.delete(&bea, parcel.id).await.unwrap_err();
    assert_eq!(err, CroftError::Forbidden);
    assert_eq!(w.lands.list().await.len(), 1);

    w.lands.delete(&ada, parcel.id).await.unwrap();
    assert!(w.lands.list().await.is_empty());
    assert!(w.blobs.is_empty().await);

    let err = w.lands.delete(&ada, parcel.id).await.unwrap_err();
    assert_matches!(err, CroftError::NotFound { .. });
}

#[tokio::test]
async fn blob_release_failure_does_not_abort_deletion() {
    let blobs = Arc::new(FailingDeleteBlobStore::new());
    let clock = Arc::new(FixedClock::at(0));
    let lands = LandRegistry::new(Arc::new(LandStore::new()), blobs, clock);

    let ada = farmer();
    let parcel = lands
        .create(&ada, listing::land("Glen Road", 5.0), listing::images(1))
        .await
        .unwrap();

    // The record is the source of truth; blob reclamation is best-effort.
    lands.delete(&ada, parcel.id).await.unwrap();
    assert!(lands.list().await.is_empty());
}

#[tokio::test]
async fn products_list_newest_first() {
    let w = world();
    let ada = farmer();

    w.products
        .create(&ada, listing::product("kale"), listing::images(1))
        .await
        .unwrap();
    w.clock.advance(10).await;
    w.products
        .create(&ada, listing::product("rye"), listing::images(1))
        .await
        .unwrap();

    let crops: Vec<_> = w
        .products
        .list()
        .await
        .into_iter()
        .map(|p| p.crop_name)
        .collect();
    assert_eq!(crops, vec!["rye", "kale"]);
}

#[tokio::test]
async fn products_have_no_duplicate_guard() {
    let w = world();
    let ada = farmer();

    w.products
        .create(&ada, listing::product("kale"), listing::images(1))
        .await
        .unwrap();
    w.products
        .create(&ada, listing::product("kale"), listing::images(1))
        .await
        .unwrap();
    assert_eq!(w.products.list().await.len(), 2);
}

#[tokio::test]
async fn land_validation_errors_name_the_field() {
    let w = world();
    let ada = farmer();

    let err = w
        .lands
        .create(&ada, listing::land("  ", 5.0), listing::images(1))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid: location is required");

    let err = w
        .lands
        .create(&ada, listing::land("Glen Road", 5.0), Vec::new())
        .await
        .unwrap_err();
    assert_matches!(err, CroftError::Validation { .. });
}
