//! Claim lifecycle behavior

use assert_matches::assert_matches;
use croft_core::{AccountId, ClaimId, ClaimKind, CroftError, Identity, Role};
use croft_ledger::ClaimLedger;
use croft_registry::{LandRegistry, ProductRegistry};
use croft_store::{ClaimStore, LandStore, ProductStore};
use croft_testkit::{listing, FixedClock, MemoryBlobStore};
use std::sync::Arc;

struct World {
    lands: LandRegistry,
    products: ProductRegistry,
    ledger: ClaimLedger,
    farmer: Identity,
    consumer: Identity,
}

fn world() -> World {
    let land_store = Arc::new(LandStore::new());
    let product_store = Arc::new(ProductStore::new());
    let blobs = Arc::new(MemoryBlobStore::new());
    let clock = Arc::new(FixedClock::at(1_000));

    World {
        lands: LandRegistry::new(land_store.clone(), blobs.clone(), clock.clone()),
        products: ProductRegistry::new(product_store.clone(), blobs, clock.clone()),
        ledger: ClaimLedger::new(
            Arc::new(ClaimStore::new()),
            land_store,
            product_store,
            clock,
        ),
        farmer: Identity {
            account: AccountId::new(),
            role: Role::Farmer,
        },
        consumer: Identity {
            account: AccountId::new(),
            role: Role::Consumer,
        },
    }
}

#[tokio::test]
async fn adopting_twice_is_rejected_with_one_claim_kept() {
    let w = world();
    let parcel = w
        .lands
        .create(&w.farmer, listing::land("Glen Road", 5.0), listing::images(1))
        .await
        .unwrap();

    w.ledger.adopt_land(&w.consumer, parcel.id).await.unwrap();
    let err = w.ledger.adopt_land(&w.consumer, parcel.id).await.unwrap_err();
    assert_eq!(err, CroftError::AlreadyClaimed);

    let claims = w.ledger.list(&w.consumer).await.unwrap();
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].kind, ClaimKind::Land);
}

#[tokio::test]
async fn booking_twice_yields_two_distinct_claims() {
    let w = world();
    let lot = w
        .products
        .create(&w.farmer, listing::product("kale"), listing::images(1))
        .await
        .unwrap();

    let first = w.ledger.book_product(&w.consumer, lot.id).await.unwrap();
    let second = w.ledger.book_product(&w.consumer, lot.id).await.unwrap();
    assert_ne!(first.id, second.id);

    let claims = w.ledger.list(&w.consumer).await.unwrap();
    assert_eq!(claims.len(), 2);
    assert!(claims.iter().all(|c| c.target_id == lot.id.uuid()));
}

#[tokio::test]
async fn land_snapshot_maps_parcel_attributes() {
    let w = world();
    let parcel = w
        .lands
        .create(&w.farmer, listing::land("Fell Side", 3.5), listing::images(2))
        .await
        .unwrap();

    let claim = w.ledger.adopt_land(&w.consumer, parcel.id).await.unwrap();
    assert_eq!(claim.snapshot.label, "Fell Side");
    assert_eq!(claim.snapshot.quantity, 3.5);
    assert_eq!(claim.snapshot.price, f64::from(parcel.profit_share_percent));
    assert_eq!(claim.snapshot.image.as_ref(), parcel.image_refs.first());
}

#[tokio::test]
async fn product_snapshot_maps_lot_attributes() {
    let w = world();
    let lot = w
        .products
        .create(&w.farmer, listing::product("rye"), listing::images(1))
        .await
        .unwrap();

    let claim = w.ledger.book_product(&w.consumer, lot.id).await.unwrap();
    assert_eq!(claim.snapshot.label, "rye");
    assert_eq!(claim.snapshot.price, lot.price);
    assert_eq!(claim.snapshot.quantity, lot.quantity);
}

#[tokio::test]
async fn claims_against_missing_targets_are_not_found() {
    let w = world();
    assert_matches!(
        w.ledger
            .book_product(&w.consumer, croft_core::ProductId::new())
            .await,
        Err(CroftError::NotFound { .. })
    );
    assert_matches!(
        w.ledger
            .adopt_land(&w.consumer, croft_core::LandId::new())
            .await,
        Err(CroftError::NotFound { .. })
    );
}

#[tokio::test]
async fn only_consumers_hold_claims() {
    let w = world();
    let lot = w
        .products
        .create(&w.farmer, listing::product("kale"), listing::images(1))
        .await
        .unwrap();
    assert_eq!(
        w.ledger.book_product(&w.farmer, lot.id).await.unwrap_err(),
        CroftError::Forbidden
    );
}

#[tokio::test]
async fn cancel_is_idempotent() {
    let w = world();
    let lot = w
        .products
        .create(&w.farmer, listing::product("kale"), listing::images(1))
        .await
        .unwrap();
    let claim = w.ledger.book_product(&w.consumer, lot.id).await.unwrap();

    // Cancel once, then again, then a claim id that never existed.
    w.ledger.cancel(&w.consumer, claim.id).await.unwrap();
    w.ledger.cancel(&w.consumer, claim.id).await.unwrap();
    w.ledger.cancel(&w.consumer, ClaimId::new()).await.unwrap();
    assert!(w.ledger.list(&w.consumer).await.unwrap().is_empty());
}

#[tokio::test]
async fn cancelling_an_adoption_allows_re_adoption() {
    let w = world();
    let parcel = w
        .lands
        .create(&w.farmer, listing::land("Glen Road", 5.0), listing::images(1))
        .await
        .unwrap();

    let claim = w.ledger.adopt_land(&w.consumer, parcel.id).await.unwrap();
    w.ledger.cancel(&w.consumer, claim.id).await.unwrap();
    w.ledger.adopt_land(&w.consumer, parcel.id).await.unwrap();
}

#[tokio::test]
async fn a_deleted_target_leaves_the_snapshot_intact() {
    let w = world();
    let parcel = w
        .lands
        .create(&w.farmer, listing::land("Glen Road", 5.0), listing::images(1))
        .await
        .unwrap();

    w.ledger.adopt_land(&w.consumer, parcel.id).await.unwrap();
    w.lands.delete(&w.farmer, parcel.id).await.unwrap();

    // The claim outlives its target; the snapshot is self-contained.
    let claims = w.ledger.list(&w.consumer).await.unwrap();
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].snapshot.label, "Glen Road");
}
