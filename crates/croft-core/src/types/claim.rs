//! Claims: product bookings and land adoptions
//!
//! A claim is a consumer's record of having booked a product lot or
//! adopted a land parcel. The snapshot is taken at claim time and is
//! self-contained, so a claim remains meaningful even if its target is
//! later deleted.

use crate::timestamp::Timestamp;
use crate::types::identifiers::{AccountId, BlobRef, ClaimId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which kind of catalog entry a claim targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimKind {
    /// Booking of a product lot
    Product,
    /// Adoption of a land parcel
    Land,
}

/// Denormalized catalog attributes captured when the claim was made
///
/// For product bookings: `label` is the crop name, `quantity`/`price`
/// come straight off the lot. For land adoptions: `label` is the parcel
/// location, `price` is the profit share and `quantity` the parcel size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSnapshot {
    /// Crop name or parcel location
    pub label: String,
    /// Lot price or profit share percent
    pub price: f64,
    /// Lot quantity or parcel size
    pub quantity: f64,
    /// First image of the target at claim time, if any
    pub image: Option<BlobRef>,
}

/// An active claim held by a consumer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique id
    pub id: ClaimId,
    /// Holding consumer account
    pub consumer: AccountId,
    /// Product booking or land adoption
    pub kind: ClaimKind,
    /// Id of the targeted catalog entry (ProductId or LandId as a raw
    /// uuid, depending on `kind`)
    pub target_id: Uuid,
    /// Attributes captured at claim time
    pub snapshot: ClaimSnapshot,
    /// Claim time
    pub created_at: Timestamp,
}
