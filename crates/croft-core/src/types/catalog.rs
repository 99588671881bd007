//! Catalog entries: land parcels and product lots
//!
//! Both catalogs are owned by farmer accounts. Land parcels carry the
//! duplicate-listing guard key `(location_text, size_value)`; product lots
//! have no such guard.

use crate::timestamp::Timestamp;
use crate::types::identifiers::{AccountId, BlobRef, LandId, ProductId};
use serde::{Deserialize, Serialize};

/// A listed land parcel available for adoption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandParcel {
    /// Unique id
    pub id: LandId,
    /// Owning farmer account
    pub owner: AccountId,
    /// Parcel size (acres in the original deployment; the core only
    /// requires it to be finite and positive)
    pub size_value: f64,
    /// Free-text location
    pub location_text: String,
    /// Adoption duration in months
    pub duration_value: f64,
    /// Consumer's share of the harvest profit, 1..=100
    pub profit_share_percent: u8,
    /// Uploaded images, non-empty at creation
    pub image_refs: Vec<BlobRef>,
    /// Listing time
    pub created_at: Timestamp,
}

/// Attributes for a new land listing, before validation
#[derive(Debug, Clone)]
pub struct NewLandParcel {
    /// Parcel size
    pub size_value: f64,
    /// Free-text location
    pub location_text: String,
    /// Adoption duration in months
    pub duration_value: f64,
    /// Consumer's share of the harvest profit
    pub profit_share_percent: u8,
}

/// A listed product lot available for booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductLot {
    /// Unique id
    pub id: ProductId,
    /// Owning farmer account
    pub farmer: AccountId,
    /// Name of the crop
    pub crop_name: String,
    /// Available quantity, positive
    pub quantity: f64,
    /// Unit price, positive
    pub price: f64,
    /// Uploaded images
    pub image_refs: Vec<BlobRef>,
    /// Listing time
    pub created_at: Timestamp,
}

/// Attributes for a new product listing, before validation
#[derive(Debug, Clone)]
pub struct NewProductLot {
    /// Name of the crop
    pub crop_name: String,
    /// Available quantity
    pub quantity: f64,
    /// Unit price
    pub price: f64,
}

impl LandParcel {
    /// The per-owner duplicate-listing key
    pub fn listing_key(&self) -> (AccountId, &str, f64) {
        (self.owner, &self.location_text, self.size_value)
    }
}
