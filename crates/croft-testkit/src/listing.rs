//! Listing factories for registry and ledger tests

use croft_core::{NewLandParcel, NewProductLot};

/// A well-formed land listing at the given location and size
pub fn land(location: &str, size_value: f64) -> NewLandParcel {
    NewLandParcel {
        size_value,
        location_text: location.to_string(),
        duration_value: 12.0,
        profit_share_percent: 30,
    }
}

/// A well-formed product listing for the given crop
pub fn product(crop: &str) -> NewProductLot {
    NewProductLot {
        crop_name: crop.to_string(),
        quantity: 25.0,
        price: 4.5,
    }
}

/// `count` distinct fake image payloads
pub fn images(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| format!("image-bytes-{i}").into_bytes())
        .collect()
}
