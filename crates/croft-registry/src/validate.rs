//! Input validation for new listings

use croft_core::{CroftError, NewLandParcel, NewProductLot, Result};

fn positive_finite(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CroftError::validation(format!(
            "{field} must be a positive number"
        )));
    }
    Ok(())
}

/// Validate a new land listing
pub fn land(attrs: &NewLandParcel, image_count: usize) -> Result<()> {
    if attrs.location_text.trim().is_empty() {
        return Err(CroftError::validation("location is required"));
    }
    positive_finite(attrs.size_value, "land size")?;
    positive_finite(attrs.duration_value, "duration")?;
    if !(1..=100).contains(&attrs.profit_share_percent) {
        return Err(CroftError::validation(
            "profit share must be between 1 and 100",
        ));
    }
    if image_count == 0 {
        return Err(CroftError::validation("please upload at least one image"));
    }
    Ok(())
}

/// Validate a new product listing
///
/// Products carry no image requirement; the asymmetry with land is
/// deliberate.
pub fn product(attrs: &NewProductLot) -> Result<()> {
    if attrs.crop_name.trim().is_empty() {
        return Err(CroftError::validation("crop name is required"));
    }
    positive_finite(attrs.quantity, "quantity")?;
    positive_finite(attrs.price, "price")?;
    Ok(())
}
