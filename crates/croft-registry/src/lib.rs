//! Croft registry - Layer 4: the farmer-facing catalogs
//!
//! Two parallel catalogs, each entry owned by exactly one farmer: land
//! parcels (with the duplicate-listing guard and an owner-only delete)
//! and product lots (create-and-list only, no duplicate guard). Reads
//! are public; every mutation passes through the authorization guard
//! first.

pub mod lands;
pub mod products;
pub mod validate;

pub use lands::LandRegistry;
pub use products::ProductRegistry;
