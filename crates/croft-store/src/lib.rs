//! Croft store - Layer 2: persistence for the marketplace core
//!
//! Indexed in-memory tables behind async locks. Every uniqueness
//! invariant the data model carries is enforced here, inside a single
//! write-lock acquisition, so a check-then-insert can never interleave
//! with a concurrent writer:
//!
//! - accounts: unique email
//! - land parcels: per-owner unique `(location_text, size_value)`
//! - claims: per-consumer unique land target
//!
//! Product lots deliberately carry no uniqueness index.

pub mod accounts;
pub mod claims;
pub mod lands;
pub mod products;

pub use accounts::AccountStore;
pub use claims::ClaimStore;
pub use lands::LandStore;
pub use products::ProductStore;
