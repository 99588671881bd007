//! Croft core - Layer 1: domain types, errors, and effect traits
//!
//! This crate defines the vocabulary shared by every other Croft crate:
//! identifier newtypes, the tagged-union account model, catalog and claim
//! types, the unified `CroftError`, and the effect traits for the three
//! external capabilities the core consumes (clock, password primitive,
//! blob store). It performs no I/O of its own.

pub mod effects;
pub mod errors;
pub mod timestamp;
pub mod types;

pub use errors::{CroftError, Result};
pub use timestamp::Timestamp;
pub use types::account::{Account, AccountProfile, Identity, NewAccount, Role, RoleDetails};
pub use types::catalog::{LandParcel, NewLandParcel, NewProductLot, ProductLot};
pub use types::claim::{Claim, ClaimKind, ClaimSnapshot};
pub use types::identifiers::{AccountId, BlobRef, ClaimId, LandId, ProductId};
