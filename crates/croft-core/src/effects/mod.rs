//! Effect trait definitions
//!
//! The core treats every external capability as an effect trait: a
//! wall-clock, the password primitive, and the blob store. Production
//! handlers live in `croft-effects`; mock handlers live in
//! `croft-testkit`. Nothing in this module performs I/O.

pub mod blob;
pub mod clock;
pub mod password;

pub use blob::{BlobError, BlobStoreEffects};
pub use clock::ClockEffects;
pub use password::{PasswordEffects, PasswordError};
