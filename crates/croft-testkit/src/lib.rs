//! Croft testkit - mock effect handlers and test data factories
//!
//! Mock handlers for the three effect traits live here, not in
//! croft-effects: production crates stay free of test doubles. The
//! factories produce well-formed signup requests and listings so tests
//! only spell out the field they are exercising.

pub mod handlers;
pub mod listing;
pub mod signup;

pub use handlers::{FailingDeleteBlobStore, FixedClock, MemoryBlobStore, PlaintextPasswordHandler};
