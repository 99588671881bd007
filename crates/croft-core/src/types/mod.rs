//! Domain types shared across the Croft crates

pub mod account;
pub mod catalog;
pub mod claim;
pub mod identifiers;
