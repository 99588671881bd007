//! Croft effects - Layer 2: production effect handlers
//!
//! Stateless implementations of the effect traits defined in croft-core,
//! bridging to the operating system: wall-clock time, password digests,
//! and filesystem blob storage.
//!
//! No mock handlers live here; those belong in croft-testkit.

pub mod blob;
pub mod clock;
pub mod password;

pub use blob::{BlobStoreConfig, FilesystemBlobStore};
pub use clock::SystemClock;
pub use password::Blake3PasswordHandler;
