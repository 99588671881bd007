//! Mock effect handlers

use async_lock::Mutex;
use async_trait::async_trait;
use croft_core::effects::{
    BlobError, BlobStoreEffects, ClockEffects, PasswordEffects, PasswordError,
};
use croft_core::{BlobRef, Timestamp};
use std::collections::HashMap;

/// A clock pinned to a settable instant
#[derive(Debug)]
pub struct FixedClock {
    now_ms: Mutex<i64>,
}

impl FixedClock {
    /// Clock pinned at the given unix-millisecond instant
    pub fn at(ms: i64) -> Self {
        Self {
            now_ms: Mutex::new(ms),
        }
    }

    /// Move the clock to an absolute instant
    pub async fn set(&self, ms: i64) {
        *self.now_ms.lock().await = ms;
    }

    /// Move the clock forward
    pub async fn advance(&self, ms: i64) {
        *self.now_ms.lock().await += ms;
    }
}

#[async_trait]
impl ClockEffects for FixedClock {
    async fn now(&self) -> Timestamp {
        Timestamp::from_unix_ms(*self.now_ms.lock().await)
    }
}

/// Password handler that stores the plaintext behind a marker prefix
///
/// Keeps credential tests readable; obviously never used in production.
#[derive(Debug, Clone, Default)]
pub struct PlaintextPasswordHandler;

#[async_trait]
impl PasswordEffects for PlaintextPasswordHandler {
    async fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        Ok(format!("plain:{plaintext}"))
    }

    async fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, PasswordError> {
        let stored = digest
            .strip_prefix("plain:")
            .ok_or(PasswordError::MalformedDigest)?;
        Ok(stored == plaintext)
    }
}

/// In-memory blob store
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    next_id: Mutex<u64>,
}

impl MemoryBlobStore {
    /// Create an empty blob store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a reference is currently stored
    pub async fn contains(&self, blob: &BlobRef) -> bool {
        self.blobs.lock().await.contains_key(blob.as_str())
    }

    /// Number of stored blobs
    pub async fn len(&self) -> usize {
        self.blobs.lock().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl BlobStoreEffects for MemoryBlobStore {
    async fn store(&self, bytes: Vec<u8>) -> Result<BlobRef, BlobError> {
        let mut next = self.next_id.lock().await;
        let reference = format!("blob-{}", *next);
        *next += 1;
        drop(next);

        self.blobs.lock().await.insert(reference.clone(), bytes);
        Ok(BlobRef::new(reference))
    }

    async fn delete(&self, blob: &BlobRef) -> Result<bool, BlobError> {
        Ok(self.blobs.lock().await.remove(blob.as_str()).is_some())
    }
}

/// Blob store whose deletes always fail, for best-effort-release tests
#[derive(Debug, Default)]
pub struct FailingDeleteBlobStore {
    inner: MemoryBlobStore,
}

impl FailingDeleteBlobStore {
    /// Create an empty store with failing deletes
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStoreEffects for FailingDeleteBlobStore {
    async fn store(&self, bytes: Vec<u8>) -> Result<BlobRef, BlobError> {
        self.inner.store(bytes).await
    }

    async fn delete(&self, _blob: &BlobRef) -> Result<bool, BlobError> {
        Err(BlobError::DeleteFailed {
            reason: "injected failure".to_string(),
        })
    }
}
