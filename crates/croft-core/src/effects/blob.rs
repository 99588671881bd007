//! Blob store effect
//!
//! Uploaded images are opaque to the core: it stores bytes, keeps the
//! returned references on catalog entries, and releases them best-effort
//! when a listing is deleted.

use crate::types::identifiers::BlobRef;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Error type for blob operations
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
pub enum BlobError {
    /// Write failed
    #[error("Blob write failed: {reason}")]
    WriteFailed {
        /// Handler-internal diagnostic
        reason: String,
    },
    /// Delete failed for a reason other than absence
    #[error("Blob delete failed: {reason}")]
    DeleteFailed {
        /// Handler-internal diagnostic
        reason: String,
    },
}

/// Opaque byte storage for uploaded images
#[async_trait]
pub trait BlobStoreEffects: Send + Sync {
    /// Persist bytes and mint a reference to them
    async fn store(&self, bytes: Vec<u8>) -> Result<BlobRef, BlobError>;

    /// Remove a blob; `Ok(false)` means the reference was already gone.
    /// Callers treat any failure as non-fatal.
    async fn delete(&self, blob: &BlobRef) -> Result<bool, BlobError>;
}
