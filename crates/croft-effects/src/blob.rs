//! Filesystem blob store handler
//!
//! Stores uploaded image bytes as files under a configured base
//! directory and hands back the relative path as the opaque reference.
//! References never escape the base directory.

use async_trait::async_trait;
use croft_core::effects::{BlobError, BlobStoreEffects};
use croft_core::BlobRef;
use rand::RngCore;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Configuration for the filesystem blob store
#[derive(Debug, Clone)]
pub struct BlobStoreConfig {
    /// Directory blobs are written under
    pub base_path: PathBuf,
}

/// Blob store backed by the local filesystem
#[derive(Debug, Clone)]
pub struct FilesystemBlobStore {
    base_path: PathBuf,
}

impl FilesystemBlobStore {
    /// Create a new filesystem blob store
    pub fn new(config: BlobStoreConfig) -> Self {
        Self {
            base_path: config.base_path,
        }
    }

    /// Resolve a reference to a path, rejecting anything that would
    /// escape the base directory
    fn resolve(&self, blob: &BlobRef) -> Result<PathBuf, BlobError> {
        let relative = Path::new(blob.as_str());
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if escapes {
            return Err(BlobError::DeleteFailed {
                reason: format!("reference escapes the blob root: {blob}"),
            });
        }
        Ok(self.base_path.join(relative))
    }
}

#[async_trait]
impl BlobStoreEffects for FilesystemBlobStore {
    async fn store(&self, bytes: Vec<u8>) -> Result<BlobRef, BlobError> {
        let mut name_bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut name_bytes);
        let name = hex::encode(name_bytes);

        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| BlobError::WriteFailed {
                reason: format!("failed to create blob directory: {e}"),
            })?;

        let path = self.base_path.join(&name);
        fs::write(&path, bytes)
            .await
            .map_err(|e| BlobError::WriteFailed {
                reason: format!("failed to write blob: {e}"),
            })?;

        debug!(blob = %name, "stored blob");
        Ok(BlobRef::new(name))
    }

    async fn delete(&self, blob: &BlobRef) -> Result<bool, BlobError> {
        let path = self.resolve(blob)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(BlobError::DeleteFailed {
                reason: format!("failed to remove blob: {e}"),
            }),
        }
    }
}
