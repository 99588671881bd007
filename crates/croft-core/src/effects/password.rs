//! Password primitive effect
//!
//! The core never sees how digests are produced; it only asks for a
//! digest at signup and a yes/no verification at login. Hardening the
//! primitive is a handler concern, not a core concern.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Error type for password operations
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
pub enum PasswordError {
    /// The stored digest could not be parsed by the handler
    #[error("Malformed digest")]
    MalformedDigest,
    /// Handler-internal failure
    #[error("Password operation failed: {reason}")]
    OperationFailed {
        /// Handler-internal diagnostic
        reason: String,
    },
}

/// Hash and verify passwords
#[async_trait]
pub trait PasswordEffects: Send + Sync {
    /// Produce a storable digest for a plaintext password
    async fn hash(&self, plaintext: &str) -> Result<String, PasswordError>;

    /// Check a plaintext password against a stored digest
    async fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, PasswordError>;
}
