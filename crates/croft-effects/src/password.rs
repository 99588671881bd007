//! Password digest handler
//!
//! Salted blake3 keyed hashing. The digest wire format is
//! `hex(salt)$hex(tag)` where the tag is a keyed blake3 hash of the
//! plaintext under a key derived from the salt. Verification recomputes
//! the tag and compares in constant time.
//!
//! This is a capability implementation, not a KDF recommendation;
//! swapping in a hardened KDF only touches this handler.

use async_trait::async_trait;
use croft_core::effects::{PasswordEffects, PasswordError};
use rand::RngCore;
use subtle::ConstantTimeEq;

const SALT_LEN: usize = 16;
const KEY_CONTEXT: &str = "croft password digest v1";

/// Salted blake3 password handler
#[derive(Debug, Clone, Default)]
pub struct Blake3PasswordHandler;

impl Blake3PasswordHandler {
    /// Create a new password handler
    pub fn new() -> Self {
        Self
    }

    fn tag(salt: &[u8], plaintext: &str) -> [u8; 32] {
        let key = blake3::derive_key(KEY_CONTEXT, salt);
        *blake3::keyed_hash(&key, plaintext.as_bytes()).as_bytes()
    }
}

#[async_trait]
impl PasswordEffects for Blake3PasswordHandler {
    async fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        let tag = Self::tag(&salt, plaintext);
        Ok(format!("{}${}", hex::encode(salt), hex::encode(tag)))
    }

    async fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, PasswordError> {
        let (salt_hex, tag_hex) = digest
            .split_once('$')
            .ok_or(PasswordError::MalformedDigest)?;
        let salt = hex::decode(salt_hex).map_err(|_| PasswordError::MalformedDigest)?;
        let stored_tag = hex::decode(tag_hex).map_err(|_| PasswordError::MalformedDigest)?;
        if salt.len() != SALT_LEN || stored_tag.len() != 32 {
            return Err(PasswordError::MalformedDigest);
        }

        let computed = Self::tag(&salt, plaintext);
        Ok(computed[..].ct_eq(&stored_tag[..]).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify_accepts_the_password() {
        let handler = Blake3PasswordHandler::new();
        let digest = handler.hash("orchard4ever").await.unwrap();
        assert!(handler.verify("orchard4ever", &digest).await.unwrap());
        assert!(!handler.verify("orchard4evah", &digest).await.unwrap());
    }

    #[tokio::test]
    async fn digests_are_salted() {
        let handler = Blake3PasswordHandler::new();
        let a = handler.hash("same password").await.unwrap();
        let b = handler.hash("same password").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn malformed_digest_is_an_error_not_a_mismatch() {
        let handler = Blake3PasswordHandler::new();
        assert!(matches!(
            handler.verify("pw", "not-a-digest").await,
            Err(PasswordError::MalformedDigest)
        ));
        assert!(matches!(
            handler.verify("pw", "zzzz$zzzz").await,
            Err(PasswordError::MalformedDigest)
        ));
    }
}
