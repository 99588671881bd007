//! Session token issuance and verification
//!
//! A token is `base64url(payload).base64url(tag)`: the payload is the
//! JSON-serialized claims `{account, role, issued_at, expires_at}` and
//! the tag is a blake3 keyed hash of the payload bytes under the
//! configured secret. Verification checks the tag in constant time
//! before parsing the payload, then checks expiry against the clock
//! effect. A token is valid up to and including its expiry instant.
//!
//! There is no refresh mechanism; expiry forces re-authentication.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use croft_core::effects::ClockEffects;
use croft_core::{AccountId, CroftError, Identity, Result, Role, Timestamp};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::debug;

/// Fixed session lifetime: 24 hours
pub const SESSION_TTL_MS: i64 = 24 * 60 * 60 * 1000;

const TAG_CONTEXT: &str = "croft session token v1";

/// Session service configuration, passed at construction
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Signing secret shared by issuer and verifier
    pub secret: [u8; 32],
    /// Token lifetime in milliseconds
    pub ttl_ms: i64,
}

impl SessionConfig {
    /// Configuration with the standard 24h lifetime
    pub fn new(secret: [u8; 32]) -> Self {
        Self {
            secret,
            ttl_ms: SESSION_TTL_MS,
        }
    }

    /// Configuration with a freshly generated secret
    ///
    /// Suitable for single-process deployments; a multi-process
    /// deployment must share the secret explicitly.
    pub fn generate() -> Self {
        let mut secret = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut secret);
        Self::new(secret)
    }
}

/// An issued session token in wire form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    /// The wire form of the token
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    account: AccountId,
    role: Role,
    issued_at: Timestamp,
    expires_at: Timestamp,
}

/// Issues and verifies session tokens
pub struct SessionService {
    config: SessionConfig,
    clock: Arc<dyn ClockEffects>,
}

impl SessionService {
    /// Create a session service
    pub fn new(config: SessionConfig, clock: Arc<dyn ClockEffects>) -> Self {
        Self { config, clock }
    }

    fn tag(&self, payload: &[u8]) -> [u8; 32] {
        let key = blake3::derive_key(TAG_CONTEXT, &self.config.secret);
        *blake3::keyed_hash(&key, payload).as_bytes()
    }

    /// Issue a token for an authenticated account
    pub async fn issue(&self, account: AccountId, role: Role) -> Result<SessionToken> {
        let issued_at = self.clock.now().await;
        let claims = TokenClaims {
            account,
            role,
            issued_at,
            expires_at: issued_at.plus_ms(self.config.ttl_ms),
        };
        let payload = serde_json::to_vec(&claims)
            .map_err(|e| CroftError::internal(format!("token encoding failed: {e}")))?;
        let tag = self.tag(&payload);

        debug!(account = %account, %role, "session token issued");
        Ok(SessionToken(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(tag)
        )))
    }

    /// Verify a presented token and recover the caller's identity
    ///
    /// `None` means no token was presented at all (`TokenMissing`); every
    /// format, signature, or expiry problem is the single generic
    /// `TokenInvalid`.
    pub async fn verify(&self, token: Option<&str>) -> Result<Identity> {
        let token = token.ok_or(CroftError::TokenMissing)?;

        let (payload_b64, tag_b64) = token.split_once('.').ok_or(CroftError::TokenInvalid)?;
        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| CroftError::TokenInvalid)?;
        let presented_tag = URL_SAFE_NO_PAD
            .decode(tag_b64)
            .map_err(|_| CroftError::TokenInvalid)?;

        let expected_tag = self.tag(&payload);
        // Tag length and value are checked before the payload is parsed.
        if presented_tag.len() != expected_tag.len() {
            return Err(CroftError::TokenInvalid);
        }
        if !bool::from(expected_tag[..].ct_eq(&presented_tag[..])) {
            debug!("session token tag mismatch");
            return Err(CroftError::TokenInvalid);
        }

        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| CroftError::TokenInvalid)?;

        let now = self.clock.now().await;
        if now > claims.expires_at {
            debug!(account = %claims.account, "session token expired");
            return Err(CroftError::TokenInvalid);
        }

        Ok(Identity {
            account: claims.account,
            role: claims.role,
        })
    }
}
