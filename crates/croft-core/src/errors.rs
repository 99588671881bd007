//! Unified error system for Croft
//!
//! A single error enum covers the whole core. Authentication and
//! authorization failures carry fixed generic messages so a caller cannot
//! distinguish which check failed; conflict errors carry specific messages
//! so the caller can adjust; storage and internal faults keep their detail
//! in server-side logs only.

use serde::{Deserialize, Serialize};

/// Unified error type for all Croft operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum CroftError {
    /// Malformed or missing input, surfaced verbatim to the caller
    #[error("Invalid: {message}")]
    Validation {
        /// Description of the invalid input
        message: String,
    },

    /// An account with the given email already exists
    #[error("An account with this email already exists")]
    DuplicateEmail,

    /// The farmer already listed a parcel with the same location and size
    #[error("You already listed this land")]
    DuplicateListing,

    /// The consumer already adopted this land parcel
    #[error("You already adopted this land")]
    AlreadyClaimed,

    /// Unknown email or wrong password; the two cases are intentionally
    /// indistinguishable here
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No session token was presented
    #[error("No token, authorization denied")]
    TokenMissing,

    /// The session token failed signature, format, or expiry checks
    #[error("Token is not valid")]
    TokenInvalid,

    /// Referenced entity absent
    #[error("Not found: {message}")]
    NotFound {
        /// Description of what was not found
        message: String,
    },

    /// Authorization failure; never reveals the owner's identity or which
    /// gate denied
    #[error("Forbidden")]
    Forbidden,

    /// Storage backend fault
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage failure
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl CroftError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error is the caller's fault (input or state conflict)
    /// rather than a server-side fault
    pub fn is_client_fault(&self) -> bool {
        !matches!(self, Self::Storage { .. } | Self::Internal { .. })
    }
}

/// Standard Result type for Croft operations
pub type Result<T> = std::result::Result<T, CroftError>;
