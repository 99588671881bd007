//! Core identifier types
//!
//! Uuid-backed newtypes for every entity the core tracks, plus the opaque
//! blob reference handed back by the blob store. Keeping these distinct
//! types (rather than bare Uuids) makes cross-entity mixups a compile
//! error.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random id
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the inner UUID
            pub fn uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

uuid_id!(
    /// Identifies an account (farmer or consumer)
    AccountId,
    "account"
);

uuid_id!(
    /// Identifies a listed land parcel
    LandId,
    "land"
);

uuid_id!(
    /// Identifies a listed product lot
    ProductId,
    "product"
);

uuid_id!(
    /// Identifies a claim held by a consumer
    ClaimId,
    "claim"
);

/// Opaque reference to a stored blob (an uploaded image)
///
/// The blob store mints these; the core never inspects the contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlobRef(pub String);

impl BlobRef {
    /// Wrap a raw reference string
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_display_with_prefix() {
        let a = AccountId::new();
        let b = AccountId::new();
        assert_ne!(a, b);
        assert!(a.to_string().starts_with("account-"));
        assert!(LandId::new().to_string().starts_with("land-"));
    }

    #[test]
    fn id_uuid_round_trip() {
        let id = ClaimId::new();
        assert_eq!(ClaimId::from_uuid(id.uuid()), id);
    }
}
