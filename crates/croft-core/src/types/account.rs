//! Account model
//!
//! Accounts are a tagged union over the two marketplace roles. The
//! role-conditional fields live inside the variant, so an account can
//! never exist with the wrong set of attributes for its role; the role is
//! fixed at construction and never changes.

use crate::timestamp::Timestamp;
use crate::types::identifiers::AccountId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marketplace role of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Lists land parcels and product lots
    Farmer,
    /// Books produce and adopts land
    Consumer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Farmer => write!(f, "farmer"),
            Role::Consumer => write!(f, "consumer"),
        }
    }
}

/// Role-conditional account attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleDetails {
    /// Farmer attributes, both mandatory
    Farmer {
        /// Display name of the farm
        farm_name: String,
        /// Physical address of the farm
        farm_address: String,
    },
    /// Consumer attributes
    Consumer {
        /// Address produce is delivered to
        delivery_address: String,
    },
}

impl RoleDetails {
    /// The role this set of details belongs to
    pub fn role(&self) -> Role {
        match self {
            RoleDetails::Farmer { .. } => Role::Farmer,
            RoleDetails::Consumer { .. } => Role::Consumer,
        }
    }
}

/// A stored account record
///
/// `password_digest` holds the output of the password effect handler,
/// never the raw password. Records are created at signup and never
/// mutated or deleted by this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique, immutable id
    pub id: AccountId,
    /// Unique email, case-sensitive as stored
    pub email: String,
    /// Digest from the password primitive
    pub password_digest: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact phone number
    pub phone: String,
    /// City of residence
    pub city: String,
    /// Signup time
    pub created_at: Timestamp,
    /// Role-conditional attributes
    pub details: RoleDetails,
}

impl Account {
    /// The account's role
    pub fn role(&self) -> Role {
        self.details.role()
    }

    /// Externally-visible projection of this account
    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            id: self.id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            created_at: self.created_at,
            details: self.details.clone(),
        }
    }
}

/// Account projection with the password digest excluded
///
/// This is the only account shape that ever leaves the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    /// Unique, immutable id
    pub id: AccountId,
    /// Unique email
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact phone number
    pub phone: String,
    /// City of residence
    pub city: String,
    /// Signup time
    pub created_at: Timestamp,
    /// Role-conditional attributes
    pub details: RoleDetails,
}

impl AccountProfile {
    /// The account's role
    pub fn role(&self) -> Role {
        self.details.role()
    }
}

/// Verified caller identity, produced by the session verifier and
/// consumed by the authorization guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The authenticated account
    pub account: AccountId,
    /// Role recorded when the session was issued
    pub role: Role,
}

/// Signup request; the password is still plaintext here and is consumed
/// by the credential store, which only ever persists its digest
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Desired email
    pub email: String,
    /// Plaintext password, hashed before storage
    pub password: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact phone number
    pub phone: String,
    /// City of residence
    pub city: String,
    /// Role-conditional attributes
    pub details: RoleDetails,
}
