//! Croft guards - Layer 3: authorization gates
//!
//! The stateless guard consulted before every registry or ledger
//! mutation. It answers one question: may this verified identity perform
//! an operation that requires a given role and, optionally, ownership of
//! a given resource?
//!
//! Denials surface as the generic `Forbidden`; which gate denied (and
//! whose resource was touched) appears only in tracing diagnostics.

use croft_core::{AccountId, CroftError, Identity, Result, Role};
use tracing::warn;

/// Authorize an operation for a verified caller
///
/// - `required_role`: the operation is reserved for this role.
/// - `resource_owner`: the operation is reserved for the owner of the
///   touched resource (e.g. land deletion).
///
/// Both checks must pass when both are given. No checks means allow:
/// authentication alone was the requirement.
pub fn authorize(
    identity: &Identity,
    required_role: Option<Role>,
    resource_owner: Option<AccountId>,
) -> Result<()> {
    if let Some(required) = required_role {
        if identity.role != required {
            warn!(
                account = %identity.account,
                have = %identity.role,
                need = %required,
                "role gate denied"
            );
            return Err(CroftError::Forbidden);
        }
    }

    if let Some(owner) = resource_owner {
        if identity.account != owner {
            warn!(account = %identity.account, "ownership gate denied");
            return Err(CroftError::Forbidden);
        }
    }

    Ok(())
}

/// Shorthand: require a role, no ownership check
pub fn require_role(identity: &Identity, role: Role) -> Result<()> {
    authorize(identity, Some(role), None)
}

/// Shorthand: require ownership of a resource
pub fn require_owner(identity: &Identity, owner: AccountId) -> Result<()> {
    authorize(identity, None, Some(owner))
}
