//! Credential store operations: signup, login, profile
//!
//! The raw password exists only transiently inside `register` and
//! `authenticate`; everything persisted or returned carries the digest
//! or nothing at all.

use croft_core::effects::{ClockEffects, PasswordEffects};
use croft_core::{
    Account, AccountId, AccountProfile, CroftError, NewAccount, Result, Role, RoleDetails,
};
use croft_store::AccountStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Signup, login, and profile projection over the account store
pub struct CredentialService {
    accounts: Arc<AccountStore>,
    passwords: Arc<dyn PasswordEffects>,
    clock: Arc<dyn ClockEffects>,
}

impl CredentialService {
    /// Create a credential service
    pub fn new(
        accounts: Arc<AccountStore>,
        passwords: Arc<dyn PasswordEffects>,
        clock: Arc<dyn ClockEffects>,
    ) -> Self {
        Self {
            accounts,
            passwords,
            clock,
        }
    }

    /// Register a new account
    ///
    /// Fails with `Validation` when any required field (common or
    /// role-conditional) is blank, and with `DuplicateEmail` when the
    /// email is already taken.
    pub async fn register(&self, request: NewAccount) -> Result<AccountId> {
        validate_signup(&request)?;

        let digest = self
            .passwords
            .hash(&request.password)
            .await
            .map_err(|e| CroftError::internal(format!("password hashing failed: {e}")))?;

        let account = Account {
            id: AccountId::new(),
            email: request.email,
            password_digest: digest,
            first_name: request.first_name,
            last_name: request.last_name,
            phone: request.phone,
            city: request.city,
            created_at: self.clock.now().await,
            details: request.details,
        };
        let id = account.id;
        let role = account.role();

        self.accounts.insert(account).await?;
        info!(account = %id, %role, "account registered");
        Ok(id)
    }

    /// Authenticate by email and password
    ///
    /// Unknown email and wrong password both fail with the same
    /// `InvalidCredentials`; the distinction below exists only in the
    /// debug diagnostics.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<(AccountId, Role)> {
        let Some(account) = self.accounts.find_by_email(email).await else {
            debug!("login failed: unknown email");
            return Err(CroftError::InvalidCredentials);
        };

        let matched = self
            .passwords
            .verify(password, &account.password_digest)
            .await
            .map_err(|e| CroftError::internal(format!("password verification failed: {e}")))?;
        if !matched {
            debug!(account = %account.id, "login failed: password mismatch");
            return Err(CroftError::InvalidCredentials);
        }

        debug!(account = %account.id, "login succeeded");
        Ok((account.id, account.role()))
    }

    /// Externally-visible account projection, digest excluded
    pub async fn profile(&self, id: AccountId) -> Result<AccountProfile> {
        Ok(self.accounts.get(id).await?.profile())
    }
}

fn require(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CroftError::validation(format!("{field} is required")));
    }
    Ok(())
}

fn validate_signup(request: &NewAccount) -> Result<()> {
    require(&request.email, "email")?;
    require(&request.password, "password")?;
    require(&request.first_name, "first name")?;
    require(&request.last_name, "last name")?;
    require(&request.phone, "phone")?;
    require(&request.city, "city")?;

    match &request.details {
        RoleDetails::Farmer {
            farm_name,
            farm_address,
        } => {
            require(farm_name, "farm name")?;
            require(farm_address, "farm address")?;
        }
        RoleDetails::Consumer { delivery_address } => {
            require(delivery_address, "delivery address")?;
        }
    }
    Ok(())
}
