//! Account records with a unique email index

use async_lock::RwLock;
use croft_core::{Account, AccountId, CroftError, Result};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
struct AccountTable {
    records: HashMap<AccountId, Account>,
    by_email: HashMap<String, AccountId>,
}

/// Store of account records
///
/// Email uniqueness is case-sensitive, matching how emails are stored.
#[derive(Debug, Default)]
pub struct AccountStore {
    inner: RwLock<AccountTable>,
}

impl AccountStore {
    /// Create an empty account store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new account; fails with `DuplicateEmail` if the email is
    /// already taken. The check and the insert happen under one write
    /// lock.
    pub async fn insert(&self, account: Account) -> Result<()> {
        let mut table = self.inner.write().await;
        if table.by_email.contains_key(&account.email) {
            return Err(CroftError::DuplicateEmail);
        }
        table.by_email.insert(account.email.clone(), account.id);
        debug!(account = %account.id, "account record created");
        table.records.insert(account.id, account);
        Ok(())
    }

    /// Load an account by id
    pub async fn get(&self, id: AccountId) -> Result<Account> {
        self.inner
            .read()
            .await
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| CroftError::not_found(format!("account {id}")))
    }

    /// Look up an account by its exact email
    pub async fn find_by_email(&self, email: &str) -> Option<Account> {
        let table = self.inner.read().await;
        let id = table.by_email.get(email)?;
        table.records.get(id).cloned()
    }
}
