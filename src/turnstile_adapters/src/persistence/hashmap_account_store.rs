use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use turnstile_core::{
    Account, AccountId, AccountKey, AccountStore, AccountStoreError, Email, NewAccount, Password,
    Profile, Username,
};

use super::password::{compute_password_hash, verify_password_hash};

/// In-memory account store used when no database is configured, and in tests.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn find_by_email_or_username(
        &self,
        email: &Email,
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.email() == email || a.username() == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email() == email).cloned())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.username() == username).cloned())
    }

    #[tracing::instrument(name = "Adding account to memory", skip_all)]
    async fn local_register(&self, new_account: NewAccount) -> Result<Account, AccountStoreError> {
        let NewAccount {
            username,
            email,
            password,
        } = new_account;

        // hash before taking the lock, hashing is slow
        let password_hash = compute_password_hash(password).await?;

        let mut accounts = self.accounts.write().await;
        for existing in accounts.values() {
            if existing.email() == &email {
                return Err(AccountStoreError::AccountAlreadyExists(AccountKey::Email));
            }
            if existing.username() == &username {
                return Err(AccountStoreError::AccountAlreadyExists(
                    AccountKey::Username,
                ));
            }
        }

        let account = Account::new(
            AccountId::new(),
            email,
            password_hash,
            Profile::new(username),
            Utc::now(),
        );
        accounts.insert(account.id(), account.clone());
        Ok(account)
    }

    async fn verify_password(
        &self,
        account: &Account,
        password: &Password,
    ) -> Result<bool, AccountStoreError> {
        verify_password_hash(account.password_hash().clone(), password.clone()).await
    }
}
