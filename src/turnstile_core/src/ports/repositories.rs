use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, NewAccount},
    account_key::AccountKey,
    email::Email,
    password::Password,
    username::Username,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("An account with this {0} already exists")]
    AccountAlreadyExists(AccountKey),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::AccountAlreadyExists(a), Self::AccountAlreadyExists(b)) => a == b,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistence collaborator for accounts.
///
/// Lookups return `Ok(None)` when nothing matches; `Err` is reserved for the
/// store itself being unavailable or broken.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// First account whose email equals `email` or whose username equals `username`.
    async fn find_by_email_or_username(
        &self,
        email: &Email,
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError>;

    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError>;

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError>;

    /// Creates an account with a freshly hashed credential.
    ///
    /// Fails with `AccountAlreadyExists` if the email or username is taken at insert time.
    async fn local_register(&self, new_account: NewAccount) -> Result<Account, AccountStoreError>;

    /// Whether `password` matches the account's stored credential.
    async fn verify_password(
        &self,
        account: &Account,
        password: &Password,
    ) -> Result<bool, AccountStoreError>;
}
