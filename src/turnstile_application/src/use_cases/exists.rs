use turnstile_core::{AccountKey, AccountStore, AccountStoreError, Email, Username};

/// Error types for exists use case
#[derive(Debug, thiserror::Error)]
pub enum ExistsError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

/// Exists use case - answers whether an email or username is already taken
pub struct ExistsUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
}

impl<'a, S> ExistsUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S) -> Self {
        Self { account_store }
    }

    /// Execute the exists use case
    ///
    /// A value that is not a well-formed email/username can never belong to an
    /// account, so it answers `false` without asking the store.
    #[tracing::instrument(name = "ExistsUseCase::execute", skip(self, value))]
    pub async fn execute(&self, key: AccountKey, value: String) -> Result<bool, ExistsError> {
        let account = match key {
            AccountKey::Email => match Email::try_from(value) {
                Ok(email) => self.account_store.find_by_email(&email).await?,
                Err(_) => None,
            },
            AccountKey::Username => match Username::try_from(value) {
                Ok(username) => self.account_store.find_by_username(&username).await?,
                Err(_) => None,
            },
        };

        Ok(account.is_some())
    }
}
