use turnstile_core::{
    AccountKey, AccountStore, AccountStoreError, NewAccount, TokenError, TokenIssuer,
};

use super::Authenticated;

/// Error types for register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("An account with this {0} already exists")]
    Conflict(AccountKey),
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl From<AccountStoreError> for RegisterError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::AccountAlreadyExists(key) => RegisterError::Conflict(key),
            other => RegisterError::AccountStoreError(other),
        }
    }
}

/// Register use case - creates a local account and signs it in
pub struct RegisterUseCase<'a, S, T>
where
    S: AccountStore,
    T: TokenIssuer,
{
    account_store: &'a S,
    token_issuer: &'a T,
}

impl<'a, S, T> RegisterUseCase<'a, S, T>
where
    S: AccountStore,
    T: TokenIssuer,
{
    pub fn new(account_store: &'a S, token_issuer: &'a T) -> Self {
        Self {
            account_store,
            token_issuer,
        }
    }

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `new_account` - Validated username, email and password
    ///
    /// # Returns
    /// The created account with a fresh session token, or `RegisterError::Conflict`
    /// naming the identity that is already taken. When both collide, `email` is reported.
    #[tracing::instrument(
        name = "RegisterUseCase::execute",
        skip(self, new_account),
        fields(username = %new_account.username)
    )]
    pub async fn execute(&self, new_account: NewAccount) -> Result<Authenticated, RegisterError> {
        let existing = self
            .account_store
            .find_by_email_or_username(&new_account.email, &new_account.username)
            .await?;

        if let Some(existing) = existing {
            let key = if existing.email() == &new_account.email {
                AccountKey::Email
            } else {
                AccountKey::Username
            };
            tracing::debug!(%key, "registration collides with an existing account");
            return Err(RegisterError::Conflict(key));
        }

        let account = self.account_store.local_register(new_account).await?;

        let token = self
            .token_issuer
            .generate_token(&account.to_authenticated())
            .await?;

        tracing::info!(account_id = %account.id(), "account registered");

        Ok(Authenticated { account, token })
    }
}
