use turnstile_core::{AccountStore, AccountStoreError, Email, Password, TokenError, TokenIssuer};

use super::Authenticated;

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Incorrect email or password")]
    InvalidCredentials,
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

/// Login use case - authenticates with email and password
pub struct LoginUseCase<'a, S, T>
where
    S: AccountStore,
    T: TokenIssuer,
{
    account_store: &'a S,
    token_issuer: &'a T,
}

impl<'a, S, T> LoginUseCase<'a, S, T>
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

    /// Execute the login use case
    ///
    /// An unknown email and a wrong password both yield `InvalidCredentials`.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<Authenticated, LoginError> {
        let Some(account) = self.account_store.find_by_email(&email).await? else {
            tracing::debug!("no account for email");
            return Err(LoginError::InvalidCredentials);
        };

        if !self
            .account_store
            .verify_password(&account, &password)
            .await?
        {
            tracing::debug!(account_id = %account.id(), "password mismatch");
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_issuer
            .generate_token(&account.to_authenticated())
            .await?;

        Ok(Authenticated { account, token })
    }
}
