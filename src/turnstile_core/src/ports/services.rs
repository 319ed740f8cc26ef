use async_trait::async_trait;
use thiserror::Error;

use crate::domain::session::{AuthenticatedAccount, SessionToken, ValidatedSession};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Token expired")]
    Expired,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Port trait for issuing and checking session tokens
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn generate_token(
        &self,
        account: &AuthenticatedAccount,
    ) -> Result<SessionToken, TokenError>;

    fn validate_token(&self, token: &str) -> Result<ValidatedSession, TokenError>;
}
