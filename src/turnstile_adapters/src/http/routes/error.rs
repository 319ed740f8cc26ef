use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use turnstile_application::{ExistsError, LoginError, RegisterError};
use turnstile_core::{AccountError, AccountKey, AccountStoreError, TokenError};

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize)]
pub struct ConflictResponse {
    pub key: AccountKey,
}

#[derive(Debug, Error)]
pub enum AccountApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("An account with this {0} already exists")]
    Conflict(AccountKey),

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found")]
    NotFound,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AccountApiError {
    fn into_response(self) -> Response {
        match self {
            AccountApiError::InvalidInput(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message }),
            )
                .into_response(),

            AccountApiError::Conflict(key) => {
                (StatusCode::CONFLICT, Json(ConflictResponse { key })).into_response()
            }

            AccountApiError::Forbidden => StatusCode::FORBIDDEN.into_response(),

            AccountApiError::NotFound => StatusCode::NOT_FOUND.into_response(),

            AccountApiError::UnexpectedError(e) => {
                tracing::error!(error = %e, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<AccountError> for AccountApiError {
    fn from(error: AccountError) -> Self {
        AccountApiError::InvalidInput(error.to_string())
    }
}

impl From<AccountStoreError> for AccountApiError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::AccountAlreadyExists(key) => AccountApiError::Conflict(key),
            AccountStoreError::UnexpectedError(e) => AccountApiError::UnexpectedError(e),
        }
    }
}

impl From<TokenError> for AccountApiError {
    fn from(error: TokenError) -> Self {
        AccountApiError::UnexpectedError(error.to_string())
    }
}

impl From<RegisterError> for AccountApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::Conflict(key) => AccountApiError::Conflict(key),
            RegisterError::AccountStoreError(e) => e.into(),
            RegisterError::TokenError(e) => e.into(),
        }
    }
}

impl From<LoginError> for AccountApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => AccountApiError::Forbidden,
            LoginError::AccountStoreError(e) => e.into(),
            LoginError::TokenError(e) => e.into(),
        }
    }
}

impl From<ExistsError> for AccountApiError {
    fn from(error: ExistsError) -> Self {
        match error {
            ExistsError::AccountStoreError(e) => e.into(),
        }
    }
}
