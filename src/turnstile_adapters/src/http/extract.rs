use std::convert::Infallible;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use turnstile_core::AuthenticatedAccount;

use super::routes::AccountApiError;

/// `Json` whose rejections (bad syntax, missing or unknown fields, wrong
/// content type) all become `400 Bad Request`.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AccountApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AccountApiError::InvalidInput(rejection.body_text())
            })?;
        Ok(Self(value))
    }
}

/// The account the session middleware resolved for this request, if any.
pub struct CurrentAccount(pub Option<AuthenticatedAccount>);

impl<S> FromRequestParts<S> for CurrentAccount
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<AuthenticatedAccount>().cloned()))
    }
}
