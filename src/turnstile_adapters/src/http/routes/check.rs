use axum::{Json, response::IntoResponse};

use crate::http::extract::CurrentAccount;

use super::error::AccountApiError;

#[tracing::instrument(name = "Check", skip_all)]
pub async fn check(
    CurrentAccount(account): CurrentAccount,
) -> Result<impl IntoResponse, AccountApiError> {
    let account = account.ok_or(AccountApiError::Forbidden)?;

    Ok(Json(account.profile))
}
