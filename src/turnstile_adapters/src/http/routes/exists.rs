use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use turnstile_application::ExistsUseCase;
use turnstile_core::{AccountKey, AccountStore, TokenIssuer};

use crate::http::state::AppState;

use super::error::AccountApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[tracing::instrument(name = "Exists", skip_all)]
pub async fn exists<S, T>(
    State(state): State<AppState<S, T>>,
    Path((key, value)): Path<(String, String)>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: AccountStore + 'static,
    T: TokenIssuer + 'static,
{
    // only `email` and `username` are routable keys
    let key: AccountKey = key.parse().map_err(|_| AccountApiError::NotFound)?;

    let use_case = ExistsUseCase::new(state.account_store.as_ref());
    let exists = use_case.execute(key, value).await?;

    Ok(Json(ExistsResponse { exists }))
}
