use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;
use turnstile_application::{Authenticated, RegisterUseCase};
use turnstile_core::{AccountStore, Email, NewAccount, Password, TokenIssuer, Username};

use crate::auth::create_access_token_cookie;
use crate::http::{extract::ValidatedJson, state::AppState};

use super::error::AccountApiError;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<S, T>(
    State(state): State<AppState<S, T>>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: AccountStore + 'static,
    T: TokenIssuer + 'static,
{
    let username = Username::try_from(request.username)?;
    let email = Email::try_from(request.email)?;
    let password = Password::parse_new(request.password)?;

    let use_case = RegisterUseCase::new(state.account_store.as_ref(), state.token_issuer.as_ref());
    let Authenticated { account, token } = use_case
        .execute(NewAccount::new(username, email, password))
        .await?;

    let jar = jar.add(create_access_token_cookie(&token, &state.cookie_config));

    Ok((jar, Json(account.profile().clone())))
}
