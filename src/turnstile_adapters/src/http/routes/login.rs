use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;
use turnstile_application::{Authenticated, LoginUseCase};
use turnstile_core::{AccountStore, Email, Password, TokenIssuer};

use crate::auth::create_access_token_cookie;
use crate::http::{extract::ValidatedJson, state::AppState};

use super::error::AccountApiError;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S, T>(
    State(state): State<AppState<S, T>>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: AccountStore + 'static,
    T: TokenIssuer + 'static,
{
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let use_case = LoginUseCase::new(state.account_store.as_ref(), state.token_issuer.as_ref());
    let Authenticated { account, token } = use_case.execute(email, password).await?;

    let jar = jar.add(create_access_token_cookie(&token, &state.cookie_config));

    Ok((jar, Json(account.profile().clone())))
}
