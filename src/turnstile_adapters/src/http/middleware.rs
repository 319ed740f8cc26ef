use axum::{
    extract::{Request, State},
    http::header::SET_COOKIE,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use turnstile_application::ResolveSessionUseCase;
use turnstile_core::{ACCESS_TOKEN_COOKIE_NAME, AccountStore, TokenIssuer};

use crate::auth::create_access_token_cookie;

use super::state::AppState;

/// Resolves the `access_token` cookie into an `AuthenticatedAccount` request
/// extension. Requests without a valid token pass through anonymous.
///
/// Tokens close to expiry are re-issued on successful responses, unless the
/// handler already wrote the session cookie itself (login, register, logout).
pub async fn resolve_session<S, T>(
    State(state): State<AppState<S, T>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response
where
    S: AccountStore + 'static,
    T: TokenIssuer + 'static,
{
    let token = match jar.get(ACCESS_TOKEN_COOKIE_NAME) {
        Some(cookie) if !cookie.value().is_empty() => cookie.value().to_owned(),
        _ => return next.run(request).await,
    };

    let use_case = ResolveSessionUseCase::new(state.token_issuer.as_ref(), state.refresh_threshold);
    let Some(session) = use_case.execute(&token).await else {
        return next.run(request).await;
    };

    request.extensions_mut().insert(session.account);
    let response = next.run(request).await;

    match session.refreshed_token {
        Some(token) if response.status().is_success() && !sets_session_cookie(&response) => {
            let refreshed = jar.add(create_access_token_cookie(&token, &state.cookie_config));
            (refreshed, response).into_response()
        }
        _ => response,
    }
}

fn sets_session_cookie(response: &Response) -> bool {
    let prefix = format!("{ACCESS_TOKEN_COOKIE_NAME}=");
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.starts_with(&prefix))
}
