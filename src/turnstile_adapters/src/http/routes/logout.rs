use axum::{extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use turnstile_core::{AccountStore, TokenIssuer};

use crate::auth::create_removal_cookie;
use crate::http::state::AppState;

/// Clears the session cookie. Always succeeds, even without a session.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<S, T>(State(state): State<AppState<S, T>>, jar: CookieJar) -> impl IntoResponse
where
    S: AccountStore + 'static,
    T: TokenIssuer + 'static,
{
    // `add`, not `remove`: the removal must be sent even if no cookie came in
    let jar = jar.add(create_removal_cookie(&state.cookie_config));

    (jar, StatusCode::NO_CONTENT)
}
