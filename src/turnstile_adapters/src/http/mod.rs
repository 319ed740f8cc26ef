pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use turnstile_core::{AccountStore, TokenIssuer};

pub use extract::{CurrentAccount, ValidatedJson};
pub use middleware::resolve_session;
pub use routes::AccountApiError;
pub use state::AppState;

/// The account routes behind the session middleware, relative to their mount point.
pub fn account_router<S, T>(state: AppState<S, T>) -> Router
where
    S: AccountStore + 'static,
    T: TokenIssuer + 'static,
{
    Router::new()
        .route("/register/local", post(routes::register::<S, T>))
        .route("/login/local", post(routes::login::<S, T>))
        .route("/exists/{key}/{value}", get(routes::exists::<S, T>))
        .route("/logout", post(routes::logout::<S, T>))
        .route("/check", get(routes::check))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            resolve_session::<S, T>,
        ))
        .with_state(state)
}
