use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use turnstile_adapters::{
    AccountServiceSettings, AllowedOrigins, AppState, CookieConfig, account_router,
    config::ConfigError,
};
use turnstile_core::{AccountStore, TokenIssuer};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Path the standalone server mounts the account routes under.
pub const ACCOUNT_ROUTES_PREFIX: &str = "/api/auth";

/// Account service providing the register, login, exists, logout and check routes
pub struct AccountService {
    router: Router,
}

impl AccountService {
    /// Create a new AccountService around the given collaborators
    ///
    /// # Arguments
    /// * `account_store` - Where accounts and their password hashes live
    /// * `token_issuer` - Issues and validates session tokens
    /// * `cookie_config` - `Secure` / `SameSite` attributes of the session cookie
    /// * `refresh_threshold` - Remaining token lifetime below which it is re-issued
    pub fn new<S, T>(
        account_store: S,
        token_issuer: T,
        cookie_config: CookieConfig,
        refresh_threshold: chrono::Duration,
    ) -> Self
    where
        S: AccountStore + 'static,
        T: TokenIssuer + 'static,
    {
        let state = AppState::new(account_store, token_issuer, cookie_config, refresh_threshold);

        Self {
            router: account_router(state),
        }
    }

    /// Same as [`AccountService::new`], with cookie policy and refresh threshold from settings
    pub fn from_settings<S, T>(
        account_store: S,
        token_issuer: T,
        settings: &AccountServiceSettings,
    ) -> Result<Self, ConfigError>
    where
        S: AccountStore + 'static,
        T: TokenIssuer + 'static,
    {
        Ok(Self::new(
            account_store,
            token_issuer,
            settings.cookie_config(),
            settings.refresh_threshold()?,
        ))
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AccountService into a router that can be nested into another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of origins allowed to make credentialed CORS requests
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Router with the account routes mounted under `/api/auth`
    pub fn into_app(self, allowed_origins: Option<AllowedOrigins>) -> Router {
        Router::new().nest(ACCOUNT_ROUTES_PREFIX, self.as_nested_router(allowed_origins))
    }

    /// Run the account service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let app = self.into_app(allowed_origins);

        tracing::info!("Account service listening on {}", listener.local_addr()?);

        axum::serve(listener, app).await
    }
}
