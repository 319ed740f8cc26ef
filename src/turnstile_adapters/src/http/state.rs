use std::sync::Arc;

use turnstile_core::{AccountStore, TokenIssuer};

use crate::auth::CookieConfig;

/// Shared handler state: the two collaborators plus cookie policy.
pub struct AppState<S, T> {
    pub account_store: Arc<S>,
    pub token_issuer: Arc<T>,
    pub cookie_config: CookieConfig,
    pub refresh_threshold: chrono::Duration,
}

impl<S, T> AppState<S, T>
where
    S: AccountStore,
    T: TokenIssuer,
{
    pub fn new(
        account_store: S,
        token_issuer: T,
        cookie_config: CookieConfig,
        refresh_threshold: chrono::Duration,
    ) -> Self {
        Self {
            account_store: Arc::new(account_store),
            token_issuer: Arc::new(token_issuer),
            cookie_config,
            refresh_threshold,
        }
    }
}

// Manual impl: the collaborators are behind `Arc`, so they need not be `Clone`.
impl<S, T> Clone for AppState<S, T> {
    fn clone(&self) -> Self {
        Self {
            account_store: Arc::clone(&self.account_store),
            token_issuer: Arc::clone(&self.token_issuer),
            cookie_config: self.cookie_config,
            refresh_threshold: self.refresh_threshold,
        }
    }
}
