use axum_extra::extract::cookie::{Cookie, SameSite};
use turnstile_core::{ACCESS_TOKEN_COOKIE_NAME, SESSION_TTL_IN_SECONDS, SessionToken};

/// Attributes shared by every `access_token` cookie this service writes.
#[derive(Debug, Clone, Copy)]
pub struct CookieConfig {
    pub secure: bool,
    pub same_site: SameSite,
    /// Matches the lifetime of the tokens the cookie carries.
    pub max_age_in_seconds: i64,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            secure: false,
            same_site: SameSite::Lax,
            max_age_in_seconds: SESSION_TTL_IN_SECONDS,
        }
    }
}

// Cookie carrying a freshly issued session token, valid as long as the token
pub fn create_access_token_cookie(
    token: &SessionToken,
    config: &CookieConfig,
) -> Cookie<'static> {
    build_cookie(
        token.expose().to_owned(),
        time::Duration::seconds(config.max_age_in_seconds),
        config,
    )
}

// Empty cookie that makes the client drop its session token immediately
pub fn create_removal_cookie(config: &CookieConfig) -> Cookie<'static> {
    build_cookie(String::new(), time::Duration::ZERO, config)
}

fn build_cookie(value: String, max_age: time::Duration, config: &CookieConfig) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(config.same_site)
        .max_age(max_age)
        .build()
}
