pub mod auth;
pub mod config;
pub mod http;
pub mod persistence;

pub use crate::auth::{
    Claims, CookieConfig, JwtConfig, JwtTokenIssuer, create_access_token_cookie,
    create_removal_cookie,
};
pub use crate::config::{AccountServiceSettings, AllowedOrigins};
pub use crate::http::{AccountApiError, AppState, account_router};
pub use crate::persistence::{HashMapAccountStore, PostgresAccountStore};
