pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountError, AccountId, DEFAULT_THUMBNAIL, NewAccount, Profile},
    account_key::{AccountKey, UnknownAccountKey},
    email::Email,
    password::{Password, PasswordHash},
    session::{AuthenticatedAccount, SessionToken, ValidatedSession},
    username::Username,
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{TokenError, TokenIssuer},
};

/// Name of the cookie that carries the session token.
pub const ACCESS_TOKEN_COOKIE_NAME: &str = "access_token";

/// Lifetime of an issued session token and its cookie: seven days.
pub const SESSION_TTL_IN_SECONDS: i64 = 60 * 60 * 24 * 7;
