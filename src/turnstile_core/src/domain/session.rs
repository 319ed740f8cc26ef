use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};

use super::account::{AccountId, Profile};

/// The account a request was authenticated as.
///
/// This is what a session token carries, so it is available without a store lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    pub id: AccountId,
    pub profile: Profile,
}

/// Opaque bearer credential handed to the client in the `access_token` cookie.
#[derive(Debug, Clone)]
pub struct SessionToken(Secret<String>);

impl SessionToken {
    pub fn new(token: String) -> Self {
        Self(Secret::new(token))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// A session token that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedSession {
    pub account: AuthenticatedAccount,
    pub expires_at: DateTime<Utc>,
}

impl ValidatedSession {
    pub fn expires_within(&self, window: chrono::Duration, now: DateTime<Utc>) -> bool {
        self.expires_at - now < window
    }
}
