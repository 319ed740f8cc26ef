use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{
    email::Email,
    password::{Password, PasswordHash},
    session::AuthenticatedAccount,
    username::Username,
};

pub const DEFAULT_THUMBNAIL: &str = "/static/images/default_thumbnail.png";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("username must be 4 to 15 letters or digits")]
    InvalidUsername,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("password is required")]
    MissingPassword,
    #[error("password must be at least 6 characters")]
    PasswordTooShort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AccountId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The public view of an account. This is the only account data ever sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: Username,
    pub thumbnail: String,
}

impl Profile {
    pub fn new(username: Username) -> Self {
        Self {
            username,
            thumbnail: DEFAULT_THUMBNAIL.to_string(),
        }
    }
}

/// Validated registration input handed to the account store.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: Username,
    pub email: Email,
    pub password: Password,
}

impl NewAccount {
    pub fn new(username: Username, email: Email, password: Password) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    email: Email,
    password_hash: PasswordHash,
    profile: Profile,
    created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(
        id: AccountId,
        email: Email,
        password_hash: PasswordHash,
        profile: Profile,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            profile,
            created_at,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn username(&self) -> &Username {
        &self.profile.username
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The identity carried by a session token issued for this account.
    pub fn to_authenticated(&self) -> AuthenticatedAccount {
        AuthenticatedAccount {
            id: self.id,
            profile: self.profile.clone(),
        }
    }
}
