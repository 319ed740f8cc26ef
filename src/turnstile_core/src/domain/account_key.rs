use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the two unique identities of an account.
///
/// Used both to pick the lookup for an existence check and to report which
/// identity collided during registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKey {
    Email,
    Username,
}

impl AccountKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKey::Email => "email",
            AccountKey::Username => "username",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown account key `{0}`")]
pub struct UnknownAccountKey(pub String);

impl FromStr for AccountKey {
    type Err = UnknownAccountKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(AccountKey::Email),
            "username" => Ok(AccountKey::Username),
            other => Err(UnknownAccountKey(other.to_string())),
        }
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
