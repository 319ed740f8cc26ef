use secrecy::{ExposeSecret, Secret};

use super::account::AccountError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A plaintext password candidate.
///
/// `try_from` only requires a non-empty value, which is all a login needs.
/// New credentials go through [`Password::parse_new`] which also enforces the minimum length.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(password: Secret<String>) -> Result<Self, AccountError> {
        if password.expose_secret().is_empty() {
            return Err(AccountError::MissingPassword);
        }
        Ok(Self(password))
    }

    pub fn parse_new(password: Secret<String>) -> Result<Self, AccountError> {
        let password = Self::parse(password)?;
        if password.0.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AccountError::PasswordTooShort);
        }
        Ok(password)
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = AccountError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Stored credential in PHC string format. Opaque to everything but the account store.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
