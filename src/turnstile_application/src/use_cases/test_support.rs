//! Hand-written port doubles shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use turnstile_core::{
    Account, AccountId, AccountKey, AccountStore, AccountStoreError, AuthenticatedAccount, Email,
    NewAccount, Password, PasswordHash, Profile, SessionToken, TokenError, TokenIssuer, Username,
    ValidatedSession,
};

pub fn new_account(username: &str, email: &str, password: &str) -> NewAccount {
    NewAccount::new(
        Username::try_from(username.to_string()).unwrap(),
        Email::try_from(email.to_string()).unwrap(),
        Password::parse_new(Secret::new(password.to_string())).unwrap(),
    )
}

/// Keeps the plaintext password as the "hash" so verification is a string compare.
#[derive(Clone, Default)]
pub struct MockAccountStore {
    pub accounts: Arc<RwLock<Vec<Account>>>,
    pub unavailable: bool,
    pub reject_insert_with: Option<AccountKey>,
}

impl MockAccountStore {
    pub async fn insert(&self, new_account: NewAccount) -> Account {
        let account = Account::new(
            AccountId::new(),
            new_account.email,
            PasswordHash::new(new_account.password.as_ref().clone()),
            Profile::new(new_account.username),
            Utc::now(),
        );
        self.accounts.write().await.push(account.clone());
        account
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    fn check_available(&self) -> Result<(), AccountStoreError> {
        if self.unavailable {
            return Err(AccountStoreError::UnexpectedError(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AccountStore for MockAccountStore {
    async fn find_by_email_or_username(
        &self,
        email: &Email,
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError> {
        self.check_available()?;
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|a| a.email() == email || a.username() == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        self.check_available()?;
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.email() == email).cloned())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError> {
        self.check_available()?;
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.username() == username).cloned())
    }

    async fn local_register(&self, new_account: NewAccount) -> Result<Account, AccountStoreError> {
        self.check_available()?;
        if let Some(key) = self.reject_insert_with {
            return Err(AccountStoreError::AccountAlreadyExists(key));
        }
        Ok(self.insert(new_account).await)
    }

    async fn verify_password(
        &self,
        account: &Account,
        password: &Password,
    ) -> Result<bool, AccountStoreError> {
        self.check_available()?;
        Ok(account.password_hash().as_ref().expose_secret()
            == password.as_ref().expose_secret())
    }
}

/// Issues `token-for-<id>` and validates only tokens registered in `sessions`.
#[derive(Clone, Default)]
pub struct MockTokenIssuer {
    pub broken: bool,
    pub sessions: HashMap<String, ValidatedSession>,
}

#[async_trait::async_trait]
impl TokenIssuer for MockTokenIssuer {
    async fn generate_token(
        &self,
        account: &AuthenticatedAccount,
    ) -> Result<SessionToken, TokenError> {
        if self.broken {
            return Err(TokenError::UnexpectedError("signing failed".to_string()));
        }
        Ok(SessionToken::new(format!("token-for-{}", account.id)))
    }

    fn validate_token(&self, token: &str) -> Result<ValidatedSession, TokenError> {
        self.sessions
            .get(token)
            .cloned()
            .ok_or_else(|| TokenError::InvalidToken("unknown token".to_string()))
    }
}
