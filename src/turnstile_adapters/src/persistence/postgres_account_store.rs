use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, Pool, Postgres};
use turnstile_core::{
    Account, AccountId, AccountKey, AccountStore, AccountStoreError, Email, NewAccount, Password,
    PasswordHash, Profile, Username,
};
use uuid::Uuid;

use super::password::{compute_password_hash, verify_password_hash};

/// Name of the unique constraint Postgres generates for `accounts.email`.
const EMAIL_UNIQUE_CONSTRAINT: &str = "accounts_email_key";

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: sqlx::PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresAccountStore { pool }
    }
}

#[derive(FromRow)]
struct AccountRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    thumbnail: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountStoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let username = Username::try_from(row.username)
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
        let email = Email::try_from(row.email)
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        let mut profile = Profile::new(username);
        profile.thumbnail = row.thumbnail;

        Ok(Account::new(
            AccountId::from(row.id),
            email,
            PasswordHash::new(Secret::new(row.password_hash)),
            profile,
            row.created_at,
        ))
    }
}

fn unexpected(e: sqlx::Error) -> AccountStoreError {
    AccountStoreError::UnexpectedError(e.to_string())
}

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Retrieving account by email or username from PostgreSQL", skip_all)]
    async fn find_by_email_or_username(
        &self,
        email: &Email,
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, username, email, password_hash, thumbnail, created_at
                FROM accounts
                WHERE email = $1 OR username = $2
                ORDER BY (email = $1) DESC
                LIMIT 1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        row.map(Account::try_from).transpose()
    }

    #[tracing::instrument(name = "Retrieving account by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, username, email, password_hash, thumbnail, created_at
                FROM accounts
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        row.map(Account::try_from).transpose()
    }

    #[tracing::instrument(name = "Retrieving account by username from PostgreSQL", skip_all)]
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, username, email, password_hash, thumbnail, created_at
                FROM accounts
                WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        row.map(Account::try_from).transpose()
    }

    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn local_register(&self, new_account: NewAccount) -> Result<Account, AccountStoreError> {
        let NewAccount {
            username,
            email,
            password,
        } = new_account;

        let password_hash = compute_password_hash(password).await?;
        let profile = Profile::new(username);

        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                INSERT INTO accounts (id, username, email, password_hash, thumbnail)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, username, email, password_hash, thumbnail, created_at
            "#,
        )
        .bind(AccountId::new().as_uuid())
        .bind(profile.username.as_str())
        .bind(email.as_ref().expose_secret())
        .bind(password_hash.as_ref().expose_secret())
        .bind(&profile.thumbnail)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    let key = match db_err.constraint() {
                        Some(EMAIL_UNIQUE_CONSTRAINT) => AccountKey::Email,
                        _ => AccountKey::Username,
                    };
                    return AccountStoreError::AccountAlreadyExists(key);
                }
            }
            unexpected(e)
        })?;

        Account::try_from(row)
    }

    async fn verify_password(
        &self,
        account: &Account,
        password: &Password,
    ) -> Result<bool, AccountStoreError> {
        verify_password_hash(account.password_hash().clone(), password.clone()).await
    }
}
