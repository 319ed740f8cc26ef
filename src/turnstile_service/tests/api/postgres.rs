use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, Secret};
use serde_json::{Value, json};
use testcontainers_modules::postgres;
use testcontainers_modules::testcontainers::{ContainerAsync, runners::AsyncRunner};
use turnstile_adapters::{PostgresAccountStore, config::PostgresSettings};
use turnstile_core::{
    AccountKey, AccountStore, AccountStoreError, Email, NewAccount, Password, Username,
};
use turnstile_service::configure_postgresql;

use crate::helpers::{TestApp, registration};

async fn postgres_store() -> (ContainerAsync<postgres::Postgres>, PostgresAccountStore) {
    let container = postgres::Postgres::default().start().await.unwrap();
    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();

    let settings = PostgresSettings {
        url: Secret::new(format!(
            "postgres://postgres:postgres@{host}:{port}/postgres"
        )),
        max_connections: 5,
    };
    let pool = configure_postgresql(&settings)
        .await
        .expect("Failed to configure postgres");

    (container, PostgresAccountStore::new(pool))
}

fn new_account(username: &str, email: &str) -> NewAccount {
    NewAccount::new(
        Username::try_from(username.to_string()).unwrap(),
        Email::try_from(email.to_string()).unwrap(),
        Password::parse_new(Secret::new("secret1".to_string())).unwrap(),
    )
}

#[tokio::test]
#[ignore = "needs docker"]
async fn test_postgres_store_registers_finds_and_verifies() {
    let (_container, store) = postgres_store().await;
    let email: String = SafeEmail().fake();

    let account = store
        .local_register(new_account("abcd", &email))
        .await
        .unwrap();
    assert!(account.password_hash().as_ref().expose_secret().starts_with("$argon2id$"));

    let found = store
        .find_by_email(account.email())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id(), account.id());
    assert_eq!(found.profile(), account.profile());

    let password = Password::parse(Secret::new("secret1".to_string())).unwrap();
    assert!(store.verify_password(&found, &password).await.unwrap());

    let duplicate_email = store.local_register(new_account("efgh", &email)).await;
    assert_eq!(
        duplicate_email.unwrap_err(),
        AccountStoreError::AccountAlreadyExists(AccountKey::Email)
    );

    let duplicate_username = store
        .local_register(new_account("abcd", "other@example.org"))
        .await;
    assert_eq!(
        duplicate_username.unwrap_err(),
        AccountStoreError::AccountAlreadyExists(AccountKey::Username)
    );
}

#[tokio::test]
#[ignore = "needs docker"]
async fn test_postgres_backed_service_round_trip() {
    let (_container, store) = postgres_store().await;
    let app = TestApp::with_store(store).await;

    let response = app
        .post_register(&registration("abcd", "a@b.com", "secret1"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .post_register(&registration("abcd", "c@d.com", "secret1"))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({ "key": "username" })
    );

    let response = app
        .post_login(&json!({ "email": "a@b.com", "password": "secret1" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}
