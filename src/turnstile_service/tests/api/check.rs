use chrono::{Duration, Utc};
use reqwest::StatusCode;
use serde_json::Value;
use turnstile_adapters::JwtTokenIssuer;
use turnstile_core::{AccountId, AuthenticatedAccount, Profile, Username};

use crate::helpers::{TestApp, default_profile, jwt_config, registration, set_cookie_headers};

fn token_issued_at(issued_at: chrono::DateTime<Utc>) -> String {
    let account = AuthenticatedAccount {
        id: AccountId::new(),
        profile: Profile::new(Username::try_from("abcd".to_string()).unwrap()),
    };
    JwtTokenIssuer::new(jwt_config())
        .generate_token_at(&account, issued_at)
        .unwrap()
        .expose()
        .to_string()
}

#[tokio::test]
async fn test_check_after_register_returns_profile() {
    let app = TestApp::new().await;
    app.post_register(&registration("abcd", "a@b.com", "secret1"))
        .await;

    let response = app.get_check().await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), default_profile("abcd"));
}

#[tokio::test]
async fn test_check_without_session_is_forbidden() {
    let app = TestApp::new().await;

    let response = app.get_check().await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_check_after_logout_is_forbidden() {
    let app = TestApp::new().await;
    app.post_register(&registration("abcd", "a@b.com", "secret1"))
        .await;
    app.post_logout().await;

    let response = app.get_check().await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_check_with_tampered_token_is_forbidden() {
    let app = TestApp::new().await;
    let token = token_issued_at(Utc::now());
    app.add_access_token(&format!("{token}x"));

    let response = app.get_check().await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_check_refreshes_token_close_to_expiry() {
    let app = TestApp::new().await;
    let token = token_issued_at(Utc::now() - Duration::days(6) - Duration::hours(12));
    app.add_access_token(&token);

    let response = app.get_check().await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(set_cookie_headers(&response).len(), 1);
    let refreshed = app.access_token().unwrap();
    assert_ne!(refreshed, token);
}
