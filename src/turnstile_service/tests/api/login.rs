use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{TestApp, default_profile, registration, set_cookie_headers};

async fn app_with_account() -> TestApp {
    let app = TestApp::new().await;
    let response = app
        .post_register(&registration("abcd", "a@b.com", "secret1"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    app.post_logout().await;
    app
}

#[tokio::test]
async fn test_login_returns_profile_and_sets_cookie() {
    let app = app_with_account().await;

    let response = app
        .post_login(&json!({ "email": "a@b.com", "password": "secret1" }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookies = set_cookie_headers(&response);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("access_token="));
    assert!(cookies[0].contains("Max-Age=604800"));
    assert_eq!(response.json::<Value>().await.unwrap(), default_profile("abcd"));
}

#[tokio::test]
async fn test_login_with_wrong_password_is_forbidden_without_body() {
    let app = app_with_account().await;

    let response = app
        .post_login(&json!({ "email": "a@b.com", "password": "wrong" }))
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(set_cookie_headers(&response).is_empty());
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_with_unknown_email_is_forbidden() {
    let app = app_with_account().await;

    let response = app
        .post_login(&json!({ "email": "nobody@b.com", "password": "secret1" }))
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_rejects_invalid_input() {
    let app = app_with_account().await;

    let cases = [
        json!({ "email": "a@b.com" }),
        json!({ "email": "a@b.com", "password": "" }),
        json!({ "email": "not-an-email", "password": "secret1" }),
        json!({ "email": "a@b.com", "password": "secret1", "remember": true }),
    ];

    for body in cases {
        let response = app.post_login(&body).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "expected 400 for {body}"
        );
    }
}
