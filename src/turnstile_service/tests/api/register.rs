use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{TestApp, default_profile, registration, set_cookie_headers};

#[tokio::test]
async fn test_register_returns_profile_and_sets_cookie() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&registration("abcd", "a@b.com", "secret1"))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookies = set_cookie_headers(&response);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].contains("HttpOnly"));
    assert!(cookies[0].contains("Path=/"));
    assert!(cookies[0].contains("Max-Age=604800"));
    assert_eq!(response.json::<Value>().await.unwrap(), default_profile("abcd"));
    assert!(app.access_token().is_some());
}

#[tokio::test]
async fn test_register_twice_conflicts_on_email() {
    let app = TestApp::new().await;
    app.post_register(&registration("abcd", "a@b.com", "secret1"))
        .await;

    let response = app
        .post_register(&registration("abcd", "a@b.com", "secret1"))
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(set_cookie_headers(&response).is_empty());
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({ "key": "email" })
    );
}

#[tokio::test]
async fn test_register_conflicts_on_username() {
    let app = TestApp::new().await;
    app.post_register(&registration("abcd", "a@b.com", "secret1"))
        .await;

    let response = app
        .post_register(&registration("abcd", "other@b.com", "secret1"))
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({ "key": "username" })
    );
}

#[tokio::test]
async fn test_register_rejects_invalid_input() {
    let app = TestApp::new().await;

    let cases = [
        registration("abc", "a@b.com", "secret1"),
        registration("abcdefghijklmnop", "a@b.com", "secret1"),
        registration("ab_cd", "a@b.com", "secret1"),
        registration("abcd", "not-an-email", "secret1"),
        registration("abcd", "a@b.com", "short"),
        json!({ "username": "abcd", "email": "a@b.com" }),
        json!({ "username": "abcd", "email": "a@b.com", "password": "secret1", "role": "admin" }),
        json!({ "username": 1234, "email": "a@b.com", "password": "secret1" }),
    ];

    for body in cases {
        let response = app.post_register(&body).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "expected 400 for {body}"
        );
        assert!(set_cookie_headers(&response).is_empty());
    }

    // nothing was created
    let response = app.get_exists("username", "abcd").await;
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({ "exists": false })
    );
}

#[tokio::test]
async fn test_register_rejects_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/api/auth/register/local", app.address))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
