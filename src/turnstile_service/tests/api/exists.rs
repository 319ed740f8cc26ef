use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{TestApp, registration};

#[tokio::test]
async fn test_exists_reports_taken_email_and_username() {
    let app = TestApp::new().await;
    app.post_register(&registration("abcd", "a@b.com", "secret1"))
        .await;

    for (key, value, expected) in [
        ("email", "a@b.com", true),
        ("email", "z@b.com", false),
        ("username", "abcd", true),
        ("username", "efgh", false),
    ] {
        let response = app.get_exists(key, value).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.json::<Value>().await.unwrap(),
            json!({ "exists": expected }),
            "{key}={value}"
        );
    }
}

#[tokio::test]
async fn test_exists_does_not_need_a_session() {
    let app = TestApp::new().await;

    let response = app.get_exists("username", "abcd").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({ "exists": false })
    );
}

#[tokio::test]
async fn test_exists_with_unknown_key_is_not_found() {
    let app = TestApp::new().await;

    let response = app.get_exists("phone", "12345").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
