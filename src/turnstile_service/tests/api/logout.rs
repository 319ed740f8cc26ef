use reqwest::StatusCode;

use crate::helpers::{TestApp, registration, set_cookie_headers};

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new().await;
    app.post_register(&registration("abcd", "a@b.com", "secret1"))
        .await;
    assert!(app.access_token().is_some());

    let response = app.post_logout().await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookies = set_cookie_headers(&response);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("access_token=;"));
    assert!(cookies[0].contains("HttpOnly"));
    assert!(cookies[0].contains("Max-Age=0"));
    assert!(response.bytes().await.unwrap().is_empty());
    assert!(app.access_token().is_none());
}

#[tokio::test]
async fn test_logout_without_session_still_succeeds() {
    let app = TestApp::new().await;

    let response = app.post_logout().await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(set_cookie_headers(&response).len(), 1);
}
