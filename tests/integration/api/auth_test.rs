//! Authentication API integration tests
//!
//! Tests for the signup and login endpoints.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{create_test_server, create_unique_test_user, login, signup};

#[tokio::test]
async fn test_signup_success() {
    let server = create_test_server().await;

    let response = signup(&server, "test@example.com", "password123").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "message": "User created" }));
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let server = create_test_server().await;

    signup(&server, "test@example.com", "password123")
        .await
        .assert_status_ok();
    let response = signup(&server, "test@example.com", "password123").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "message": "Error" }));
}

#[tokio::test]
async fn test_signup_duplicate_differs_only_in_case() {
    let server = create_test_server().await;

    signup(&server, "test@example.com", "password123")
        .await
        .assert_status_ok();
    let response = signup(&server, "  Test@Example.COM", "password123").await;

    assert_eq!(response.json::<Value>(), json!({ "message": "Error" }));
}

#[tokio::test]
async fn test_signup_missing_password() {
    let server = create_test_server().await;

    let response = server
        .post("/auth/signup")
        .form(&[("email", "test@example.com")])
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "message": "Error" }));
}

#[tokio::test]
async fn test_signup_without_body() {
    let server = create_test_server().await;

    let response = server.post("/auth/signup").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "message": "Error" }));
}

#[tokio::test]
async fn test_login_success() {
    let server = create_test_server().await;
    signup(&server, "test@example.com", "password123")
        .await
        .assert_status_ok();

    let response = login(&server, "test@example.com", "password123").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let server = create_test_server().await;
    signup(&server, "test@example.com", "password123")
        .await
        .assert_status_ok();

    let wrong_password = login(&server, "test@example.com", "wrong").await;
    let unknown_email = login(&server, "nobody@example.com", "password123").await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), wrong_password.status_code());
    assert_eq!(wrong_password.text(), unknown_email.text());
    assert_eq!(
        wrong_password.json::<Value>(),
        json!({ "message": "Not logged in" })
    );
}

#[tokio::test]
async fn test_login_missing_fields() {
    let server = create_test_server().await;

    let response = server
        .post("/auth/login")
        .form(&[("email", "test@example.com")])
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>(), json!({ "message": "Not logged in" }));
}

#[tokio::test]
async fn test_passwords_sharing_72_byte_prefix_are_distinct() {
    let server = create_test_server().await;
    let prefix = "a".repeat(72);

    let response = signup(&server, "long@example.com", &format!("{}SECRET-ONE", prefix)).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "message": "Error" }));

    signup(&server, "long@example.com", &prefix)
        .await
        .assert_status_ok();
    let different = format!("{}totally-different", prefix);
    let response = login(&server, "long@example.com", &different).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>(), json!({ "message": "Not logged in" }));

    login(&server, "long@example.com", &prefix)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_repeat_login_issues_valid_token() {
    let server = create_test_server().await;
    let user = create_unique_test_user(&server).await;

    let response = login(&server, &user.email, &user.password).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let token = response.json::<Value>()["token"]
        .as_str()
        .expect("token in body")
        .to_string();

    server
        .post("/graphql")
        .authorization_bearer(&token)
        .json(&json!({ "query": "{ viewer { email } }" }))
        .await
        .assert_status_ok();
}
