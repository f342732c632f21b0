//! GraphQL API integration tests
//!
//! Tests for bearer-token gating and query execution at `/graphql`.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{
    create_test_server, create_unique_test_user, generate_expired_token, generate_forged_token,
};

#[tokio::test]
async fn test_graphql_without_token() {
    let server = create_test_server().await;

    let response = server.post("/graphql").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.text(), "Unauthorized");
}

#[tokio::test]
async fn test_graphql_with_token_and_no_query() {
    let server = create_test_server().await;
    let user = create_unique_test_user(&server).await;

    let response = server
        .post("/graphql")
        .authorization_bearer(&user.token)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["errors"][0]["message"], "Must provide query string.");
}

#[tokio::test]
async fn test_me_query() {
    let server = create_test_server().await;
    let user = create_unique_test_user(&server).await;

    let response = server
        .post("/graphql")
        .authorization_bearer(&user.token)
        .json(&json!({ "query": "{ me { email } }" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "data": { "me": { "email": user.email } } })
    );
}

#[tokio::test]
async fn test_viewer_query_over_get() {
    let server = create_test_server().await;
    let user = create_unique_test_user(&server).await;

    let response = server
        .get("/graphql")
        .add_query_param("query", "{ viewer { email } }")
        .authorization_bearer(&user.token)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["viewer"]["email"], json!(user.email));
}

#[tokio::test]
async fn test_unreadable_query_string() {
    let server = create_test_server().await;
    let user = create_unique_test_user(&server).await;

    let response = server
        .get("/graphql")
        .add_raw_query_param("query=a&query=b")
        .authorization_bearer(&user.token)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "errors": [{ "message": "Must provide query string." }] })
    );
}

#[tokio::test]
async fn test_syntax_error_reaches_executor() {
    let server = create_test_server().await;
    let user = create_unique_test_user(&server).await;

    let response = server
        .post("/graphql")
        .authorization_bearer(&user.token)
        .json(&json!({ "query": "{ me { " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"], Value::Null);
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 1);
    assert!(errors[0]["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn test_query_with_variables() {
    let server = create_test_server().await;
    let user = create_unique_test_user(&server).await;

    let response = server
        .post("/graphql")
        .authorization_bearer(&user.token)
        .json(&json!({
            "query": "query Me($withEmail: Boolean!) { me { email @include(if: $withEmail) } }",
            "variables": { "withEmail": true },
            "operationName": "Me"
        }))
        .await;

    let body: Value = response.json();
    assert_eq!(body["data"]["me"]["email"], json!(user.email));
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let server = create_test_server().await;
    let token = generate_expired_token(Uuid::new_v4(), "late@example.com");

    let response = server
        .post("/graphql")
        .authorization_bearer(&token)
        .json(&json!({ "query": "{ viewer { email } }" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.text(), "Unauthorized");
}

#[tokio::test]
async fn test_forged_token_rejected() {
    let server = create_test_server().await;
    let token = generate_forged_token(Uuid::new_v4(), "forged@example.com");

    let response = server
        .post("/graphql")
        .authorization_bearer(&token)
        .json(&json!({ "query": "{ viewer { email } }" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let server = create_test_server().await;

    let response = server
        .post("/graphql")
        .authorization_bearer("not.a.jwt")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_from_other_server_rejected_for_missing_account() {
    // Valid signature, but the account lives in another server's store.
    let first = create_test_server().await;
    let user = create_unique_test_user(&first).await;
    let second = create_test_server().await;

    let response = second
        .post("/graphql")
        .authorization_bearer(&user.token)
        .json(&json!({ "query": "{ me { email } }" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["errors"][0]["message"], "User not found");
}

#[tokio::test]
async fn test_health_is_public() {
    let server = create_test_server().await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}
