//! Authentication test helpers
//!
//! Provides utilities for creating test users, generating tokens,
//! and testing authentication flows.

use authql::backend::auth::TokenKeys;
use axum_test::{TestResponse, TestServer};
use uuid::Uuid;

use super::test_server::{test_config, TEST_SECRET};

/// Test user credentials
pub struct TestUser {
    pub email: String,
    pub password: String,
    pub token: String,
}

/// POST the signup form
pub async fn signup(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/auth/signup")
        .form(&[("email", email), ("password", password)])
        .await
}

/// POST the login form
pub async fn login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/auth/login")
        .form(&[("email", email), ("password", password)])
        .await
}

/// Sign up and log in a user with a unique email
pub async fn create_unique_test_user(server: &TestServer) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    let password = "test_password_123".to_string();

    signup(server, &email, &password).await.assert_status_ok();
    let body: serde_json::Value = login(server, &email, &password).await.json();
    let token = body["token"]
        .as_str()
        .expect("login should return a token")
        .to_string();

    TestUser {
        email,
        password,
        token,
    }
}

/// Token signed with the test secret that expired an hour ago
pub fn generate_expired_token(user_id: Uuid, email: &str) -> String {
    let ttl = test_config().token_ttl_secs;
    let now = u64::try_from(chrono::Utc::now().timestamp()).expect("clock after epoch");
    TokenKeys::new(TEST_SECRET.as_bytes(), ttl)
        .issue_at(user_id, email, now - ttl - 3600)
        .expect("Failed to generate expired token")
}

/// Token with a valid shape signed by a different secret
pub fn generate_forged_token(user_id: Uuid, email: &str) -> String {
    TokenKeys::new(b"not-the-server-secret-0000000000", 3600)
        .issue(user_id, email)
        .expect("Failed to generate forged token")
}
