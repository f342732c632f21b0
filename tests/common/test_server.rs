//! Test server construction
//!
//! Every server gets its own in-memory SQLite database, so tests never
//! observe each other's accounts.

use authql::backend::server::{create_app_with_pool, database::connect_in_memory};
use authql::shared::ServerConfig;
use axum_test::TestServer;

/// Signing secret shared by the test server and token helpers
pub const TEST_SECRET: &str = "integration-test-secret-00000000";

/// Configuration with the cheapest bcrypt cost
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("test configuration is valid")
}

/// A server over a fresh, empty user store
pub async fn create_test_server() -> TestServer {
    let pool = connect_in_memory()
        .await
        .expect("Failed to open in-memory database");
    let app = create_app_with_pool(pool, &test_config()).expect("Failed to build app");
    TestServer::new(app).expect("Failed to start test server")
}
