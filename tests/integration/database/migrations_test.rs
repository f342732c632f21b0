//! Database migration tests
//!
//! Tests to ensure migrations run correctly and database schema is valid

use authql::backend::auth::users::{create_user, get_user_by_email};
use authql::backend::auth::UserError;
use authql::backend::server::database::{connect, connect_in_memory, run_migrations};

#[tokio::test]
async fn test_migrations_run_successfully() {
    let pool = connect_in_memory().await.unwrap();
    let result = run_migrations(&pool).await;
    assert!(result.is_ok(), "Migrations should run successfully");
}

#[tokio::test]
async fn test_users_table_exists() {
    let pool = connect_in_memory().await.unwrap();

    let result = sqlx::query("SELECT 1 FROM users LIMIT 1")
        .execute(&pool)
        .await;

    assert!(result.is_ok(), "Users table should exist");
}

#[tokio::test]
async fn test_connect_from_url() {
    let pool = connect("sqlite::memory:", 1).await.unwrap();

    let result = sqlx::query("SELECT 1 FROM users LIMIT 1")
        .execute(&pool)
        .await;

    assert!(result.is_ok(), "connect should apply migrations");
}

#[tokio::test]
async fn test_email_unique_constraint() {
    let pool = connect_in_memory().await.unwrap();

    create_user(&pool, "unique@example.com", "hash".to_string())
        .await
        .unwrap();
    let duplicate = create_user(&pool, "unique@example.com", "other".to_string()).await;

    assert!(matches!(duplicate, Err(UserError::EmailTaken)));
    let stored = get_user_by_email(&pool, "unique@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.password_hash, "hash");
}
