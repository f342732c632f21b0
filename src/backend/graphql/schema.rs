/**
 * GraphQL Schema
 *
 * Query root and object types. Every resolver runs behind the auth
 * middleware, so an `AuthenticatedUser` is always present in the request
 * data; resolvers still treat its absence as an error rather than panic.
 */

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema, SimpleObject, ID};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::backend::auth::users::{get_user_by_id, User};
use crate::backend::middleware::auth::AuthenticatedUser;

/// The executable schema served at `/graphql`
pub type AuthSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema with the database pool as shared data
pub fn build_schema(pool: SqlitePool) -> AuthSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(pool)
        .finish()
}

/// A stored account, without its password hash
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: ID,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self {
            id: ID(user.id.to_string()),
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// The identity carried by the request's token
#[derive(SimpleObject, Debug, Clone)]
pub struct Viewer {
    pub user_id: ID,
    pub email: String,
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The authenticated account, loaded from the store
    async fn me(&self, ctx: &Context<'_>) -> async_graphql::Result<UserObject> {
        let identity = ctx.data::<AuthenticatedUser>()?;
        let pool = ctx.data::<SqlitePool>()?;

        let user = get_user_by_id(pool, identity.user_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load user {}: {}", identity.user_id, e);
                async_graphql::Error::new("Internal error")
            })?
            .ok_or_else(|| {
                tracing::warn!("Token for missing user {}", identity.user_id);
                async_graphql::Error::new("User not found")
            })?;

        Ok(user.into())
    }

    /// The identity as presented in the token, without a database round trip
    async fn viewer(&self, ctx: &Context<'_>) -> async_graphql::Result<Viewer> {
        let identity = ctx.data::<AuthenticatedUser>()?;
        Ok(Viewer {
            user_id: ID(identity.user_id.to_string()),
            email: identity.email.clone(),
        })
    }
}
