/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/signup` - User registration
 * - `POST /auth/login` - User login
 *
 * ## GraphQL
 * - `GET|POST /graphql` - GraphQL endpoint (requires authentication)
 *
 * ## Health
 * - `GET /health` - Liveness probe
 */

use axum::{
    middleware::from_fn_with_state,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use crate::backend::auth::{login, signup};
use crate::backend::graphql::{graphql_get, graphql_post};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure authentication routes
///
/// Both routes are public and accept `application/x-www-form-urlencoded`
/// bodies with `email` and `password` fields.
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with authentication routes configured
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

/// Configure the GraphQL endpoint
///
/// The auth middleware is applied with `route_layer`, so it runs only for
/// requests that match `/graphql`. Unknown paths still fall through to the
/// 404 handler instead of answering 401.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State the middleware reads token keys from
pub fn configure_graphql_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let graphql = Router::new()
        .route("/graphql", get(graphql_get).post(graphql_post))
        .route_layer(from_fn_with_state(app_state, auth_middleware));

    router.merge(graphql)
}

/// Configure the health check
pub fn configure_health_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
