/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router and wraps it in the
 * HTTP middleware stack.
 *
 * # Layer Order
 *
 * Outermost first:
 * 1. `TraceLayer` - request spans and latency
 * 2. `CorsLayer` - preflight handling and response headers
 * 3. `RequestBodyLimitLayer` - rejects bodies over 64 KiB
 */

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, StatusCode,
    },
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::backend::routes::api_routes::{
    configure_auth_routes, configure_graphql_routes, configure_health_routes,
};
use crate::backend::server::state::AppState;
use crate::shared::config::{ConfigError, ServerConfig};

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state
/// * `config` - Server configuration, read for the CORS origin
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// `ConfigError::InvalidValue` if the CORS origin is not a valid header value
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Result<Router<()>, ConfigError> {
    let router = Router::new();
    let router = configure_auth_routes(router);
    let router = configure_graphql_routes(router, app_state.clone());
    let router = configure_health_routes(router);

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") });

    let router = router
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(build_cors_layer(config)?)
        .layer(TraceLayer::new_for_http());

    Ok(router.with_state(app_state))
}

/// Build the CORS layer
///
/// A configured origin is the only one allowed; otherwise any origin is.
fn build_cors_layer(config: &ServerConfig) -> Result<CorsLayer, ConfigError> {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(3600));

    Ok(match config.cors_header()? {
        Some(origin) => {
            tracing::info!("CORS restricted to {:?}", origin);
            base.allow_origin(origin)
        }
        None => base.allow_origin(Any),
    })
}
