/**
 * Error Conversion
 *
 * This module turns backend errors into HTTP responses and lifts the
 * lower-level auth and persistence errors into `BackendError`.
 *
 * # Response Format
 *
 * | variant          | status | body                                        |
 * |------------------|--------|---------------------------------------------|
 * | `SignupFailed`   | 400    | `{"message": "Error"}`                      |
 * | `NotLoggedIn`    | 401    | `{"message": "Not logged in"}`              |
 * | `Unauthorized`   | 401    | `Unauthorized` (text/plain)                 |
 * | `GraphQLRequest` | 400    | `{"errors": [{"message": "..."}]}`          |
 * | `Internal`       | 500    | `{"message": "Error"}`                      |
 */

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::backend::auth::error::AuthError;
use crate::backend::auth::users::UserError;
use crate::backend::error::types::BackendError;
use crate::shared::messages;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::SignupFailed => {
                (status, Json(json!({ "message": messages::SIGNUP_ERROR }))).into_response()
            }
            Self::NotLoggedIn => {
                (status, Json(json!({ "message": messages::NOT_LOGGED_IN }))).into_response()
            }
            Self::Unauthorized => (
                status,
                [(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"))],
                messages::UNAUTHORIZED,
            )
                .into_response(),
            Self::GraphQLRequest(message) => {
                (status, Json(json!({ "errors": [{ "message": message }] }))).into_response()
            }
            Self::Internal { context, message } => {
                tracing::error!("Internal error during {}: {}", context, message);
                (status, Json(json!({ "message": messages::SIGNUP_ERROR }))).into_response()
            }
        }
    }
}

/// A taken email is an ordinary signup rejection; anything else is internal.
impl From<UserError> for BackendError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailTaken => Self::SignupFailed,
            UserError::Database(e) => Self::internal("database access", e),
        }
    }
}

impl From<AuthError> for BackendError {
    fn from(err: AuthError) -> Self {
        Self::internal("credential processing", err)
    }
}
