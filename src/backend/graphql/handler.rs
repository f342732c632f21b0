/**
 * GraphQL HTTP Handler
 *
 * Turns an HTTP request into a GraphQL operation and executes it with the
 * caller's identity attached.
 *
 * # Accepted Requests
 *
 * - `POST` with `Content-Type: application/json`:
 *   `{"query": "...", "variables": {...}, "operationName": "..."}`
 * - `POST` with `Content-Type: application/x-www-form-urlencoded`:
 *   `query=...&variables=<json>&operationName=...`
 * - `POST` with `Content-Type: application/graphql`: the body is the query
 * - `GET` with the same fields as URL query parameters
 *
 * A request that carries no query is answered with a GraphQL-shaped
 * `{"errors": [{"message": "Must provide query string."}]}` and status 400.
 */

use async_graphql::Variables;
use axum::{
    extract::{rejection::QueryRejection, FromRequest, Query, Request, State},
    http::{header::CONTENT_TYPE, HeaderMap},
    response::Json,
    Form,
};
use serde::Deserialize;
use serde_json::Value;

use crate::backend::error::BackendError;
use crate::backend::graphql::schema::AuthSchema;
use crate::backend::middleware::auth::AuthUser;
use crate::shared::messages;

/// JSON request body
#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonBody {
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    variables: Option<Value>,
    #[serde(default)]
    operation_name: Option<String>,
}

/// URL-encoded parameters, from a form body or the query string
///
/// `variables` arrives as a JSON string here.
#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EncodedParams {
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    variables: Option<String>,
    #[serde(default)]
    operation_name: Option<String>,
}

/// A request ready for the executor
#[derive(Debug, PartialEq)]
pub struct GraphQLInput {
    pub query: String,
    pub variables: Option<Value>,
    pub operation_name: Option<String>,
}

/// Lowercased media type of the request, parameters stripped
fn media_type(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let essence = value.split(';').next()?.trim();
    Some(essence.to_ascii_lowercase())
}

impl GraphQLInput {
    fn new(
        query: Option<String>,
        variables: Option<Value>,
        operation_name: Option<String>,
    ) -> Result<Self, BackendError> {
        let query = query
            .filter(|q| !q.trim().is_empty())
            .ok_or(BackendError::GraphQLRequest(messages::MISSING_QUERY))?;

        let variables = match variables {
            None | Some(Value::Null) => None,
            Some(v @ Value::Object(_)) => Some(v),
            Some(_) => return Err(BackendError::GraphQLRequest(messages::INVALID_VARIABLES)),
        };

        Ok(Self {
            query,
            variables,
            operation_name: operation_name.filter(|o| !o.is_empty()),
        })
    }

    /// Build from URL-encoded parameters, parsing `variables` as JSON
    pub fn from_encoded(params: EncodedParams) -> Result<Self, BackendError> {
        let variables = params
            .variables
            .filter(|v| !v.trim().is_empty())
            .map(|raw| serde_json::from_str::<Value>(&raw))
            .transpose()
            .map_err(|_| BackendError::GraphQLRequest(messages::INVALID_VARIABLES))?;

        Self::new(params.query, variables, params.operation_name)
    }

    /// Read a POST body according to its content type
    ///
    /// Requests without a recognised content type carry no query.
    pub async fn from_post(request: Request) -> Result<Self, BackendError> {
        match media_type(request.headers()).as_deref() {
            Some("application/json") => {
                let Json(body) = Json::<JsonBody>::from_request(request, &())
                    .await
                    .map_err(|rejection| {
                        tracing::debug!("Unreadable GraphQL JSON body: {}", rejection);
                        BackendError::GraphQLRequest(messages::INVALID_JSON_BODY)
                    })?;
                Self::new(body.query, body.variables, body.operation_name)
            }
            Some("application/x-www-form-urlencoded") => {
                let Form(params) = Form::<EncodedParams>::from_request(request, &())
                    .await
                    .map_err(|rejection| {
                        tracing::debug!("Unreadable GraphQL form body: {}", rejection);
                        BackendError::GraphQLRequest(messages::MISSING_QUERY)
                    })?;
                Self::from_encoded(params)
            }
            Some("application/graphql") => {
                let query = String::from_request(request, &())
                    .await
                    .map_err(|_| BackendError::GraphQLRequest(messages::MISSING_QUERY))?;
                Self::new(Some(query), None, None)
            }
            _ => Self::new(None, None, None),
        }
    }

    fn into_request(self) -> async_graphql::Request {
        let mut request = async_graphql::Request::new(self.query);
        if let Some(variables) = self.variables {
            request = request.variables(Variables::from_json(variables));
        }
        if let Some(operation_name) = self.operation_name {
            request = request.operation_name(operation_name);
        }
        request
    }
}

async fn execute(
    schema: &AuthSchema,
    user: AuthUser,
    input: GraphQLInput,
) -> Json<async_graphql::Response> {
    let AuthUser(identity) = user;
    tracing::debug!("GraphQL request from {}", identity.user_id);

    let request = input.into_request().data(identity);
    Json(schema.execute(request).await)
}

/// POST /graphql
pub async fn graphql_post(
    State(schema): State<AuthSchema>,
    user: AuthUser,
    request: Request,
) -> Result<Json<async_graphql::Response>, BackendError> {
    let input = GraphQLInput::from_post(request).await?;
    Ok(execute(&schema, user, input).await)
}

/// Unwrap GET parameters; an unparseable query string carries no query
fn query_params(
    params: Result<Query<EncodedParams>, QueryRejection>,
) -> Result<EncodedParams, BackendError> {
    let Query(params) = params.map_err(|rejection| {
        tracing::debug!("Unreadable GraphQL query string: {}", rejection);
        BackendError::GraphQLRequest(messages::MISSING_QUERY)
    })?;
    Ok(params)
}

/// GET /graphql
pub async fn graphql_get(
    State(schema): State<AuthSchema>,
    user: AuthUser,
    params: Result<Query<EncodedParams>, QueryRejection>,
) -> Result<Json<async_graphql::Response>, BackendError> {
    let input = GraphQLInput::from_encoded(query_params(params)?)?;
    Ok(execute(&schema, user, input).await)
}
