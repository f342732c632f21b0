//! Response Messages
//!
//! The sentinel strings clients match on. Signup and login failures are
//! deliberately coarse: a client cannot tell which field was wrong, or whether
//! an account exists.

/// Body message for any signup failure.
pub const SIGNUP_ERROR: &str = "Error";

/// Body message for a successful signup.
pub const USER_CREATED: &str = "User created";

/// Body message for any login failure.
pub const NOT_LOGGED_IN: &str = "Not logged in";

/// Plain-text body returned by the authorization middleware.
pub const UNAUTHORIZED: &str = "Unauthorized";

/// GraphQL error message when a request carries no query.
pub const MISSING_QUERY: &str = "Must provide query string.";

/// GraphQL error message when a JSON body cannot be parsed.
pub const INVALID_JSON_BODY: &str = "POST body sent invalid JSON.";

/// GraphQL error message when `variables` is not a JSON object.
pub const INVALID_VARIABLES: &str = "Variables are invalid JSON.";
