/**
 * Authentication Handler Types
 *
 * Request and response bodies for the signup and login handlers. Requests are
 * form-encoded; both fields are optional at the type level so that a missing
 * field reaches the handler and gets the generic error instead of an
 * extractor rejection.
 */

use serde::{Deserialize, Serialize};

/// Email/password form shared by signup and login
#[derive(Deserialize, Serialize, Default)]
pub struct CredentialsForm {
    /// User's email address
    #[serde(default)]
    pub email: Option<String>,
    /// User's password
    #[serde(default)]
    pub password: Option<String>,
}

// Passwords stay out of logs even at debug level.
impl std::fmt::Debug for CredentialsForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsForm")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Credentials with both fields present and non-blank
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl CredentialsForm {
    /// Both fields, if present and not blank
    ///
    /// The password is kept as sent; only blank-ness is checked.
    pub fn into_credentials(self) -> Option<Credentials> {
        let email = self.email.filter(|e| !e.trim().is_empty())?;
        let password = self.password.filter(|p| !p.trim().is_empty())?;
        Some(Credentials { email, password })
    }
}

/// `{ "message": ... }` response body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "token": ... }` response body for a successful login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    /// JWT for the `Authorization: Bearer` header
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: Option<&str>, password: Option<&str>) -> CredentialsForm {
        CredentialsForm {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn test_complete_form() {
        let creds = form(Some("a@b.c"), Some("pw")).into_credentials().unwrap();
        assert_eq!(creds.email, "a@b.c");
        assert_eq!(creds.password, "pw");
    }

    #[test]
    fn test_missing_or_blank_fields() {
        assert!(form(None, Some("pw")).into_credentials().is_none());
        assert!(form(Some("a@b.c"), None).into_credentials().is_none());
        assert!(form(Some("   "), Some("pw")).into_credentials().is_none());
        assert!(form(Some("a@b.c"), Some("")).into_credentials().is_none());
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", form(Some("a@b.c"), Some("hunter22")));
        assert!(!rendered.contains("hunter22"));
    }

    #[test]
    fn test_token_response_has_no_message() {
        let body = serde_json::to_value(TokenResponse {
            token: "t".to_string(),
        })
        .unwrap();
        assert!(body.get("message").is_none());
        assert_eq!(body["token"], "t");
    }
}
