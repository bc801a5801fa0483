//! Response types for the OAuth2 service.

use serde::{Deserialize, Serialize};

/// Authorization URL plus the CSRF state embedded in it.
///
/// Send the user to `url`; verify that the callback carries the same
/// `state` before exchanging the code.
#[derive(Debug, Clone)]
pub struct AuthorizationUrl {
    /// URL to present to the end user
    pub url: String,
    /// CSRF state embedded in the URL
    pub state: String,
}

/// Token payload from the token endpoint, passed through opaquely
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Access token for authenticated calls
    #[serde(default)]
    pub access_token: Option<String>,
    /// Token type, `bearer`
    #[serde(default)]
    pub token_type: Option<String>,
    /// Refresh token, present when the `continuous_refresh` scope applies
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Refresh token lifetime in seconds
    #[serde(default)]
    pub refresh_token_expires_in: Option<u64>,
    /// Scopes granted to the token
    #[serde(default)]
    pub scope: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_response_decodes() {
        let token: TokenResponse = serde_json::from_value(json!({
            "access_token": "pina_new_token",
            "token_type": "bearer",
            "expires_in": 2592000,
            "scope": "pins:read boards:read"
        }))
        .unwrap();

        assert_eq!(token.access_token.as_deref(), Some("pina_new_token"));
        assert_eq!(token.expires_in, Some(2_592_000));
        assert!(token.refresh_token.is_none());
    }
}
