//! Authentication management for the Pinterest client.
//!
//! Builds the `Authorization: Bearer` header from the configured access
//! token. The token precondition is checked here, before any network I/O.

use crate::config::PinterestConfig;
use crate::errors::{ConfigurationError, PinterestResult};
use http::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::sync::Arc;

/// Authentication manager for Pinterest API requests
#[derive(Clone)]
pub struct AuthManager {
    config: Arc<PinterestConfig>,
}

impl AuthManager {
    /// Create a new authentication manager
    pub fn new(config: Arc<PinterestConfig>) -> Self {
        Self { config }
    }

    /// Get headers for an authenticated API request.
    ///
    /// Fails with [`ConfigurationError::MissingAccessToken`] when no access
    /// token is configured.
    pub fn bearer_headers(&self) -> PinterestResult<HeaderMap> {
        let token = self
            .config
            .access_token()
            .filter(|t| !t.is_empty())
            .ok_or(ConfigurationError::MissingAccessToken)?;

        let mut headers = self.base_headers();
        let auth_value = format!("Bearer {}", token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).map_err(|_| {
                ConfigurationError::InvalidConfiguration {
                    message: "Access token contains invalid header characters".to_string(),
                }
            })?,
        );
        Ok(headers)
    }

    /// Get headers for an unauthenticated request (OAuth token exchange)
    pub fn public_headers(&self) -> HeaderMap {
        self.base_headers()
    }

    /// Check whether an access token is available
    pub fn has_access_token(&self) -> bool {
        self.config.has_access_token()
    }

    fn base_headers(&self) -> HeaderMap {
        let mut headers = self.config.default_headers.clone();
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static("application/json; charset=utf-8"),
            );
        }
        headers
    }
}

impl std::fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthManager")
            .field("has_access_token", &self.has_access_token())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PinterestConfigBuilder;
    use crate::errors::PinterestError;

    fn config_with_token() -> Arc<PinterestConfig> {
        Arc::new(
            PinterestConfigBuilder::new()
                .access_token("pina_test_token")
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_bearer_headers() {
        let auth = AuthManager::new(config_with_token());
        let headers = auth.bearer_headers().unwrap();

        let value = headers.get(AUTHORIZATION).unwrap().to_str().unwrap();
        assert_eq!(value, "Bearer pina_test_token");
        assert!(headers.contains_key(CONTENT_TYPE));
    }

    #[test]
    fn test_missing_token_is_configuration_error() {
        let auth = AuthManager::new(Arc::new(PinterestConfig::default()));
        let err = auth.bearer_headers().unwrap_err();
        assert!(matches!(
            err,
            PinterestError::Configuration(ConfigurationError::MissingAccessToken)
        ));
    }

    #[test]
    fn test_empty_token_is_configuration_error() {
        let config = PinterestConfigBuilder::new()
            .access_token("")
            .build()
            .unwrap();
        let auth = AuthManager::new(Arc::new(config));
        assert!(auth.bearer_headers().is_err());
    }

    #[test]
    fn test_default_headers_preserved() {
        let config = PinterestConfigBuilder::new()
            .access_token("pina_test_token")
            .default_header("x-request-source", "tests")
            .build()
            .unwrap();
        let auth = AuthManager::new(Arc::new(config));
        let headers = auth.bearer_headers().unwrap();
        assert_eq!(headers.get("x-request-source").unwrap(), "tests");
    }
}
