//! Configuration management for the Pinterest client.
//!
//! Supports configuration via:
//! - Explicit values
//! - Environment variables
//! - Builder pattern

use crate::errors::{ConfigurationError, PinterestResult};
use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Configuration for the Pinterest client
#[derive(Clone)]
pub struct PinterestConfig {
    /// Registered app identifier, required for OAuth flows
    pub(crate) app_id: Option<String>,
    /// Registered app secret, required for OAuth flows
    pub(crate) app_secret: Option<SecretString>,
    /// Access token attached to authenticated requests
    pub(crate) access_token: Option<SecretString>,
    /// Base URL for API requests
    pub base_url: Url,
    /// Authorization page URL for the OAuth2 flow
    pub authorization_url: Url,
    /// Token-exchange endpoint for the OAuth2 flow
    pub token_url: Url,
    /// Request timeout
    pub timeout: Duration,
    /// Proxy URL applied to all requests
    pub proxy: Option<String>,
    /// Default headers
    pub default_headers: HeaderMap,
}

impl std::fmt::Debug for PinterestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinterestConfig")
            .field("app_id", &self.app_id)
            .field("app_secret", &self.app_secret.is_some())
            .field("access_token", &self.access_token.is_some())
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("proxy", &self.proxy)
            .finish()
    }
}

impl Default for PinterestConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            app_secret: None,
            access_token: None,
            base_url: Url::parse(crate::DEFAULT_BASE_URL).unwrap(),
            authorization_url: Url::parse(crate::DEFAULT_AUTHORIZATION_URL).unwrap(),
            token_url: Url::parse(crate::DEFAULT_TOKEN_URL).unwrap(),
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
            proxy: None,
            default_headers: HeaderMap::new(),
        }
    }
}

impl PinterestConfig {
    /// Create a new configuration builder
    pub fn builder() -> PinterestConfigBuilder {
        PinterestConfigBuilder::new()
    }

    /// Create configuration from environment variables
    pub fn from_env() -> PinterestResult<Self> {
        let mut builder = PinterestConfigBuilder::new();

        if let Ok(id) = std::env::var("PINTEREST_APP_ID") {
            builder = builder.app_id(&id);
        }

        if let Ok(secret) = std::env::var("PINTEREST_APP_SECRET") {
            builder = builder.app_secret(&secret);
        }

        if let Ok(token) = std::env::var("PINTEREST_ACCESS_TOKEN") {
            builder = builder.access_token(&token);
        }

        if let Ok(url) = std::env::var("PINTEREST_BASE_URL") {
            builder = builder.base_url(&url)?;
        }

        if let Ok(timeout) = std::env::var("PINTEREST_TIMEOUT") {
            let secs = timeout.parse::<u64>().map_err(|_| {
                ConfigurationError::EnvVar(format!(
                    "PINTEREST_TIMEOUT must be an integer, got {timeout:?}"
                ))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Ok(proxy) = std::env::var("PINTEREST_PROXY") {
            builder = builder.proxy(&proxy);
        }

        builder.build()
    }

    /// Get the app identifier if set
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    /// Check whether both app id and app secret are set
    pub fn has_app_credentials(&self) -> bool {
        self.app_id.is_some() && self.app_secret.is_some()
    }

    /// Check whether an access token is set
    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Expose the access token for use in request headers
    pub(crate) fn access_token(&self) -> Option<&str> {
        self.access_token.as_ref().map(|t| t.expose_secret().as_str())
    }

    /// Expose the app secret for use in the OAuth token exchange
    pub(crate) fn app_secret(&self) -> Option<&str> {
        self.app_secret.as_ref().map(|s| s.expose_secret().as_str())
    }

    /// Build the full URL for an endpoint path.
    ///
    /// Paths that already carry an `http`/`https` scheme bypass the base URL.
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

/// Builder for [`PinterestConfig`]
#[derive(Default)]
pub struct PinterestConfigBuilder {
    config: PinterestConfig,
}

impl PinterestConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: PinterestConfig::default(),
        }
    }

    /// Set the app identifier
    pub fn app_id(mut self, id: &str) -> Self {
        self.config.app_id = Some(id.to_string());
        self
    }

    /// Set the app secret
    pub fn app_secret(mut self, secret: &str) -> Self {
        self.config.app_secret = Some(SecretString::new(secret.to_string()));
        self
    }

    /// Set the access token
    pub fn access_token(mut self, token: &str) -> Self {
        self.config.access_token = Some(SecretString::new(token.to_string()));
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.base_url = parse_url(url)?;
        Ok(self)
    }

    /// Set the OAuth authorization page URL
    pub fn authorization_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.authorization_url = parse_url(url)?;
        Ok(self)
    }

    /// Set the OAuth token-exchange URL
    pub fn token_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.token_url = parse_url(url)?;
        Ok(self)
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set a proxy URL for all requests
    pub fn proxy(mut self, proxy: &str) -> Self {
        self.config.proxy = Some(proxy.to_string());
        self
    }

    /// Add a default header sent with every request
    pub fn default_header(mut self, name: &str, value: &str) -> Self {
        if let Ok(header_name) = name.parse::<http::header::HeaderName>() {
            if let Ok(header_value) = value.parse::<http::header::HeaderValue>() {
                self.config.default_headers.insert(header_name, header_value);
            }
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> PinterestResult<PinterestConfig> {
        Ok(self.config)
    }
}

fn parse_url(url: &str) -> Result<Url, ConfigurationError> {
    Url::parse(url).map_err(|e| ConfigurationError::InvalidConfiguration {
        message: format!("Invalid URL: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = PinterestConfigBuilder::new()
            .app_id("1484362")
            .app_secret("app-secret")
            .access_token("pina_test_token")
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap();

        assert!(config.has_app_credentials());
        assert!(config.has_access_token());
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_build_url() {
        let config = PinterestConfig::default();

        assert_eq!(
            config.build_url("boards"),
            "https://api.pinterest.com/v5/boards"
        );
        assert_eq!(
            config.build_url("/pins/123"),
            "https://api.pinterest.com/v5/pins/123"
        );
    }

    #[test]
    fn test_build_url_absolute_bypasses_base() {
        let config = PinterestConfig::default();
        assert_eq!(
            config.build_url("https://uploads.pinterest.com/media"),
            "https://uploads.pinterest.com/media"
        );
    }

    #[test]
    fn test_missing_credentials_detected() {
        let config = PinterestConfigBuilder::new()
            .app_id("1484362")
            .build()
            .unwrap();
        assert!(!config.has_app_credentials());
        assert!(!config.has_access_token());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = PinterestConfigBuilder::new().base_url("not a url");
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = PinterestConfigBuilder::new()
            .app_secret("super-secret")
            .access_token("pina_token")
            .build()
            .unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("pina_token"));
    }
}
