//! OAuth2 service implementation.

use super::*;
use crate::auth::AuthManager;
use crate::config::PinterestConfig;
use crate::errors::{ApiError, ConfigurationError, PinterestError, PinterestResult};
use crate::transport::{decode, FormRequest, HttpTransport};
use async_trait::async_trait;
use base64::Engine;
use http::header::{HeaderValue, AUTHORIZATION};
use rand::Rng;
use std::sync::Arc;
use tracing::instrument;
use url::Url;

/// Trait for OAuth2 service operations
#[async_trait]
pub trait OAuthServiceTrait: Send + Sync {
    /// Build the authorization URL to present to the end user.
    ///
    /// No network call; fails when app credentials are not configured.
    fn authorize(&self, request: AuthorizeRequest) -> PinterestResult<AuthorizationUrl>;

    /// Exchange the authorization callback for tokens
    async fn exchange_code(&self, request: ExchangeCodeRequest) -> PinterestResult<TokenResponse>;

    /// Refresh an access token
    async fn refresh_token(&self, request: RefreshTokenRequest) -> PinterestResult<TokenResponse>;
}

/// OAuth2 service implementation
#[derive(Clone)]
pub struct OAuthService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    config: Arc<PinterestConfig>,
}

impl OAuthService {
    /// Create a new OAuth2 service
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth: AuthManager,
        config: Arc<PinterestConfig>,
    ) -> Self {
        Self {
            transport,
            auth,
            config,
        }
    }

    fn app_credentials(&self) -> PinterestResult<(String, String)> {
        match (self.config.app_id(), self.config.app_secret()) {
            (Some(id), Some(secret)) => Ok((id.to_string(), secret.to_string())),
            _ => Err(ConfigurationError::MissingAppCredentials.into()),
        }
    }

    /// Build the token-endpoint request with HTTP basic client authentication
    fn token_request(&self) -> PinterestResult<FormRequest> {
        let (app_id, app_secret) = self.app_credentials()?;
        let credentials = format!("{}:{}", app_id, app_secret);
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);

        let mut headers = self.auth.public_headers();
        headers.remove(http::header::CONTENT_TYPE);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Basic {}", encoded)).map_err(|_| {
                ConfigurationError::InvalidConfiguration {
                    message: "App credentials contain invalid header characters".to_string(),
                }
            })?,
        );

        Ok(FormRequest::post(
            self.config.token_url.as_str(),
            headers,
        ))
    }

    fn generate_state() -> String {
        let bytes: [u8; 32] = rand::thread_rng().gen();
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
    }
}

#[async_trait]
impl OAuthServiceTrait for OAuthService {
    #[instrument(skip(self, request))]
    fn authorize(&self, request: AuthorizeRequest) -> PinterestResult<AuthorizationUrl> {
        let (app_id, _) = self.app_credentials()?;

        let redirect_uri = request
            .redirect_uri
            .unwrap_or_else(|| crate::DEFAULT_REDIRECT_URI.to_string());
        let scope = if request.scopes.is_empty() {
            crate::DEFAULT_SCOPES.join(",")
        } else {
            request.scopes.join(",")
        };
        let state = request.state.unwrap_or_else(Self::generate_state);

        let mut url = self.config.authorization_url.clone();
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &app_id)
            .append_pair("redirect_uri", &redirect_uri)
            .append_pair("scope", &scope)
            .append_pair("state", &state);

        Ok(AuthorizationUrl {
            url: url.into(),
            state,
        })
    }

    #[instrument(skip(self, request))]
    async fn exchange_code(&self, request: ExchangeCodeRequest) -> PinterestResult<TokenResponse> {
        let callback = Url::parse(&request.callback_url).map_err(|e| {
            ConfigurationError::InvalidConfiguration {
                message: format!("Invalid callback URL: {}", e),
            }
        })?;

        let mut code = None;
        let mut provider_error = None;
        for (key, value) in callback.query_pairs() {
            match key.as_ref() {
                "code" => code = Some(value.into_owned()),
                "error" => provider_error = Some(value.into_owned()),
                _ => {}
            }
        }

        if let Some(error) = provider_error {
            return Err(PinterestError::Api(ApiError::new(
                0,
                format!("Authorization was denied: {}", error),
            )));
        }
        let code = code.ok_or_else(|| ConfigurationError::InvalidConfiguration {
            message: "Callback URL carries no authorization code".to_string(),
        })?;

        let redirect_uri = request
            .redirect_uri
            .unwrap_or_else(|| crate::DEFAULT_REDIRECT_URI.to_string());

        let form = self
            .token_request()?
            .field("grant_type", "authorization_code")
            .field("code", code)
            .field("redirect_uri", redirect_uri);

        let value = self.transport.send_form(form).await?;
        decode(value)
    }

    #[instrument(skip(self, request))]
    async fn refresh_token(&self, request: RefreshTokenRequest) -> PinterestResult<TokenResponse> {
        let mut form = self
            .token_request()?
            .field("grant_type", "refresh_token")
            .field("refresh_token", request.refresh_token);
        if let Some(scope) = request.scope {
            form = form.field("scope", scope);
        }

        let value = self.transport.send_form(form).await?;
        decode(value)
    }
}
