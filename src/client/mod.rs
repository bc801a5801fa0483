//! Main Pinterest client implementation.
//!
//! Owns the configuration, auth manager and shared transport, and hands out
//! the per-resource services. Session state is immutable after construction;
//! [`PinterestClientImpl::with_access_token`] builds a sibling client for a
//! different token instead of mutating shared state.

use crate::auth::AuthManager;
use crate::config::PinterestConfig;
use crate::errors::PinterestResult;
use crate::services::{
    AdAccountsService, BoardsService, CatalogsService, MediaService, OAuthService, PinsService,
    UserAccountService,
};
use crate::transport::{decode, HttpTransport, ReqwestTransport, TransportRequest};
use http::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Trait for the Pinterest client surface
pub trait PinterestClient: Send + Sync {
    /// Access the pins service
    fn pins(&self) -> &PinsService;

    /// Access the boards service
    fn boards(&self) -> &BoardsService;

    /// Access the user account service
    fn user_account(&self) -> &UserAccountService;

    /// Access the media service
    fn media(&self) -> &MediaService;

    /// Access the ad accounts service
    fn ad_accounts(&self) -> &AdAccountsService;

    /// Access the catalogs service
    fn catalogs(&self) -> &CatalogsService;

    /// Access the OAuth2 service
    fn oauth(&self) -> &OAuthService;
}

/// Default Pinterest client implementation
#[derive(Clone)]
pub struct PinterestClientImpl {
    config: Arc<PinterestConfig>,
    auth: AuthManager,
    transport: Arc<dyn HttpTransport>,
    pins: PinsService,
    boards: BoardsService,
    user_account: UserAccountService,
    media: MediaService,
    ad_accounts: AdAccountsService,
    catalogs: CatalogsService,
    oauth: OAuthService,
}

impl PinterestClientImpl {
    /// Create a new client with the given configuration
    pub fn new(config: PinterestConfig) -> PinterestResult<Self> {
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create a new client over a caller-supplied transport
    pub fn with_transport(config: PinterestConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let config = Arc::new(config);
        let auth = AuthManager::new(config.clone());

        Self {
            pins: PinsService::new(transport.clone(), auth.clone(), config.clone()),
            boards: BoardsService::new(transport.clone(), auth.clone(), config.clone()),
            user_account: UserAccountService::new(transport.clone(), auth.clone(), config.clone()),
            media: MediaService::new(transport.clone(), auth.clone(), config.clone()),
            ad_accounts: AdAccountsService::new(transport.clone(), auth.clone(), config.clone()),
            catalogs: CatalogsService::new(transport.clone(), auth.clone(), config.clone()),
            oauth: OAuthService::new(transport.clone(), auth.clone(), config.clone()),
            config,
            auth,
            transport,
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &PinterestConfig {
        &self.config
    }

    /// Build a sibling client that authenticates with a different access
    /// token, sharing this client's transport.
    ///
    /// Use after a token refresh; existing in-flight calls on this client
    /// keep their original token.
    pub fn with_access_token(&self, access_token: &str) -> Self {
        let mut config = (*self.config).clone();
        config.access_token = Some(secrecy::SecretString::new(access_token.to_string()));
        Self::with_transport(config, self.transport.clone())
    }

    /// Perform a raw API request against an endpoint path.
    ///
    /// Escape hatch for endpoints without a typed facade; pick
    /// `Res = serde_json::Value` for the undecoded payload.
    pub async fn request<Res: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<serde_json::Value>,
    ) -> PinterestResult<Res> {
        let url = self.config.build_url(path);
        let headers = self.auth.bearer_headers()?;

        let request = TransportRequest {
            method,
            url,
            headers,
            query,
            body,
            timeout: None,
        };

        let value = self.transport.send_json(request).await?;
        decode(value)
    }
}

impl PinterestClient for PinterestClientImpl {
    fn pins(&self) -> &PinsService {
        &self.pins
    }

    fn boards(&self) -> &BoardsService {
        &self.boards
    }

    fn user_account(&self) -> &UserAccountService {
        &self.user_account
    }

    fn media(&self) -> &MediaService {
        &self.media
    }

    fn ad_accounts(&self) -> &AdAccountsService {
        &self.ad_accounts
    }

    fn catalogs(&self) -> &CatalogsService {
        &self.catalogs
    }

    fn oauth(&self) -> &OAuthService {
        &self.oauth
    }
}

impl std::fmt::Debug for PinterestClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinterestClientImpl")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PinterestConfigBuilder;

    fn test_client() -> PinterestClientImpl {
        let config = PinterestConfigBuilder::new()
            .access_token("pina_test_token")
            .build()
            .unwrap();
        PinterestClientImpl::new(config).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = test_client();
        assert!(client.config().has_access_token());
    }

    #[test]
    fn test_with_access_token_leaves_original_untouched() {
        let client = test_client();
        let rotated = client.with_access_token("pina_rotated_token");

        assert!(rotated.config().has_access_token());
        // Original client still holds its own token.
        assert!(client.config().has_access_token());
    }

    #[test]
    fn test_debug_omits_secrets() {
        let client = test_client();
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("pina_test_token"));
    }
}
