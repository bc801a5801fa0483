//! Request types for the OAuth2 service.

/// Request to build an authorization URL
#[derive(Debug, Clone, Default)]
pub struct AuthorizeRequest {
    /// Redirect URI registered with the app; falls back to the default
    pub redirect_uri: Option<String>,
    /// Scopes to request; falls back to the default scope set
    pub scopes: Vec<String>,
    /// CSRF state; a random value is generated when unset
    pub state: Option<String>,
}

impl AuthorizeRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the redirect URI
    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Set the scopes to request
    pub fn scopes<S: Into<String>>(mut self, scopes: Vec<S>) -> Self {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Set an explicit CSRF state
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

/// Request to exchange an authorization callback for tokens
#[derive(Debug, Clone)]
pub struct ExchangeCodeRequest {
    /// Full callback URL the provider redirected to, carrying the `code`
    pub callback_url: String,
    /// Redirect URI used in the authorize step; falls back to the default
    pub redirect_uri: Option<String>,
}

impl ExchangeCodeRequest {
    /// Create a new request from the full callback URL
    pub fn new(callback_url: impl Into<String>) -> Self {
        Self {
            callback_url: callback_url.into(),
            redirect_uri: None,
        }
    }

    /// Set the redirect URI used in the authorize step
    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }
}

/// Request to refresh an access token
#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    /// Refresh token from a previous exchange
    pub refresh_token: String,
    /// Narrowed scope for the new access token
    pub scope: Option<String>,
}

impl RefreshTokenRequest {
    /// Create a new request
    pub fn new(refresh_token: impl Into<String>) -> Self {
        Self {
            refresh_token: refresh_token.into(),
            scope: None,
        }
    }

    /// Narrow the scope of the refreshed token
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}
