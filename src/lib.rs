//! Pinterest API Client
//!
//! Typed client for the Pinterest REST API v5 with:
//! - Request builders for pins, boards, user account, media, ad accounts and catalogs
//! - OAuth2 authorization-code and refresh-token flows
//! - Async-first surface plus a [`blocking`] variant
//! - Bookmark-based pagination via the [`types::Page`] envelope
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pinterest_client::client::PinterestClient;
//! use pinterest_client::services::boards::{BoardsServiceTrait, ListBoardsRequest};
//! use pinterest_client::PinterestConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PinterestConfig::builder()
//!         .access_token("pina_token")
//!         .build()?;
//!     let client = pinterest_client::create_client(config)?;
//!
//!     let page = client.boards().list(ListBoardsRequest::new()).await?;
//!     for board in &page.items {
//!         println!("{}", board.name.as_deref().unwrap_or("<unnamed>"));
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Blocking variant
pub mod blocking;

// Testing utilities
pub mod fixtures;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::PinterestClientImpl;
pub use config::{PinterestConfig, PinterestConfigBuilder};
pub use errors::{PinterestError, PinterestResult};

/// Default base URL for the Pinterest v5 API
pub const DEFAULT_BASE_URL: &str = "https://api.pinterest.com/v5/";

/// Authorization page presented to the end user during the OAuth2 flow
pub const DEFAULT_AUTHORIZATION_URL: &str = "https://www.pinterest.com/oauth";

/// Token-exchange endpoint for the OAuth2 flow
pub const DEFAULT_TOKEN_URL: &str = "https://api.pinterest.com/v5/oauth/token";

/// Redirect URI used when the caller does not supply one
pub const DEFAULT_REDIRECT_URI: &str = "https://localhost/";

/// Minimal scope set requested when the caller does not supply one
pub const DEFAULT_SCOPES: &[&str] = &["pins:read"];

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default page size for paginated list operations (API accepts 1..=100)
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Create a Pinterest client with the given configuration
pub fn create_client(config: PinterestConfig) -> PinterestResult<PinterestClientImpl> {
    PinterestClientImpl::new(config)
}

/// Create a Pinterest client from environment variables
///
/// Reads:
/// - `PINTEREST_APP_ID` - registered app identifier
/// - `PINTEREST_APP_SECRET` - registered app secret
/// - `PINTEREST_ACCESS_TOKEN` - access token for authenticated calls
/// - `PINTEREST_BASE_URL` - API origin override
/// - `PINTEREST_TIMEOUT` - request timeout in seconds
/// - `PINTEREST_PROXY` - proxy URL for all requests
pub fn create_client_from_env() -> PinterestResult<PinterestClientImpl> {
    let config = PinterestConfig::from_env()?;
    create_client(config)
}
