//! Blocking variant of the Pinterest client.
//!
//! Wraps the async client and a current-thread tokio runtime; every method
//! is a `block_on` delegate, so the resource logic exists exactly once.
//! Do not use from inside an async context.

use crate::client::{PinterestClient as _, PinterestClientImpl};
use crate::config::PinterestConfig;
use crate::errors::{ConfigurationError, PinterestResult};
use crate::services::ad_accounts::{
    AdAccountsServiceTrait, AnalyticsParams, EntityAnalyticsRequest, ListAdAccountsRequest,
    ListAdGroupsRequest, ListAdsRequest, ListCampaignsRequest,
};
use crate::services::boards::{
    BoardsServiceTrait, CreateBoardRequest, ListBoardPinsRequest, ListBoardSectionsRequest,
    ListBoardsRequest, UpdateBoardRequest,
};
use crate::services::catalogs::{
    CatalogItems, CatalogItemsBatch, CatalogsServiceTrait, CreateFeedRequest,
    CreateProductGroupRequest, GetItemsRequest, ItemsBatchRequest, UpdateFeedRequest,
    UpdateProductGroupRequest,
};
use crate::services::media::{ListMediaRequest, MediaServiceTrait};
use crate::services::oauth::{
    AuthorizationUrl, AuthorizeRequest, ExchangeCodeRequest, OAuthServiceTrait,
    RefreshTokenRequest, TokenResponse,
};
use crate::services::pins::{
    CreatePinRequest, GetPinRequest, PinAnalyticsRequest, PinsServiceTrait, SavePinRequest,
};
use crate::services::user_account::{
    GetUserAccountRequest, UserAccountAnalyticsRequest, UserAccountServiceTrait,
};
use crate::types::{
    Ad, AdAccount, AdGroup, Analytics, Board, BoardSection, Campaign, CatalogFeed,
    CatalogFeedProcessResult, CatalogProductGroup, MediaUpload, Page, Pin, RegisterMediaUpload,
    UserAccount,
};
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

/// Blocking Pinterest client
#[derive(Debug, Clone)]
pub struct PinterestClient {
    inner: PinterestClientImpl,
    runtime: Arc<Runtime>,
}

impl PinterestClient {
    /// Create a new blocking client with the given configuration
    pub fn new(config: PinterestConfig) -> PinterestResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ConfigurationError::InvalidConfiguration {
                message: format!("Failed to start runtime: {}", e),
            })?;
        Ok(Self {
            inner: PinterestClientImpl::new(config)?,
            runtime: Arc::new(runtime),
        })
    }

    /// Create a blocking client from environment variables
    pub fn from_env() -> PinterestResult<Self> {
        Self::new(PinterestConfig::from_env()?)
    }

    /// Get the client configuration
    pub fn config(&self) -> &PinterestConfig {
        self.inner.config()
    }

    /// Build a sibling client that authenticates with a different access
    /// token, sharing this client's transport and runtime
    pub fn with_access_token(&self, access_token: &str) -> Self {
        Self {
            inner: self.inner.with_access_token(access_token),
            runtime: self.runtime.clone(),
        }
    }

    /// Access the pins service
    pub fn pins(&self) -> Pins<'_> {
        Pins { client: self }
    }

    /// Access the boards service
    pub fn boards(&self) -> Boards<'_> {
        Boards { client: self }
    }

    /// Access the user account service
    pub fn user_account(&self) -> UserAccounts<'_> {
        UserAccounts { client: self }
    }

    /// Access the media service
    pub fn media(&self) -> Media<'_> {
        Media { client: self }
    }

    /// Access the ad accounts service
    pub fn ad_accounts(&self) -> AdAccounts<'_> {
        AdAccounts { client: self }
    }

    /// Access the catalogs service
    pub fn catalogs(&self) -> Catalogs<'_> {
        Catalogs { client: self }
    }

    /// Access the OAuth2 service
    pub fn oauth(&self) -> OAuth<'_> {
        OAuth { client: self }
    }
}

/// Blocking facade over the pins service
#[derive(Debug, Clone, Copy)]
pub struct Pins<'a> {
    client: &'a PinterestClient,
}

impl Pins<'_> {
    /// Get a pin
    pub fn get(&self, request: GetPinRequest) -> PinterestResult<Pin> {
        self.client
            .runtime
            .block_on(self.client.inner.pins().get(request))
    }

    /// Create a pin
    pub fn create(&self, request: CreatePinRequest) -> PinterestResult<Pin> {
        self.client
            .runtime
            .block_on(self.client.inner.pins().create(request))
    }

    /// Save an existing pin to a board
    pub fn save(&self, request: SavePinRequest) -> PinterestResult<Pin> {
        self.client
            .runtime
            .block_on(self.client.inner.pins().save(request))
    }

    /// Delete a pin
    pub fn delete(&self, pin_id: &str) -> PinterestResult<bool> {
        self.client
            .runtime
            .block_on(self.client.inner.pins().delete(pin_id))
    }

    /// Get analytics for a pin
    pub fn get_analytics(&self, request: PinAnalyticsRequest) -> PinterestResult<Analytics> {
        self.client
            .runtime
            .block_on(self.client.inner.pins().get_analytics(request))
    }
}

/// Blocking facade over the boards service
#[derive(Debug, Clone, Copy)]
pub struct Boards<'a> {
    client: &'a PinterestClient,
}

impl Boards<'_> {
    /// List boards
    pub fn list(&self, request: ListBoardsRequest) -> PinterestResult<Page<Board>> {
        self.client
            .runtime
            .block_on(self.client.inner.boards().list(request))
    }

    /// Get a board
    pub fn get(&self, board_id: &str) -> PinterestResult<Board> {
        self.client
            .runtime
            .block_on(self.client.inner.boards().get(board_id))
    }

    /// Create a board
    pub fn create(&self, request: CreateBoardRequest) -> PinterestResult<Board> {
        self.client
            .runtime
            .block_on(self.client.inner.boards().create(request))
    }

    /// Update a board
    pub fn update(&self, request: UpdateBoardRequest) -> PinterestResult<Board> {
        self.client
            .runtime
            .block_on(self.client.inner.boards().update(request))
    }

    /// Delete a board
    pub fn delete(&self, board_id: &str) -> PinterestResult<bool> {
        self.client
            .runtime
            .block_on(self.client.inner.boards().delete(board_id))
    }

    /// List pins on a board or section
    pub fn list_pins(&self, request: ListBoardPinsRequest) -> PinterestResult<Page<Pin>> {
        self.client
            .runtime
            .block_on(self.client.inner.boards().list_pins(request))
    }

    /// List sections of a board
    pub fn list_sections(
        &self,
        request: ListBoardSectionsRequest,
    ) -> PinterestResult<Page<BoardSection>> {
        self.client
            .runtime
            .block_on(self.client.inner.boards().list_sections(request))
    }

    /// Create a board section
    pub fn create_section(&self, board_id: &str, name: &str) -> PinterestResult<BoardSection> {
        self.client
            .runtime
            .block_on(self.client.inner.boards().create_section(board_id, name))
    }

    /// Rename a board section
    pub fn update_section(
        &self,
        board_id: &str,
        section_id: &str,
        name: &str,
    ) -> PinterestResult<BoardSection> {
        self.client.runtime.block_on(
            self.client
                .inner
                .boards()
                .update_section(board_id, section_id, name),
        )
    }

    /// Delete a board section
    pub fn delete_section(&self, board_id: &str, section_id: &str) -> PinterestResult<bool> {
        self.client.runtime.block_on(
            self.client
                .inner
                .boards()
                .delete_section(board_id, section_id),
        )
    }
}

/// Blocking facade over the user account service
#[derive(Debug, Clone, Copy)]
pub struct UserAccounts<'a> {
    client: &'a PinterestClient,
}

impl UserAccounts<'_> {
    /// Get the operating user account
    pub fn get(&self, request: GetUserAccountRequest) -> PinterestResult<UserAccount> {
        self.client
            .runtime
            .block_on(self.client.inner.user_account().get(request))
    }

    /// Get analytics for the operating user account
    pub fn get_analytics(
        &self,
        request: UserAccountAnalyticsRequest,
    ) -> PinterestResult<Analytics> {
        self.client
            .runtime
            .block_on(self.client.inner.user_account().get_analytics(request))
    }
}

/// Blocking facade over the media service
#[derive(Debug, Clone, Copy)]
pub struct Media<'a> {
    client: &'a PinterestClient,
}

impl Media<'_> {
    /// List media uploads
    pub fn list(&self, request: ListMediaRequest) -> PinterestResult<Page<MediaUpload>> {
        self.client
            .runtime
            .block_on(self.client.inner.media().list(request))
    }

    /// Register intent to upload media
    pub fn register(&self, media_type: &str) -> PinterestResult<RegisterMediaUpload> {
        self.client
            .runtime
            .block_on(self.client.inner.media().register(media_type))
    }

    /// Get a registered media upload
    pub fn get(&self, media_id: &str) -> PinterestResult<MediaUpload> {
        self.client
            .runtime
            .block_on(self.client.inner.media().get(media_id))
    }
}

/// Blocking facade over the ad accounts service
#[derive(Debug, Clone, Copy)]
pub struct AdAccounts<'a> {
    client: &'a PinterestClient,
}

impl AdAccounts<'_> {
    /// List ad accounts
    pub fn list(&self, request: ListAdAccountsRequest) -> PinterestResult<Page<AdAccount>> {
        self.client
            .runtime
            .block_on(self.client.inner.ad_accounts().list(request))
    }

    /// Get an ad account analytics report
    pub fn get_analytics(
        &self,
        ad_account_id: &str,
        params: AnalyticsParams,
    ) -> PinterestResult<Vec<serde_json::Value>> {
        self.client.runtime.block_on(
            self.client
                .inner
                .ad_accounts()
                .get_analytics(ad_account_id, params),
        )
    }

    /// List campaigns
    pub fn list_campaigns(&self, request: ListCampaignsRequest) -> PinterestResult<Page<Campaign>> {
        self.client
            .runtime
            .block_on(self.client.inner.ad_accounts().list_campaigns(request))
    }

    /// Get a campaign analytics report
    pub fn get_campaign_analytics(
        &self,
        request: EntityAnalyticsRequest,
    ) -> PinterestResult<Vec<serde_json::Value>> {
        self.client
            .runtime
            .block_on(self.client.inner.ad_accounts().get_campaign_analytics(request))
    }

    /// List ad groups
    pub fn list_ad_groups(&self, request: ListAdGroupsRequest) -> PinterestResult<Page<AdGroup>> {
        self.client
            .runtime
            .block_on(self.client.inner.ad_accounts().list_ad_groups(request))
    }

    /// Get an ad group analytics report
    pub fn get_ad_group_analytics(
        &self,
        request: EntityAnalyticsRequest,
    ) -> PinterestResult<Vec<serde_json::Value>> {
        self.client
            .runtime
            .block_on(self.client.inner.ad_accounts().get_ad_group_analytics(request))
    }

    /// List ads
    pub fn list_ads(&self, request: ListAdsRequest) -> PinterestResult<Page<Ad>> {
        self.client
            .runtime
            .block_on(self.client.inner.ad_accounts().list_ads(request))
    }

    /// Get an ad analytics report
    pub fn get_ad_analytics(
        &self,
        request: EntityAnalyticsRequest,
    ) -> PinterestResult<Vec<serde_json::Value>> {
        self.client
            .runtime
            .block_on(self.client.inner.ad_accounts().get_ad_analytics(request))
    }

    /// Get a product group analytics report
    pub fn get_product_group_analytics(
        &self,
        request: EntityAnalyticsRequest,
    ) -> PinterestResult<Vec<serde_json::Value>> {
        self.client.runtime.block_on(
            self.client
                .inner
                .ad_accounts()
                .get_product_group_analytics(request),
        )
    }
}

/// Blocking facade over the catalogs service
#[derive(Debug, Clone, Copy)]
pub struct Catalogs<'a> {
    client: &'a PinterestClient,
}

impl Catalogs<'_> {
    /// List catalog feeds
    pub fn list_feeds(
        &self,
        page_size: Option<u32>,
        bookmark: Option<&str>,
    ) -> PinterestResult<Page<CatalogFeed>> {
        self.client
            .runtime
            .block_on(self.client.inner.catalogs().list_feeds(page_size, bookmark))
    }

    /// Create a catalog feed
    pub fn create_feed(&self, request: CreateFeedRequest) -> PinterestResult<CatalogFeed> {
        self.client
            .runtime
            .block_on(self.client.inner.catalogs().create_feed(request))
    }

    /// Get a catalog feed
    pub fn get_feed(&self, feed_id: &str) -> PinterestResult<CatalogFeed> {
        self.client
            .runtime
            .block_on(self.client.inner.catalogs().get_feed(feed_id))
    }

    /// Update a catalog feed
    pub fn update_feed(&self, request: UpdateFeedRequest) -> PinterestResult<CatalogFeed> {
        self.client
            .runtime
            .block_on(self.client.inner.catalogs().update_feed(request))
    }

    /// Delete a catalog feed
    pub fn delete_feed(&self, feed_id: &str) -> PinterestResult<bool> {
        self.client
            .runtime
            .block_on(self.client.inner.catalogs().delete_feed(feed_id))
    }

    /// List processing results for a feed
    pub fn list_feed_processing_results(
        &self,
        feed_id: &str,
        page_size: Option<u32>,
        bookmark: Option<&str>,
    ) -> PinterestResult<Page<CatalogFeedProcessResult>> {
        self.client.runtime.block_on(
            self.client
                .inner
                .catalogs()
                .list_feed_processing_results(feed_id, page_size, bookmark),
        )
    }

    /// Fetch catalog items by id
    pub fn get_items(&self, request: GetItemsRequest) -> PinterestResult<CatalogItems> {
        self.client
            .runtime
            .block_on(self.client.inner.catalogs().get_items(request))
    }

    /// Get the state of an items batch
    pub fn get_items_batch(&self, batch_id: &str) -> PinterestResult<CatalogItemsBatch> {
        self.client
            .runtime
            .block_on(self.client.inner.catalogs().get_items_batch(batch_id))
    }

    /// Run a batch operation over catalog items
    pub fn perform_items_batch(
        &self,
        request: ItemsBatchRequest,
    ) -> PinterestResult<CatalogItemsBatch> {
        self.client
            .runtime
            .block_on(self.client.inner.catalogs().perform_items_batch(request))
    }

    /// Get a product group
    pub fn get_product_group(
        &self,
        product_group_id: &str,
    ) -> PinterestResult<CatalogProductGroup> {
        self.client
            .runtime
            .block_on(self.client.inner.catalogs().get_product_group(product_group_id))
    }

    /// Create a product group
    pub fn create_product_group(
        &self,
        request: CreateProductGroupRequest,
    ) -> PinterestResult<CatalogProductGroup> {
        self.client
            .runtime
            .block_on(self.client.inner.catalogs().create_product_group(request))
    }

    /// Update a product group
    pub fn update_product_group(
        &self,
        request: UpdateProductGroupRequest,
    ) -> PinterestResult<CatalogProductGroup> {
        self.client
            .runtime
            .block_on(self.client.inner.catalogs().update_product_group(request))
    }

    /// Delete a product group
    pub fn delete_product_group(&self, product_group_id: &str) -> PinterestResult<bool> {
        self.client.runtime.block_on(
            self.client
                .inner
                .catalogs()
                .delete_product_group(product_group_id),
        )
    }

    /// List product groups for a feed
    pub fn list_product_groups(
        &self,
        feed_id: &str,
        page_size: Option<u32>,
        bookmark: Option<&str>,
    ) -> PinterestResult<Page<CatalogProductGroup>> {
        self.client.runtime.block_on(
            self.client
                .inner
                .catalogs()
                .list_product_groups(feed_id, page_size, bookmark),
        )
    }
}

/// Blocking facade over the OAuth2 service
#[derive(Debug, Clone, Copy)]
pub struct OAuth<'a> {
    client: &'a PinterestClient,
}

impl OAuth<'_> {
    /// Build the authorization URL to present to the end user
    pub fn authorize(&self, request: AuthorizeRequest) -> PinterestResult<AuthorizationUrl> {
        // No network call, no block_on needed.
        self.client.inner.oauth().authorize(request)
    }

    /// Exchange the authorization callback for tokens
    pub fn exchange_code(&self, request: ExchangeCodeRequest) -> PinterestResult<TokenResponse> {
        self.client
            .runtime
            .block_on(self.client.inner.oauth().exchange_code(request))
    }

    /// Refresh an access token
    pub fn refresh_token(&self, request: RefreshTokenRequest) -> PinterestResult<TokenResponse> {
        self.client
            .runtime
            .block_on(self.client.inner.oauth().refresh_token(request))
    }
}
