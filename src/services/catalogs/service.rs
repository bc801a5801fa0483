//! Catalogs service implementation.

use super::*;
use crate::auth::AuthManager;
use crate::config::PinterestConfig;
use crate::errors::PinterestResult;
use crate::services::paging_query;
use crate::transport::{decode, HttpTransport, TransportRequest};
use crate::types::{CatalogFeed, CatalogFeedProcessResult, CatalogProductGroup, Page};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for catalogs service operations
#[async_trait]
pub trait CatalogsServiceTrait: Send + Sync {
    /// List catalog feeds owned by the operating user account
    async fn list_feeds(
        &self,
        page_size: Option<u32>,
        bookmark: Option<&str>,
    ) -> PinterestResult<Page<CatalogFeed>>;

    /// Create a catalog feed
    async fn create_feed(&self, request: CreateFeedRequest) -> PinterestResult<CatalogFeed>;

    /// Get a single catalog feed
    async fn get_feed(&self, feed_id: &str) -> PinterestResult<CatalogFeed>;

    /// Update a catalog feed; at least one field must be set
    async fn update_feed(&self, request: UpdateFeedRequest) -> PinterestResult<CatalogFeed>;

    /// Delete a catalog feed; returns true once the server confirms
    async fn delete_feed(&self, feed_id: &str) -> PinterestResult<bool>;

    /// List processing results for a feed
    async fn list_feed_processing_results(
        &self,
        feed_id: &str,
        page_size: Option<u32>,
        bookmark: Option<&str>,
    ) -> PinterestResult<Page<CatalogFeedProcessResult>>;

    /// Fetch catalog items by id
    async fn get_items(&self, request: GetItemsRequest) -> PinterestResult<CatalogItems>;

    /// Get the state of an items batch
    async fn get_items_batch(&self, batch_id: &str) -> PinterestResult<CatalogItemsBatch>;

    /// Run a batch operation over catalog items
    async fn perform_items_batch(
        &self,
        request: ItemsBatchRequest,
    ) -> PinterestResult<CatalogItemsBatch>;

    /// Get a single product group
    async fn get_product_group(
        &self,
        product_group_id: &str,
    ) -> PinterestResult<CatalogProductGroup>;

    /// Create a product group
    async fn create_product_group(
        &self,
        request: CreateProductGroupRequest,
    ) -> PinterestResult<CatalogProductGroup>;

    /// Update a product group; at least one field must be set
    async fn update_product_group(
        &self,
        request: UpdateProductGroupRequest,
    ) -> PinterestResult<CatalogProductGroup>;

    /// Delete a product group; returns true once the server confirms
    async fn delete_product_group(&self, product_group_id: &str) -> PinterestResult<bool>;

    /// List product groups for a feed
    async fn list_product_groups(
        &self,
        feed_id: &str,
        page_size: Option<u32>,
        bookmark: Option<&str>,
    ) -> PinterestResult<Page<CatalogProductGroup>>;
}

/// Catalogs service implementation
#[derive(Clone)]
pub struct CatalogsService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    config: Arc<PinterestConfig>,
}

impl CatalogsService {
    /// Create a new catalogs service
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
}

#[async_trait]
impl CatalogsServiceTrait for CatalogsService {
    #[instrument(skip(self))]
    async fn list_feeds(
        &self,
        page_size: Option<u32>,
        bookmark: Option<&str>,
    ) -> PinterestResult<Page<CatalogFeed>> {
        let url = self.config.build_url("catalogs/feeds");
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(
                TransportRequest::get(url, headers).with_query(paging_query(page_size, bookmark)),
            )
            .await?;
        decode(value)
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_feed(&self, request: CreateFeedRequest) -> PinterestResult<CatalogFeed> {
        let url = self.config.build_url("catalogs/feeds");
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::post(url, headers, request).into_value()?)
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn get_feed(&self, feed_id: &str) -> PinterestResult<CatalogFeed> {
        let url = self.config.build_url(&format!("catalogs/feeds/{}", feed_id));
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers))
            .await?;
        decode(value)
    }

    #[instrument(skip(self, request), fields(feed_id = %request.feed_id))]
    async fn update_feed(&self, request: UpdateFeedRequest) -> PinterestResult<CatalogFeed> {
        request.validate()?;

        let url = self
            .config
            .build_url(&format!("catalogs/feeds/{}", request.feed_id));
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::patch(url, headers, request).into_value()?)
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn delete_feed(&self, feed_id: &str) -> PinterestResult<bool> {
        let url = self.config.build_url(&format!("catalogs/feeds/{}", feed_id));
        let headers = self.auth.bearer_headers()?;

        self.transport
            .send_empty(TransportRequest::delete(url, headers))
            .await?;
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn list_feed_processing_results(
        &self,
        feed_id: &str,
        page_size: Option<u32>,
        bookmark: Option<&str>,
    ) -> PinterestResult<Page<CatalogFeedProcessResult>> {
        let url = self
            .config
            .build_url(&format!("catalogs/feeds/{}/processing_results", feed_id));
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(
                TransportRequest::get(url, headers).with_query(paging_query(page_size, bookmark)),
            )
            .await?;
        decode(value)
    }

    #[instrument(skip(self, request), fields(country = %request.country))]
    async fn get_items(&self, request: GetItemsRequest) -> PinterestResult<CatalogItems> {
        let url = self.config.build_url("catalogs/items");
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers).with_query(request.to_query()))
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn get_items_batch(&self, batch_id: &str) -> PinterestResult<CatalogItemsBatch> {
        let url = self
            .config
            .build_url(&format!("catalogs/items/batch/{}", batch_id));
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers))
            .await?;
        decode(value)
    }

    #[instrument(skip(self, request), fields(operation = %request.operation))]
    async fn perform_items_batch(
        &self,
        request: ItemsBatchRequest,
    ) -> PinterestResult<CatalogItemsBatch> {
        let url = self.config.build_url("catalogs/items/batch");
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::post(url, headers, request).into_value()?)
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn get_product_group(
        &self,
        product_group_id: &str,
    ) -> PinterestResult<CatalogProductGroup> {
        let url = self
            .config
            .build_url(&format!("catalogs/product_groups/{}", product_group_id));
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers))
            .await?;
        decode(value)
    }

    #[instrument(skip(self, request), fields(feed_id = %request.feed_id))]
    async fn create_product_group(
        &self,
        request: CreateProductGroupRequest,
    ) -> PinterestResult<CatalogProductGroup> {
        let url = self.config.build_url("catalogs/product_groups");
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::post(url, headers, request).into_value()?)
            .await?;
        decode(value)
    }

    #[instrument(skip(self, request), fields(product_group_id = %request.product_group_id))]
    async fn update_product_group(
        &self,
        request: UpdateProductGroupRequest,
    ) -> PinterestResult<CatalogProductGroup> {
        request.validate()?;

        let url = self
            .config
            .build_url(&format!("catalogs/product_groups/{}", request.product_group_id));
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::patch(url, headers, request).into_value()?)
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn delete_product_group(&self, product_group_id: &str) -> PinterestResult<bool> {
        let url = self
            .config
            .build_url(&format!("catalogs/product_groups/{}", product_group_id));
        let headers = self.auth.bearer_headers()?;

        self.transport
            .send_empty(TransportRequest::delete(url, headers))
            .await?;
        Ok(true)
    }

    #[instrument(skip(self))]
    async fn list_product_groups(
        &self,
        feed_id: &str,
        page_size: Option<u32>,
        bookmark: Option<&str>,
    ) -> PinterestResult<Page<CatalogProductGroup>> {
        let url = self.config.build_url("catalogs/product_groups");
        let headers = self.auth.bearer_headers()?;

        let mut query = vec![("feed_id".to_string(), feed_id.to_string())];
        query.extend(paging_query(page_size, bookmark));

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers).with_query(query))
            .await?;
        decode(value)
    }
}
