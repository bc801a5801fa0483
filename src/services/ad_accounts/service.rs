//! Ad accounts service implementation.

use super::*;
use crate::auth::AuthManager;
use crate::config::PinterestConfig;
use crate::errors::PinterestResult;
use crate::transport::{decode, HttpTransport, TransportRequest};
use crate::types::{Ad, AdAccount, AdGroup, Campaign, Page};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for ad accounts service operations.
///
/// Analytics reports return opaque rows; the set of columns is chosen by the
/// caller, so there is no fixed record shape to decode into.
#[async_trait]
pub trait AdAccountsServiceTrait: Send + Sync {
    /// List ad accounts the operating user account has access to
    async fn list(&self, request: ListAdAccountsRequest) -> PinterestResult<Page<AdAccount>>;

    /// Get an analytics report for an ad account
    async fn get_analytics(
        &self,
        ad_account_id: &str,
        params: AnalyticsParams,
    ) -> PinterestResult<Vec<serde_json::Value>>;

    /// List campaigns in an ad account
    async fn list_campaigns(&self, request: ListCampaignsRequest)
        -> PinterestResult<Page<Campaign>>;

    /// Get an analytics report for specific campaigns
    async fn get_campaign_analytics(
        &self,
        request: EntityAnalyticsRequest,
    ) -> PinterestResult<Vec<serde_json::Value>>;

    /// List ad groups in an ad account
    async fn list_ad_groups(&self, request: ListAdGroupsRequest)
        -> PinterestResult<Page<AdGroup>>;

    /// Get an analytics report for specific ad groups
    async fn get_ad_group_analytics(
        &self,
        request: EntityAnalyticsRequest,
    ) -> PinterestResult<Vec<serde_json::Value>>;

    /// List ads in an ad account
    async fn list_ads(&self, request: ListAdsRequest) -> PinterestResult<Page<Ad>>;

    /// Get an analytics report for specific ads
    async fn get_ad_analytics(
        &self,
        request: EntityAnalyticsRequest,
    ) -> PinterestResult<Vec<serde_json::Value>>;

    /// Get an analytics report for specific product groups
    async fn get_product_group_analytics(
        &self,
        request: EntityAnalyticsRequest,
    ) -> PinterestResult<Vec<serde_json::Value>>;
}

/// Ad accounts service implementation
#[derive(Clone)]
pub struct AdAccountsService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    config: Arc<PinterestConfig>,
}

impl AdAccountsService {
    /// Create a new ad accounts service
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

    async fn analytics_report(
        &self,
        path: String,
        query: Vec<(String, String)>,
    ) -> PinterestResult<Vec<serde_json::Value>> {
        let url = self.config.build_url(&path);
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers).with_query(query))
            .await?;
        decode(value)
    }
}

#[async_trait]
impl AdAccountsServiceTrait for AdAccountsService {
    #[instrument(skip(self))]
    async fn list(&self, request: ListAdAccountsRequest) -> PinterestResult<Page<AdAccount>> {
        let url = self.config.build_url("ad_accounts");
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers).with_query(request.to_query()))
            .await?;
        decode(value)
    }

    #[instrument(skip(self, params))]
    async fn get_analytics(
        &self,
        ad_account_id: &str,
        params: AnalyticsParams,
    ) -> PinterestResult<Vec<serde_json::Value>> {
        self.analytics_report(
            format!("ad_accounts/{}/analytics", ad_account_id),
            params.to_query(),
        )
        .await
    }

    #[instrument(skip(self), fields(ad_account_id = %request.ad_account_id))]
    async fn list_campaigns(
        &self,
        request: ListCampaignsRequest,
    ) -> PinterestResult<Page<Campaign>> {
        let url = self
            .config
            .build_url(&format!("ad_accounts/{}/campaigns", request.ad_account_id));
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers).with_query(request.to_query()))
            .await?;
        decode(value)
    }

    #[instrument(skip(self, request), fields(ad_account_id = %request.ad_account_id))]
    async fn get_campaign_analytics(
        &self,
        request: EntityAnalyticsRequest,
    ) -> PinterestResult<Vec<serde_json::Value>> {
        self.analytics_report(
            format!("ad_accounts/{}/campaigns/analytics", request.ad_account_id),
            request.to_query("campaign_ids"),
        )
        .await
    }

    #[instrument(skip(self), fields(ad_account_id = %request.ad_account_id))]
    async fn list_ad_groups(
        &self,
        request: ListAdGroupsRequest,
    ) -> PinterestResult<Page<AdGroup>> {
        let url = self
            .config
            .build_url(&format!("ad_accounts/{}/ad_groups", request.ad_account_id));
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers).with_query(request.to_query()))
            .await?;
        decode(value)
    }

    #[instrument(skip(self, request), fields(ad_account_id = %request.ad_account_id))]
    async fn get_ad_group_analytics(
        &self,
        request: EntityAnalyticsRequest,
    ) -> PinterestResult<Vec<serde_json::Value>> {
        self.analytics_report(
            format!("ad_accounts/{}/ad_groups/analytics", request.ad_account_id),
            request.to_query("ad_group_ids"),
        )
        .await
    }

    #[instrument(skip(self), fields(ad_account_id = %request.ad_account_id))]
    async fn list_ads(&self, request: ListAdsRequest) -> PinterestResult<Page<Ad>> {
        let url = self
            .config
            .build_url(&format!("ad_accounts/{}/ads", request.ad_account_id));
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers).with_query(request.to_query()))
            .await?;
        decode(value)
    }

    #[instrument(skip(self, request), fields(ad_account_id = %request.ad_account_id))]
    async fn get_ad_analytics(
        &self,
        request: EntityAnalyticsRequest,
    ) -> PinterestResult<Vec<serde_json::Value>> {
        self.analytics_report(
            format!("ad_accounts/{}/ads/analytics", request.ad_account_id),
            request.to_query("ad_ids"),
        )
        .await
    }

    #[instrument(skip(self, request), fields(ad_account_id = %request.ad_account_id))]
    async fn get_product_group_analytics(
        &self,
        request: EntityAnalyticsRequest,
    ) -> PinterestResult<Vec<serde_json::Value>> {
        self.analytics_report(
            format!(
                "ad_accounts/{}/product_groups/analytics",
                request.ad_account_id
            ),
            request.to_query("product_group_ids"),
        )
        .await
    }
}
