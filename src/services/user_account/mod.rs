//! User account service for the Pinterest API.
//!
//! Fetch the operating user account and its analytics.

use crate::auth::AuthManager;
use crate::config::PinterestConfig;
use crate::errors::PinterestResult;
use crate::transport::{decode, HttpTransport, TransportRequest};
use crate::types::{comma_join, Analytics, UserAccount};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Request to fetch the operating user account
#[derive(Debug, Clone, Default)]
pub struct GetUserAccountRequest {
    /// Ad account context for the read
    pub ad_account_id: Option<String>,
}

impl GetUserAccountRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Read in the context of an ad account
    pub fn ad_account_id(mut self, ad_account_id: impl Into<String>) -> Self {
        self.ad_account_id = Some(ad_account_id.into());
        self
    }

    fn to_query(&self) -> Vec<(String, String)> {
        match &self.ad_account_id {
            Some(ad_account_id) => vec![("ad_account_id".to_string(), ad_account_id.clone())],
            None => Vec::new(),
        }
    }
}

/// Request for user account analytics
#[derive(Debug, Clone)]
pub struct UserAccountAnalyticsRequest {
    /// Report start date (YYYY-MM-DD, UTC)
    pub start_date: String,
    /// Report end date (YYYY-MM-DD, UTC)
    pub end_date: String,
    /// Filter on pins that match the claimed domain
    pub from_claimed_content: Option<String>,
    /// Pin formats to report on
    pub pin_format: Option<String>,
    /// Apps or devices to report on
    pub app_types: Option<String>,
    /// Metric types to include
    pub metric_types: Vec<String>,
    /// How to split the data into groups
    pub split_field: Option<String>,
    /// Ad account context for the read
    pub ad_account_id: Option<String>,
}

impl UserAccountAnalyticsRequest {
    /// Create a new request for the given reporting window
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            from_claimed_content: None,
            pin_format: None,
            app_types: None,
            metric_types: Vec::new(),
            split_field: None,
            ad_account_id: None,
        }
    }

    /// Filter on pins that match the claimed domain
    pub fn from_claimed_content(mut self, value: impl Into<String>) -> Self {
        self.from_claimed_content = Some(value.into());
        self
    }

    /// Set the pin formats to report on
    pub fn pin_format(mut self, pin_format: impl Into<String>) -> Self {
        self.pin_format = Some(pin_format.into());
        self
    }

    /// Set the apps or devices to report on
    pub fn app_types(mut self, app_types: impl Into<String>) -> Self {
        self.app_types = Some(app_types.into());
        self
    }

    /// Set the metric types to include
    pub fn metric_types<S: Into<String>>(mut self, metric_types: Vec<S>) -> Self {
        self.metric_types = metric_types.into_iter().map(Into::into).collect();
        self
    }

    /// Set the split field
    pub fn split_field(mut self, split_field: impl Into<String>) -> Self {
        self.split_field = Some(split_field.into());
        self
    }

    /// Read in the context of an ad account
    pub fn ad_account_id(mut self, ad_account_id: impl Into<String>) -> Self {
        self.ad_account_id = Some(ad_account_id.into());
        self
    }

    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("start_date".to_string(), self.start_date.clone()),
            ("end_date".to_string(), self.end_date.clone()),
        ];
        if let Some(value) = &self.from_claimed_content {
            query.push(("from_claimed_content".to_string(), value.clone()));
        }
        if let Some(pin_format) = &self.pin_format {
            query.push(("pin_format".to_string(), pin_format.clone()));
        }
        if let Some(app_types) = &self.app_types {
            query.push(("app_types".to_string(), app_types.clone()));
        }
        if !self.metric_types.is_empty() {
            query.push(("metric_types".to_string(), comma_join(&self.metric_types)));
        }
        if let Some(split_field) = &self.split_field {
            query.push(("split_field".to_string(), split_field.clone()));
        }
        if let Some(ad_account_id) = &self.ad_account_id {
            query.push(("ad_account_id".to_string(), ad_account_id.clone()));
        }
        query
    }
}

/// Trait for user account service operations
#[async_trait]
pub trait UserAccountServiceTrait: Send + Sync {
    /// Get the operating user account
    async fn get(&self, request: GetUserAccountRequest) -> PinterestResult<UserAccount>;

    /// Get analytics for the operating user account
    async fn get_analytics(
        &self,
        request: UserAccountAnalyticsRequest,
    ) -> PinterestResult<Analytics>;
}

/// User account service implementation
#[derive(Clone)]
pub struct UserAccountService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    config: Arc<PinterestConfig>,
}

impl UserAccountService {
    /// Create a new user account service
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
impl UserAccountServiceTrait for UserAccountService {
    #[instrument(skip(self))]
    async fn get(&self, request: GetUserAccountRequest) -> PinterestResult<UserAccount> {
        let url = self.config.build_url("user_account");
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers).with_query(request.to_query()))
            .await?;
        decode(value)
    }

    #[instrument(skip(self), fields(start = %request.start_date, end = %request.end_date))]
    async fn get_analytics(
        &self,
        request: UserAccountAnalyticsRequest,
    ) -> PinterestResult<Analytics> {
        let url = self.config.build_url("user_account/analytics");
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers).with_query(request.to_query()))
            .await?;
        decode(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_query_order_and_join() {
        let query = UserAccountAnalyticsRequest::new("2024-06-01", "2024-06-30")
            .from_claimed_content("BOTH")
            .metric_types(vec!["IMPRESSION", "ENGAGEMENT"])
            .split_field("NO_SPLIT")
            .to_query();

        assert_eq!(query[0], ("start_date".to_string(), "2024-06-01".to_string()));
        assert!(query.contains(&(
            "metric_types".to_string(),
            "IMPRESSION,ENGAGEMENT".to_string()
        )));
    }

    #[test]
    fn test_get_query_empty_without_ad_account() {
        assert!(GetUserAccountRequest::new().to_query().is_empty());
    }
}
