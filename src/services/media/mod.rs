//! Media service for the Pinterest API.
//!
//! Register media uploads and poll their processing status. The actual file
//! upload goes to the URL returned by `register`, outside this API.

use crate::auth::AuthManager;
use crate::config::PinterestConfig;
use crate::errors::PinterestResult;
use crate::transport::{decode, HttpTransport, TransportRequest};
use crate::types::{MediaUpload, Page, RegisterMediaUpload};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

/// Request to list media uploads
#[derive(Debug, Clone, Default)]
pub struct ListMediaRequest {
    /// Maximum items per page (API accepts 1..=100)
    pub page_size: Option<u32>,
    /// Cursor for the next page
    pub bookmark: Option<String>,
}

impl ListMediaRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Fetch the page after the given cursor
    pub fn bookmark(mut self, bookmark: impl Into<String>) -> Self {
        self.bookmark = Some(bookmark.into());
        self
    }

    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![(
            "page_size".to_string(),
            self.page_size.unwrap_or(crate::DEFAULT_PAGE_SIZE).to_string(),
        )];
        if let Some(bookmark) = &self.bookmark {
            query.push(("bookmark".to_string(), bookmark.clone()));
        }
        query
    }
}

#[derive(Debug, Clone, Serialize)]
struct RegisterMediaBody {
    media_type: String,
}

/// Trait for media service operations
#[async_trait]
pub trait MediaServiceTrait: Send + Sync {
    /// List media uploads registered by the operating user account
    async fn list(&self, request: ListMediaRequest) -> PinterestResult<Page<MediaUpload>>;

    /// Register intent to upload media; the response carries the upload URL
    /// and parameters
    async fn register(&self, media_type: &str) -> PinterestResult<RegisterMediaUpload>;

    /// Get details and current status for a registered media upload
    async fn get(&self, media_id: &str) -> PinterestResult<MediaUpload>;
}

/// Media service implementation
#[derive(Clone)]
pub struct MediaService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    config: Arc<PinterestConfig>,
}

impl MediaService {
    /// Create a new media service
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
impl MediaServiceTrait for MediaService {
    #[instrument(skip(self))]
    async fn list(&self, request: ListMediaRequest) -> PinterestResult<Page<MediaUpload>> {
        let url = self.config.build_url("media");
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers).with_query(request.to_query()))
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn register(&self, media_type: &str) -> PinterestResult<RegisterMediaUpload> {
        let url = self.config.build_url("media");
        let headers = self.auth.bearer_headers()?;
        let body = RegisterMediaBody {
            media_type: media_type.to_string(),
        };

        let value = self
            .transport
            .send_json(TransportRequest::post(url, headers, body).into_value()?)
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn get(&self, media_id: &str) -> PinterestResult<MediaUpload> {
        let url = self.config.build_url(&format!("media/{}", media_id));
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers))
            .await?;
        decode(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let query = ListMediaRequest::new().to_query();
        assert_eq!(query, vec![("page_size".to_string(), "25".to_string())]);
    }

    #[test]
    fn test_register_body() {
        let body = RegisterMediaBody {
            media_type: "video".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"media_type": "video"})
        );
    }
}
