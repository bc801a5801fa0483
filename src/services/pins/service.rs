//! Pins service implementation.

use super::*;
use crate::auth::AuthManager;
use crate::config::PinterestConfig;
use crate::errors::PinterestResult;
use crate::transport::{decode, HttpTransport, TransportRequest};
use crate::types::{Analytics, Pin};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for pins service operations
#[async_trait]
pub trait PinsServiceTrait: Send + Sync {
    /// Get a pin owned by the operating user account
    async fn get(&self, request: GetPinRequest) -> PinterestResult<Pin>;

    /// Create a pin on a board
    async fn create(&self, request: CreatePinRequest) -> PinterestResult<Pin>;

    /// Save an existing pin to a board
    async fn save(&self, request: SavePinRequest) -> PinterestResult<Pin>;

    /// Delete a pin; returns true once the server confirms
    async fn delete(&self, pin_id: &str) -> PinterestResult<bool>;

    /// Get analytics for a pin over a reporting window
    async fn get_analytics(&self, request: PinAnalyticsRequest) -> PinterestResult<Analytics>;
}

/// Pins service implementation
#[derive(Clone)]
pub struct PinsService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    config: Arc<PinterestConfig>,
}

impl PinsService {
    /// Create a new pins service
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
impl PinsServiceTrait for PinsService {
    #[instrument(skip(self), fields(pin_id = %request.pin_id))]
    async fn get(&self, request: GetPinRequest) -> PinterestResult<Pin> {
        let url = self.config.build_url(&format!("pins/{}", request.pin_id));
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers).with_query(request.to_query()))
            .await?;
        decode(value)
    }

    #[instrument(skip(self, request), fields(board_id = %request.board_id))]
    async fn create(&self, request: CreatePinRequest) -> PinterestResult<Pin> {
        let url = self.config.build_url("pins");
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::post(url, headers, request).into_value()?)
            .await?;
        decode(value)
    }

    #[instrument(skip(self), fields(pin_id = %request.pin_id, board_id = %request.board_id))]
    async fn save(&self, request: SavePinRequest) -> PinterestResult<Pin> {
        let url = self
            .config
            .build_url(&format!("pins/{}/save", request.pin_id));
        let headers = self.auth.bearer_headers()?;
        let body = SavePinBody {
            board_id: request.board_id,
            board_section_id: request.board_section_id,
        };

        let value = self
            .transport
            .send_json(TransportRequest::post(url, headers, body).into_value()?)
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn delete(&self, pin_id: &str) -> PinterestResult<bool> {
        let url = self.config.build_url(&format!("pins/{}", pin_id));
        let headers = self.auth.bearer_headers()?;

        self.transport
            .send_empty(TransportRequest::delete(url, headers))
            .await?;
        Ok(true)
    }

    #[instrument(skip(self), fields(pin_id = %request.pin_id))]
    async fn get_analytics(&self, request: PinAnalyticsRequest) -> PinterestResult<Analytics> {
        let url = self
            .config
            .build_url(&format!("pins/{}/analytics", request.pin_id));
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers).with_query(request.to_query()))
            .await?;
        decode(value)
    }
}
