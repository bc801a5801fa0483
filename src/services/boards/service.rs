//! Boards service implementation.

use super::*;
use crate::auth::AuthManager;
use crate::config::PinterestConfig;
use crate::errors::PinterestResult;
use crate::transport::{decode, HttpTransport, TransportRequest};
use crate::types::{Board, BoardSection, Page, Pin};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for boards service operations
#[async_trait]
pub trait BoardsServiceTrait: Send + Sync {
    /// List boards owned by the operating user account
    async fn list(&self, request: ListBoardsRequest) -> PinterestResult<Page<Board>>;

    /// Get a single board
    async fn get(&self, board_id: &str) -> PinterestResult<Board>;

    /// Create a board
    async fn create(&self, request: CreateBoardRequest) -> PinterestResult<Board>;

    /// Update a board; at least one field must be set
    async fn update(&self, request: UpdateBoardRequest) -> PinterestResult<Board>;

    /// Delete a board; returns true once the server confirms
    async fn delete(&self, board_id: &str) -> PinterestResult<bool>;

    /// List pins on a board (or one of its sections)
    async fn list_pins(&self, request: ListBoardPinsRequest) -> PinterestResult<Page<Pin>>;

    /// List sections of a board
    async fn list_sections(
        &self,
        request: ListBoardSectionsRequest,
    ) -> PinterestResult<Page<BoardSection>>;

    /// Create a section on a board
    async fn create_section(&self, board_id: &str, name: &str) -> PinterestResult<BoardSection>;

    /// Rename a section
    async fn update_section(
        &self,
        board_id: &str,
        section_id: &str,
        name: &str,
    ) -> PinterestResult<BoardSection>;

    /// Delete a section; returns true once the server confirms
    async fn delete_section(&self, board_id: &str, section_id: &str) -> PinterestResult<bool>;
}

/// Boards service implementation
#[derive(Clone)]
pub struct BoardsService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    config: Arc<PinterestConfig>,
}

impl BoardsService {
    /// Create a new boards service
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
impl BoardsServiceTrait for BoardsService {
    #[instrument(skip(self))]
    async fn list(&self, request: ListBoardsRequest) -> PinterestResult<Page<Board>> {
        let url = self.config.build_url("boards");
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers).with_query(request.to_query()))
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn get(&self, board_id: &str) -> PinterestResult<Board> {
        let url = self.config.build_url(&format!("boards/{}", board_id));
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers))
            .await?;
        decode(value)
    }

    #[instrument(skip(self), fields(name = %request.name))]
    async fn create(&self, request: CreateBoardRequest) -> PinterestResult<Board> {
        let url = self.config.build_url("boards");
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::post(url, headers, request).into_value()?)
            .await?;
        decode(value)
    }

    #[instrument(skip(self), fields(board_id = %request.board_id))]
    async fn update(&self, request: UpdateBoardRequest) -> PinterestResult<Board> {
        request.validate()?;

        let url = self
            .config
            .build_url(&format!("boards/{}", request.board_id));
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::patch(url, headers, request).into_value()?)
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn delete(&self, board_id: &str) -> PinterestResult<bool> {
        let url = self.config.build_url(&format!("boards/{}", board_id));
        let headers = self.auth.bearer_headers()?;

        self.transport
            .send_empty(TransportRequest::delete(url, headers))
            .await?;
        Ok(true)
    }

    #[instrument(skip(self), fields(board_id = %request.board_id))]
    async fn list_pins(&self, request: ListBoardPinsRequest) -> PinterestResult<Page<Pin>> {
        let path = match &request.section_id {
            Some(section_id) => {
                format!("boards/{}/sections/{}/pins", request.board_id, section_id)
            }
            None => format!("boards/{}/pins", request.board_id),
        };
        let url = self.config.build_url(&path);
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers).with_query(request.to_query()))
            .await?;
        decode(value)
    }

    #[instrument(skip(self), fields(board_id = %request.board_id))]
    async fn list_sections(
        &self,
        request: ListBoardSectionsRequest,
    ) -> PinterestResult<Page<BoardSection>> {
        let url = self
            .config
            .build_url(&format!("boards/{}/sections", request.board_id));
        let headers = self.auth.bearer_headers()?;

        let value = self
            .transport
            .send_json(TransportRequest::get(url, headers).with_query(request.to_query()))
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn create_section(&self, board_id: &str, name: &str) -> PinterestResult<BoardSection> {
        let url = self
            .config
            .build_url(&format!("boards/{}/sections", board_id));
        let headers = self.auth.bearer_headers()?;
        let body = SectionBody {
            name: name.to_string(),
        };

        let value = self
            .transport
            .send_json(TransportRequest::post(url, headers, body).into_value()?)
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn update_section(
        &self,
        board_id: &str,
        section_id: &str,
        name: &str,
    ) -> PinterestResult<BoardSection> {
        let url = self
            .config
            .build_url(&format!("boards/{}/sections/{}", board_id, section_id));
        let headers = self.auth.bearer_headers()?;
        let body = SectionBody {
            name: name.to_string(),
        };

        let value = self
            .transport
            .send_json(TransportRequest::patch(url, headers, body).into_value()?)
            .await?;
        decode(value)
    }

    #[instrument(skip(self))]
    async fn delete_section(&self, board_id: &str, section_id: &str) -> PinterestResult<bool> {
        let url = self
            .config
            .build_url(&format!("boards/{}/sections/{}", board_id, section_id));
        let headers = self.auth.bearer_headers()?;

        self.transport
            .send_empty(TransportRequest::delete(url, headers))
            .await?;
        Ok(true)
    }
}
