//! Request types for the boards service.

use crate::errors::ConfigurationError;
use crate::services::paging_query;
use serde::Serialize;

/// Request to list boards owned by the operating user account
#[derive(Debug, Clone, Default)]
pub struct ListBoardsRequest {
    /// Maximum items per page (API accepts 1..=100)
    pub page_size: Option<u32>,
    /// Cursor for the next page
    pub bookmark: Option<String>,
    /// Privacy filter: `PUBLIC`, `PROTECTED` or `SECRET`
    pub privacy: Option<String>,
}

impl ListBoardsRequest {
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

    /// Filter by privacy setting
    pub fn privacy(mut self, privacy: impl Into<String>) -> Self {
        self.privacy = Some(privacy.into());
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = paging_query(self.page_size, self.bookmark.as_deref());
        if let Some(privacy) = &self.privacy {
            query.push(("privacy".to_string(), privacy.clone()));
        }
        query
    }
}

/// Request to create a board
#[derive(Debug, Clone, Serialize)]
pub struct CreateBoardRequest {
    /// Board name
    pub name: String,
    /// Board description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Privacy setting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,
}

impl CreateBoardRequest {
    /// Create a new request
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            privacy: None,
        }
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the privacy setting
    pub fn privacy(mut self, privacy: impl Into<String>) -> Self {
        self.privacy = Some(privacy.into());
        self
    }
}

/// Request to update a board.
///
/// At least one field must be set; an all-empty update fails before any
/// network call.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateBoardRequest {
    /// Board to update
    #[serde(skip)]
    pub board_id: String,
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New privacy setting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,
}

impl UpdateBoardRequest {
    /// Create a new request
    pub fn new(board_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            name: None,
            description: None,
            privacy: None,
        }
    }

    /// Set a new name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a new description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a new privacy setting
    pub fn privacy(mut self, privacy: impl Into<String>) -> Self {
        self.privacy = Some(privacy.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigurationError> {
        if self.name.is_none() && self.description.is_none() && self.privacy.is_none() {
            return Err(ConfigurationError::EmptyUpdate {
                message: "one of name, description, privacy".to_string(),
            });
        }
        Ok(())
    }
}

/// Request to list pins on a board or in a board section
#[derive(Debug, Clone)]
pub struct ListBoardPinsRequest {
    /// Board to list from
    pub board_id: String,
    /// Restrict the listing to one section
    pub section_id: Option<String>,
    /// Maximum items per page
    pub page_size: Option<u32>,
    /// Cursor for the next page
    pub bookmark: Option<String>,
}

impl ListBoardPinsRequest {
    /// List pins on a board
    pub fn new(board_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            section_id: None,
            page_size: None,
            bookmark: None,
        }
    }

    /// Restrict the listing to a section
    pub fn section(mut self, section_id: impl Into<String>) -> Self {
        self.section_id = Some(section_id.into());
        self
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

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        paging_query(self.page_size, self.bookmark.as_deref())
    }
}

/// Request to list sections of a board
#[derive(Debug, Clone)]
pub struct ListBoardSectionsRequest {
    /// Board to list sections of
    pub board_id: String,
    /// Maximum items per page
    pub page_size: Option<u32>,
    /// Cursor for the next page
    pub bookmark: Option<String>,
}

impl ListBoardSectionsRequest {
    /// Create a new request
    pub fn new(board_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            page_size: None,
            bookmark: None,
        }
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

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        paging_query(self.page_size, self.bookmark.as_deref())
    }
}

/// Body for creating or renaming a board section
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SectionBody {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults_page_size() {
        let query = ListBoardsRequest::new().to_query();
        assert_eq!(
            query,
            vec![("page_size".to_string(), "25".to_string())]
        );
    }

    #[test]
    fn test_list_query_carries_bookmark_and_privacy() {
        let query = ListBoardsRequest::new()
            .page_size(50)
            .bookmark("cursor123")
            .privacy("SECRET")
            .to_query();
        assert_eq!(
            query,
            vec![
                ("page_size".to_string(), "50".to_string()),
                ("bookmark".to_string(), "cursor123".to_string()),
                ("privacy".to_string(), "SECRET".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_update_rejected() {
        assert!(UpdateBoardRequest::new("1").validate().is_err());
        assert!(UpdateBoardRequest::new("1").name("new").validate().is_ok());
    }

    #[test]
    fn test_update_body_omits_unset_fields() {
        let request = UpdateBoardRequest::new("1").description("summer");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({"description": "summer"}));
    }
}
