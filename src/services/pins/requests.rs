//! Request types for the pins service.

use crate::types::{comma_join, MediaSource};
use serde::Serialize;

/// Request to fetch a single pin
#[derive(Debug, Clone)]
pub struct GetPinRequest {
    /// Pin to fetch
    pub pin_id: String,
    /// Ad account context for the read
    pub ad_account_id: Option<String>,
}

impl GetPinRequest {
    /// Create a new request
    pub fn new(pin_id: impl Into<String>) -> Self {
        Self {
            pin_id: pin_id.into(),
            ad_account_id: None,
        }
    }

    /// Read in the context of an ad account
    pub fn ad_account_id(mut self, ad_account_id: impl Into<String>) -> Self {
        self.ad_account_id = Some(ad_account_id.into());
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(ad_account_id) = &self.ad_account_id {
            query.push(("ad_account_id".to_string(), ad_account_id.clone()));
        }
        query
    }
}

/// Request to create a pin
#[derive(Debug, Clone, Serialize)]
pub struct CreatePinRequest {
    /// Board the pin goes on
    pub board_id: String,
    /// Media for the pin
    pub media_source: MediaSource,
    /// Pin title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Pin description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Destination link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Alt text for accessibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// Section within the board
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_section_id: Option<String>,
    /// Pin to attribute this pin to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_pin_id: Option<String>,
}

impl CreatePinRequest {
    /// Create a new request
    pub fn new(board_id: impl Into<String>, media_source: MediaSource) -> Self {
        Self {
            board_id: board_id.into(),
            media_source,
            title: None,
            description: None,
            link: None,
            alt_text: None,
            board_section_id: None,
            parent_pin_id: None,
        }
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the destination link
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the alt text
    pub fn alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    /// Place the pin in a board section
    pub fn board_section_id(mut self, board_section_id: impl Into<String>) -> Self {
        self.board_section_id = Some(board_section_id.into());
        self
    }

    /// Attribute the pin to a parent pin
    pub fn parent_pin_id(mut self, parent_pin_id: impl Into<String>) -> Self {
        self.parent_pin_id = Some(parent_pin_id.into());
        self
    }
}

/// Request to save an existing pin to a board
#[derive(Debug, Clone)]
pub struct SavePinRequest {
    /// Pin to save
    pub pin_id: String,
    /// Board to save onto
    pub board_id: String,
    /// Section within the board
    pub board_section_id: Option<String>,
}

impl SavePinRequest {
    /// Create a new request
    pub fn new(pin_id: impl Into<String>, board_id: impl Into<String>) -> Self {
        Self {
            pin_id: pin_id.into(),
            board_id: board_id.into(),
            board_section_id: None,
        }
    }

    /// Save into a board section
    pub fn board_section_id(mut self, board_section_id: impl Into<String>) -> Self {
        self.board_section_id = Some(board_section_id.into());
        self
    }
}

/// Body for the save-pin call
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SavePinBody {
    pub board_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_section_id: Option<String>,
}

/// Request for pin analytics
#[derive(Debug, Clone)]
pub struct PinAnalyticsRequest {
    /// Pin to report on
    pub pin_id: String,
    /// Report start date (YYYY-MM-DD, UTC)
    pub start_date: String,
    /// Report end date (YYYY-MM-DD, UTC)
    pub end_date: String,
    /// Metric types to include
    pub metric_types: Vec<String>,
    /// Apps or devices to report on
    pub app_types: Option<String>,
    /// How to split the data into groups
    pub split_field: Option<String>,
    /// Ad account context for the read
    pub ad_account_id: Option<String>,
}

impl PinAnalyticsRequest {
    /// Create a new request for the given reporting window
    pub fn new(
        pin_id: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            pin_id: pin_id.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            metric_types: Vec::new(),
            app_types: None,
            split_field: None,
            ad_account_id: None,
        }
    }

    /// Set the metric types to include
    pub fn metric_types<S: Into<String>>(mut self, metric_types: Vec<S>) -> Self {
        self.metric_types = metric_types.into_iter().map(Into::into).collect();
        self
    }

    /// Set the apps or devices to report on
    pub fn app_types(mut self, app_types: impl Into<String>) -> Self {
        self.app_types = Some(app_types.into());
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

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("start_date".to_string(), self.start_date.clone()),
            ("end_date".to_string(), self.end_date.clone()),
        ];
        if !self.metric_types.is_empty() {
            query.push(("metric_types".to_string(), comma_join(&self.metric_types)));
        }
        if let Some(app_types) = &self.app_types {
            query.push(("app_types".to_string(), app_types.clone()));
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_pin_body_is_sparse() {
        let request = CreatePinRequest::new(
            "1022106146619703648",
            MediaSource::image_url("https://example.com/a.jpg"),
        )
        .title("tea set");

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "board_id": "1022106146619703648",
                "media_source": {"source_type": "image_url", "url": "https://example.com/a.jpg"},
                "title": "tea set"
            })
        );
    }

    #[test]
    fn test_analytics_query_joins_metric_types() {
        let request = PinAnalyticsRequest::new("1", "2024-06-01", "2024-06-30")
            .metric_types(vec!["IMPRESSION", "SAVE", "PIN_CLICK"]);
        let query = request.to_query();

        assert!(query.contains(&(
            "metric_types".to_string(),
            "IMPRESSION,SAVE,PIN_CLICK".to_string()
        )));
    }

    #[test]
    fn test_get_pin_query_omits_unset_ad_account() {
        assert!(GetPinRequest::new("1").to_query().is_empty());
        let query = GetPinRequest::new("1").ad_account_id("9").to_query();
        assert_eq!(query, vec![("ad_account_id".to_string(), "9".to_string())]);
    }
}
