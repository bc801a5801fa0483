//! Shared data types for the Pinterest API.
//!
//! Records decode tolerantly: every field is optional, unknown JSON keys are
//! ignored, and absent keys become `None` rather than errors. Upstream schema
//! drift therefore never breaks decoding.

use serde::{Deserialize, Serialize};

pub mod ad_account;
pub mod analytics;
pub mod board;
pub mod catalog;
pub mod media;
pub mod pin;
pub mod user_account;

pub use ad_account::{Ad, AdAccount, AdGroup, Campaign};
pub use analytics::{Analytics, AnalyticsAll, DailyMetric};
pub use board::{Board, BoardSection};
pub use catalog::{
    CatalogFeed, CatalogFeedCredentials, CatalogFeedProcessResult, CatalogProcessingSchedule,
    CatalogProductGroup, IngestionDetails, ItemProcessingRecord, ProductCounts, ValidationDetails,
};
pub use media::{MediaUpload, RegisterMediaUpload};
pub use pin::{ImageDetail, MediaSource, MediaSourceItem, Pin, PinMedia};
pub use user_account::UserAccount;

/// One page of a bookmark-paginated listing.
///
/// The API returns an opaque `bookmark` cursor alongside each page; passing it
/// back fetches the next page. An absent or empty bookmark marks the last
/// page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Cursor for the next page, absent or empty on the last page
    #[serde(default)]
    pub bookmark: Option<String>,
}

impl<T> Page<T> {
    /// Get the cursor for the next page, treating an empty string as
    /// end-of-pages
    pub fn bookmark(&self) -> Option<&str> {
        self.bookmark.as_deref().filter(|b| !b.is_empty())
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            bookmark: None,
        }
    }
}

/// Owner of a board or pin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    /// Username of the owner
    #[serde(default)]
    pub username: Option<String>,
}

/// Join list-valued filter values with commas, preserving input order.
///
/// No deduplication; the server sees exactly what the caller passed.
pub(crate) fn comma_join<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|v| v.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_bookmark_filters_empty() {
        let page: Page<Owner> = serde_json::from_value(json!({
            "items": [],
            "bookmark": ""
        }))
        .unwrap();
        assert!(page.bookmark().is_none());

        let page: Page<Owner> = serde_json::from_value(json!({
            "items": [],
            "bookmark": "cursor123"
        }))
        .unwrap();
        assert_eq!(page.bookmark(), Some("cursor123"));
    }

    #[test]
    fn test_page_absent_fields_default() {
        let page: Page<Owner> = serde_json::from_value(json!({})).unwrap();
        assert!(page.items.is_empty());
        assert!(page.bookmark().is_none());
    }

    #[test]
    fn test_comma_join_preserves_order_and_duplicates() {
        assert_eq!(
            comma_join(&["IMPRESSION", "SAVE", "IMPRESSION"]),
            "IMPRESSION,SAVE,IMPRESSION"
        );
        assert_eq!(comma_join::<&str>(&[]), "");
        assert_eq!(comma_join(&["PIN_CLICK"]), "PIN_CLICK");
    }
}
