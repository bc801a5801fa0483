//! Catalog feed, item and product group types.
//!
//! Feed processing results report their error and warning tallies as
//! name-to-count maps. The API enumerates dozens of counter names and adds
//! more over time; a map keeps every counter, known or not.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A catalog feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFeed {
    /// Feed identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Feed name
    #[serde(default)]
    pub name: Option<String>,
    /// Country the feed's products target
    #[serde(default)]
    pub country: Option<String>,
    /// Availability used when an item omits one
    #[serde(default)]
    pub default_availability: Option<String>,
    /// Currency used when an item omits one
    #[serde(default)]
    pub default_currency: Option<String>,
    /// Feed file format: `TSV`, `CSV` or `XML`
    #[serde(default)]
    pub format: Option<String>,
    /// Locale of the feed contents
    #[serde(default)]
    pub locale: Option<String>,
    /// URL the feed file is fetched from
    #[serde(default)]
    pub location: Option<String>,
    /// Credentials for fetching a protected feed location
    #[serde(default)]
    pub credentials: Option<CatalogFeedCredentials>,
    /// Preferred daily processing time
    #[serde(default)]
    pub preferred_processing_schedule: Option<CatalogProcessingSchedule>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Feed status: `ACTIVE` or `INACTIVE`
    #[serde(default)]
    pub status: Option<String>,
}

/// Credentials for fetching a protected feed location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFeedCredentials {
    /// Username
    #[serde(default)]
    pub username: Option<String>,
    /// Password
    #[serde(default)]
    pub password: Option<String>,
}

/// Preferred daily processing time for a feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogProcessingSchedule {
    /// Time of day (HH:MM)
    #[serde(default)]
    pub time: Option<String>,
    /// Timezone identifier
    #[serde(default)]
    pub timezone: Option<String>,
}

/// One processing run of a catalog feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFeedProcessResult {
    /// Processing run identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Run status (e.g. `COMPLETED`, `FAILED`, `PROCESSING`)
    #[serde(default)]
    pub status: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Ingestion counters for this run
    #[serde(default)]
    pub ingestion_details: Option<IngestionDetails>,
    /// Product counts after this run
    #[serde(default)]
    pub product_counts: Option<ProductCounts>,
    /// Validation counters for this run
    #[serde(default)]
    pub validation_details: Option<ValidationDetails>,
}

/// Ingestion-stage counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionDetails {
    /// Error name to occurrence count
    #[serde(default)]
    pub errors: Option<HashMap<String, i64>>,
    /// Informational name to count (e.g. `in_stock`, `out_of_stock`)
    #[serde(default)]
    pub info: Option<HashMap<String, i64>>,
}

/// Product counts after a processing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCounts {
    /// Items in the source feed file
    #[serde(default)]
    pub original: Option<i64>,
    /// Items currently in stock
    #[serde(default)]
    pub in_stock: Option<i64>,
    /// Items currently out of stock
    #[serde(default)]
    pub out_of_stock: Option<i64>,
    /// Items on preorder
    #[serde(default)]
    pub preorder: Option<i64>,
    /// Total indexed items
    #[serde(default)]
    pub total: Option<i64>,
}

/// Validation-stage counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationDetails {
    /// Error name to occurrence count
    #[serde(default)]
    pub errors: Option<HashMap<String, i64>>,
    /// Warning name to occurrence count
    #[serde(default)]
    pub warnings: Option<HashMap<String, i64>>,
}

/// Processing record for one catalog item in a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemProcessingRecord {
    /// Merchant-assigned item identifier
    #[serde(default)]
    pub item_id: Option<String>,
    /// Record status (e.g. `SUCCESS`, `FAILURE`)
    #[serde(default)]
    pub status: Option<String>,
    /// Per-attribute errors for this item
    #[serde(default)]
    pub errors: Option<Vec<serde_json::Value>>,
}

/// A catalog product group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogProductGroup {
    /// Product group identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Product group name
    #[serde(default)]
    pub name: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Feed the group draws items from
    #[serde(default)]
    pub feed_id: Option<String>,
    /// Filter specification, opaque mapping
    #[serde(default)]
    pub filters: Option<serde_json::Value>,
    /// Group type (e.g. `MERCHANT_CREATED`, `ALL_PRODUCTS`)
    #[serde(default)]
    pub r#type: Option<String>,
    /// Group status
    #[serde(default)]
    pub status: Option<String>,
    /// Creation timestamp (UNIX millis)
    #[serde(default)]
    pub created_at: Option<i64>,
    /// Last update timestamp (UNIX millis)
    #[serde(default)]
    pub updated_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feed_decodes_with_schedule() {
        let feed: CatalogFeed = serde_json::from_value(json!({
            "id": "278913891",
            "name": "retail feed",
            "format": "TSV",
            "location": "https://shop.example.com/feed.tsv",
            "preferred_processing_schedule": {"time": "02:00", "timezone": "America/Los_Angeles"}
        }))
        .unwrap();

        assert_eq!(feed.format.as_deref(), Some("TSV"));
        let schedule = feed.preferred_processing_schedule.unwrap();
        assert_eq!(schedule.time.as_deref(), Some("02:00"));
    }

    #[test]
    fn test_process_result_counters_keep_unknown_names() {
        let result: CatalogFeedProcessResult = serde_json::from_value(json!({
            "id": "2",
            "status": "COMPLETED",
            "validation_details": {
                "errors": {"fetch_error": 0, "some_future_counter": 3},
                "warnings": {"title_length_too_long": 7}
            },
            "product_counts": {"original": 100, "total": 97}
        }))
        .unwrap();

        let validation = result.validation_details.unwrap();
        let errors = validation.errors.unwrap();
        assert_eq!(errors["some_future_counter"], 3);
        assert_eq!(result.product_counts.unwrap().total, Some(97));
    }
}
