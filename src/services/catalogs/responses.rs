//! Response types specific to the catalogs service.

use crate::types::ItemProcessingRecord;
use serde::{Deserialize, Serialize};

/// Catalog items returned by a lookup.
///
/// Item shapes vary by product vertical, so each item passes through as a
/// raw mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItems {
    /// Fetched items
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

/// State of a catalog items batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItemsBatch {
    /// Batch identifier
    #[serde(default)]
    pub batch_id: Option<String>,
    /// When the batch was created
    #[serde(default)]
    pub created_time: Option<String>,
    /// When the batch finished, absent while still processing
    #[serde(default)]
    pub completed_time: Option<String>,
    /// Batch status (e.g. `PROCESSING`, `COMPLETED`)
    #[serde(default)]
    pub status: Option<String>,
    /// Per-item processing records
    #[serde(default)]
    pub items: Vec<ItemProcessingRecord>,
}
