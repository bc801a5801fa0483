//! Request types for the catalogs service.

use crate::errors::ConfigurationError;
use crate::types::{comma_join, CatalogFeedCredentials, CatalogProcessingSchedule};
use serde::Serialize;

/// Request to create a catalog feed
#[derive(Debug, Clone, Serialize)]
pub struct CreateFeedRequest {
    /// Feed name
    pub name: String,
    /// File format: `TSV`, `CSV` or `XML`
    pub format: String,
    /// URL the feed file is fetched from
    pub location: String,
    /// Country ID from ISO 3166-1 alpha-2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_country: Option<String>,
    /// Default availability for products in the feed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_availability: Option<String>,
    /// Currency code from ISO 4217
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,
    /// Locale used for product descriptions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
    /// Credentials when the feed location requires them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<CatalogFeedCredentials>,
    /// Preferred daily processing time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_processing_schedule: Option<CatalogProcessingSchedule>,
}

impl CreateFeedRequest {
    /// Create a new request
    pub fn new(
        name: impl Into<String>,
        format: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            format: format.into(),
            location: location.into(),
            default_country: None,
            default_availability: None,
            default_currency: None,
            default_locale: None,
            credentials: None,
            preferred_processing_schedule: None,
        }
    }

    /// Set the default country
    pub fn default_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = Some(country.into());
        self
    }

    /// Set the default availability
    pub fn default_availability(mut self, availability: impl Into<String>) -> Self {
        self.default_availability = Some(availability.into());
        self
    }

    /// Set the default currency
    pub fn default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = Some(currency.into());
        self
    }

    /// Set the default locale
    pub fn default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    /// Set fetch credentials
    pub fn credentials(mut self, credentials: CatalogFeedCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the preferred processing schedule
    pub fn preferred_processing_schedule(mut self, schedule: CatalogProcessingSchedule) -> Self {
        self.preferred_processing_schedule = Some(schedule);
        self
    }
}

/// Request to update a catalog feed.
///
/// At least one field must be set; an all-empty update fails before any
/// network call.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateFeedRequest {
    /// Feed to update
    #[serde(skip)]
    pub feed_id: String,
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New file format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// New fetch location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// New default availability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_availability: Option<String>,
    /// New default currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,
    /// New feed status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// New fetch credentials
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<CatalogFeedCredentials>,
    /// New processing schedule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_processing_schedule: Option<CatalogProcessingSchedule>,
}

impl UpdateFeedRequest {
    /// Create a new request
    pub fn new(feed_id: impl Into<String>) -> Self {
        Self {
            feed_id: feed_id.into(),
            name: None,
            format: None,
            location: None,
            default_availability: None,
            default_currency: None,
            status: None,
            credentials: None,
            preferred_processing_schedule: None,
        }
    }

    /// Set a new name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a new file format
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set a new fetch location
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set a new default availability
    pub fn default_availability(mut self, availability: impl Into<String>) -> Self {
        self.default_availability = Some(availability.into());
        self
    }

    /// Set a new default currency
    pub fn default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = Some(currency.into());
        self
    }

    /// Set a new status
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set new fetch credentials
    pub fn credentials(mut self, credentials: CatalogFeedCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a new processing schedule
    pub fn preferred_processing_schedule(mut self, schedule: CatalogProcessingSchedule) -> Self {
        self.preferred_processing_schedule = Some(schedule);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigurationError> {
        let all_unset = self.name.is_none()
            && self.format.is_none()
            && self.location.is_none()
            && self.default_availability.is_none()
            && self.default_currency.is_none()
            && self.status.is_none()
            && self.credentials.is_none()
            && self.preferred_processing_schedule.is_none();
        if all_unset {
            return Err(ConfigurationError::EmptyUpdate {
                message: "one of name, format, location, default_availability, \
                          default_currency, status, credentials, preferred_processing_schedule"
                    .to_string(),
            });
        }
        Ok(())
    }
}

/// Request to fetch catalog items by id
#[derive(Debug, Clone)]
pub struct GetItemsRequest {
    /// Country for the items
    pub country: String,
    /// Item ids to fetch
    pub item_ids: Vec<String>,
    /// Language for the items
    pub language: String,
}

impl GetItemsRequest {
    /// Create a new request
    pub fn new<S: Into<String>>(
        country: impl Into<String>,
        item_ids: Vec<S>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            item_ids: item_ids.into_iter().map(Into::into).collect(),
            language: language.into(),
        }
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        vec![
            ("country".to_string(), self.country.clone()),
            ("item_ids".to_string(), comma_join(&self.item_ids)),
            ("language".to_string(), self.language.clone()),
        ]
    }
}

/// Request to run a batch operation over catalog items
#[derive(Debug, Clone, Serialize)]
pub struct ItemsBatchRequest {
    /// Batch operation: `UPDATE`, `CREATE` or `UPSERT`
    pub operation: String,
    /// Items the operation applies to
    pub items: Vec<serde_json::Value>,
    /// Country ID from ISO 3166-1 alpha-2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO 639-1 language code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl ItemsBatchRequest {
    /// Create a new request
    pub fn new(operation: impl Into<String>, items: Vec<serde_json::Value>) -> Self {
        Self {
            operation: operation.into(),
            items,
            country: None,
            language: None,
        }
    }

    /// Set the country
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Request to create a product group
#[derive(Debug, Clone, Serialize)]
pub struct CreateProductGroupRequest {
    /// Feed the group draws items from
    pub feed_id: String,
    /// Product group name
    pub name: String,
    /// Filter specification
    pub filters: serde_json::Value,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateProductGroupRequest {
    /// Create a new request
    pub fn new(
        feed_id: impl Into<String>,
        name: impl Into<String>,
        filters: serde_json::Value,
    ) -> Self {
        Self {
            feed_id: feed_id.into(),
            name: name.into(),
            filters,
            description: None,
        }
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request to update a product group.
///
/// At least one field must be set; an all-empty update fails before any
/// network call.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProductGroupRequest {
    /// Product group to update
    #[serde(skip)]
    pub product_group_id: String,
    /// New feed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_id: Option<String>,
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New filter specification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<serde_json::Value>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateProductGroupRequest {
    /// Create a new request
    pub fn new(product_group_id: impl Into<String>) -> Self {
        Self {
            product_group_id: product_group_id.into(),
            feed_id: None,
            name: None,
            filters: None,
            description: None,
        }
    }

    /// Set a new feed
    pub fn feed_id(mut self, feed_id: impl Into<String>) -> Self {
        self.feed_id = Some(feed_id.into());
        self
    }

    /// Set a new name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a new filter specification
    pub fn filters(mut self, filters: serde_json::Value) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Set a new description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigurationError> {
        if self.feed_id.is_none()
            && self.name.is_none()
            && self.filters.is_none()
            && self.description.is_none()
        {
            return Err(ConfigurationError::EmptyUpdate {
                message: "one of feed_id, name, filters, description".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_feed_body_is_sparse() {
        let request = CreateFeedRequest::new("retail", "TSV", "https://shop.example.com/feed.tsv")
            .default_currency("USD");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "retail",
                "format": "TSV",
                "location": "https://shop.example.com/feed.tsv",
                "default_currency": "USD"
            })
        );
    }

    #[test]
    fn test_empty_feed_update_rejected() {
        assert!(UpdateFeedRequest::new("278913891").validate().is_err());
        assert!(UpdateFeedRequest::new("278913891")
            .status("INACTIVE")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_get_items_query_joins_ids() {
        let query = GetItemsRequest::new("US", vec!["CR-1", "CR-2"], "EN").to_query();
        assert_eq!(
            query,
            vec![
                ("country".to_string(), "US".to_string()),
                ("item_ids".to_string(), "CR-1,CR-2".to_string()),
                ("language".to_string(), "EN".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_product_group_update_rejected() {
        assert!(UpdateProductGroupRequest::new("443727193917").validate().is_err());
    }

    #[test]
    fn test_items_batch_body() {
        let request = ItemsBatchRequest::new("UPSERT", vec![json!({"item_id": "CR-1"})])
            .country("US")
            .language("EN");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["operation"], "UPSERT");
        assert_eq!(body["items"][0]["item_id"], "CR-1");
        assert_eq!(body["country"], "US");
    }
}
