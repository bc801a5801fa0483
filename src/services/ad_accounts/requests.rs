//! Request types for the ad accounts service.

use crate::services::paging_query;
use crate::types::comma_join;

/// Request to list ad accounts the operating user account has access to
#[derive(Debug, Clone, Default)]
pub struct ListAdAccountsRequest {
    /// Maximum items per page (API accepts 1..=100)
    pub page_size: Option<u32>,
    /// Cursor for the next page
    pub bookmark: Option<String>,
    /// Include ad accounts shared with this account
    pub include_shared_accounts: Option<bool>,
}

impl ListAdAccountsRequest {
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

    /// Include shared ad accounts
    pub fn include_shared_accounts(mut self, include: bool) -> Self {
        self.include_shared_accounts = Some(include);
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = paging_query(self.page_size, self.bookmark.as_deref());
        if let Some(include) = self.include_shared_accounts {
            query.push(("include_shared_accounts".to_string(), include.to_string()));
        }
        query
    }
}

/// Shared parameter block for advertising analytics reports.
///
/// Every report takes a date window, the columns to retrieve and a
/// granularity; conversion attribution windows are optional.
#[derive(Debug, Clone)]
pub struct AnalyticsParams {
    /// Report start date (YYYY-MM-DD, UTC)
    pub start_date: String,
    /// Report end date (YYYY-MM-DD, UTC)
    pub end_date: String,
    /// Columns to retrieve; MICRO_DOLLARS metrics are reported in
    /// microunits of the advertiser's currency
    pub columns: Vec<String>,
    /// Granularity: `TOTAL`, `DAY`, `HOUR`, `WEEK` or `MONTH`
    pub granularity: String,
    /// Attribution window in days for pin click actions
    pub click_window_days: Option<u32>,
    /// Attribution window in days for engagement actions
    pub engagement_window_days: Option<u32>,
    /// Attribution window in days for view actions
    pub view_window_days: Option<u32>,
    /// Date by which conversion metrics are reported
    pub conversion_report_time: Option<String>,
}

impl AnalyticsParams {
    /// Create a new parameter block
    pub fn new<S: Into<String>>(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        columns: Vec<S>,
        granularity: impl Into<String>,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            granularity: granularity.into(),
            click_window_days: None,
            engagement_window_days: None,
            view_window_days: None,
            conversion_report_time: None,
        }
    }

    /// Set the pin click attribution window
    pub fn click_window_days(mut self, days: u32) -> Self {
        self.click_window_days = Some(days);
        self
    }

    /// Set the engagement attribution window
    pub fn engagement_window_days(mut self, days: u32) -> Self {
        self.engagement_window_days = Some(days);
        self
    }

    /// Set the view attribution window
    pub fn view_window_days(mut self, days: u32) -> Self {
        self.view_window_days = Some(days);
        self
    }

    /// Set the conversion report time
    pub fn conversion_report_time(mut self, time: impl Into<String>) -> Self {
        self.conversion_report_time = Some(time.into());
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("start_date".to_string(), self.start_date.clone()),
            ("end_date".to_string(), self.end_date.clone()),
            ("columns".to_string(), comma_join(&self.columns)),
            ("granularity".to_string(), self.granularity.clone()),
        ];
        if let Some(days) = self.click_window_days {
            query.push(("click_window_days".to_string(), days.to_string()));
        }
        if let Some(days) = self.engagement_window_days {
            query.push(("engagement_window_days".to_string(), days.to_string()));
        }
        if let Some(days) = self.view_window_days {
            query.push(("view_window_days".to_string(), days.to_string()));
        }
        if let Some(time) = &self.conversion_report_time {
            query.push(("conversion_report_time".to_string(), time.clone()));
        }
        query
    }
}

/// Request for an entity-level analytics report (campaigns, ad groups, ads
/// or product groups within an ad account)
#[derive(Debug, Clone)]
pub struct EntityAnalyticsRequest {
    /// Ad account the entities belong to
    pub ad_account_id: String,
    /// Entity ids to report on
    pub ids: Vec<String>,
    /// Report parameters
    pub params: AnalyticsParams,
}

impl EntityAnalyticsRequest {
    /// Create a new request
    pub fn new<S: Into<String>>(
        ad_account_id: impl Into<String>,
        ids: Vec<S>,
        params: AnalyticsParams,
    ) -> Self {
        Self {
            ad_account_id: ad_account_id.into(),
            ids: ids.into_iter().map(Into::into).collect(),
            params,
        }
    }

    pub(crate) fn to_query(&self, id_param: &str) -> Vec<(String, String)> {
        let mut query = vec![(id_param.to_string(), comma_join(&self.ids))];
        query.extend(self.params.to_query());
        query
    }
}

/// Request to list campaigns in an ad account
#[derive(Debug, Clone)]
pub struct ListCampaignsRequest {
    /// Ad account to list from
    pub ad_account_id: String,
    /// Filter by campaign ids
    pub campaign_ids: Vec<String>,
    /// Filter by entity statuses
    pub entity_statuses: Vec<String>,
    /// Sort order by id: `ASCENDING` or `DESCENDING`
    pub order: Option<String>,
    /// Maximum items per page
    pub page_size: Option<u32>,
    /// Cursor for the next page
    pub bookmark: Option<String>,
}

impl ListCampaignsRequest {
    /// Create a new request
    pub fn new(ad_account_id: impl Into<String>) -> Self {
        Self {
            ad_account_id: ad_account_id.into(),
            campaign_ids: Vec::new(),
            entity_statuses: Vec::new(),
            order: None,
            page_size: None,
            bookmark: None,
        }
    }

    /// Filter by campaign ids
    pub fn campaign_ids<S: Into<String>>(mut self, ids: Vec<S>) -> Self {
        self.campaign_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by entity statuses
    pub fn entity_statuses<S: Into<String>>(mut self, statuses: Vec<S>) -> Self {
        self.entity_statuses = statuses.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sort order
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
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
        let mut query = paging_query(self.page_size, self.bookmark.as_deref());
        if !self.campaign_ids.is_empty() {
            query.push(("campaign_ids".to_string(), comma_join(&self.campaign_ids)));
        }
        if !self.entity_statuses.is_empty() {
            query.push((
                "entity_statuses".to_string(),
                comma_join(&self.entity_statuses),
            ));
        }
        if let Some(order) = &self.order {
            query.push(("order".to_string(), order.clone()));
        }
        query
    }
}

/// Request to list ad groups in an ad account
#[derive(Debug, Clone)]
pub struct ListAdGroupsRequest {
    /// Ad account to list from
    pub ad_account_id: String,
    /// Filter by campaign ids
    pub campaign_ids: Vec<String>,
    /// Filter by ad group ids
    pub ad_group_ids: Vec<String>,
    /// Filter by entity statuses
    pub entity_statuses: Vec<String>,
    /// Sort order by id
    pub order: Option<String>,
    /// Return interests as text names rather than topic ids
    pub translate_interests_to_names: Option<bool>,
    /// Maximum items per page
    pub page_size: Option<u32>,
    /// Cursor for the next page
    pub bookmark: Option<String>,
}

impl ListAdGroupsRequest {
    /// Create a new request
    pub fn new(ad_account_id: impl Into<String>) -> Self {
        Self {
            ad_account_id: ad_account_id.into(),
            campaign_ids: Vec::new(),
            ad_group_ids: Vec::new(),
            entity_statuses: Vec::new(),
            order: None,
            translate_interests_to_names: None,
            page_size: None,
            bookmark: None,
        }
    }

    /// Filter by campaign ids
    pub fn campaign_ids<S: Into<String>>(mut self, ids: Vec<S>) -> Self {
        self.campaign_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by ad group ids
    pub fn ad_group_ids<S: Into<String>>(mut self, ids: Vec<S>) -> Self {
        self.ad_group_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by entity statuses
    pub fn entity_statuses<S: Into<String>>(mut self, statuses: Vec<S>) -> Self {
        self.entity_statuses = statuses.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sort order
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Return interests as text names
    pub fn translate_interests_to_names(mut self, translate: bool) -> Self {
        self.translate_interests_to_names = Some(translate);
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
        let mut query = paging_query(self.page_size, self.bookmark.as_deref());
        if !self.campaign_ids.is_empty() {
            query.push(("campaign_ids".to_string(), comma_join(&self.campaign_ids)));
        }
        if !self.ad_group_ids.is_empty() {
            query.push(("ad_group_ids".to_string(), comma_join(&self.ad_group_ids)));
        }
        if !self.entity_statuses.is_empty() {
            query.push((
                "entity_statuses".to_string(),
                comma_join(&self.entity_statuses),
            ));
        }
        if let Some(order) = &self.order {
            query.push(("order".to_string(), order.clone()));
        }
        if let Some(translate) = self.translate_interests_to_names {
            query.push((
                "translate_interests_to_names".to_string(),
                translate.to_string(),
            ));
        }
        query
    }
}

/// Request to list ads in an ad account
#[derive(Debug, Clone)]
pub struct ListAdsRequest {
    /// Ad account to list from
    pub ad_account_id: String,
    /// Filter by campaign ids
    pub campaign_ids: Vec<String>,
    /// Filter by ad group ids
    pub ad_group_ids: Vec<String>,
    /// Filter by ad ids
    pub ad_ids: Vec<String>,
    /// Filter by entity statuses
    pub entity_statuses: Vec<String>,
    /// Sort order by id
    pub order: Option<String>,
    /// Maximum items per page
    pub page_size: Option<u32>,
    /// Cursor for the next page
    pub bookmark: Option<String>,
}

impl ListAdsRequest {
    /// Create a new request
    pub fn new(ad_account_id: impl Into<String>) -> Self {
        Self {
            ad_account_id: ad_account_id.into(),
            campaign_ids: Vec::new(),
            ad_group_ids: Vec::new(),
            ad_ids: Vec::new(),
            entity_statuses: Vec::new(),
            order: None,
            page_size: None,
            bookmark: None,
        }
    }

    /// Filter by campaign ids
    pub fn campaign_ids<S: Into<String>>(mut self, ids: Vec<S>) -> Self {
        self.campaign_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by ad group ids
    pub fn ad_group_ids<S: Into<String>>(mut self, ids: Vec<S>) -> Self {
        self.ad_group_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by ad ids
    pub fn ad_ids<S: Into<String>>(mut self, ids: Vec<S>) -> Self {
        self.ad_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by entity statuses
    pub fn entity_statuses<S: Into<String>>(mut self, statuses: Vec<S>) -> Self {
        self.entity_statuses = statuses.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sort order
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
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
        let mut query = paging_query(self.page_size, self.bookmark.as_deref());
        if !self.campaign_ids.is_empty() {
            query.push(("campaign_ids".to_string(), comma_join(&self.campaign_ids)));
        }
        if !self.ad_group_ids.is_empty() {
            query.push(("ad_group_ids".to_string(), comma_join(&self.ad_group_ids)));
        }
        if !self.ad_ids.is_empty() {
            query.push(("ad_ids".to_string(), comma_join(&self.ad_ids)));
        }
        if !self.entity_statuses.is_empty() {
            query.push((
                "entity_statuses".to_string(),
                comma_join(&self.entity_statuses),
            ));
        }
        if let Some(order) = &self.order {
            query.push(("order".to_string(), order.clone()));
        }
        query
    }
}
