//! Advertising entity types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An advertising account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdAccount {
    /// Ad account identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Account name
    #[serde(default)]
    pub name: Option<String>,
    /// Owner reference
    #[serde(default)]
    pub owner: Option<serde_json::Value>,
    /// Country code
    #[serde(default)]
    pub country: Option<String>,
    /// Currency code
    #[serde(default)]
    pub currency: Option<String>,
}

/// A campaign within an ad account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    /// Campaign identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Owning ad account
    #[serde(default)]
    pub ad_account_id: Option<String>,
    /// Campaign name
    #[serde(default)]
    pub name: Option<String>,
    /// Entity status: `ACTIVE`, `PAUSED` or `ARCHIVED`
    #[serde(default)]
    pub status: Option<String>,
    /// Lifetime spend cap in microcurrency
    #[serde(default)]
    pub lifetime_spend_cap: Option<i64>,
    /// Daily spend cap in microcurrency
    #[serde(default)]
    pub daily_spend_cap: Option<i64>,
    /// Campaign objective (e.g. `AWARENESS`, `CONVERSIONS`)
    #[serde(default)]
    pub objective_type: Option<String>,
    /// Start time as a UNIX timestamp
    #[serde(default)]
    pub start_time: Option<i64>,
    /// End time as a UNIX timestamp
    #[serde(default)]
    pub end_time: Option<i64>,
}

/// An ad group within a campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdGroup {
    /// Ad group identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Owning ad account
    #[serde(default)]
    pub ad_account_id: Option<String>,
    /// Owning campaign
    #[serde(default)]
    pub campaign_id: Option<String>,
    /// Ad group name
    #[serde(default)]
    pub name: Option<String>,
    /// Entity status
    #[serde(default)]
    pub status: Option<String>,
    /// Bid in microcurrency
    #[serde(default)]
    pub bid_in_micro_currency: Option<i64>,
    /// Budget in microcurrency
    #[serde(default)]
    pub budget_in_micro_currency: Option<i64>,
    /// Budget type: `DAILY` or `LIFETIME`
    #[serde(default)]
    pub budget_type: Option<String>,
    /// Targeting specification, opaque mapping
    #[serde(default)]
    pub targeting_spec: Option<HashMap<String, serde_json::Value>>,
}

/// An ad within an ad group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ad {
    /// Ad identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Owning ad account
    #[serde(default)]
    pub ad_account_id: Option<String>,
    /// Owning campaign
    #[serde(default)]
    pub campaign_id: Option<String>,
    /// Owning ad group
    #[serde(default)]
    pub ad_group_id: Option<String>,
    /// Promoted pin
    #[serde(default)]
    pub pin_id: Option<String>,
    /// Ad name
    #[serde(default)]
    pub name: Option<String>,
    /// Entity status
    #[serde(default)]
    pub status: Option<String>,
    /// Creative type (e.g. `REGULAR`, `VIDEO`)
    #[serde(default)]
    pub creative_type: Option<String>,
    /// Review status of the creative
    #[serde(default)]
    pub review_status: Option<String>,
}
