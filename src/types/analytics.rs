//! Analytics report types, shared by the pin, user-account and ad-account
//! reports.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An analytics report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analytics {
    /// Metrics aggregated over all requested splits
    #[serde(default)]
    pub all: Option<AnalyticsAll>,
}

/// Daily and summary metrics for one split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsAll {
    /// One entry per day in the requested window
    #[serde(default)]
    pub daily_metrics: Option<Vec<DailyMetric>>,
    /// Metric name to aggregate value over the window
    #[serde(default)]
    pub summary_metrics: Option<HashMap<String, serde_json::Value>>,
}

/// Metrics for a single day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMetric {
    /// Day the metrics cover (YYYY-MM-DD)
    #[serde(default)]
    pub date: Option<String>,
    /// Whether the day's data is final (`READY`) or still settling
    #[serde(default)]
    pub data_status: Option<String>,
    /// Metric name to value for this day
    #[serde(default)]
    pub metrics: Option<HashMap<String, serde_json::Value>>,
}
