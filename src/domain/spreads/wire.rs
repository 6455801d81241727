//! Wire types for the spreads scan endpoint.
//!
//! Mirrors the backend's request schema: all filters optional, ranked by a
//! composite score unless told otherwise.

use crate::shared::ItemId;
use serde::{Deserialize, Serialize};

/// Result ordering for spreads scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadSortBy {
    #[default]
    Score,
    SpreadPct,
    SpreadAbs,
    #[serde(rename = "stability_1y")]
    Stability1y,
}

/// Filter configuration for `POST /api/spreads/scan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadsScanRequest {
    // Filters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_daily_volume_24h: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_daily_volume_24h: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_avg_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_avg_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_buy_limit: Option<u64>,

    // Scoring / ranking
    pub sort_by: SpreadSortBy,
    pub limit: u32,

    /// How many shortlisted items get the per-item 1y stability enrichment.
    pub stability_top_k: u32,
}

impl Default for SpreadsScanRequest {
    fn default() -> Self {
        Self {
            min_daily_volume_24h: None,
            max_daily_volume_24h: None,
            min_avg_price: None,
            max_avg_price: None,
            min_buy_limit: None,
            sort_by: SpreadSortBy::default(),
            limit: 50,
            stability_top_k: 150,
        }
    }
}

impl SpreadsScanRequest {
    /// Client-side mirror of the backend's range constraints.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=200).contains(&self.limit) {
            return Err(format!("limit must be within 1..=200, got {}", self.limit));
        }
        if !(10..=500).contains(&self.stability_top_k) {
            return Err(format!(
                "stability_top_k must be within 10..=500, got {}",
                self.stability_top_k
            ));
        }
        Ok(())
    }
}

/// One ranked item from a spreads scan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpreadsScanResult {
    pub item_id: ItemId,
    pub name: String,
    #[serde(default)]
    pub buy_limit: Option<u32>,

    pub daily_volume_24h: i64,
    #[serde(default)]
    pub daily_mid_price: Option<f64>,

    #[serde(default)]
    pub spread_abs_median: Option<f64>,
    #[serde(default)]
    pub spread_pct_median: Option<f64>,

    #[serde(default)]
    pub stability_cv_1d: Option<f64>,
    #[serde(default)]
    pub stability_cv_7d: Option<f64>,
    #[serde(default)]
    pub stability_cv_30d: Option<f64>,
    #[serde(default)]
    pub stability_cv_1y: Option<f64>,

    pub score: f64,
}

/// Response of `POST /api/spreads/scan`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpreadsScanResponse {
    pub results: Vec<SpreadsScanResult>,
    #[serde(default)]
    pub meta: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let req = SpreadsScanRequest::default();
        assert_eq!(req.sort_by, SpreadSortBy::Score);
        assert_eq!(req.limit, 50);
        assert_eq!(req.stability_top_k, 150);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_sort_by_wire_literals() {
        assert_eq!(
            serde_json::to_string(&SpreadSortBy::SpreadPct).unwrap(),
            "\"spread_pct\""
        );
        assert_eq!(
            serde_json::to_string(&SpreadSortBy::Stability1y).unwrap(),
            "\"stability_1y\""
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut req = SpreadsScanRequest::default();
        req.stability_top_k = 5;
        assert!(req.validate().is_err());

        let mut req = SpreadsScanRequest::default();
        req.limit = 500;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_result_parses_with_sparse_stability() {
        let result: SpreadsScanResult = serde_json::from_str(
            r#"{
                "item_id": 561,
                "name": "Nature rune",
                "daily_volume_24h": 1200000,
                "spread_pct_median": 0.012,
                "score": 0.83
            }"#,
        )
        .unwrap();

        assert_eq!(result.item_id, ItemId::new(561));
        assert!(result.stability_cv_1y.is_none());
        assert_eq!(result.spread_pct_median, Some(0.012));
    }
}
