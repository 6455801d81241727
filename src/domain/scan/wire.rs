//! Wire types for the dump-detector scan endpoint.
//!
//! Field names, defaults, and range constraints mirror the backend's request
//! schema; `ScanRequest::default()` is the scan the dashboard runs before
//! the user touches any filter.

use crate::shared::ItemId;
use serde::{Deserialize, Serialize};

/// Statistic used to summarize the baseline window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineStat {
    Mean,
    #[default]
    Median,
}

/// How the event-window price is summarized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventPriceMode {
    #[default]
    Min,
    Mean,
}

/// How the event-volume threshold is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeMode {
    Absolute,
    #[default]
    RelativeToBaseline,
}

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    BiggestDrop,
    MostRecent,
    BiggestVolume,
}

/// Filter configuration for `POST /api/scan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub baseline_hours: u32,
    pub event_window_blocks: u32,
    pub still_low_blocks: u32,

    pub baseline_stat: BaselineStat,
    pub event_price_mode: EventPriceMode,

    pub min_drop_pct: f64,

    pub volume_mode: VolumeMode,
    pub min_event_volume: u64,
    pub volume_multiplier: f64,

    pub still_low_pct: f64,

    // Counts of buckets with a finite low price; they keep sparsely traded
    // items from producing junk baselines.
    pub min_valid_baseline_price_points: u32,
    pub min_valid_event_price_points: u32,
    pub min_valid_still_low_price_points: u32,

    // Optional item filters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_buy_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_buy_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,

    pub sort_by: SortBy,
    pub limit: u32,
}

impl Default for ScanRequest {
    fn default() -> Self {
        Self {
            baseline_hours: 6,
            event_window_blocks: 1,
            still_low_blocks: 3,
            baseline_stat: BaselineStat::default(),
            event_price_mode: EventPriceMode::default(),
            min_drop_pct: 0.07,
            volume_mode: VolumeMode::default(),
            min_event_volume: 0,
            volume_multiplier: 3.0,
            still_low_pct: 0.05,
            min_valid_baseline_price_points: 12,
            min_valid_event_price_points: 1,
            min_valid_still_low_price_points: 1,
            min_buy_limit: None,
            max_buy_limit: None,
            min_price: None,
            max_price: None,
            sort_by: SortBy::default(),
            limit: 100,
        }
    }
}

impl ScanRequest {
    /// Client-side mirror of the backend's range constraints, so an
    /// out-of-range filter fails before a request is spent on it.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=30).contains(&self.baseline_hours) {
            return Err(format!(
                "baseline_hours must be within 1..=30, got {}",
                self.baseline_hours
            ));
        }
        if !(1..=12).contains(&self.event_window_blocks) {
            return Err(format!(
                "event_window_blocks must be within 1..=12, got {}",
                self.event_window_blocks
            ));
        }
        if self.still_low_blocks > 36 {
            return Err(format!(
                "still_low_blocks must be at most 36, got {}",
                self.still_low_blocks
            ));
        }
        if !(0.0..=0.95).contains(&self.min_drop_pct) {
            return Err(format!(
                "min_drop_pct must be within 0.0..=0.95, got {}",
                self.min_drop_pct
            ));
        }
        if !(0.0..=0.95).contains(&self.still_low_pct) {
            return Err(format!(
                "still_low_pct must be within 0.0..=0.95, got {}",
                self.still_low_pct
            ));
        }
        if self.volume_multiplier < 0.0 {
            return Err(format!(
                "volume_multiplier must be non-negative, got {}",
                self.volume_multiplier
            ));
        }
        if !(1..=500).contains(&self.limit) {
            return Err(format!("limit must be within 1..=500, got {}", self.limit));
        }
        Ok(())
    }
}

/// One flagged item from a dump scan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScanResult {
    pub item_id: ItemId,
    pub name: String,
    /// Start of the bucket the dump was detected in, unix seconds.
    pub dump_bucket_ts: i64,

    pub baseline_price: f64,
    pub event_price: f64,
    pub price_drop_pct: f64,

    pub event_volume: i64,
    #[serde(default)]
    pub baseline_mean_5m_volume: Option<f64>,

    pub still_low: bool,
    #[serde(default)]
    pub latest_price: Option<f64>,
}

/// Response of `POST /api/scan`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanResponse {
    pub results: Vec<ScanResult>,
    #[serde(default)]
    pub meta: serde_json::Map<String, serde_json::Value>,
}
