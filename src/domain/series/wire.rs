//! Wire types for the per-item series endpoint.

use crate::shared::ItemId;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw response of `GET /api/items/{id}/series`.
///
/// The backend keys each value array by a field name (`avg_low`, optionally
/// `avg_high`, …) next to the header fields. The set of names is not fixed,
/// so everything beyond the header is captured as-is and sifted into bands
/// during conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesResponse {
    pub item_id: ItemId,
    pub timestep_seconds: u32,
    pub start_ts: i64,
    pub end_ts: i64,
    pub timestamps: Vec<i64>,
    #[serde(flatten)]
    pub values: BTreeMap<String, serde_json::Value>,
}
