//! Item price series domain — fixed-step, gap-carrying time series.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::ItemId;

/// Smallest trailing window the backend accepts, in hours.
pub const MIN_WINDOW_HOURS: u32 = 1;
/// Largest trailing window the backend accepts, in hours.
pub const MAX_WINDOW_HOURS: u32 = 48;
/// Window the dashboard uses when the caller does not pick one.
pub const DEFAULT_WINDOW_HOURS: u32 = 24;

/// One named value array of a series, timestamp-aligned with its siblings.
///
/// `None` marks a bucket with no trades. Absence is a first-class sample,
/// not an error — a rendered line skips over it.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl Band {
    /// Number of buckets holding a finite sample.
    pub fn finite_count(&self) -> usize {
        self.values
            .iter()
            .filter(|v| matches!(v, Some(x) if x.is_finite()))
            .count()
    }
}

/// A fetched price series for one item over one trailing window.
///
/// Every band has the same length as `timestamps`. A series lives for one
/// subject/window selection only; changing either discards it wholesale and
/// fetches anew — there is no merging of old and new data.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub item_id: ItemId,
    /// Bucket width in seconds.
    pub timestep_seconds: u32,
    /// Inclusive window bounds, unix seconds.
    pub start_ts: i64,
    pub end_ts: i64,
    /// Bucket start times, ascending, fixed step.
    pub timestamps: Vec<i64>,
    pub bands: Vec<Band>,
}

impl Series {
    /// Number of time buckets.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Look up a band by its wire name (e.g. `"avg_low"`).
    pub fn band(&self, name: &str) -> Option<&Band> {
        self.bands.iter().find(|b| b.name == name)
    }
}
