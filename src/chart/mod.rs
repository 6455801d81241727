//! Sparkline chart engine.
//!
//! Turns a fetched, possibly-gappy series into renderable 2D polylines:
//!
//! - `scale` — one shared min/max domain across all overlaid bands
//! - `project` — (value, index) → pixel coordinates
//! - `path` — gap-aware polyline assembly
//! - `fetch` — one cancellable series retrieval
//! - `view` — the loading/ready/error lifecycle driving all of the above
//!
//! Everything except `fetch` and `view` is pure and synchronous.

pub mod fetch;
pub mod path;
pub mod project;
pub mod scale;
pub mod view;

pub use fetch::{FetchOutcome, SeriesFetcher};
pub use path::{polyline, Polyline};
pub use project::{project, Point, Viewport};
pub use scale::{value_domain, Domain};
pub use view::{render, ChartState, RenderedBand, SparklineView};
