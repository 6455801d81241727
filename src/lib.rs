//! # MarketScan SDK
//!
//! A Rust SDK for the MarketScan API: filtered market scans (the "dump" and
//! "spreads" detectors), per-item price series, and the sparkline geometry
//! the dashboard draws them with.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, wire types (pure, no I/O)
//! 2. **HTTP API** — `MarketScanHttp` with one method per endpoint
//! 3. **Chart engine** — Pure sparkline geometry (shared domain, projection,
//!    gap-aware paths) plus the fetch-driven `SparklineView` lifecycle
//! 4. **High-Level Client** — `MarketScanClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marketscan_sdk::prelude::*;
//!
//! let client = MarketScanClient::builder()
//!     .base_url("http://127.0.0.1:8000")
//!     .build()?;
//!
//! let dumps = client.scans().run(&ScanRequest::default()).await?;
//! let series = client.series().get(ItemId::new(4151), 24).await?;
//!
//! let mut chart = client.sparkline(Viewport::default());
//! chart.show(ItemId::new(4151), 24);
//! let state = chart.settled().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client, one method per endpoint.
pub mod http;

// ── Layer 3: Chart engine ────────────────────────────────────────────────────

/// Sparkline geometry and the chart fetch lifecycle.
pub mod chart;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `MarketScanClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::ItemId;

    // Domain types — series
    pub use crate::domain::series::{
        Band, Series, DEFAULT_WINDOW_HOURS, MAX_WINDOW_HOURS, MIN_WINDOW_HOURS,
    };

    // Domain types — scans
    pub use crate::domain::scan::{
        BaselineStat, EventPriceMode, ScanRequest, ScanResponse, ScanResult, SortBy, VolumeMode,
    };
    pub use crate::domain::spreads::{
        SpreadSortBy, SpreadsScanRequest, SpreadsScanResponse, SpreadsScanResult,
    };

    // Chart engine
    pub use crate::chart::{
        polyline, project, value_domain, ChartState, Domain, FetchOutcome, Point, Polyline,
        RenderedBand, SeriesFetcher, SparklineView, Viewport,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    pub use crate::client::{MarketScanClient, MarketScanClientBuilder};
    pub use crate::domain::scan::client::Scans;
    pub use crate::domain::series::client::SeriesClient;
    pub use crate::domain::spreads::client::Spreads;
    pub use crate::http::{HealthResponse, MarketScanHttp};
}
