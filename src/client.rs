//! High-level client — `MarketScanClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder and the accessor methods.

use crate::chart::{SparklineView, Viewport};
use crate::domain::scan::client::Scans;
use crate::domain::series::client::SeriesClient;
use crate::domain::spreads::client::Spreads;
use crate::error::SdkError;
use crate::http::{HealthResponse, MarketScanHttp};

/// The primary entry point for the MarketScan SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.scans()`, `client.series()`, etc.
#[derive(Clone)]
pub struct MarketScanClient {
    pub(crate) http: MarketScanHttp,
}

impl MarketScanClient {
    pub fn builder() -> MarketScanClientBuilder {
        MarketScanClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn series(&self) -> SeriesClient<'_> {
        SeriesClient { client: self }
    }

    pub fn scans(&self) -> Scans<'_> {
        Scans { client: self }
    }

    pub fn spreads(&self) -> Spreads<'_> {
        Spreads { client: self }
    }

    /// Create a sparkline view for one chart slot.
    ///
    /// Views are intentionally not embedded in `MarketScanClient`: each one
    /// owns a fetch lifecycle that is typically tied to a UI component, so
    /// the application decides how many exist and how long they live.
    pub fn sparkline(&self, viewport: Viewport) -> SparklineView {
        SparklineView::new(self.http.clone(), viewport)
    }

    /// Probe the backend's health endpoint.
    pub async fn health(&self) -> Result<HealthResponse, SdkError> {
        Ok(self.http.get_health().await?)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MarketScanClientBuilder {
    base_url: String,
}

impl Default for MarketScanClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
        }
    }
}

impl MarketScanClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> Result<MarketScanClient, SdkError> {
        Ok(MarketScanClient {
            http: MarketScanHttp::new(&self.base_url),
        })
    }
}
