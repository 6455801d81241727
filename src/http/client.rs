//! Low-level HTTP client — `MarketScanHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary). Internal to the SDK — the
//! high-level client wraps this.
//!
//! Requests are single-shot: a failed scan or series fetch stays failed
//! until the caller issues a new one. There is no retry layer.

use crate::domain::scan::wire::{ScanRequest, ScanResponse};
use crate::domain::series::wire::SeriesResponse;
use crate::domain::spreads::wire::{SpreadsScanRequest, SpreadsScanResponse};
use crate::error::HttpError;
use crate::shared::ItemId;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Health probe response of `GET /api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Low-level HTTP client for the MarketScan REST API.
#[derive(Clone)]
pub struct MarketScanHttp {
    base_url: String,
    client: Client,
}

impl MarketScanHttp {
    pub fn new(base_url: &str) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Series ───────────────────────────────────────────────────────────

    /// Fixed-step price series for one item over the trailing `hours` window.
    pub async fn get_item_series(
        &self,
        item_id: ItemId,
        hours: u32,
    ) -> Result<SeriesResponse, HttpError> {
        let url = format!(
            "{}/api/items/{}/series?hours={}",
            self.base_url, item_id, hours
        );
        self.get(&url).await
    }

    // ── Scans ────────────────────────────────────────────────────────────

    pub async fn scan(&self, request: &ScanRequest) -> Result<ScanResponse, HttpError> {
        let url = format!("{}/api/scan", self.base_url);
        self.post(&url, request).await
    }

    pub async fn spreads_scan(
        &self,
        request: &SpreadsScanRequest,
    ) -> Result<SpreadsScanResponse, HttpError> {
        let url = format!("{}/api/spreads/scan", self.base_url);
        self.post(&url, request).await
    }

    // ── Health ───────────────────────────────────────────────────────────

    pub async fn get_health(&self) -> Result<HealthResponse, HttpError> {
        let url = format!("{}/api/health", self.base_url);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::GET, url, None::<&()>).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::POST, url, Some(body)).await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method, url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let body_text = resp.text().await.unwrap_or_default();
        Err(HttpError::Status {
            status: status.as_u16(),
            body: body_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let http = MarketScanHttp::new("http://localhost:8000/");
        assert_eq!(http.base_url(), "http://localhost:8000");
    }
}
