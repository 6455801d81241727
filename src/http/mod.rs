//! HTTP client layer — `MarketScanHttp`, one method per endpoint.

pub mod client;

pub use client::{HealthResponse, MarketScanHttp};
