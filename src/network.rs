//! Network URL constants for the MarketScan SDK.

/// Default REST API base URL (a locally run scanner backend).
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
