//! Spreads sub-client — spread/stability ranking queries.

use crate::client::MarketScanClient;
use crate::domain::spreads::wire::{SpreadsScanRequest, SpreadsScanResponse};
use crate::error::SdkError;

/// Sub-client for spreads-scan operations.
pub struct Spreads<'a> {
    pub(crate) client: &'a MarketScanClient,
}

impl<'a> Spreads<'a> {
    /// Run a spreads scan with the given filter configuration.
    pub async fn run(&self, request: &SpreadsScanRequest) -> Result<SpreadsScanResponse, SdkError> {
        request.validate().map_err(SdkError::Validation)?;
        Ok(self.client.http.spreads_scan(request).await?)
    }
}
