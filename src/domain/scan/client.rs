//! Scan sub-client — dump-detector queries.

use crate::client::MarketScanClient;
use crate::domain::scan::wire::{ScanRequest, ScanResponse};
use crate::error::SdkError;

/// Sub-client for dump-scan operations.
pub struct Scans<'a> {
    pub(crate) client: &'a MarketScanClient,
}

impl<'a> Scans<'a> {
    /// Run a dump scan with the given filter configuration.
    pub async fn run(&self, request: &ScanRequest) -> Result<ScanResponse, SdkError> {
        request.validate().map_err(SdkError::Validation)?;
        Ok(self.client.http.scan(request).await?)
    }
}
