//! Series sub-client — per-item price series queries.

use crate::client::MarketScanClient;
use crate::domain::series::{Series, MAX_WINDOW_HOURS, MIN_WINDOW_HOURS};
use crate::error::SdkError;
use crate::shared::ItemId;

/// Sub-client for series operations.
pub struct SeriesClient<'a> {
    pub(crate) client: &'a MarketScanClient,
}

impl<'a> SeriesClient<'a> {
    /// Fetch the fixed-step series for `item_id` covering the trailing
    /// `hours` window.
    pub async fn get(&self, item_id: ItemId, hours: u32) -> Result<Series, SdkError> {
        if !(MIN_WINDOW_HOURS..=MAX_WINDOW_HOURS).contains(&hours) {
            return Err(SdkError::Validation(format!(
                "hours must be within {MIN_WINDOW_HOURS}..={MAX_WINDOW_HOURS}, got {hours}"
            )));
        }

        let resp = self.client.http.get_item_series(item_id, hours).await?;
        Ok(Series::from(resp))
    }
}
