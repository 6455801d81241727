//! One cancellable series retrieval.

use tokio::sync::oneshot;

use crate::domain::series::Series;
use crate::http::MarketScanHttp;
use crate::shared::ItemId;

/// Terminal result of a fetch invocation — exactly one per call.
#[derive(Debug)]
pub enum FetchOutcome {
    /// 2xx response, parsed into a series.
    Series(Series),
    /// Transport failure or non-2xx status, as a display-ready message.
    Failed(String),
    /// Superseded before completion. Never surfaces to a chart.
    Cancelled,
}

/// Retrieves one item's series, racing the request against a cancellation
/// signal.
#[derive(Clone)]
pub struct SeriesFetcher {
    http: MarketScanHttp,
}

impl SeriesFetcher {
    pub fn new(http: MarketScanHttp) -> Self {
        Self { http }
    }

    /// Resolve to exactly one [`FetchOutcome`].
    ///
    /// Cancellation fires when the paired sender is used or dropped, and
    /// wins any tie against the response, so a cancelled call can never
    /// report data or an error.
    pub async fn fetch(
        &self,
        item_id: ItemId,
        hours: u32,
        mut cancel: oneshot::Receiver<()>,
    ) -> FetchOutcome {
        tokio::select! {
            biased;

            _ = &mut cancel => {
                tracing::debug!(item_id = %item_id, "series fetch cancelled");
                FetchOutcome::Cancelled
            }
            resp = self.http.get_item_series(item_id, hours) => match resp {
                Ok(wire) => FetchOutcome::Series(Series::from(wire)),
                Err(e) => FetchOutcome::Failed(e.to_string()),
            },
        }
    }
}
