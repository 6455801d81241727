//! Sparkline view lifecycle — loading, ready, error.

use tokio::sync::{mpsc, oneshot};

use crate::domain::series::Series;
use crate::http::MarketScanHttp;
use crate::shared::ItemId;

use super::fetch::{FetchOutcome, SeriesFetcher};
use super::path::{polyline, Polyline};
use super::project::Viewport;
use super::scale::{value_domain, Domain};

/// One band of a ready chart, paired with its renderable path.
#[derive(Debug, Clone)]
pub struct RenderedBand {
    pub name: String,
    /// `None` when the band has fewer than 2 finite samples: that band
    /// draws nothing, the chart stays ready.
    pub path: Option<Polyline>,
}

/// Observable chart state.
#[derive(Debug)]
pub enum ChartState {
    Idle,
    Loading,
    Ready {
        series: Series,
        /// Shared scale across all bands; `None` degenerates to an empty
        /// chart that is still a valid, silent ready state.
        domain: Option<Domain>,
        bands: Vec<RenderedBand>,
    },
    Error(String),
}

/// Project every band of `series` against one shared domain.
pub fn render(series: &Series, viewport: &Viewport) -> (Option<Domain>, Vec<RenderedBand>) {
    let domain = value_domain(series.bands.iter().map(|b| b.values.as_slice()));

    let bands = series
        .bands
        .iter()
        .map(|band| RenderedBand {
            name: band.name.clone(),
            path: domain
                .as_ref()
                .and_then(|d| polyline(&band.values, d, viewport)),
        })
        .collect();

    (domain, bands)
}

/// Drives one sparkline: a cancellable fetch per subject/window selection,
/// folded into a [`ChartState`].
///
/// Each view owns its whole lifecycle — fetch, series, domain, paths. There
/// is no cross-view cache; two charts showing the same item fetch
/// independently.
pub struct SparklineView {
    fetcher: SeriesFetcher,
    viewport: Viewport,
    state: ChartState,
    /// Bumped on every `show`; outcomes tagged with an older value are
    /// stale and can never touch `state`.
    generation: u64,
    cancel: Option<oneshot::Sender<()>>,
    outcome_tx: mpsc::Sender<(u64, FetchOutcome)>,
    outcome_rx: mpsc::Receiver<(u64, FetchOutcome)>,
}

impl SparklineView {
    pub fn new(http: MarketScanHttp, viewport: Viewport) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel(8);
        Self {
            fetcher: SeriesFetcher::new(http),
            viewport,
            state: ChartState::Idle,
            generation: 0,
            cancel: None,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Switch the chart to a new subject/window.
    ///
    /// Cancels any in-flight fetch first; whatever the superseded fetch
    /// eventually resolves to is discarded.
    pub fn show(&mut self, item_id: ItemId, hours: u32) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }

        self.generation += 1;
        self.state = ChartState::Loading;

        let (cancel_tx, cancel_rx) = oneshot::channel();
        self.cancel = Some(cancel_tx);

        let generation = self.generation;
        let fetcher = self.fetcher.clone();
        let outcome_tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = fetcher.fetch(item_id, hours, cancel_rx).await;
            // The view may be gone by now; then there is nobody to tell.
            let _ = outcome_tx.send((generation, outcome)).await;
        });
    }

    /// Wait until the current fetch settles and return the resulting state.
    ///
    /// Stale and cancelled outcomes are swallowed along the way; only the
    /// newest generation can move the chart out of `Loading`.
    pub async fn settled(&mut self) -> &ChartState {
        // Sweep anything already delivered, stale completions included.
        while let Ok((generation, outcome)) = self.outcome_rx.try_recv() {
            self.apply(generation, outcome);
        }

        while matches!(self.state, ChartState::Loading) {
            // The view holds its own sender, so recv cannot return None.
            let Some((generation, outcome)) = self.outcome_rx.recv().await else {
                break;
            };
            self.apply(generation, outcome);
        }

        &self.state
    }

    fn apply(&mut self, generation: u64, outcome: FetchOutcome) {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding superseded fetch outcome"
            );
            return;
        }

        match outcome {
            FetchOutcome::Cancelled => {}
            FetchOutcome::Failed(message) => {
                self.cancel = None;
                self.state = ChartState::Error(message);
            }
            FetchOutcome::Series(series) => {
                self.cancel = None;
                let (domain, bands) = render(&series, &self.viewport);
                self.state = ChartState::Ready {
                    series,
                    domain,
                    bands,
                };
            }
        }
    }
}

impl Drop for SparklineView {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::Band;

    fn series_two_bands() -> Series {
        Series {
            item_id: ItemId::new(4151),
            timestep_seconds: 300,
            start_ts: 0,
            end_ts: 300,
            timestamps: vec![0, 300],
            bands: vec![
                Band {
                    name: "avg_low".into(),
                    values: vec![Some(10.0), Some(20.0)],
                },
                Band {
                    name: "avg_high".into(),
                    values: vec![Some(30.0), None],
                },
            ],
        }
    }

    fn idle_view() -> SparklineView {
        SparklineView::new(MarketScanHttp::new("http://127.0.0.1:9"), Viewport::default())
    }

    #[test]
    fn test_render_shares_one_scale_across_bands() {
        let (domain, bands) = render(&series_two_bands(), &Viewport::default());

        let domain = domain.unwrap();
        assert_eq!(domain.min, 10.0);
        assert_eq!(domain.max, 30.0);

        // avg_low has 2 finite samples → a path; avg_high only 1 → none,
        // without downgrading anything else.
        assert_eq!(bands.len(), 2);
        let low = bands.iter().find(|b| b.name == "avg_low").unwrap();
        let high = bands.iter().find(|b| b.name == "avg_high").unwrap();
        assert_eq!(low.path.as_ref().unwrap().points().len(), 2);
        assert!(high.path.is_none());
    }

    #[test]
    fn test_render_without_domain_is_empty_but_ready() {
        let mut series = series_two_bands();
        for band in &mut series.bands {
            band.values = vec![None, None];
        }

        let (domain, bands) = render(&series, &Viewport::default());
        assert!(domain.is_none());
        assert!(bands.iter().all(|b| b.path.is_none()));
    }

    #[tokio::test]
    async fn test_stale_outcome_never_touches_state() {
        let mut view = idle_view();
        view.generation = 2;
        view.state = ChartState::Loading;

        // Generation 1 resolving late with real data must be discarded.
        view.apply(1, FetchOutcome::Series(series_two_bands()));
        assert!(matches!(view.state, ChartState::Loading));

        view.apply(1, FetchOutcome::Failed("HTTP 500".into()));
        assert!(matches!(view.state, ChartState::Loading));
    }

    #[tokio::test]
    async fn test_cancelled_outcome_never_touches_state() {
        let mut view = idle_view();
        view.generation = 1;
        view.state = ChartState::Loading;

        view.apply(1, FetchOutcome::Cancelled);
        assert!(matches!(view.state, ChartState::Loading));
    }

    #[tokio::test]
    async fn test_current_outcome_moves_to_ready() {
        let mut view = idle_view();
        view.generation = 3;
        view.state = ChartState::Loading;

        view.apply(3, FetchOutcome::Series(series_two_bands()));
        match &view.state {
            ChartState::Ready { series, bands, .. } => {
                assert_eq!(series.item_id, ItemId::new(4151));
                assert_eq!(bands.len(), 2);
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_outcome_moves_to_error() {
        let mut view = idle_view();
        view.generation = 1;
        view.state = ChartState::Loading;

        view.apply(1, FetchOutcome::Failed("HTTP 404: item not found".into()));
        match &view.state {
            ChartState::Error(message) => assert!(message.starts_with("HTTP 404")),
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_error_surfaces() {
        // Nothing listens on port 9, so the fetch fails fast.
        let mut view = idle_view();
        view.show(ItemId::new(1), 24);

        match view.settled().await {
            ChartState::Error(message) => assert!(!message.is_empty()),
            other => panic!("expected Error, got {other:?}"),
        }
    }
}
