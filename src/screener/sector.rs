//! Sector screener: runs the per-ticker pipeline over a universe.

use crate::config::ScreenerConfig;
use crate::error::ScreenError;
use crate::indicators::IndicatorEngine;
use crate::models::indicators::IndicatorFrame;
use crate::models::screen::{ScreenResult, TickerRecord};
use crate::screener::cancel::CancelToken;
use crate::screener::universe::{ScanItem, ScanScope, SectorUniverse};
use crate::services::market_data::{DataUnavailable, MarketDataProvider};
use crate::signals::engine::{SignalEngine, TickerOutcome};
use futures_util::future;
use futures_util::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct SectorScreener {
    provider: Arc<dyn MarketDataProvider>,
    config: ScreenerConfig,
}

impl SectorScreener {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: ScreenerConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &ScreenerConfig {
        &self.config
    }

    /// Screen every ticker the scope selects.
    ///
    /// Configuration problems fail the whole pass before any fetch. Bad
    /// tickers never do: they come back as rejections.
    pub async fn screen(
        &self,
        universe: &SectorUniverse,
        scope: &ScanScope,
        cancel: &CancelToken,
    ) -> Result<ScreenResult, ScreenError> {
        self.config.validate()?;
        let items = universe.resolve(scope)?;
        if items.is_empty() {
            return Err(ScreenError::EmptySelection);
        }

        let start = Instant::now();
        let lookback = self.config.required_lookback();
        let concurrency = self.config.concurrency;
        info!(
            tickers = items.len(),
            concurrency = concurrency,
            lookback = lookback,
            "SectorScreener: starting pass over {} tickers",
            items.len()
        );

        let outcomes = if concurrency == 1 {
            let mut outcomes = Vec::with_capacity(items.len());
            for item in &items {
                if cancel.is_cancelled() {
                    break;
                }
                outcomes.push(self.run_ticker(item, lookback).await);
            }
            outcomes
        } else {
            stream::iter(items.iter())
                .take_while(|_| future::ready(!cancel.is_cancelled()))
                .map(|item| self.run_ticker(item, lookback))
                .buffer_unordered(concurrency)
                .collect::<Vec<_>>()
                .await
        };

        let result = merge_outcomes(outcomes, items.len());
        info!(
            ranked = result.ranked.len(),
            rejected = result.rejected.len(),
            skipped = result.skipped,
            cancelled = result.cancelled,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "SectorScreener: pass finished"
        );
        Ok(result)
    }

    /// Fetch and evaluate one ticker. Never fails: fetch errors become a
    /// `DATA_UNAVAILABLE` rejection.
    async fn run_ticker(&self, item: &ScanItem, lookback: usize) -> (usize, TickerOutcome) {
        let outcome = match self.provider.get_bar_series(&item.symbol, lookback).await {
            Ok(series) => SignalEngine::evaluate(&series, &item.sector, &self.config),
            Err(e) => {
                warn!(symbol = %item.symbol, error = %e, "SectorScreener: data unavailable");
                TickerOutcome::unavailable(&item.symbol, &item.sector, e.to_string())
            }
        };

        match &outcome {
            TickerOutcome::Scored(record) => debug!(
                symbol = %item.symbol,
                stars = record.score.stars,
                "SectorScreener: scored {}",
                item.symbol
            ),
            TickerOutcome::Rejected(rejection) => debug!(
                symbol = %item.symbol,
                reason = %rejection.reason,
                "SectorScreener: rejected {}",
                item.symbol
            ),
        }

        (item.index, outcome)
    }

    /// Per-bar indicator columns for one symbol's chart.
    ///
    /// Fetches the indicator lookback on top of the display window so the
    /// displayed bars have their long indicators defined, then keeps only
    /// the last `chart_window` bars.
    pub async fn chart(&self, symbol: &str) -> Result<IndicatorFrame, DataUnavailable> {
        let series = self
            .provider
            .get_bar_series(symbol, self.config.chart_lookback())
            .await?;
        debug!(
            symbol = %symbol,
            bars = series.len(),
            "SectorScreener: charting {}",
            symbol
        );
        Ok(IndicatorEngine::frame(&series, &self.config.indicators)
            .tail(self.config.indicators.chart_window))
    }
}

/// Merge per-ticker outcomes into a ranked result.
///
/// The order of `outcomes` does not matter: rejections are put back in scan
/// order and scored tickers are sorted by (stars desc, RVOL desc, symbol
/// asc). Only a pass that skipped tickers is reported as cancelled.
pub fn merge_outcomes(mut outcomes: Vec<(usize, TickerOutcome)>, total: usize) -> ScreenResult {
    outcomes.sort_by_key(|(index, _)| *index);
    let scanned = outcomes.len();

    let mut ranked: Vec<TickerRecord> = Vec::new();
    let mut rejected = Vec::new();
    for (_, outcome) in outcomes {
        match outcome {
            TickerOutcome::Scored(record) => ranked.push(record),
            TickerOutcome::Rejected(rejection) => rejected.push(rejection),
        }
    }
    ranked.sort_by(|a, b| a.rank_cmp(b));

    let skipped = total.saturating_sub(scanned);
    ScreenResult {
        ranked,
        rejected,
        cancelled: skipped > 0,
        scanned,
        skipped,
    }
}
