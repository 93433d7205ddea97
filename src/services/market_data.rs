//! Market data provider interface.
//!
//! The engine only needs a bar series per symbol. Whether it comes from a
//! cache, a live feed or a fixture is up to the implementation.

use crate::models::bars::BarSeries;
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Bars for a symbol could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataUnavailable {
    #[error("no data for {0}")]
    NotFound(String),

    #[error("failed to read data for {symbol}: {reason}")]
    Read { symbol: String, reason: String },

    #[error("malformed data for {symbol}: {reason}")]
    Malformed { symbol: String, reason: String },
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get up to `lookback_bars` trailing daily bars for `symbol`.
    ///
    /// A provider with less history returns what it has; it never pads.
    async fn get_bar_series(
        &self,
        symbol: &str,
        lookback_bars: usize,
    ) -> Result<BarSeries, DataUnavailable>;
}

/// Provider backed by series held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketData {
    series: HashMap<String, BarSeries>,
}

impl InMemoryMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, series: BarSeries) -> Self {
        self.insert(series);
        self
    }

    pub fn insert(&mut self, series: BarSeries) {
        self.series.insert(series.symbol().to_string(), series);
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryMarketData {
    async fn get_bar_series(
        &self,
        symbol: &str,
        lookback_bars: usize,
    ) -> Result<BarSeries, DataUnavailable> {
        self.series
            .get(symbol)
            .map(|s| s.tail(lookback_bars))
            .ok_or_else(|| DataUnavailable::NotFound(symbol.to_string()))
    }
}
