//! Provider reading `<dir>/<SYMBOL>.json` files.
//!
//! Each file holds a JSON array of bars:
//! `[{"timestamp": "2024-01-02T00:00:00Z", "open": 1.0, "high": 1.0,
//!   "low": 1.0, "close": 1.0, "volume": 100.0}, ...]`

use crate::models::bars::{Bar, BarSeries};
use crate::services::market_data::{DataUnavailable, MarketDataProvider};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct JsonDirectoryMarketData {
    root: PathBuf,
}

impl JsonDirectoryMarketData {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, symbol: &str) -> PathBuf {
        self.root.join(format!("{symbol}.json"))
    }
}

#[async_trait]
impl MarketDataProvider for JsonDirectoryMarketData {
    async fn get_bar_series(
        &self,
        symbol: &str,
        lookback_bars: usize,
    ) -> Result<BarSeries, DataUnavailable> {
        let path = self.path_for(symbol);
        debug!(symbol = %symbol, path = %path.display(), "reading bars");

        let raw = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => DataUnavailable::NotFound(symbol.to_string()),
            _ => DataUnavailable::Read {
                symbol: symbol.to_string(),
                reason: e.to_string(),
            },
        })?;

        let bars: Vec<Bar> =
            serde_json::from_slice(&raw).map_err(|e| DataUnavailable::Malformed {
                symbol: symbol.to_string(),
                reason: e.to_string(),
            })?;

        let series = BarSeries::new(symbol, bars).map_err(|e| DataUnavailable::Malformed {
            symbol: symbol.to_string(),
            reason: e.to_string(),
        })?;

        Ok(series.tail(lookback_bars))
    }
}
