use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names the scalar fields of an [`IndicatorVector`] so rules can refer to
/// them as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndicatorKind {
    Rvol,
    MaxRvol,
    Cmf,
    Mfi,
    Vwap,
    Sma200,
    Rsi,
    Close,
    Volume,
    AvgVolume,
}

impl IndicatorKind {
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Rvol => "RVOL",
            IndicatorKind::MaxRvol => "MAX_RVOL",
            IndicatorKind::Cmf => "CMF",
            IndicatorKind::Mfi => "MFI",
            IndicatorKind::Vwap => "VWAP",
            IndicatorKind::Sma200 => "SMA200",
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::Close => "close",
            IndicatorKind::Volume => "volume",
            IndicatorKind::AvgVolume => "avg_volume",
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Indicator values for the latest bar of a series.
///
/// `None` marks an indicator that could not be computed (too little
/// history, zero volume, non-finite arithmetic). Consumers must treat it as
/// failing any comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorVector {
    pub rvol: Option<f64>,
    /// Highest RVOL over the recent peak window, latest bar included.
    pub max_rvol: Option<f64>,
    pub cmf: Option<f64>,
    pub mfi: Option<f64>,
    pub vwap: Option<f64>,
    pub sma200: Option<f64>,
    pub rsi: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    pub avg_volume: Option<f64>,
    pub bar_count: usize,
}

impl IndicatorVector {
    pub fn get(&self, kind: IndicatorKind) -> Option<f64> {
        match kind {
            IndicatorKind::Rvol => self.rvol,
            IndicatorKind::MaxRvol => self.max_rvol,
            IndicatorKind::Cmf => self.cmf,
            IndicatorKind::Mfi => self.mfi,
            IndicatorKind::Vwap => self.vwap,
            IndicatorKind::Sma200 => self.sma200,
            IndicatorKind::Rsi => self.rsi,
            IndicatorKind::Close => self.close,
            IndicatorKind::Volume => self.volume,
            IndicatorKind::AvgVolume => self.avg_volume,
        }
    }

    pub fn with(mut self, kind: IndicatorKind, value: Option<f64>) -> Self {
        let slot = match kind {
            IndicatorKind::Rvol => &mut self.rvol,
            IndicatorKind::MaxRvol => &mut self.max_rvol,
            IndicatorKind::Cmf => &mut self.cmf,
            IndicatorKind::Mfi => &mut self.mfi,
            IndicatorKind::Vwap => &mut self.vwap,
            IndicatorKind::Sma200 => &mut self.sma200,
            IndicatorKind::Rsi => &mut self.rsi,
            IndicatorKind::Close => &mut self.close,
            IndicatorKind::Volume => &mut self.volume,
            IndicatorKind::AvgVolume => &mut self.avg_volume,
        };
        *slot = value.filter(|v| v.is_finite());
        self
    }

    pub fn with_bar_count(mut self, bar_count: usize) -> Self {
        self.bar_count = bar_count;
        self
    }
}

/// Per-bar indicator columns for charting one ticker.
///
/// Every column has one entry per bar; entries before an indicator's
/// lookback is satisfied are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorFrame {
    pub symbol: String,
    pub timestamps: Vec<DateTime<Utc>>,
    pub close: Vec<f64>,
    pub sma200: Vec<Option<f64>>,
    pub vwap: Vec<Option<f64>>,
    pub bollinger_upper: Vec<Option<f64>>,
    pub bollinger_lower: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub cmf: Vec<Option<f64>>,
    pub rvol: Vec<Option<f64>>,
}

impl IndicatorFrame {
    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Keep only the last `count` bars.
    pub fn tail(mut self, count: usize) -> Self {
        let start = self.len().saturating_sub(count);
        self.timestamps.drain(..start);
        self.close.drain(..start);
        for column in [
            &mut self.sma200,
            &mut self.vwap,
            &mut self.bollinger_upper,
            &mut self.bollinger_lower,
            &mut self.rsi,
            &mut self.cmf,
            &mut self.rvol,
        ] {
            column.drain(..start);
        }
        self
    }
}
