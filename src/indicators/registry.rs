//! Indicator registry: category and lookback of each indicator

use crate::config::{IndicatorConfig, VwapWindow};
use crate::models::indicators::IndicatorKind;

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorCategory {
    Momentum,
    Trend,
    Volume,
    Price,
}

pub struct IndicatorRegistry;

impl IndicatorRegistry {
    pub fn category(kind: IndicatorKind) -> IndicatorCategory {
        match kind {
            IndicatorKind::Rsi | IndicatorKind::Mfi => IndicatorCategory::Momentum,
            IndicatorKind::Sma200 | IndicatorKind::Vwap => IndicatorCategory::Trend,
            IndicatorKind::Rvol
            | IndicatorKind::MaxRvol
            | IndicatorKind::Cmf
            | IndicatorKind::Volume
            | IndicatorKind::AvgVolume => IndicatorCategory::Volume,
            IndicatorKind::Close => IndicatorCategory::Price,
        }
    }

    /// Minimum number of bars for `kind` to be defined under `config`.
    ///
    /// `MaxRvol` counts the bars for every RVOL in its peak window to be
    /// defined, not just the latest.
    pub fn lookback(kind: IndicatorKind, config: &IndicatorConfig) -> usize {
        match kind {
            IndicatorKind::Rvol => config.rvol_period + 1,
            IndicatorKind::MaxRvol => config.rvol_period + config.peak_rvol_window,
            IndicatorKind::Cmf => config.cmf_period,
            IndicatorKind::Mfi => config.mfi_period + 1,
            IndicatorKind::Rsi => config.rsi_period + 1,
            IndicatorKind::Sma200 => config.sma_period,
            IndicatorKind::Vwap => match config.vwap {
                VwapWindow::Rolling(n) => n,
                VwapWindow::Session => 1,
            },
            IndicatorKind::AvgVolume => config.liquidity_period,
            IndicatorKind::Close | IndicatorKind::Volume => 1,
        }
    }

    /// Get all indicators
    pub fn all() -> Vec<IndicatorKind> {
        vec![
            IndicatorKind::Rvol,
            IndicatorKind::MaxRvol,
            IndicatorKind::Cmf,
            IndicatorKind::Mfi,
            IndicatorKind::Vwap,
            IndicatorKind::Sma200,
            IndicatorKind::Rsi,
            IndicatorKind::Close,
            IndicatorKind::Volume,
            IndicatorKind::AvgVolume,
        ]
    }
}
