//! Computes the full indicator set for a bar series.

use crate::common::math;
use crate::config::IndicatorConfig;
use crate::indicators::columns::{BarColumns, BarView};
use crate::indicators::momentum::{relative_strength_index, relative_strength_index_series};
use crate::indicators::volatility::calculate_bollinger_bands;
use crate::indicators::volume::{
    average_volume, chaikin_money_flow, money_flow_index, peak_relative_volume, relative_volume,
    volume_weighted_average_price, volume_weighted_average_price_series,
};
use crate::models::bars::BarSeries;
use crate::models::indicators::{IndicatorFrame, IndicatorVector};

pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Indicator values for the latest bar of `series`.
    pub fn compute(series: &BarSeries, config: &IndicatorConfig) -> IndicatorVector {
        let columns = BarColumns::from_bars(series.bars());
        Self::compute_view(&columns.view(), config)
    }

    fn compute_view(view: &BarView<'_>, config: &IndicatorConfig) -> IndicatorVector {
        IndicatorVector {
            rvol: relative_volume(view.volume, config.rvol_period),
            max_rvol: peak_relative_volume(
                view.volume,
                config.rvol_period,
                config.peak_rvol_window,
            ),
            cmf: chaikin_money_flow(view, config.cmf_period),
            mfi: money_flow_index(view, config.mfi_period),
            vwap: volume_weighted_average_price(view, config.vwap),
            sma200: math::sma(view.close, config.sma_period),
            rsi: relative_strength_index(view.close, config.rsi_period),
            close: view.close.last().copied().and_then(math::finite),
            volume: view.volume.last().copied().and_then(math::finite),
            avg_volume: average_volume(view.volume, config.liquidity_period),
            bar_count: view.len(),
        }
    }

    /// Per-bar indicator columns for the chart panels.
    ///
    /// Entry `i` of each column equals what [`IndicatorEngine::compute`]
    /// would report had the series ended at bar `i`. RSI and session VWAP
    /// carry their state forward; windowed indicators read only their own
    /// trailing window at each bar.
    pub fn frame(series: &BarSeries, config: &IndicatorConfig) -> IndicatorFrame {
        let columns = BarColumns::from_bars(series.bars());
        let view = columns.view();
        let n = view.len();
        let mut frame = IndicatorFrame {
            symbol: series.symbol().to_string(),
            timestamps: series.bars().iter().map(|b| b.timestamp).collect(),
            close: columns.close.clone(),
            vwap: volume_weighted_average_price_series(&view, config.vwap),
            rsi: relative_strength_index_series(view.close, config.rsi_period),
            ..IndicatorFrame::default()
        };
        frame.sma200.reserve(n);
        frame.cmf.reserve(n);
        frame.rvol.reserve(n);
        frame.bollinger_upper.reserve(n);
        frame.bollinger_lower.reserve(n);

        for end in 1..=n {
            let prefix = view.prefix(end);
            let bands = calculate_bollinger_bands(
                prefix.close,
                config.bollinger_period,
                config.bollinger_std_dev,
            );

            frame.sma200.push(math::sma(prefix.close, config.sma_period));
            frame.cmf.push(chaikin_money_flow(&prefix, config.cmf_period));
            frame.rvol.push(relative_volume(prefix.volume, config.rvol_period));
            frame.bollinger_upper.push(bands.map(|b| b.upper));
            frame.bollinger_lower.push(bands.map(|b| b.lower));
        }

        frame
    }
}
