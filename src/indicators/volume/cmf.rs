//! CMF (Chaikin Money Flow) indicator

use crate::indicators::columns::{BarColumns, BarView};
use crate::models::bars::Bar;

/// Money flow multiplier `((close - low) - (high - close)) / (high - low)`.
///
/// Zero when the bar has no range.
pub fn money_flow_multiplier(high: f64, low: f64, close: f64) -> f64 {
    let range = high - low;
    if range > 0.0 {
        ((close - low) - (high - close)) / range
    } else {
        0.0
    }
}

/// Sum of money flow volume over the trailing `period` bars divided by the
/// sum of volume over the same bars, clamped to [-1, 1].
pub fn chaikin_money_flow(view: &BarView<'_>, period: usize) -> Option<f64> {
    let start = view.window_start(period)?;
    let mut flow = 0.0;
    let mut volume = 0.0;
    for i in start..view.len() {
        flow += money_flow_multiplier(view.high[i], view.low[i], view.close[i]) * view.volume[i];
        volume += view.volume[i];
    }
    if volume <= 0.0 {
        return None;
    }
    let cmf = flow / volume;
    cmf.is_finite().then(|| cmf.clamp(-1.0, 1.0))
}

pub fn calculate_cmf(bars: &[Bar], period: usize) -> Option<f64> {
    chaikin_money_flow(&BarColumns::from_bars(bars).view(), period)
}

/// Calculate CMF with default period (20)
pub fn calculate_cmf_default(bars: &[Bar]) -> Option<f64> {
    calculate_cmf(bars, 20)
}
