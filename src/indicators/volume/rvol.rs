//! RVOL (Relative Volume) indicator

use crate::common::math;
use crate::indicators::columns::BarColumns;
use crate::models::bars::Bar;

/// Latest volume divided by the mean volume of the `period` bars before it.
///
/// The latest bar is excluded from its own baseline, so `period + 1` bars
/// are required. A zero baseline yields `None`.
pub fn relative_volume(volumes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || volumes.len() < period + 1 {
        return None;
    }
    let (latest, history) = volumes.split_last()?;
    let baseline = math::sma(history, period)?;
    if baseline <= 0.0 {
        return None;
    }
    math::finite(latest / baseline)
}

/// Highest RVOL among the last `window` bars, latest included.
///
/// One pass over the tail with a running baseline sum. Bars whose RVOL is
/// undefined are skipped; `None` when none in the window is defined.
pub fn peak_relative_volume(volumes: &[f64], period: usize, window: usize) -> Option<f64> {
    if period == 0 || window == 0 || volumes.len() < period + 1 {
        return None;
    }
    let first = volumes.len().saturating_sub(window).max(period);
    let mut baseline_sum: f64 = volumes[first - period..first].iter().sum();
    let mut peak: Option<f64> = None;

    for i in first..volumes.len() {
        if i > first {
            baseline_sum += volumes[i - 1];
            baseline_sum -= volumes[i - 1 - period];
        }
        let baseline = baseline_sum / period as f64;
        if baseline <= 0.0 {
            continue;
        }
        if let Some(rvol) = math::finite(volumes[i] / baseline) {
            peak = Some(peak.map_or(rvol, |p| p.max(rvol)));
        }
    }
    peak
}

/// Mean volume of the trailing `period` bars, latest included.
pub fn average_volume(volumes: &[f64], period: usize) -> Option<f64> {
    math::sma(volumes, period)
}

pub fn calculate_rvol(bars: &[Bar], period: usize) -> Option<f64> {
    relative_volume(&BarColumns::from_bars(bars).volume, period)
}

/// Calculate RVOL with default period (20)
pub fn calculate_rvol_default(bars: &[Bar]) -> Option<f64> {
    calculate_rvol(bars, 20)
}
