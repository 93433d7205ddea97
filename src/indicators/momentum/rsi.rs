//! RSI (Relative Strength Index) indicator, Wilder's smoothing
//!
//! The first average gain/loss is the simple mean of the first `period`
//! close-to-close changes; every later change is folded in with
//! `avg = (avg * (period - 1) + change) / period`.
//!
//! RSI = 100 - (100 / (1 + avg_gain / avg_loss))

use crate::models::bars::Bar;

pub fn relative_strength_index(closes: &[f64], period: usize) -> Option<f64> {
    relative_strength_index_series(closes, period)
        .pop()
        .flatten()
}

/// RSI after every bar in one forward pass.
///
/// Entry `i` equals [`relative_strength_index`] over `closes[..=i]`.
pub fn relative_strength_index_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() < period + 1 {
        return out;
    }

    let period_f = period as f64;
    let (mut avg_gain, mut avg_loss) = closes[..=period]
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold((0.0, 0.0), |(g, l), change| {
            if change > 0.0 {
                (g + change, l)
            } else {
                (g, l - change)
            }
        });
    avg_gain /= period_f;
    avg_loss /= period_f;
    out[period] = wilder_rsi(avg_gain, avg_loss);

    for i in period + 1..closes.len() {
        let change = closes[i] - closes[i - 1];
        let gain = change.max(0.0);
        let loss = (-change).max(0.0);
        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;
        out[i] = wilder_rsi(avg_gain, avg_loss);
    }
    out
}

fn wilder_rsi(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    // No losses in the window, including a flat market
    if avg_loss == 0.0 {
        return Some(100.0);
    }
    let rsi = 100.0 - (100.0 / (1.0 + avg_gain / avg_loss));
    rsi.is_finite().then(|| rsi.clamp(0.0, 100.0))
}

/// Calculate RSI indicator
pub fn calculate_rsi(bars: &[Bar], period: usize) -> Option<f64> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    relative_strength_index(&closes, period)
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(bars: &[Bar]) -> Option<f64> {
    calculate_rsi(bars, 14)
}
