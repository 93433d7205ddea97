//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::bars::Bar;

/// Calculate the SMA of closes for a specific period
pub fn calculate_sma(bars: &[Bar], period: usize) -> Option<f64> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::sma(&closes, period)
}

/// The long-term trend line (200 bars)
pub fn calculate_sma200(bars: &[Bar]) -> Option<f64> {
    calculate_sma(bars, 200)
}
