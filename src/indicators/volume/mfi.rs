//! MFI (Money Flow Index) indicator
//!
//! Raw money flow is `typical_price * volume`. A bar's flow is positive when
//! its typical price rose from the previous bar, negative when it fell, and
//! ignored when unchanged.
//!
//! MFI = 100 - 100 / (1 + positive_flow / negative_flow)

use crate::indicators::columns::{BarColumns, BarView};
use crate::models::bars::Bar;

pub fn money_flow_index(view: &BarView<'_>, period: usize) -> Option<f64> {
    if period == 0 || view.len() < period + 1 {
        return None;
    }
    let tp = view.typical;
    let mut positive = 0.0;
    let mut negative = 0.0;
    for i in view.len() - period..view.len() {
        let flow = tp[i] * view.volume[i];
        if tp[i] > tp[i - 1] {
            positive += flow;
        } else if tp[i] < tp[i - 1] {
            negative += flow;
        }
    }

    if negative == 0.0 {
        return Some(100.0);
    }

    let mfi = 100.0 - 100.0 / (1.0 + positive / negative);
    mfi.is_finite().then(|| mfi.clamp(0.0, 100.0))
}

pub fn calculate_mfi(bars: &[Bar], period: usize) -> Option<f64> {
    money_flow_index(&BarColumns::from_bars(bars).view(), period)
}

/// Calculate MFI with default period (14)
pub fn calculate_mfi_default(bars: &[Bar]) -> Option<f64> {
    calculate_mfi(bars, 14)
}
