//! VWAP (Volume-Weighted Average Price) indicator

use crate::config::VwapWindow;
use crate::indicators::columns::{BarColumns, BarView};
use crate::models::bars::Bar;

/// Sum of `typical_price * volume` over the window divided by the window's
/// total volume. `None` when the window is not filled or carries no volume.
pub fn volume_weighted_average_price(view: &BarView<'_>, window: VwapWindow) -> Option<f64> {
    let start = match window {
        VwapWindow::Rolling(period) => view.window_start(period)?,
        VwapWindow::Session if view.is_empty() => return None,
        VwapWindow::Session => 0,
    };
    let (weighted, volume) = (start..view.len()).fold((0.0, 0.0), |(pv, v), i| {
        (pv + view.typical[i] * view.volume[i], v + view.volume[i])
    });
    weighted_ratio(weighted, volume)
}

/// VWAP after every bar.
///
/// A session VWAP accumulates in one forward pass; a rolling VWAP sums its
/// own bounded window at each bar.
pub fn volume_weighted_average_price_series(
    view: &BarView<'_>,
    window: VwapWindow,
) -> Vec<Option<f64>> {
    match window {
        VwapWindow::Rolling(_) => (1..=view.len())
            .map(|end| volume_weighted_average_price(&view.prefix(end), window))
            .collect(),
        VwapWindow::Session => {
            let (mut weighted, mut volume) = (0.0, 0.0);
            (0..view.len())
                .map(|i| {
                    weighted += view.typical[i] * view.volume[i];
                    volume += view.volume[i];
                    weighted_ratio(weighted, volume)
                })
                .collect()
        }
    }
}

fn weighted_ratio(weighted: f64, volume: f64) -> Option<f64> {
    if volume <= 0.0 {
        return None;
    }
    let vwap = weighted / volume;
    vwap.is_finite().then_some(vwap)
}

pub fn calculate_vwap(bars: &[Bar], window: VwapWindow) -> Option<f64> {
    volume_weighted_average_price(&BarColumns::from_bars(bars).view(), window)
}
