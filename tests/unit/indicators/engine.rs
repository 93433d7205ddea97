//! Unit tests for the indicator engine

use crate::support::{accumulation_series, bar, day, flat_bars, series, volume_spike_series};
use stocksense::config::{IndicatorConfig, VwapWindow};
use stocksense::indicators::IndicatorEngine;

#[test]
fn test_short_series_leaves_long_indicators_undefined() {
    let values = IndicatorEngine::compute(
        &series("SHORT", flat_bars(10, 10.0, 1000.0)),
        &IndicatorConfig::default(),
    );
    assert_eq!(values.bar_count, 10);
    assert_eq!(values.close, Some(10.0));
    assert_eq!(values.volume, Some(1000.0));
    assert!(values.rvol.is_none());
    assert!(values.max_rvol.is_none());
    assert!(values.cmf.is_none());
    assert!(values.mfi.is_none());
    assert!(values.vwap.is_none());
    assert!(values.sma200.is_none());
    assert!(values.rsi.is_none());
    assert!(values.avg_volume.is_none());
}

#[test]
fn test_empty_series() {
    let values = IndicatorEngine::compute(&series("EMPTY", Vec::new()), &IndicatorConfig::default());
    assert_eq!(values.bar_count, 0);
    assert!(values.close.is_none());
}

#[test]
fn test_accumulation_series_values() {
    let values = IndicatorEngine::compute(&accumulation_series("ACC"), &IndicatorConfig::default());
    assert_eq!(values.bar_count, 251);
    assert_eq!(values.close, Some(50.0));
    assert!((values.rvol.unwrap() - 2.0).abs() < 1e-9);
    assert!((values.cmf.unwrap() - 0.818181).abs() < 1e-4);
    assert!((values.vwap.unwrap() - 42.910924).abs() < 1e-4);
    assert_eq!(values.mfi, Some(0.0));
    assert!((values.sma200.unwrap() - 33.869531).abs() < 1e-4);
    assert!((values.avg_volume.unwrap() - 714_000.0).abs() < 1e-6);
    // The heavy bars sit just outside the 14-bar peak window
    assert!((values.max_rvol.unwrap() - 2.0).abs() < 1e-9);
}

#[test]
fn test_max_rvol_keeps_recent_spike() {
    let config = IndicatorConfig::default();
    let mut bars = volume_spike_series("SPK", 100.0, 200_000.0, 3.0).bars().to_vec();
    // Five quiet bars after the spike
    for k in 0..5 {
        bars.push(bar(250 + k, 100.0, 200_000.0));
    }
    let values = IndicatorEngine::compute(&series("SPK", bars), &config);

    assert!(values.rvol.unwrap() < 1.0);
    assert!((values.max_rvol.unwrap() - 3.0).abs() < 1e-9);
    // Peak RVOL is display data, not a ranking input
    assert_ne!(values.rvol, values.max_rvol);
}

#[test]
fn test_frame_has_one_entry_per_bar() {
    let config = IndicatorConfig::default();
    let series = accumulation_series("ACC");
    let frame = IndicatorEngine::frame(&series, &config);

    assert_eq!(frame.symbol, "ACC");
    assert_eq!(frame.len(), series.len());
    assert_eq!(frame.timestamps.len(), series.len());
    assert_eq!(frame.timestamps.last(), Some(&day(250)));
    for column in [
        &frame.sma200,
        &frame.vwap,
        &frame.bollinger_upper,
        &frame.bollinger_lower,
        &frame.rsi,
        &frame.cmf,
        &frame.rvol,
    ] {
        assert_eq!(column.len(), series.len());
    }
}

#[test]
fn test_frame_undefined_before_lookback() {
    let config = IndicatorConfig::default();
    let frame = IndicatorEngine::frame(&accumulation_series("ACC"), &config);

    assert!(frame.rvol[19].is_none());
    assert!(frame.rvol[20].is_some());
    assert!(frame.cmf[18].is_none());
    assert!(frame.cmf[19].is_some());
    assert!(frame.rsi[13].is_none());
    assert!(frame.rsi[14].is_some());
    assert!(frame.sma200[198].is_none());
    assert!(frame.sma200[199].is_some());
    assert!(frame.bollinger_upper[18].is_none());
    assert!(frame.bollinger_lower[19].is_some());
}

#[test]
fn test_frame_last_entry_matches_compute() {
    let config = IndicatorConfig::default();
    let series = accumulation_series("ACC");
    let frame = IndicatorEngine::frame(&series, &config);
    let values = IndicatorEngine::compute(&series, &config);

    assert_eq!(frame.rvol.last().copied().flatten(), values.rvol);
    assert_eq!(frame.cmf.last().copied().flatten(), values.cmf);
    assert_eq!(frame.vwap.last().copied().flatten(), values.vwap);
    assert_eq!(frame.sma200.last().copied().flatten(), values.sma200);
    assert_eq!(frame.rsi.last().copied().flatten(), values.rsi);
}

#[test]
fn test_frame_entries_match_compute_on_prefixes() {
    let series = accumulation_series("ACC");
    for vwap in [VwapWindow::Rolling(20), VwapWindow::Session] {
        let config = IndicatorConfig {
            vwap,
            ..IndicatorConfig::default()
        };
        let frame = IndicatorEngine::frame(&series, &config);

        for end in [1, 15, 21, 120, 200, 236, 251] {
            let prefix = crate::support::series("ACC", series.bars()[..end].to_vec());
            let values = IndicatorEngine::compute(&prefix, &config);
            let i = end - 1;
            assert_eq!(frame.rvol[i], values.rvol, "rvol at {i}");
            assert_eq!(frame.cmf[i], values.cmf, "cmf at {i}");
            assert_eq!(frame.vwap[i], values.vwap, "vwap at {i} ({vwap:?})");
            assert_eq!(frame.sma200[i], values.sma200, "sma200 at {i}");
            assert_eq!(frame.rsi[i], values.rsi, "rsi at {i}");
        }
    }
}

#[test]
fn test_frame_tail_keeps_latest_bars() {
    let config = IndicatorConfig::default();
    let full = IndicatorEngine::frame(&accumulation_series("ACC"), &config);
    let tail = full.clone().tail(50);

    assert_eq!(tail.len(), 50);
    assert_eq!(tail.timestamps[0], day(201));
    assert_eq!(tail.sma200, full.sma200[201..].to_vec());
    assert_eq!(tail.rsi.len(), 50);
    assert_eq!(tail.bollinger_lower.len(), 50);

    // Asking for more bars than exist keeps them all
    assert_eq!(full.clone().tail(1000), full);
}
