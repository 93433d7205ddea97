use crate::support::rising_bars;
use stocksense::indicators::trend::{calculate_sma, calculate_sma200};

#[test]
fn test_sma200_insufficient_data() {
    let bars = rising_bars(199, 1.0, 1.0, 1000.0);
    assert!(calculate_sma200(&bars).is_none());
}

#[test]
fn test_sma200_mean_of_last_200_closes() {
    // closes 1..=250, trailing 200 are 51..=250
    let bars = rising_bars(250, 1.0, 1.0, 1000.0);
    let sma = calculate_sma200(&bars).unwrap();
    assert!((sma - 150.5).abs() < 1e-9);
}

#[test]
fn test_sma_short_period() {
    let bars = rising_bars(5, 10.0, 2.0, 1000.0);
    assert_eq!(calculate_sma(&bars, 2), Some(17.0));
}
