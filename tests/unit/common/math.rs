use stocksense::common::math::{finite, mean, sma, standard_deviation, trailing};

#[test]
fn trailing_needs_full_window() {
    let values = [1.0, 2.0, 3.0];
    assert_eq!(trailing(&values, 2), Some(&values[1..]));
    assert_eq!(trailing(&values, 4), None);
    assert_eq!(trailing(&values, 0), None);
}

#[test]
fn mean_of_empty_is_undefined() {
    assert_eq!(mean(&[]), None);
    assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
}

#[test]
fn sma_uses_trailing_values_only() {
    let values = [100.0, 1.0, 2.0, 3.0];
    assert_eq!(sma(&values, 3), Some(2.0));
}

#[test]
fn sample_standard_deviation() {
    let std = standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 8).unwrap();
    assert!((std - 2.138089935).abs() < 1e-6);
    assert_eq!(standard_deviation(&[1.0], 1), None);
}

#[test]
fn finite_filters_nan_and_infinity() {
    assert_eq!(finite(1.5), Some(1.5));
    assert_eq!(finite(f64::NAN), None);
    assert_eq!(finite(f64::INFINITY), None);
}
