//! Windowed arithmetic over plain `f64` slices.

/// The trailing `period` values, or `None` if there are fewer.
pub fn trailing(values: &[f64], period: usize) -> Option<&[f64]> {
    if period == 0 || values.len() < period {
        return None;
    }
    Some(&values[values.len() - period..])
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Simple moving average of the trailing `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    mean(trailing(values, period)?)
}

/// Sample standard deviation of the trailing `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    let window = trailing(values, period)?;
    if window.len() < 2 {
        return None;
    }
    let avg = mean(window)?;
    let variance =
        window.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (window.len() - 1) as f64;
    Some(variance.sqrt())
}

/// `Some(value)` only for finite numbers.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
