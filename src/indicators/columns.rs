//! Column-oriented view of a bar series.
//!
//! Extracting the columns once per series lets every indicator share the
//! same typical-price and volume vectors instead of re-deriving them.

use crate::models::bars::Bar;

#[derive(Debug, Clone, Default)]
pub struct BarColumns {
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Vec<f64>,
    pub typical: Vec<f64>,
}

impl BarColumns {
    pub fn from_bars(bars: &[Bar]) -> Self {
        let n = bars.len();
        let mut columns = Self {
            high: Vec::with_capacity(n),
            low: Vec::with_capacity(n),
            close: Vec::with_capacity(n),
            volume: Vec::with_capacity(n),
            typical: Vec::with_capacity(n),
        };
        for bar in bars {
            columns.high.push(bar.high);
            columns.low.push(bar.low);
            columns.close.push(bar.close);
            columns.volume.push(bar.volume);
            columns.typical.push(bar.typical_price());
        }
        columns
    }

    pub fn view(&self) -> BarView<'_> {
        BarView {
            high: &self.high,
            low: &self.low,
            close: &self.close,
            volume: &self.volume,
            typical: &self.typical,
        }
    }
}

/// Borrowed columns, all of equal length.
#[derive(Debug, Clone, Copy)]
pub struct BarView<'a> {
    pub high: &'a [f64],
    pub low: &'a [f64],
    pub close: &'a [f64],
    pub volume: &'a [f64],
    pub typical: &'a [f64],
}

impl<'a> BarView<'a> {
    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// The first `end` bars, as if the series stopped there.
    pub fn prefix(&self, end: usize) -> BarView<'a> {
        let end = end.min(self.len());
        BarView {
            high: &self.high[..end],
            low: &self.low[..end],
            close: &self.close[..end],
            volume: &self.volume[..end],
            typical: &self.typical[..end],
        }
    }

    /// Start index of the trailing `period` bars, if there are enough.
    pub fn window_start(&self, period: usize) -> Option<usize> {
        if period == 0 || self.len() < period {
            None
        } else {
            Some(self.len() - period)
        }
    }
}
