//! Indicator library: pure functions from bars to indicator values.

pub mod columns;
pub mod engine;
pub mod registry;

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use columns::{BarColumns, BarView};
pub use engine::IndicatorEngine;
pub use registry::*;
