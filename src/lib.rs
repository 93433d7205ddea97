//! Smart-money equity screener.
//!
//! Computes volume and price indicators from daily bars, gates tickers on
//! price, liquidity and history, scores the survivors with a 0-5 star rule
//! table and ranks them across a sector universe.

pub mod common;
pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod screener;
pub mod services;
pub mod signals;

pub use config::ScreenerConfig;
pub use error::{ConfigError, ScreenError};
pub use screener::{CancelToken, ScanScope, SectorScreener, SectorUniverse};
